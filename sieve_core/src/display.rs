//! Presentation-side limit on how many matched records are shown

use log::warn;

/// Number of records to display after filtering, kept within `[1, 1000]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLimit(usize);

impl DisplayLimit {
    pub const MIN: usize = 1;
    pub const MAX: usize = 1000;
    pub const DEFAULT: usize = 10;

    pub fn new(limit: usize) -> Self {
        let clamped = limit.clamp(Self::MIN, Self::MAX);
        if clamped != limit {
            warn!("Display limit {} out of range, using {}", limit, clamped);
        }
        DisplayLimit(clamped)
    }

    pub fn get(&self) -> usize {
        self.0
    }

    /// The leading slice of `items` that fits the limit.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..items.len().min(self.0)]
    }
}

impl Default for DisplayLimit {
    fn default() -> Self {
        DisplayLimit(Self::DEFAULT)
    }
}
