//! Confirmation capability consulted before an unfiltered pass

/// Asked by [`crate::FilterSession::apply`] when no filter is active, so the
/// host can guard against dumping the whole record set by accident.
pub trait Confirmation {
    /// Returns true to go ahead and show all `total` records.
    fn confirm_unfiltered(&mut self, total: usize) -> bool;
}

/// Always agrees to an unfiltered pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirmation for AlwaysConfirm {
    fn confirm_unfiltered(&mut self, _total: usize) -> bool {
        true
    }
}

/// Always refuses an unfiltered pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl Confirmation for NeverConfirm {
    fn confirm_unfiltered(&mut self, _total: usize) -> bool {
        false
    }
}
