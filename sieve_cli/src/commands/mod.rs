mod apply;
mod criteria_arg;
mod filters;
mod records;

pub use apply::{ApplyRequest, apply_filters};
pub use filters::list_filters;
