mod cycle;
mod lifecycle;

pub use cycle::Cycle;
pub use lifecycle::{CycleStatus, DateOrBool, LtsStatus};
