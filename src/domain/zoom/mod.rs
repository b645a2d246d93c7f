//! Per-axis-kind rescaling and the limit ranges that bound it.

pub mod categorical;
pub mod continuous;
pub mod limit_range;
pub mod time_categorical;

pub use categorical::*;
pub use continuous::*;
pub use limit_range::*;
pub use time_categorical::*;
