pub mod in_memory_chart;
pub mod services;

pub use in_memory_chart::*;
