pub mod chart;
pub mod errors;
pub mod gesture;
pub mod logging;
pub mod zoom;
