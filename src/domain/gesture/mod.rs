//! Gesture samples and the axis-direction decision.

pub mod services;
pub mod value_objects;

pub use services::*;
pub use value_objects::*;
