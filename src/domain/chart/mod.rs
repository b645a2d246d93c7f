//! Chart-side model: dataset, axis scales and the host seam the pinch
//! interaction reconfigures.

pub mod entities;
pub mod host;
pub mod value_objects;

pub use entities::*;
pub use host::*;
pub use value_objects::*;
