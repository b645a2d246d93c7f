pub mod config;
pub mod interaction_state;
pub mod pinch_controller;

pub use config::*;
pub use interaction_state::*;
pub use pinch_controller::*;
