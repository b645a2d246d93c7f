use wasm_bindgen::prelude::*;

use crate::domain::logging::LogComponent;

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use application::{PinchConfig, PinchGestureController};

/// Install panic hook, console logger and browser clock on wasm start.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = infrastructure::services::ConsoleLogger::new_development();
    let level = console_logger.min_level();
    domain::logging::set_max_level(level);
    domain::logging::init_logger(Box::new(console_logger));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    log_info!(LogComponent::Presentation("Initialize"), "pinch zoom module initialized, logging from {}", level);
}
