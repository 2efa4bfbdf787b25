//! slidekit - showcase for the adaptive card slider
//!
//! An ERP landing-page section whose feature cards swipe on phones and sit
//! in a grid on desktops. Runs headless natively and mounts into the DOM on
//! WASM.

pub mod app;
pub mod config;
pub mod constants;
pub mod content;
pub mod message;

pub use app::ShowcaseApp;
pub use config::{AppConfig, ConfigError};

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
