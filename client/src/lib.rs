//! Taskboard Client Library
//!
//! Consumer of the access core: loads the signed-in profile and the
//! navigation and route tables, then renders what the session may see.

pub mod app;
pub mod config;
pub mod loader;
pub mod render;
pub mod routes;

pub use app::App;
pub use config::Config;
