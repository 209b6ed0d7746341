// Baby D-day Library
// Exports all modules for testing and reuse

pub mod app;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use app::BabyDdayApp;
pub use config::AppConfig;
