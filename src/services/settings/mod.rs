// Settings services: typed cache over durable storage and settings loading

mod cache;
mod state;

pub use cache::{SettingsCache, WriteOutcome};
