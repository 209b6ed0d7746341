// Module exports for models

pub mod appearance;
pub mod display;
pub mod quote;
pub mod settings;
