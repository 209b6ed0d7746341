// Service module exports

pub mod display;
pub mod intake;
pub mod notice;
pub mod settings;
pub mod storage;
