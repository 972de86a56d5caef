pub mod app;
pub mod config;
pub mod format;
pub mod profile;
pub mod replay;
