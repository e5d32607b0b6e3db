pub mod app;
pub mod config;
pub mod effects;
pub mod input;
pub mod terminal;
