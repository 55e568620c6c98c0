pub mod app;
pub mod config;
pub mod effect;
pub mod gfx;
