//! Record/replay infrastructure for deterministic runs without the service.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;

/// Port name used for every wallpaper service interaction.
pub const WALLPAPER_PORT: &str = "wallpaper_service";
