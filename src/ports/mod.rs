//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system. Implementations live in `src/adapters/`.

pub mod wallpaper_service;

pub use wallpaper_service::{GenImgRequest, SetWallpaperRequest, WallpaperService};
