pub mod config;
pub mod dtos;
pub mod enums;
pub mod errors;
pub mod keyboard;
pub mod models;
pub mod service;
pub mod structs;
pub mod styles;
pub mod util;

pub const DEFAULT_ASPECT_RATIO: &str = "3:4";
pub const DEFAULT_RESOLUTION: &str = "720p";
