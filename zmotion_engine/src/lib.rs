pub use eframe;
pub use zmotion_device as device;

pub mod adapter;
pub mod config;
mod engine;
pub mod event;
pub mod orientation;
pub mod source;

pub use self::engine::*;
