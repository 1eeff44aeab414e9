//! Minimal Win32 game skeleton.
//!
//! RAII wrappers over GDI resources ([`gdi`]), sprite textures built on them
//! ([`graphics`]) and an [`engine`] that forwards window callbacks to a
//! single [`game::Game`]. All GDI access goes through [`platform::Gdi`]:
//! the real GDI on Windows, a software implementation everywhere else.

pub mod config;
pub mod engine;
pub mod error;
pub mod file;
pub mod game;
pub mod gdi;
pub mod graphics;
pub mod input;
pub mod logging;
pub mod math;
pub mod platform;

// 重新导出主要类型
pub use config::Config;
pub use engine::{Engine, EngineState};
pub use error::{AppError, AppResult, GdiError, GdiResult, Resource};
pub use graphics::Texture;
pub use platform::{Gdi, SharedGdi, default_gdi};
