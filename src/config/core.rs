//! Runtime configuration and persistence

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::defaults::*;
use crate::error::{AppError, AppResult};

/// 窗口设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_screen_width")]
    pub width: i32,
    #[serde(default = "default_screen_height")]
    pub height: i32,
    #[serde(default = "default_fullscreen")]
    pub fullscreen: bool,
    /// Update interval in milliseconds
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_screen_width(),
            height: default_screen_height(),
            fullscreen: default_fullscreen(),
            frame_rate: default_frame_rate(),
        }
    }
}

/// 图形设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphicsConfig {
    #[serde(default = "default_pixel_depth")]
    pub pixel_depth: u32,
    #[serde(default = "default_double_buffering")]
    pub double_buffering: bool,
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            pixel_depth: default_pixel_depth(),
            double_buffering: default_double_buffering(),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub graphics: GraphicsConfig,
    /// env_logger filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Config {
    /// 从文件加载配置
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path`, falling back to the defaults when it is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!(
                    "Using default configuration, {} could not be loaded: {err}",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// 保存配置到文件
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> AppResult<()> {
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(AppError::Config(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.window.frame_rate == 0 {
            return Err(AppError::Config("frame_rate must be at least 1 ms".into()));
        }
        Ok(())
    }
}
