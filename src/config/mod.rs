//! 配置模块
//!
//! - [`defaults`]: 编译期常量与 serde 默认值
//! - [`core`]: 可从 JSON 加载的运行时配置

mod core;
pub mod defaults;

pub use self::core::{Config, GraphicsConfig, WindowConfig};
pub use defaults::TRANSPARENT_COLOR;
