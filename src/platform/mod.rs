//! 平台抽象层
//!
//! GDI 调用全部经过 [`traits::Gdi`]，上层的资源封装不直接接触系统 API。
//!
//! # 模块结构
//! - [`handles`]: 类型化的句柄
//! - [`traits`]: 平台无关的 GDI 接口
//! - [`memory`]: 纯内存的软件 GDI（测试与无窗口环境）
//! - [`windows`]: Windows 平台实现

pub mod handles;
pub mod memory;
pub mod traits;

#[cfg(target_os = "windows")]
pub mod windows;

use std::rc::Rc;

pub use handles::*;
pub use memory::{GdiCall, MemoryGdi};
pub use traits::*;

/// GDI backend for the platform the crate was built for
#[cfg(target_os = "windows")]
pub fn default_gdi() -> SharedGdi {
    Rc::new(windows::Win32Gdi)
}

/// GDI backend for the platform the crate was built for
#[cfg(not(target_os = "windows"))]
pub fn default_gdi() -> SharedGdi {
    Rc::new(MemoryGdi::default())
}
