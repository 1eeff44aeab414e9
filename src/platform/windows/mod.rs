//! Windows 平台特定实现
//!
//! 该模块包含 Windows 平台的实现：
//! - `gdi`: 直接调用系统 GDI 的后端

pub mod gdi;

pub use gdi::Win32Gdi;
