//! RAII wrappers over GDI resources
//!
//! Each wrapper owns at most one OS handle, acquires it on construction,
//! gives it back on drop and can be reinitialized in place. Wrappers are
//! move-only; none of them implements `Clone`.
//!
//! ```ignore
//! use zeyback::gdi::{Bitmap, DeviceContext};
//!
//! let screen = DeviceContext::acquire(&gdi)?;
//! let bitmap = Bitmap::compatible(&gdi, screen.handle()?, 64, 64)?;
//! // DeleteObject and ReleaseDC run when both go out of scope
//! ```

mod bitmap;
mod brush;
mod color;
mod cursor;
mod device_context;
mod icon;

pub use bitmap::Bitmap;
pub use brush::Brush;
pub use color::Color;
pub use cursor::Cursor;
pub use device_context::{Acquisition, DeviceContext};
pub use icon::Icon;
