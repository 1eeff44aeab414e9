use super::{Color, DeviceContext};
use crate::error::{GdiError, GdiResult, Resource};
use crate::math::Rectangle;
use crate::platform::{BrushHandle, SharedGdi};

/// RAII owner of a solid GDI brush (HBRUSH)
#[derive(Debug)]
pub struct Brush {
    gdi: SharedGdi,
    handle: Option<BrushHandle>,
}

impl Brush {
    pub fn new(gdi: &SharedGdi, color: Color) -> GdiResult<Self> {
        let mut brush = Self {
            gdi: SharedGdi::clone(gdi),
            handle: None,
        };
        brush.initialize(color)?;
        Ok(brush)
    }

    pub fn reinitialize(&mut self, color: Color) -> GdiResult<()> {
        self.cleanup();
        self.initialize(color)
    }

    pub fn handle(&self) -> GdiResult<BrushHandle> {
        self.handle.ok_or(GdiError::InvalidHandle(Resource::Brush))
    }

    /// Fill `rectangle` of `device_context` with this brush.
    ///
    /// A rejected FillRect is only logged; there is nothing a caller could do
    /// about a half-painted frame.
    pub fn fill_rect(&self, device_context: &DeviceContext, rectangle: Rectangle) -> GdiResult<()> {
        let brush = self.handle()?;
        let target = device_context.handle()?;
        if !self.gdi.fill_rect(target, rectangle, brush) {
            log::warn!("FillRect failed for {rectangle:?}");
        }
        Ok(())
    }

    fn initialize(&mut self, color: Color) -> GdiResult<()> {
        self.handle = self.gdi.create_solid_brush(color);
        if self.handle.is_none() {
            self.cleanup();
            return Err(GdiError::ResourceAcquisition(Resource::Brush));
        }
        Ok(())
    }

    fn cleanup(&mut self) {
        if let Some(handle) = self.handle.take()
            && !self.gdi.delete_object(handle.into())
        {
            log::debug!("DeleteObject failed for brush {handle:?}");
        }
    }
}

impl Drop for Brush {
    fn drop(&mut self) {
        self.cleanup();
    }
}
