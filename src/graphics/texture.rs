use std::path::Path;

use crate::error::GdiResult;
use crate::gdi::{Bitmap, Brush, Color, DeviceContext};
use crate::math::Rectangle;
use crate::platform::SharedGdi;

/// Sprite that can be blitted onto any device context
#[derive(Debug)]
pub struct Texture {
    gdi: SharedGdi,
    bitmap: Bitmap,
    transparency: bool,
}

impl Texture {
    /// Texture without a bitmap; renders fail until it is reinitialized
    pub fn empty(gdi: &SharedGdi) -> Self {
        Self {
            gdi: SharedGdi::clone(gdi),
            bitmap: Bitmap::empty(gdi),
            transparency: false,
        }
    }

    pub fn from_file(
        gdi: &SharedGdi,
        path: impl AsRef<Path>,
        transparency: bool,
    ) -> GdiResult<Self> {
        let mut texture = Self::empty(gdi);
        texture.reinitialize_from_file(path, transparency)?;
        Ok(texture)
    }

    /// `width` x `height` texture filled with `color`
    pub fn from_color(
        gdi: &SharedGdi,
        width: i32,
        height: i32,
        color: Color,
        transparency: bool,
    ) -> GdiResult<Self> {
        let mut texture = Self::empty(gdi);
        texture.reinitialize_from_color(width, height, color, transparency)?;
        Ok(texture)
    }

    pub fn reinitialize_from_file(
        &mut self,
        path: impl AsRef<Path>,
        transparency: bool,
    ) -> GdiResult<()> {
        self.cleanup();
        self.transparency = transparency;
        let result = self.bitmap.reinitialize_from_file(path);
        if result.is_err() {
            self.cleanup();
        }
        result
    }

    pub fn reinitialize_from_color(
        &mut self,
        width: i32,
        height: i32,
        color: Color,
        transparency: bool,
    ) -> GdiResult<()> {
        self.cleanup();
        self.transparency = transparency;
        let result = self.paint(width, height, color);
        if result.is_err() {
            self.cleanup();
        }
        result
    }

    /// Blit the whole texture onto `device_context` with its top-left corner at (x, y)
    pub fn render(&self, device_context: &DeviceContext, x: i32, y: i32) -> GdiResult<()> {
        let memory_context = DeviceContext::create(&self.gdi, device_context.handle()?)?;
        memory_context.select_object(self.bitmap.handle()?)?;

        let source = Rectangle::new(0, 0, self.width(), self.height());
        device_context.transfer_bits(
            &memory_context,
            source,
            source.moved_to(x, y),
            self.transparency,
        )
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn width(&self) -> i32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> i32 {
        self.bitmap.height()
    }

    pub fn is_transparent(&self) -> bool {
        self.transparency
    }

    /// Create the bitmap against the screen DC and fill it with a solid brush
    fn paint(&mut self, width: i32, height: i32, color: Color) -> GdiResult<()> {
        let screen_context = DeviceContext::acquire(&self.gdi)?;
        self.bitmap
            .reinitialize_compatible(screen_context.handle()?, width, height)?;

        let memory_context = DeviceContext::create(&self.gdi, screen_context.handle()?)?;
        memory_context.select_object(self.bitmap.handle()?)?;

        let brush = Brush::new(&self.gdi, color)?;
        brush.fill_rect(&memory_context, Rectangle::new(0, 0, width, height))
    }

    fn cleanup(&mut self) {
        self.bitmap.release();
        self.transparency = false;
    }
}
