use std::path::Path;

use crate::error::{GdiError, GdiResult, Resource};
use crate::file;
use crate::platform::{BitmapHandle, DcHandle, SharedGdi};

/// RAII owner of a GDI bitmap (HBITMAP)
///
/// A bitmap is either loaded from a `.bmp` file or created blank and
/// compatible with a device context. The handle is deleted when the
/// `Bitmap` is dropped or reinitialized.
#[derive(Debug)]
pub struct Bitmap {
    gdi: SharedGdi,
    handle: Option<BitmapHandle>,
    width: i32,
    height: i32,
}

impl Bitmap {
    /// Uninitialized bitmap with zero dimensions
    pub fn empty(gdi: &SharedGdi) -> Self {
        Self {
            gdi: SharedGdi::clone(gdi),
            handle: None,
            width: 0,
            height: 0,
        }
    }

    /// Load a bitmap file; `path` is resolved to an absolute path first
    pub fn from_file(gdi: &SharedGdi, path: impl AsRef<Path>) -> GdiResult<Self> {
        let mut bitmap = Self::empty(gdi);
        bitmap.initialize_from_file(path.as_ref())?;
        Ok(bitmap)
    }

    /// Blank bitmap compatible with `device_context`
    pub fn compatible(
        gdi: &SharedGdi,
        device_context: DcHandle,
        width: i32,
        height: i32,
    ) -> GdiResult<Self> {
        let mut bitmap = Self::empty(gdi);
        bitmap.initialize_compatible(device_context, width, height)?;
        Ok(bitmap)
    }

    pub fn reinitialize_from_file(&mut self, path: impl AsRef<Path>) -> GdiResult<()> {
        self.cleanup();
        self.initialize_from_file(path.as_ref())
    }

    pub fn reinitialize_compatible(
        &mut self,
        device_context: DcHandle,
        width: i32,
        height: i32,
    ) -> GdiResult<()> {
        self.cleanup();
        self.initialize_compatible(device_context, width, height)
    }

    pub fn handle(&self) -> GdiResult<BitmapHandle> {
        self.handle.ok_or(GdiError::InvalidHandle(Resource::Bitmap))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_initialized(&self) -> bool {
        self.handle.is_some()
    }

    /// Drop the held bitmap, leaving this one uninitialized
    pub fn release(&mut self) {
        self.cleanup();
    }

    fn initialize_from_file(&mut self, path: &Path) -> GdiResult<()> {
        let full_path = file::full_path(path);
        let result = self.load(&full_path);
        if result.is_err() {
            self.cleanup();
        }
        result
    }

    fn load(&mut self, full_path: &Path) -> GdiResult<()> {
        let handle = self
            .gdi
            .load_bitmap(full_path)
            .ok_or_else(|| GdiError::ImageLoad {
                path: full_path.to_path_buf(),
            })?;
        self.handle = Some(handle);

        let (width, height) = self
            .gdi
            .bitmap_size(handle)
            .ok_or(GdiError::MetadataQuery)?;
        self.width = width;
        self.height = height;
        log::debug!(
            "Loaded {}x{} bitmap from {}",
            width,
            height,
            full_path.display()
        );
        Ok(())
    }

    fn initialize_compatible(
        &mut self,
        device_context: DcHandle,
        width: i32,
        height: i32,
    ) -> GdiResult<()> {
        match self
            .gdi
            .create_compatible_bitmap(device_context, width, height)
        {
            Some(handle) => {
                self.handle = Some(handle);
                self.width = width;
                self.height = height;
                Ok(())
            }
            None => {
                self.cleanup();
                Err(GdiError::ResourceAcquisition(Resource::Bitmap))
            }
        }
    }

    fn cleanup(&mut self) {
        if let Some(handle) = self.handle.take()
            && !self.gdi.delete_object(handle.into())
        {
            log::debug!("DeleteObject failed for bitmap {handle:?}");
        }
        self.width = 0;
        self.height = 0;
    }
}

impl Drop for Bitmap {
    fn drop(&mut self) {
        self.cleanup();
    }
}
