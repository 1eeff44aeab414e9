use crate::config::TRANSPARENT_COLOR;
use crate::error::{GdiError, GdiResult, Resource};
use crate::math::Rectangle;
use crate::platform::{DcHandle, GdiObject, SavedState, SharedGdi};

/// How a [`DeviceContext`] got its surface, and therefore how it gives it back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Acquisition {
    /// New memory DC compatible with a reference DC; deleted on teardown
    Create,
    /// The shared screen DC; released to the system on teardown
    Acquire,
    /// A DC owned by the caller (e.g. from BeginPaint); never released here
    Access,
}

/// RAII owner of a device context.
///
/// The DC state is saved right after acquisition and restored right before
/// the DC is let go, so anything selected into it during its lifetime is
/// deselected again.
#[derive(Debug)]
pub struct DeviceContext {
    gdi: SharedGdi,
    mode: Acquisition,
    handle: Option<DcHandle>,
    saved_state: Option<SavedState>,
}

impl DeviceContext {
    /// New off-screen DC compatible with `reference`
    pub fn create(gdi: &SharedGdi, reference: DcHandle) -> GdiResult<Self> {
        Self::new(gdi, Acquisition::Create, Some(reference))
    }

    /// The screen DC
    pub fn acquire(gdi: &SharedGdi) -> GdiResult<Self> {
        Self::new(gdi, Acquisition::Acquire, None)
    }

    /// Borrow a DC the caller keeps ownership of
    pub fn access(gdi: &SharedGdi, existing: DcHandle) -> GdiResult<Self> {
        Self::new(gdi, Acquisition::Access, Some(existing))
    }

    /// Acquire according to `mode`.
    ///
    /// `device_context` is the reference DC for [`Acquisition::Create`] (`None`
    /// meaning the screen), the wrapped DC for [`Acquisition::Access`], and
    /// ignored for [`Acquisition::Acquire`].
    pub fn new(
        gdi: &SharedGdi,
        mode: Acquisition,
        device_context: Option<DcHandle>,
    ) -> GdiResult<Self> {
        let mut context = Self {
            gdi: SharedGdi::clone(gdi),
            mode,
            handle: None,
            saved_state: None,
        };
        context.initialize(device_context)?;
        Ok(context)
    }

    /// Release the current DC and acquire a new one in place
    pub fn reinitialize(
        &mut self,
        mode: Acquisition,
        device_context: Option<DcHandle>,
    ) -> GdiResult<()> {
        self.cleanup();
        self.mode = mode;
        self.initialize(device_context)
    }

    pub fn mode(&self) -> Acquisition {
        self.mode
    }

    pub fn handle(&self) -> GdiResult<DcHandle> {
        self.handle
            .ok_or(GdiError::InvalidHandle(Resource::DeviceContext))
    }

    /// Make `object` the active one of its kind on this DC
    pub fn select_object(&self, object: impl Into<GdiObject>) -> GdiResult<()> {
        let handle = self.handle()?;
        self.gdi
            .select_object(handle, object.into())
            .map(|_| ())
            .ok_or(GdiError::ObjectSelection)
    }

    /// Copy pixels from `source_area` of `source` into `destination_area` of this DC.
    ///
    /// With `transparency` the copy is a TransparentBlt keyed on
    /// [`TRANSPARENT_COLOR`] using both rectangles in full. Without it the copy
    /// is a plain BitBlt: `source_area` (origin and extent) lands at the
    /// origin of `destination_area`; the destination extent is not used.
    pub fn transfer_bits(
        &self,
        source: &DeviceContext,
        source_area: Rectangle,
        destination_area: Rectangle,
        transparency: bool,
    ) -> GdiResult<()> {
        let destination = self.handle()?;
        let source_handle = source.handle()?;

        let transferred = if transparency {
            self.gdi.transparent_blt(
                destination,
                destination_area,
                source_handle,
                source_area,
                TRANSPARENT_COLOR,
            )
        } else {
            self.gdi.bit_blt(
                destination,
                source_area.moved_to(destination_area.x, destination_area.y),
                source_handle,
                source_area.x,
                source_area.y,
            )
        };

        if transferred {
            Ok(())
        } else {
            Err(GdiError::Blit)
        }
    }

    fn initialize(&mut self, device_context: Option<DcHandle>) -> GdiResult<()> {
        let result = self.acquire_and_save(device_context);
        if result.is_err() {
            self.cleanup();
        }
        result
    }

    fn acquire_and_save(&mut self, device_context: Option<DcHandle>) -> GdiResult<()> {
        let handle = match self.mode {
            Acquisition::Create => self.gdi.create_compatible_dc(device_context),
            Acquisition::Acquire => self.gdi.screen_dc(),
            Acquisition::Access => device_context,
        };
        let handle = handle.ok_or(GdiError::ResourceAcquisition(Resource::DeviceContext))?;
        self.handle = Some(handle);

        let saved_state = self.gdi.save_dc(handle).ok_or(GdiError::StateSave)?;
        self.saved_state = Some(saved_state);
        Ok(())
    }

    fn cleanup(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(saved_state) = self.saved_state.take()
                && !self.gdi.restore_dc(handle, saved_state)
            {
                log::debug!("RestoreDC failed for {handle:?}");
            }

            let released = match self.mode {
                Acquisition::Create => self.gdi.delete_dc(handle),
                Acquisition::Acquire => self.gdi.release_screen_dc(handle),
                // The caller owns the DC, e.g. BeginPaint/EndPaint manage it
                Acquisition::Access => true,
            };
            if !released {
                log::debug!("Failed to release {:?} device context {handle:?}", self.mode);
            }
        }

        self.mode = Acquisition::Create;
        self.saved_state = None;
    }
}

impl Drop for DeviceContext {
    fn drop(&mut self) {
        self.cleanup();
    }
}
