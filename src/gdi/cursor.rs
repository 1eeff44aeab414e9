use crate::error::{GdiError, GdiResult, Resource};
use crate::platform::{CursorHandle, InstanceHandle, SharedGdi};

/// Cursor loaded from a module's resources; shared, never destroyed here
#[derive(Debug)]
pub struct Cursor {
    gdi: SharedGdi,
    instance: Option<InstanceHandle>,
    handle: Option<CursorHandle>,
}

impl Cursor {
    pub fn load(
        gdi: &SharedGdi,
        instance: Option<InstanceHandle>,
        resource_id: u16,
    ) -> GdiResult<Self> {
        let mut cursor = Self {
            gdi: SharedGdi::clone(gdi),
            instance,
            handle: None,
        };
        cursor.initialize(resource_id)?;
        Ok(cursor)
    }

    pub fn reinitialize(
        &mut self,
        instance: Option<InstanceHandle>,
        resource_id: u16,
    ) -> GdiResult<()> {
        self.cleanup();
        self.instance = instance;
        self.initialize(resource_id)
    }

    pub fn handle(&self) -> GdiResult<CursorHandle> {
        self.handle.ok_or(GdiError::InvalidHandle(Resource::Cursor))
    }

    pub fn instance(&self) -> Option<InstanceHandle> {
        self.instance
    }

    fn initialize(&mut self, resource_id: u16) -> GdiResult<()> {
        match self.gdi.load_cursor(self.instance, resource_id) {
            Some(handle) => {
                self.handle = Some(handle);
                Ok(())
            }
            None => {
                self.cleanup();
                Err(GdiError::ResourceAcquisition(Resource::Cursor))
            }
        }
    }

    fn cleanup(&mut self) {
        self.instance = None;
        self.handle = None;
    }
}
