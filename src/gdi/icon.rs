use crate::error::{GdiError, GdiResult, Resource};
use crate::platform::{IconHandle, InstanceHandle, SharedGdi};

/// Icon loaded from a module's resources.
///
/// Icons from LoadIcon are shared; the system frees them, so teardown only
/// forgets the handle.
#[derive(Debug)]
pub struct Icon {
    gdi: SharedGdi,
    instance: Option<InstanceHandle>,
    handle: Option<IconHandle>,
}

impl Icon {
    pub fn load(
        gdi: &SharedGdi,
        instance: Option<InstanceHandle>,
        resource_id: u16,
    ) -> GdiResult<Self> {
        let mut icon = Self {
            gdi: SharedGdi::clone(gdi),
            instance,
            handle: None,
        };
        icon.initialize(resource_id)?;
        Ok(icon)
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

    pub fn handle(&self) -> GdiResult<IconHandle> {
        self.handle.ok_or(GdiError::InvalidHandle(Resource::Icon))
    }

    pub fn instance(&self) -> Option<InstanceHandle> {
        self.instance
    }

    fn initialize(&mut self, resource_id: u16) -> GdiResult<()> {
        self.handle = self.gdi.load_icon(self.instance, resource_id);
        if self.handle.is_none() {
            self.cleanup();
            return Err(GdiError::ResourceAcquisition(Resource::Icon));
        }
        Ok(())
    }

    fn cleanup(&mut self) {
        self.instance = None;
        self.handle = None;
    }
}
