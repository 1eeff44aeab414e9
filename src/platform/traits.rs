// Platform-independent GDI interface
//
// Every method mirrors exactly one GDI call and reports failure the way the
// OS does: `None` where the call returns a null handle, `false` where it
// returns a zero BOOL. Turning those into typed errors is the job of the
// wrappers in `crate::gdi`.

use std::fmt::Debug;
use std::path::Path;
use std::rc::Rc;

use super::handles::{
    BitmapHandle, BrushHandle, CursorHandle, DcHandle, GdiObject, IconHandle, InstanceHandle,
    SavedState,
};
use crate::gdi::Color;
use crate::math::Rectangle;

/// GDI backend
pub trait Gdi: Debug {
    /// CreateCompatibleDC. `None` as reference means "compatible with the screen"
    fn create_compatible_dc(&self, reference: Option<DcHandle>) -> Option<DcHandle>;

    /// GetDC(NULL), the device context of the whole screen
    fn screen_dc(&self) -> Option<DcHandle>;

    /// ReleaseDC(NULL, dc) for a DC obtained from `screen_dc`
    fn release_screen_dc(&self, dc: DcHandle) -> bool;

    /// DeleteDC for a DC obtained from `create_compatible_dc`
    fn delete_dc(&self, dc: DcHandle) -> bool;

    fn save_dc(&self, dc: DcHandle) -> Option<SavedState>;

    fn restore_dc(&self, dc: DcHandle, state: SavedState) -> bool;

    /// SelectObject; returns the previously selected object of the same kind
    fn select_object(&self, dc: DcHandle, object: GdiObject) -> Option<GdiObject>;

    /// BitBlt with SRCCOPY
    fn bit_blt(
        &self,
        destination: DcHandle,
        destination_area: Rectangle,
        source: DcHandle,
        source_x: i32,
        source_y: i32,
    ) -> bool;

    /// TransparentBlt: pixels equal to `transparent` are not copied
    fn transparent_blt(
        &self,
        destination: DcHandle,
        destination_area: Rectangle,
        source: DcHandle,
        source_area: Rectangle,
        transparent: Color,
    ) -> bool;

    fn create_compatible_bitmap(&self, dc: DcHandle, width: i32, height: i32)
    -> Option<BitmapHandle>;

    /// LoadImage(IMAGE_BITMAP, LR_LOADFROMFILE)
    fn load_bitmap(&self, path: &Path) -> Option<BitmapHandle>;

    /// GetObject on a bitmap, yielding (width, height)
    fn bitmap_size(&self, bitmap: BitmapHandle) -> Option<(i32, i32)>;

    fn create_solid_brush(&self, color: Color) -> Option<BrushHandle>;

    fn fill_rect(&self, dc: DcHandle, rect: Rectangle, brush: BrushHandle) -> bool;

    fn delete_object(&self, object: GdiObject) -> bool;

    fn load_icon(&self, instance: Option<InstanceHandle>, resource_id: u16) -> Option<IconHandle>;

    fn load_cursor(&self, instance: Option<InstanceHandle>, resource_id: u16)
    -> Option<CursorHandle>;
}

/// Backend shared by every wrapper on the UI thread
pub type SharedGdi = Rc<dyn Gdi>;
