//! Software GDI backend
//!
//! `MemoryGdi` keeps every surface in process memory and follows the GDI
//! rules the wrappers depend on:
//! - a bitmap can be selected into only one memory DC at a time, and only
//!   memory DCs accept bitmaps
//! - a bitmap that is still selected cannot be deleted
//! - SaveDC/RestoreDC form a stack that brings back the selected objects
//! - only memory DCs are deleted, only screen DCs are released
//!
//! Window surfaces stand in for the DC a host gets from BeginPaint: the host
//! creates and destroys them, wrappers only borrow them. The inspection
//! helpers (pixel read-back, live counts, call journal, failure injection)
//! exist for tests and headless hosts. The journal is only kept while
//! [`MemoryGdi::record_calls`] is on.

mod surface;

pub use surface::Surface;

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use super::handles::{
    BitmapHandle, BrushHandle, CursorHandle, DcHandle, GdiObject, IconHandle, InstanceHandle,
    SavedState,
};
use super::traits::Gdi;
use crate::config::defaults::{default_screen_height, default_screen_width};
use crate::gdi::Color;
use crate::math::Rectangle;

/// GDI entry points, as recorded in the journal and targeted by `fail_next`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GdiCall {
    CreateCompatibleDc,
    GetDc,
    ReleaseDc,
    DeleteDc,
    SaveDc,
    RestoreDc,
    SelectObject,
    BitBlt,
    TransparentBlt,
    CreateCompatibleBitmap,
    LoadImage,
    GetObject,
    CreateSolidBrush,
    FillRect,
    DeleteObject,
    LoadIcon,
    LoadCursor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DcKind {
    Memory,
    Screen,
    Window,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BitmapKind {
    /// 1x1 default bitmap of every fresh memory DC
    Stock,
    /// Backing store of a screen or window DC
    Device,
    /// Created or loaded through the GDI, must be deleted
    Owned,
}

#[derive(Debug)]
struct DcEntry {
    kind: DcKind,
    bitmap: usize,
    brush: usize,
    saved: Vec<(usize, usize)>,
}

#[derive(Debug)]
struct BitmapEntry {
    kind: BitmapKind,
    surface: Surface,
    selected_in: Option<usize>,
}

#[derive(Debug)]
struct BrushEntry {
    color: Color,
    stock: bool,
}

#[derive(Debug)]
struct State {
    next_id: usize,
    dcs: HashMap<usize, DcEntry>,
    bitmaps: HashMap<usize, BitmapEntry>,
    brushes: HashMap<usize, BrushEntry>,
    screen_bitmap: usize,
    stock_bitmap: usize,
    stock_brush: usize,
    icon_resources: HashSet<u16>,
    cursor_resources: HashSet<u16>,
    icons: HashMap<(usize, u16), usize>,
    cursors: HashMap<(usize, u16), usize>,
    pending_failures: HashSet<GdiCall>,
    recording: bool,
    journal: Vec<GdiCall>,
}

impl State {
    fn allocate(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 4;
        id
    }

    /// Record the call if recording; true when an injected failure consumes it
    fn enter(&mut self, call: GdiCall) -> bool {
        if self.recording {
            self.journal.push(call);
        }
        self.pending_failures.remove(&call)
    }

    /// Copy `source_area` of `source` onto `destination_area` of `destination`,
    /// scaling to fit and clipping to the destination surface
    fn blit(
        &mut self,
        destination: usize,
        destination_area: Rectangle,
        source: usize,
        source_area: Rectangle,
        transparent: Option<Color>,
    ) -> bool {
        let Some(visible) = self
            .surface_of_dc(destination)
            .map(|surface| surface.clip(destination_area))
        else {
            return false;
        };
        let Some(source_surface) = self.surface_of_dc(source) else {
            return false;
        };
        let Some(visible) = visible else {
            return true;
        };
        let region = source_surface.sample(source_area, destination_area, visible);
        if let Some(surface) = self.surface_of_dc_mut(destination) {
            surface.write(visible, &region, transparent);
        }
        true
    }

    fn add_bitmap(&mut self, kind: BitmapKind, surface: Surface) -> usize {
        let id = self.allocate();
        self.bitmaps.insert(
            id,
            BitmapEntry {
                kind,
                surface,
                selected_in: None,
            },
        );
        id
    }

    fn add_dc(&mut self, kind: DcKind, bitmap: usize) -> usize {
        let id = self.allocate();
        let brush = self.stock_brush;
        self.dcs.insert(
            id,
            DcEntry {
                kind,
                bitmap,
                brush,
                saved: Vec::new(),
            },
        );
        id
    }

    fn surface_of_dc(&self, dc: usize) -> Option<&Surface> {
        let entry = self.dcs.get(&dc)?;
        self.bitmaps.get(&entry.bitmap).map(|bitmap| &bitmap.surface)
    }

    fn surface_of_dc_mut(&mut self, dc: usize) -> Option<&mut Surface> {
        let bitmap = self.dcs.get(&dc)?.bitmap;
        self.bitmaps.get_mut(&bitmap).map(|bitmap| &mut bitmap.surface)
    }

    /// Point `dc` at `bitmap`, keeping the selection bookkeeping of both bitmaps
    fn reselect_bitmap(&mut self, dc: usize, bitmap: usize) {
        let Some(previous) = self.dcs.get(&dc).map(|entry| entry.bitmap) else {
            return;
        };
        if let Some(entry) = self.bitmaps.get_mut(&previous)
            && entry.selected_in == Some(dc)
        {
            entry.selected_in = None;
        }
        let target = match self.bitmaps.get_mut(&bitmap) {
            Some(entry) => {
                if entry.kind == BitmapKind::Owned {
                    entry.selected_in = Some(dc);
                }
                bitmap
            }
            None => self.stock_bitmap,
        };
        if let Some(entry) = self.dcs.get_mut(&dc) {
            entry.bitmap = target;
        }
    }

    fn drop_dc(&mut self, dc: usize) {
        if let Some(entry) = self.dcs.remove(&dc)
            && let Some(bitmap) = self.bitmaps.get_mut(&entry.bitmap)
            && bitmap.selected_in == Some(dc)
        {
            bitmap.selected_in = None;
        }
    }
}

/// In-memory GDI
pub struct MemoryGdi {
    state: RefCell<State>,
}

impl fmt::Debug for MemoryGdi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("MemoryGdi")
            .field("dcs", &state.dcs.len())
            .field("bitmaps", &state.bitmaps.len())
            .field("brushes", &state.brushes.len())
            .finish()
    }
}

impl Default for MemoryGdi {
    fn default() -> Self {
        Self::new(default_screen_width(), default_screen_height())
    }
}

impl MemoryGdi {
    /// Backend whose screen DC draws onto a `screen_width` x `screen_height` surface
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        let mut state = State {
            next_id: 0x100,
            dcs: HashMap::new(),
            bitmaps: HashMap::new(),
            brushes: HashMap::new(),
            screen_bitmap: 0,
            stock_bitmap: 0,
            stock_brush: 0,
            icon_resources: HashSet::new(),
            cursor_resources: HashSet::new(),
            icons: HashMap::new(),
            cursors: HashMap::new(),
            pending_failures: HashSet::new(),
            recording: false,
            journal: Vec::new(),
        };
        let screen = Surface::new(screen_width, screen_height).unwrap_or_else(Surface::empty);
        state.screen_bitmap = state.add_bitmap(BitmapKind::Device, screen);
        let stock = Surface::new(1, 1).unwrap_or_else(Surface::empty);
        state.stock_bitmap = state.add_bitmap(BitmapKind::Stock, stock);
        let stock_brush = state.allocate();
        state.brushes.insert(
            stock_brush,
            BrushEntry {
                color: Color::WHITE,
                stock: true,
            },
        );
        state.stock_brush = stock_brush;

        Self {
            state: RefCell::new(state),
        }
    }

    /// Create a caller-owned drawing surface, like the DC handed out by BeginPaint
    pub fn create_window_surface(&self, width: i32, height: i32) -> Option<DcHandle> {
        let mut state = self.state.borrow_mut();
        let surface = Surface::new(width, height)?;
        let bitmap = state.add_bitmap(BitmapKind::Device, surface);
        let dc = state.add_dc(DcKind::Window, bitmap);
        DcHandle::from_raw(dc)
    }

    /// Tear down a surface made by [`MemoryGdi::create_window_surface`]
    pub fn destroy_window_surface(&self, dc: DcHandle) -> bool {
        let mut state = self.state.borrow_mut();
        match state.dcs.get(&dc.as_raw()) {
            Some(entry) if entry.kind == DcKind::Window => {
                let bitmap = entry.bitmap;
                state.dcs.remove(&dc.as_raw());
                state.bitmaps.remove(&bitmap);
                true
            }
            _ => false,
        }
    }

    /// Make `LoadIcon` succeed for `resource_id`
    pub fn register_icon(&self, resource_id: u16) {
        self.state.borrow_mut().icon_resources.insert(resource_id);
    }

    /// Make `LoadCursor` succeed for `resource_id`
    pub fn register_cursor(&self, resource_id: u16) {
        self.state.borrow_mut().cursor_resources.insert(resource_id);
    }

    /// The next invocation of `call` fails the way the OS call would
    pub fn fail_next(&self, call: GdiCall) {
        self.state.borrow_mut().pending_failures.insert(call);
    }

    /// Start or stop recording calls; recording is off by default.
    ///
    /// Stopping also drops what was recorded.
    pub fn record_calls(&self, enabled: bool) {
        let mut state = self.state.borrow_mut();
        state.recording = enabled;
        if !enabled {
            state.journal = Vec::new();
        }
    }

    /// Every GDI call recorded so far, in order
    pub fn calls(&self) -> Vec<GdiCall> {
        self.state.borrow().journal.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().journal.clear();
    }

    /// Number of times `call` appears in the journal
    pub fn call_count(&self, call: GdiCall) -> usize {
        self.state
            .borrow()
            .journal
            .iter()
            .filter(|recorded| **recorded == call)
            .count()
    }

    /// Pixel of whatever surface `dc` currently draws on
    pub fn pixel(&self, dc: DcHandle, x: i32, y: i32) -> Option<Color> {
        self.state
            .borrow()
            .surface_of_dc(dc.as_raw())
            .and_then(|surface| surface.pixel(x, y))
    }

    pub fn set_pixel(&self, dc: DcHandle, x: i32, y: i32, color: Color) {
        if let Some(surface) = self.state.borrow_mut().surface_of_dc_mut(dc.as_raw()) {
            surface.set(x, y, color);
        }
    }

    pub fn bitmap_pixel(&self, bitmap: BitmapHandle, x: i32, y: i32) -> Option<Color> {
        self.state
            .borrow()
            .bitmaps
            .get(&bitmap.as_raw())
            .and_then(|entry| entry.surface.pixel(x, y))
    }

    /// Bitmap currently selected into `dc`, unless it is the stock bitmap
    pub fn selected_bitmap(&self, dc: DcHandle) -> Option<BitmapHandle> {
        let state = self.state.borrow();
        let bitmap = state.dcs.get(&dc.as_raw())?.bitmap;
        match state.bitmaps.get(&bitmap)?.kind {
            BitmapKind::Owned => BitmapHandle::from_raw(bitmap),
            _ => None,
        }
    }

    /// Depth of the SaveDC stack of `dc`
    pub fn saved_depth(&self, dc: DcHandle) -> Option<usize> {
        self.state
            .borrow()
            .dcs
            .get(&dc.as_raw())
            .map(|entry| entry.saved.len())
    }

    pub fn is_live_dc(&self, dc: DcHandle) -> bool {
        self.state.borrow().dcs.contains_key(&dc.as_raw())
    }

    pub fn is_live_bitmap(&self, bitmap: BitmapHandle) -> bool {
        self.state.borrow().bitmaps.contains_key(&bitmap.as_raw())
    }

    /// Memory and screen DCs currently held; window surfaces are not counted
    pub fn live_dcs(&self) -> usize {
        self.state
            .borrow()
            .dcs
            .values()
            .filter(|entry| entry.kind != DcKind::Window)
            .count()
    }

    /// Bitmaps created or loaded and not yet deleted
    pub fn live_bitmaps(&self) -> usize {
        self.state
            .borrow()
            .bitmaps
            .values()
            .filter(|entry| entry.kind == BitmapKind::Owned)
            .count()
    }

    pub fn live_brushes(&self) -> usize {
        self.state
            .borrow()
            .brushes
            .values()
            .filter(|entry| !entry.stock)
            .count()
    }
}

impl Gdi for MemoryGdi {
    fn create_compatible_dc(&self, reference: Option<DcHandle>) -> Option<DcHandle> {
        let mut state = self.state.borrow_mut();
        if state.enter(GdiCall::CreateCompatibleDc) {
            return None;
        }
        if let Some(reference) = reference
            && !state.dcs.contains_key(&reference.as_raw())
        {
            return None;
        }
        let stock = state.stock_bitmap;
        DcHandle::from_raw(state.add_dc(DcKind::Memory, stock))
    }

    fn screen_dc(&self) -> Option<DcHandle> {
        let mut state = self.state.borrow_mut();
        if state.enter(GdiCall::GetDc) {
            return None;
        }
        let screen = state.screen_bitmap;
        DcHandle::from_raw(state.add_dc(DcKind::Screen, screen))
    }

    fn release_screen_dc(&self, dc: DcHandle) -> bool {
        let mut state = self.state.borrow_mut();
        if state.enter(GdiCall::ReleaseDc) {
            return false;
        }
        match state.dcs.get(&dc.as_raw()) {
            Some(entry) if entry.kind == DcKind::Screen => {
                state.drop_dc(dc.as_raw());
                true
            }
            _ => false,
        }
    }

    fn delete_dc(&self, dc: DcHandle) -> bool {
        let mut state = self.state.borrow_mut();
        if state.enter(GdiCall::DeleteDc) {
            return false;
        }
        match state.dcs.get(&dc.as_raw()) {
            Some(entry) if entry.kind == DcKind::Memory => {
                state.drop_dc(dc.as_raw());
                true
            }
            _ => false,
        }
    }

    fn save_dc(&self, dc: DcHandle) -> Option<SavedState> {
        let mut state = self.state.borrow_mut();
        if state.enter(GdiCall::SaveDc) {
            return None;
        }
        let entry = state.dcs.get_mut(&dc.as_raw())?;
        entry.saved.push((entry.bitmap, entry.brush));
        SavedState::new(i32::try_from(entry.saved.len()).ok()?)
    }

    fn restore_dc(&self, dc: DcHandle, saved: SavedState) -> bool {
        let mut state = self.state.borrow_mut();
        if state.enter(GdiCall::RestoreDc) {
            return false;
        }
        let Some(entry) = state.dcs.get_mut(&dc.as_raw()) else {
            return false;
        };
        let depth = entry.saved.len();
        let Ok(depth_level) = i64::try_from(depth) else {
            return false;
        };
        // Negative levels count back from the most recent save
        let level = match i64::from(saved.level()) {
            level if level < 0 => depth_level + 1 + level,
            level => level,
        };
        let Some(index) = usize::try_from(level - 1).ok().filter(|index| *index < depth) else {
            return false;
        };
        let (bitmap, brush) = entry.saved[index];
        entry.saved.truncate(index);
        entry.brush = brush;
        state.reselect_bitmap(dc.as_raw(), bitmap);
        true
    }

    fn select_object(&self, dc: DcHandle, object: GdiObject) -> Option<GdiObject> {
        let mut state = self.state.borrow_mut();
        if state.enter(GdiCall::SelectObject) {
            return None;
        }
        let dc = dc.as_raw();
        let object = object.as_raw();
        let (kind, previous_bitmap, previous_brush) = {
            let entry = state.dcs.get(&dc)?;
            (entry.kind, entry.bitmap, entry.brush)
        };

        if let Some(bitmap) = state.bitmaps.get(&object) {
            if kind != DcKind::Memory || bitmap.kind == BitmapKind::Device {
                return None;
            }
            if bitmap.selected_in.is_some_and(|owner| owner != dc) {
                return None;
            }
            state.reselect_bitmap(dc, object);
            return GdiObject::from_raw(previous_bitmap);
        }

        if state.brushes.contains_key(&object) {
            state.dcs.get_mut(&dc)?.brush = object;
            return GdiObject::from_raw(previous_brush);
        }

        None
    }

    fn bit_blt(
        &self,
        destination: DcHandle,
        destination_area: Rectangle,
        source: DcHandle,
        source_x: i32,
        source_y: i32,
    ) -> bool {
        let mut state = self.state.borrow_mut();
        if state.enter(GdiCall::BitBlt) {
            return false;
        }
        if destination_area.width < 0 || destination_area.height < 0 {
            return false;
        }
        state.blit(
            destination.as_raw(),
            destination_area,
            source.as_raw(),
            destination_area.moved_to(source_x, source_y),
            None,
        )
    }

    fn transparent_blt(
        &self,
        destination: DcHandle,
        destination_area: Rectangle,
        source: DcHandle,
        source_area: Rectangle,
        transparent: Color,
    ) -> bool {
        let mut state = self.state.borrow_mut();
        if state.enter(GdiCall::TransparentBlt) {
            return false;
        }
        if destination_area.width < 0
            || destination_area.height < 0
            || source_area.width < 0
            || source_area.height < 0
        {
            return false;
        }
        let Some(source_surface) = state.surface_of_dc(source.as_raw()) else {
            return false;
        };
        if !source_surface.contains(source_area) {
            return false;
        }
        if destination_area.is_empty() || source_area.is_empty() {
            return state.dcs.contains_key(&destination.as_raw());
        }
        state.blit(
            destination.as_raw(),
            destination_area,
            source.as_raw(),
            source_area,
            Some(transparent),
        )
    }

    fn create_compatible_bitmap(
        &self,
        dc: DcHandle,
        width: i32,
        height: i32,
    ) -> Option<BitmapHandle> {
        let mut state = self.state.borrow_mut();
        if state.enter(GdiCall::CreateCompatibleBitmap) {
            return None;
        }
        if !state.dcs.contains_key(&dc.as_raw()) {
            return None;
        }
        let surface = Surface::new(width, height)?;
        BitmapHandle::from_raw(state.add_bitmap(BitmapKind::Owned, surface))
    }

    fn load_bitmap(&self, path: &Path) -> Option<BitmapHandle> {
        let mut state = self.state.borrow_mut();
        if state.enter(GdiCall::LoadImage) {
            return None;
        }
        let image = match image::open(path) {
            Ok(image) => image.to_rgb8(),
            Err(err) => {
                log::debug!("LoadImage {}: {err}", path.display());
                return None;
            }
        };
        let surface = Surface::from_rgb_image(&image)?;
        BitmapHandle::from_raw(state.add_bitmap(BitmapKind::Owned, surface))
    }

    fn bitmap_size(&self, bitmap: BitmapHandle) -> Option<(i32, i32)> {
        let mut state = self.state.borrow_mut();
        if state.enter(GdiCall::GetObject) {
            return None;
        }
        state
            .bitmaps
            .get(&bitmap.as_raw())
            .map(|entry| (entry.surface.width(), entry.surface.height()))
    }

    fn create_solid_brush(&self, color: Color) -> Option<BrushHandle> {
        let mut state = self.state.borrow_mut();
        if state.enter(GdiCall::CreateSolidBrush) {
            return None;
        }
        let id = state.allocate();
        state.brushes.insert(id, BrushEntry { color, stock: false });
        BrushHandle::from_raw(id)
    }

    fn fill_rect(&self, dc: DcHandle, rect: Rectangle, brush: BrushHandle) -> bool {
        let mut state = self.state.borrow_mut();
        if state.enter(GdiCall::FillRect) {
            return false;
        }
        let Some(color) = state.brushes.get(&brush.as_raw()).map(|entry| entry.color) else {
            return false;
        };
        match state.surface_of_dc_mut(dc.as_raw()) {
            Some(surface) => {
                surface.fill(rect, color);
                true
            }
            None => false,
        }
    }

    fn delete_object(&self, object: GdiObject) -> bool {
        let mut state = self.state.borrow_mut();
        if state.enter(GdiCall::DeleteObject) {
            return false;
        }
        let id = object.as_raw();
        if let Some(bitmap) = state.bitmaps.get(&id) {
            if bitmap.kind != BitmapKind::Owned || bitmap.selected_in.is_some() {
                return false;
            }
            state.bitmaps.remove(&id);
            return true;
        }
        if let Some(brush) = state.brushes.get(&id) {
            if brush.stock || state.dcs.values().any(|entry| entry.brush == id) {
                return false;
            }
            state.brushes.remove(&id);
            return true;
        }
        false
    }

    fn load_icon(&self, instance: Option<InstanceHandle>, resource_id: u16) -> Option<IconHandle> {
        let mut state = self.state.borrow_mut();
        if state.enter(GdiCall::LoadIcon) || !state.icon_resources.contains(&resource_id) {
            return None;
        }
        let key = (instance.map_or(0, InstanceHandle::as_raw), resource_id);
        let id = match state.icons.get(&key) {
            Some(id) => *id,
            None => {
                let id = state.allocate();
                state.icons.insert(key, id);
                id
            }
        };
        IconHandle::from_raw(id)
    }

    fn load_cursor(
        &self,
        instance: Option<InstanceHandle>,
        resource_id: u16,
    ) -> Option<CursorHandle> {
        let mut state = self.state.borrow_mut();
        if state.enter(GdiCall::LoadCursor) || !state.cursor_resources.contains(&resource_id) {
            return None;
        }
        let key = (instance.map_or(0, InstanceHandle::as_raw), resource_id);
        let id = match state.cursors.get(&key) {
            Some(id) => *id,
            None => {
                let id = state.allocate();
                state.cursors.insert(key, id);
                id
            }
        };
        CursorHandle::from_raw(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(bitmap: BitmapHandle) -> GdiObject {
        bitmap.into()
    }

    #[test]
    fn bitmap_is_exclusive_to_one_memory_dc() {
        let gdi = MemoryGdi::new(8, 8);
        let first = gdi.create_compatible_dc(None).unwrap();
        let second = gdi.create_compatible_dc(None).unwrap();
        let bitmap = gdi.create_compatible_bitmap(first, 2, 2).unwrap();

        assert!(gdi.select_object(first, object(bitmap)).is_some());
        assert!(gdi.select_object(second, object(bitmap)).is_none());
        assert!(!gdi.delete_object(object(bitmap)));

        assert!(gdi.delete_dc(first));
        assert!(gdi.select_object(second, object(bitmap)).is_some());
    }

    #[test]
    fn restore_brings_back_the_saved_selection() {
        let gdi = MemoryGdi::new(8, 8);
        let dc = gdi.create_compatible_dc(None).unwrap();
        let bitmap = gdi.create_compatible_bitmap(dc, 2, 2).unwrap();

        let saved = gdi.save_dc(dc).unwrap();
        gdi.select_object(dc, object(bitmap)).unwrap();
        assert_eq!(gdi.selected_bitmap(dc), Some(bitmap));

        assert!(gdi.restore_dc(dc, saved));
        assert_eq!(gdi.selected_bitmap(dc), None);
        assert_eq!(gdi.saved_depth(dc), Some(0));
        assert!(gdi.delete_object(object(bitmap)));
        assert!(!gdi.restore_dc(dc, saved));
    }

    #[test]
    fn relative_restore_pops_the_latest_save() {
        let gdi = MemoryGdi::new(8, 8);
        let dc = gdi.create_compatible_dc(None).unwrap();
        gdi.save_dc(dc).unwrap();
        gdi.save_dc(dc).unwrap();
        assert!(gdi.restore_dc(dc, SavedState::new(-1).unwrap()));
        assert_eq!(gdi.saved_depth(dc), Some(1));
    }

    #[test]
    fn dc_kinds_are_released_by_their_own_call() {
        let gdi = MemoryGdi::new(8, 8);
        let screen = gdi.screen_dc().unwrap();
        let memory = gdi.create_compatible_dc(Some(screen)).unwrap();
        let window = gdi.create_window_surface(4, 4).unwrap();

        assert!(!gdi.delete_dc(screen));
        assert!(!gdi.release_screen_dc(memory));
        assert!(!gdi.delete_dc(window));
        assert!(!gdi.release_screen_dc(window));

        assert!(gdi.release_screen_dc(screen));
        assert!(gdi.delete_dc(memory));
        assert!(gdi.destroy_window_surface(window));
        assert_eq!(gdi.live_dcs(), 0);
    }

    #[test]
    fn window_surfaces_refuse_bitmaps() {
        let gdi = MemoryGdi::new(8, 8);
        let window = gdi.create_window_surface(4, 4).unwrap();
        let bitmap = gdi.create_compatible_bitmap(window, 2, 2).unwrap();
        assert!(gdi.select_object(window, object(bitmap)).is_none());
    }

    #[test]
    fn injected_failures_fire_once() {
        let gdi = MemoryGdi::new(8, 8);
        gdi.record_calls(true);
        gdi.fail_next(GdiCall::GetDc);
        assert!(gdi.screen_dc().is_none());
        let dc = gdi.screen_dc().unwrap();
        assert_eq!(gdi.call_count(GdiCall::GetDc), 2);
        assert!(gdi.release_screen_dc(dc));
    }

    #[test]
    fn calls_are_only_recorded_on_request() {
        let gdi = MemoryGdi::new(8, 8);
        let dc = gdi.screen_dc().unwrap();
        assert!(gdi.calls().is_empty());

        gdi.record_calls(true);
        gdi.save_dc(dc).unwrap();
        assert_eq!(gdi.calls(), vec![GdiCall::SaveDc]);

        gdi.record_calls(false);
        assert!(gdi.calls().is_empty());
        assert!(gdi.release_screen_dc(dc));
        assert!(gdi.calls().is_empty());
    }

    #[test]
    fn blits_far_off_the_surface_are_clipped() {
        let gdi = MemoryGdi::new(8, 8);
        let window = gdi.create_window_surface(8, 8).unwrap();
        let memory = gdi.create_compatible_dc(Some(window)).unwrap();
        let bitmap = gdi.create_compatible_bitmap(window, 1, 1).unwrap();
        gdi.select_object(memory, object(bitmap)).unwrap();

        let far = Rectangle::new(i32::MAX - 1, i32::MAX - 1, 4, 4);
        assert!(gdi.bit_blt(window, far, memory, 0, 0));
        assert!(gdi.bit_blt(window, Rectangle::new(0, 0, 4, 4), memory, i32::MAX - 1, 0));

        let huge = Rectangle::new(0, 0, 100_000, 100_000);
        assert!(gdi.transparent_blt(window, huge, memory, Rectangle::new(0, 0, 1, 1), Color::WHITE));
        assert!(!gdi.transparent_blt(
            window,
            huge,
            memory,
            Rectangle::new(i32::MAX, 0, 1, 1),
            Color::WHITE
        ));
    }

    #[test]
    fn shared_icons_are_loaded_once() {
        let gdi = MemoryGdi::new(8, 8);
        assert!(gdi.load_icon(None, 101).is_none());
        gdi.register_icon(101);
        let first = gdi.load_icon(None, 101).unwrap();
        assert_eq!(gdi.load_icon(None, 101), Some(first));
    }

    #[test]
    fn fill_and_blit_move_pixels() {
        let gdi = MemoryGdi::new(8, 8);
        let window = gdi.create_window_surface(8, 8).unwrap();
        let memory = gdi.create_compatible_dc(Some(window)).unwrap();
        let bitmap = gdi.create_compatible_bitmap(window, 2, 2).unwrap();
        gdi.select_object(memory, object(bitmap)).unwrap();
        let brush = gdi.create_solid_brush(Color::WHITE).unwrap();

        assert!(gdi.fill_rect(memory, Rectangle::new(0, 0, 2, 2), brush));
        assert!(gdi.bit_blt(window, Rectangle::new(3, 3, 2, 2), memory, 0, 0));
        assert_eq!(gdi.pixel(window, 4, 4), Some(Color::WHITE));
        assert_eq!(gdi.pixel(window, 2, 2), Some(Color::BLACK));
    }
}
