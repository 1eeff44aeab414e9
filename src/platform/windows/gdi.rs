// Windows GDI backend
//
// Thin pass-through to the real GDI. Every method is one Win32 call; handle
// values are converted between the crate's typed handles and the `windows`
// crate's pointer newtypes at this boundary only.

use std::ffi::c_void;
use std::os::windows::ffi::OsStrExt;
use std::path::Path;

use windows::Win32::Foundation::{HINSTANCE, RECT};
use windows::Win32::Graphics::Gdi::{
    BITMAP, BitBlt, CreateCompatibleBitmap, CreateCompatibleDC, CreateSolidBrush, DeleteDC,
    DeleteObject, FillRect, GetDC, GetObjectW, HBRUSH, HDC, HGDIOBJ, ReleaseDC,
    RestoreDC, SRCCOPY, SaveDC, SelectObject, TransparentBlt,
};
use windows::Win32::UI::WindowsAndMessaging::{
    IMAGE_BITMAP, LR_LOADFROMFILE, LoadCursorW, LoadIconW, LoadImageW,
};
use windows::core::PCWSTR;

use crate::gdi::Color;
use crate::math::Rectangle;
use crate::platform::handles::{
    BitmapHandle, BrushHandle, CursorHandle, DcHandle, GdiObject, IconHandle, InstanceHandle,
    SavedState,
};
use crate::platform::traits::Gdi;

fn hdc(dc: DcHandle) -> HDC {
    HDC(dc.as_raw() as *mut c_void)
}

fn hgdiobj(object: GdiObject) -> HGDIOBJ {
    HGDIOBJ(object.as_raw() as *mut c_void)
}

fn hinstance(instance: Option<InstanceHandle>) -> Option<HINSTANCE> {
    instance.map(|instance| HINSTANCE(instance.as_raw() as *mut c_void))
}

/// MAKEINTRESOURCE
fn int_resource(resource_id: u16) -> PCWSTR {
    PCWSTR(resource_id as usize as *const u16)
}

fn to_wide_path(path: &Path) -> Vec<u16> {
    path.as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect()
}

/// GDI backend for the current Windows session
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Gdi;

impl Gdi for Win32Gdi {
    fn create_compatible_dc(&self, reference: Option<DcHandle>) -> Option<DcHandle> {
        let dc = unsafe { CreateCompatibleDC(reference.map(hdc)) };
        DcHandle::from_raw(dc.0 as usize)
    }

    fn screen_dc(&self) -> Option<DcHandle> {
        let dc = unsafe { GetDC(None) };
        DcHandle::from_raw(dc.0 as usize)
    }

    fn release_screen_dc(&self, dc: DcHandle) -> bool {
        unsafe { ReleaseDC(None, hdc(dc)) == 1 }
    }

    fn delete_dc(&self, dc: DcHandle) -> bool {
        unsafe { DeleteDC(hdc(dc)).as_bool() }
    }

    fn save_dc(&self, dc: DcHandle) -> Option<SavedState> {
        SavedState::new(unsafe { SaveDC(hdc(dc)) })
    }

    fn restore_dc(&self, dc: DcHandle, state: SavedState) -> bool {
        unsafe { RestoreDC(hdc(dc), state.level()).as_bool() }
    }

    fn select_object(&self, dc: DcHandle, object: GdiObject) -> Option<GdiObject> {
        let previous = unsafe { SelectObject(hdc(dc), hgdiobj(object)) };
        // HGDI_ERROR is (HGDIOBJ)-1
        if previous.0 as isize == -1 {
            return None;
        }
        GdiObject::from_raw(previous.0 as usize)
    }

    fn bit_blt(
        &self,
        destination: DcHandle,
        destination_area: Rectangle,
        source: DcHandle,
        source_x: i32,
        source_y: i32,
    ) -> bool {
        unsafe {
            BitBlt(
                hdc(destination),
                destination_area.x,
                destination_area.y,
                destination_area.width,
                destination_area.height,
                Some(hdc(source)),
                source_x,
                source_y,
                SRCCOPY,
            )
        }
        .is_ok()
    }

    fn transparent_blt(
        &self,
        destination: DcHandle,
        destination_area: Rectangle,
        source: DcHandle,
        source_area: Rectangle,
        transparent: Color,
    ) -> bool {
        unsafe {
            TransparentBlt(
                hdc(destination),
                destination_area.x,
                destination_area.y,
                destination_area.width,
                destination_area.height,
                hdc(source),
                source_area.x,
                source_area.y,
                source_area.width,
                source_area.height,
                transparent.reference(),
            )
        }
        .as_bool()
    }

    fn create_compatible_bitmap(
        &self,
        dc: DcHandle,
        width: i32,
        height: i32,
    ) -> Option<BitmapHandle> {
        let bitmap = unsafe { CreateCompatibleBitmap(hdc(dc), width, height) };
        BitmapHandle::from_raw(bitmap.0 as usize)
    }

    fn load_bitmap(&self, path: &Path) -> Option<BitmapHandle> {
        let wide = to_wide_path(path);
        let handle = unsafe {
            LoadImageW(
                None,
                PCWSTR(wide.as_ptr()),
                IMAGE_BITMAP,
                0,
                0,
                LR_LOADFROMFILE,
            )
        };
        match handle {
            Ok(handle) => BitmapHandle::from_raw(handle.0 as usize),
            Err(err) => {
                log::debug!("LoadImageW {}: {err}", path.display());
                None
            }
        }
    }

    fn bitmap_size(&self, bitmap: BitmapHandle) -> Option<(i32, i32)> {
        let mut info = BITMAP::default();
        let written = unsafe {
            GetObjectW(
                HGDIOBJ(bitmap.as_raw() as *mut c_void),
                std::mem::size_of::<BITMAP>() as i32,
                Some(&mut info as *mut BITMAP as *mut c_void),
            )
        };
        (written != 0).then_some((info.bmWidth, info.bmHeight))
    }

    fn create_solid_brush(&self, color: Color) -> Option<BrushHandle> {
        let brush = unsafe { CreateSolidBrush(color.into()) };
        BrushHandle::from_raw(brush.0 as usize)
    }

    fn fill_rect(&self, dc: DcHandle, rect: Rectangle, brush: BrushHandle) -> bool {
        let rect: RECT = rect.into();
        let brush = HBRUSH(brush.as_raw() as *mut c_void);
        unsafe { FillRect(hdc(dc), &rect, brush) != 0 }
    }

    fn delete_object(&self, object: GdiObject) -> bool {
        unsafe { DeleteObject(hgdiobj(object)).as_bool() }
    }

    fn load_icon(&self, instance: Option<InstanceHandle>, resource_id: u16) -> Option<IconHandle> {
        unsafe { LoadIconW(hinstance(instance), int_resource(resource_id)) }
            .ok()
            .and_then(|icon| IconHandle::from_raw(icon.0 as usize))
    }

    fn load_cursor(
        &self,
        instance: Option<InstanceHandle>,
        resource_id: u16,
    ) -> Option<CursorHandle> {
        unsafe { LoadCursorW(hinstance(instance), int_resource(resource_id)) }
            .ok()
            .and_then(|cursor| CursorHandle::from_raw(cursor.0 as usize))
    }
}
