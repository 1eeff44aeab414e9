// Typed GDI handles
//
// OS handles are opaque pointer-sized values. Each kind gets its own non-null
// newtype so a brush can never be passed where a device context is expected.

use std::num::NonZeroUsize;

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(NonZeroUsize);

        impl $name {
            /// Wrap a raw handle value; `None` for the null handle
            pub fn from_raw(raw: usize) -> Option<Self> {
                NonZeroUsize::new(raw).map(Self)
            }

            /// Raw handle value, never zero
            pub fn as_raw(self) -> usize {
                self.0.get()
            }
        }
    };
}

define_handle!(
    /// Drawing surface (HDC)
    DcHandle
);
define_handle!(
    /// Pixel buffer (HBITMAP)
    BitmapHandle
);
define_handle!(
    /// Fill pattern (HBRUSH)
    BrushHandle
);
define_handle!(
    /// Icon (HICON)
    IconHandle
);
define_handle!(
    /// Cursor (HCURSOR)
    CursorHandle
);
define_handle!(
    /// Module instance that owns resources (HINSTANCE)
    InstanceHandle
);
define_handle!(
    /// Any object that can be selected into a device context (HGDIOBJ)
    GdiObject
);

impl From<BitmapHandle> for GdiObject {
    fn from(bitmap: BitmapHandle) -> Self {
        GdiObject(bitmap.0)
    }
}

impl From<BrushHandle> for GdiObject {
    fn from(brush: BrushHandle) -> Self {
        GdiObject(brush.0)
    }
}

/// Token returned by SaveDC, consumed by RestoreDC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SavedState(i32);

impl SavedState {
    /// `None` for the failure value 0
    pub fn new(level: i32) -> Option<Self> {
        (level != 0).then_some(Self(level))
    }

    pub fn level(self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_handles_are_rejected() {
        assert!(DcHandle::from_raw(0).is_none());
        assert_eq!(DcHandle::from_raw(7).map(DcHandle::as_raw), Some(7));
        assert!(SavedState::new(0).is_none());
        assert_eq!(SavedState::new(2).map(SavedState::level), Some(2));
    }

    #[test]
    fn typed_objects_keep_their_raw_value() {
        let bitmap = BitmapHandle::from_raw(42).unwrap();
        assert_eq!(GdiObject::from(bitmap).as_raw(), 42);
    }
}
