//! Integer geometry used for blit coordinates and input positions.

/// Axis-aligned rectangle in device units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    /// 创建新的矩形
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// 从左上角和右下角坐标创建矩形
    pub const fn from_bounds(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Saturates at `i32::MAX`
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Saturates at `i32::MAX`
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Same extent placed at another origin
    pub const fn moved_to(&self, x: i32, y: i32) -> Self {
        Self::new(x, y, self.width, self.height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[cfg(windows)]
impl From<Rectangle> for windows::Win32::Foundation::RECT {
    fn from(rect: Rectangle) -> Self {
        windows::Win32::Foundation::RECT {
            left: rect.left(),
            top: rect.top(),
            right: rect.right(),
            bottom: rect.bottom(),
        }
    }
}

/// Two-component vector, used for pointer positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_and_extent_agree() {
        let rect = Rectangle::new(10, 20, 50, 40);
        assert_eq!(rect.right(), 60);
        assert_eq!(rect.bottom(), 60);
        assert_eq!(Rectangle::from_bounds(10, 20, 60, 60), rect);
        assert_eq!(rect.moved_to(0, 0), Rectangle::new(0, 0, 50, 40));
    }

    #[test]
    fn degenerate_rectangles_are_empty() {
        assert!(Rectangle::new(0, 0, 0, 5).is_empty());
        assert!(Rectangle::new(0, 0, 5, -1).is_empty());
        assert!(!Rectangle::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn edges_saturate_instead_of_overflowing() {
        let rect = Rectangle::new(i32::MAX - 1, 0, 10, i32::MAX);
        assert_eq!(rect.right(), i32::MAX);
        assert_eq!(rect.bottom(), i32::MAX);
    }
}
