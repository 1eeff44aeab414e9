//! Pixel storage behind software bitmaps.

use image::RgbImage;

use crate::gdi::Color;
use crate::math::Rectangle;

/// Largest pixel count a single surface may hold
const MAX_PIXELS: usize = 1 << 26;

/// Row-major COLORREF pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: i32,
    height: i32,
    pixels: Vec<u32>,
}

impl Surface {
    /// Blank (black) surface; `None` for negative or oversized dimensions
    pub fn new(width: i32, height: i32) -> Option<Self> {
        if width < 0 || height < 0 {
            return None;
        }
        let len = (width as usize).checked_mul(height as usize)?;
        if len > MAX_PIXELS {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    /// Zero-sized surface
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        }
    }

    pub fn from_rgb_image(image: &RgbImage) -> Option<Self> {
        let width = i32::try_from(image.width()).ok()?;
        let height = i32::try_from(image.height()).ok()?;
        let mut surface = Self::new(width, height)?;
        for (x, y, pixel) in image.enumerate_pixels() {
            let [red, green, blue] = pixel.0;
            surface.set(x as i32, y as i32, Color::new(red, green, blue));
        }
        Some(surface)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(0, 0, self.width, self.height)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y)
            .map(|index| Color::from_reference(self.pixels[index]))
    }

    /// Writes outside the surface are clipped away
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index] = color.reference();
        }
    }

    /// Part of `area` that lies on this surface
    pub fn clip(&self, area: Rectangle) -> Option<Rectangle> {
        let left = i64::from(area.x).max(0);
        let top = i64::from(area.y).max(0);
        let right = (i64::from(area.x) + i64::from(area.width)).min(i64::from(self.width));
        let bottom = (i64::from(area.y) + i64::from(area.height)).min(i64::from(self.height));
        if left >= right || top >= bottom {
            return None;
        }
        // All four bounds lie within 0..=width/height here
        Some(Rectangle::from_bounds(
            i32::try_from(left).ok()?,
            i32::try_from(top).ok()?,
            i32::try_from(right).ok()?,
            i32::try_from(bottom).ok()?,
        ))
    }

    /// Whether `area` lies entirely on this surface; empty areas count if their origin does
    pub fn contains(&self, area: Rectangle) -> bool {
        let right = i64::from(area.x) + i64::from(area.width);
        let bottom = i64::from(area.y) + i64::from(area.height);
        area.x >= 0
            && area.y >= 0
            && right <= i64::from(self.width)
            && bottom <= i64::from(self.height)
    }

    pub fn fill(&mut self, rect: Rectangle, color: Color) {
        let Some(visible) = self.clip(rect) else {
            return;
        };
        for y in visible.top()..visible.bottom() {
            for x in visible.left()..visible.right() {
                self.set(x, y, color);
            }
        }
    }

    /// Nearest-neighbour samples of `source_area` scaled onto `destination`.
    ///
    /// Only the `visible` part of `destination` is sampled, row by row. Source
    /// pixels outside this surface come back as `None`.
    pub fn sample(
        &self,
        source_area: Rectangle,
        destination: Rectangle,
        visible: Rectangle,
    ) -> Vec<Option<Color>> {
        if destination.is_empty() || visible.is_empty() {
            return Vec::new();
        }
        let scale = |offset: i64, from: i32, to: i32, origin: i32| {
            i32::try_from(i64::from(origin) + offset * i64::from(from) / i64::from(to)).ok()
        };
        let mut region = Vec::with_capacity(visible.width as usize * visible.height as usize);
        for y in visible.top()..visible.bottom() {
            let offset_y = i64::from(y) - i64::from(destination.y);
            let source_y = scale(offset_y, source_area.height, destination.height, source_area.y);
            for x in visible.left()..visible.right() {
                let offset_x = i64::from(x) - i64::from(destination.x);
                let source_x = scale(offset_x, source_area.width, destination.width, source_area.x);
                region.push(match (source_x, source_y) {
                    (Some(x), Some(y)) => self.pixel(x, y),
                    _ => None,
                });
            }
        }
        region
    }

    /// Write a region produced by [`Surface::sample`] at `area`.
    ///
    /// `None` entries, pixels equal to `transparent` and pixels off the
    /// surface are skipped.
    pub fn write(&mut self, area: Rectangle, region: &[Option<Color>], transparent: Option<Color>) {
        let Ok(width) = usize::try_from(area.width) else {
            return;
        };
        if width == 0 {
            return;
        }
        for (offset, pixel) in region.iter().enumerate() {
            let Some(color) = pixel else { continue };
            if Some(*color) == transparent {
                continue;
            }
            let x = i64::from(area.x) + (offset % width) as i64;
            let y = i64::from(area.y) + (offset / width) as i64;
            if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
                self.set(x, y, *color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_and_huge_dimensions() {
        assert!(Surface::new(-1, 4).is_none());
        assert!(Surface::new(1 << 20, 1 << 20).is_none());
        let empty = Surface::new(0, 0).unwrap();
        assert_eq!(empty.pixel(0, 0), None);
    }

    #[test]
    fn fill_is_clipped_to_the_surface() {
        let mut surface = Surface::new(4, 4).unwrap();
        surface.fill(Rectangle::new(2, 2, 10, 10), Color::WHITE);
        assert_eq!(surface.pixel(3, 3), Some(Color::WHITE));
        assert_eq!(surface.pixel(1, 1), Some(Color::BLACK));
    }

    #[test]
    fn write_skips_the_transparent_key() {
        let mut source = Surface::new(2, 1).unwrap();
        source.set(1, 0, Color::WHITE);
        let region = source.sample(source.bounds(), source.bounds(), source.bounds());

        let mut target = Surface::new(2, 1).unwrap();
        target.fill(target.bounds(), Color::new(9, 9, 9));
        target.write(target.bounds(), &region, Some(Color::BLACK));
        assert_eq!(target.pixel(0, 0), Some(Color::new(9, 9, 9)));
        assert_eq!(target.pixel(1, 0), Some(Color::WHITE));
    }

    #[test]
    fn sample_doubles_each_pixel() {
        let mut source = Surface::new(2, 1).unwrap();
        source.set(0, 0, Color::WHITE);
        let destination = Rectangle::new(0, 0, 4, 1);
        assert_eq!(
            source.sample(source.bounds(), destination, destination),
            vec![
                Some(Color::WHITE),
                Some(Color::WHITE),
                Some(Color::BLACK),
                Some(Color::BLACK)
            ]
        );
    }

    #[test]
    fn clip_handles_extreme_coordinates() {
        let surface = Surface::new(8, 8).unwrap();
        assert_eq!(surface.clip(Rectangle::new(i32::MAX - 1, 0, 50, 50)), None);
        assert_eq!(
            surface.clip(Rectangle::new(-4, 6, i32::MAX, i32::MAX)),
            Some(Rectangle::new(0, 6, 8, 2))
        );
        assert!(!surface.contains(Rectangle::new(i32::MAX, 0, 1, 1)));
        assert!(surface.contains(Rectangle::new(8, 8, 0, 0)));
    }

    #[test]
    fn huge_destination_only_samples_the_visible_part() {
        let source = Surface::new(1, 1).unwrap();
        let target = Surface::new(4, 4).unwrap();
        let destination = Rectangle::new(0, 0, 100_000, 100_000);
        let visible = target.clip(destination).unwrap();

        let region = source.sample(source.bounds(), destination, visible);
        assert_eq!(region.len(), 16);
    }

    #[test]
    fn write_near_the_coordinate_limit_is_dropped() {
        let mut surface = Surface::new(4, 4).unwrap();
        let region = vec![Some(Color::WHITE); 4];
        surface.write(Rectangle::new(i32::MAX - 1, 0, 2, 2), &region, None);
        assert!(surface.pixels.iter().all(|pixel| *pixel == 0));
    }
}
