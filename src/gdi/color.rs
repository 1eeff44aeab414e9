use serde::{Deserialize, Serialize};

/// RGB color packed the way GDI expects it (COLORREF, `0x00BBGGRR`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "(u8, u8, u8)", into = "(u8, u8, u8)")]
pub struct Color {
    reference: u32,
}

const fn rgb(red: u8, green: u8, blue: u8) -> u32 {
    (red as u32) | ((green as u32) << 8) | ((blue as u32) << 16)
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            reference: rgb(red, green, blue),
        }
    }

    /// Build from a raw COLORREF; the unused high byte is cleared
    pub const fn from_reference(reference: u32) -> Self {
        Self {
            reference: reference & 0x00FF_FFFF,
        }
    }

    pub const fn reference(&self) -> u32 {
        self.reference
    }

    pub const fn red(&self) -> u8 {
        (self.reference & 0xFF) as u8
    }

    pub const fn green(&self) -> u8 {
        ((self.reference >> 8) & 0xFF) as u8
    }

    pub const fn blue(&self) -> u8 {
        ((self.reference >> 16) & 0xFF) as u8
    }

    pub fn set_reference(&mut self, red: u8, green: u8, blue: u8) {
        self.reference = rgb(red, green, blue);
    }

    pub fn set_red(&mut self, red: u8) {
        self.reference = rgb(red, self.green(), self.blue());
    }

    pub fn set_green(&mut self, green: u8) {
        self.reference = rgb(self.red(), green, self.blue());
    }

    pub fn set_blue(&mut self, blue: u8) {
        self.reference = rgb(self.red(), self.green(), blue);
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Color::new(red, green, blue)
    }
}

impl From<Color> for (u8, u8, u8) {
    fn from(color: Color) -> Self {
        (color.red(), color.green(), color.blue())
    }
}

#[cfg(windows)]
impl From<Color> for windows::Win32::Foundation::COLORREF {
    fn from(color: Color) -> Self {
        windows::Win32::Foundation::COLORREF(color.reference())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_like_the_rgb_macro() {
        assert_eq!(Color::new(0x12, 0x34, 0x56).reference(), 0x0056_3412);
        assert_eq!(Color::from_reference(0xFF56_3412), Color::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn channel_setters_leave_other_channels_alone() {
        let mut color = Color::new(10, 20, 30);
        color.set_green(200);
        assert_eq!((color.red(), color.green(), color.blue()), (10, 200, 30));
        color.set_red(1);
        color.set_blue(2);
        assert_eq!(color, Color::new(1, 200, 2));
        color.set_reference(0, 0, 0);
        assert_eq!(color, Color::BLACK);
    }

    #[test]
    fn serializes_as_a_triple() {
        let json = serde_json::to_string(&Color::new(255, 0, 128)).unwrap();
        assert_eq!(json, "[255,0,128]");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::new(255, 0, 128));
    }
}
