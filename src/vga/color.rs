//! Hardware text mode colors.

use bit_field::BitField;

/// The 16 entry palette of the VGA text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGrey = 7,
    DarkGrey = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    LightMagenta = 13,
    LightBrown = 14,
    White = 15,
}

impl Color {
    /// Returns the palette entry for the low nibble of `value`.
    pub const fn from_nibble(value: u8) -> Self {
        match value & 0xF {
            0 => Color::Black,
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Cyan,
            4 => Color::Red,
            5 => Color::Magenta,
            6 => Color::Brown,
            7 => Color::LightGrey,
            8 => Color::DarkGrey,
            9 => Color::LightBlue,
            10 => Color::LightGreen,
            11 => Color::LightCyan,
            12 => Color::LightRed,
            13 => Color::LightMagenta,
            14 => Color::LightBrown,
            _ => Color::White,
        }
    }
}

/// An attribute byte: background in bits 4..8, foreground in bits 0..4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    /// Light green on black.
    pub const DEFAULT: ColorCode = ColorCode::new(Color::LightGreen, Color::Black);

    #[inline]
    pub const fn new(foreground: Color, background: Color) -> Self {
        Self((background as u8) << 4 | (foreground as u8))
    }

    #[inline]
    pub fn foreground(self) -> Color {
        Color::from_nibble(self.0.get_bits(0..4))
    }

    #[inline]
    pub fn background(self) -> Color {
        Color::from_nibble(self.0.get_bits(4..8))
    }

    pub fn set_foreground(&mut self, color: Color) {
        self.0.set_bits(0..4, color as u8);
    }

    pub fn set_background(&mut self, color: Color) {
        self.0.set_bits(4..8, color as u8);
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl Default for ColorCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for ColorCode {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_light_green_on_black() {
        assert_eq!(ColorCode::default().as_u8(), 0x0A);
        assert_eq!(ColorCode::DEFAULT.foreground(), Color::LightGreen);
        assert_eq!(ColorCode::DEFAULT.background(), Color::Black);
    }

    #[test]
    fn background_goes_in_the_high_nibble() {
        let code = ColorCode::new(Color::White, Color::Blue);
        assert_eq!(code.as_u8(), 0x1F);

        let code = ColorCode::new(Color::Black, Color::LightBrown);
        assert_eq!(code.as_u8(), 0xE0);
    }

    #[test]
    fn nibbles_are_set_independently() {
        let mut code = ColorCode::new(Color::Red, Color::Cyan);

        code.set_foreground(Color::White);
        assert_eq!(code.foreground(), Color::White);
        assert_eq!(code.background(), Color::Cyan);

        code.set_background(Color::Black);
        assert_eq!(code.foreground(), Color::White);
        assert_eq!(code.background(), Color::Black);
        assert_eq!(code.as_u8(), 0x0F);
    }

    #[test]
    fn every_nibble_maps_back_to_its_color() {
        for value in 0..16u8 {
            assert_eq!(Color::from_nibble(value) as u8, value);
        }
    }
}
