use static_assertions::{assert_eq_size, const_assert_eq};
use volatile::Volatile;

use super::color::ColorCode;

pub const BUFFER_HEIGHT: usize = 25;
pub const BUFFER_WIDTH: usize = 80;

/// Physical address of the colour text mode buffer.
pub const VGA_BUFFER_ADDRESS: usize = 0xB8000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ScreenChar {
    pub character: u8,
    pub color_code: ColorCode,
}

impl ScreenChar {
    #[inline]
    pub const fn new(character: u8, color_code: ColorCode) -> Self {
        Self {
            character,
            color_code,
        }
    }

    /// A space drawn with `color_code`.
    #[inline]
    pub const fn blank(color_code: ColorCode) -> Self {
        Self::new(b' ', color_code)
    }

    /// Returns the cell as the hardware sees it: `attribute << 8 | character`.
    #[inline]
    pub const fn to_u16(self) -> u16 {
        (self.color_code.as_u8() as u16) << 8 | self.character as u16
    }
}

impl From<u16> for ScreenChar {
    fn from(value: u16) -> Self {
        Self::new(value as u8, ColorCode::from((value >> 8) as u8))
    }
}

/// The 80x25 grid as laid out in memory, row 0 at the lowest address.
#[repr(transparent)]
pub struct Buffer {
    chars: [[Volatile<ScreenChar>; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

assert_eq_size!(ScreenChar, u16);
const_assert_eq!(
    core::mem::size_of::<Buffer>(),
    BUFFER_WIDTH * BUFFER_HEIGHT * 2
);

impl Buffer {
    /// Aliases the memory at `address` as a text buffer.
    ///
    /// ## Safety
    /// `address` must point to `BUFFER_WIDTH * BUFFER_HEIGHT` cells that stay valid
    /// for `'a` and are not accessed through any other reference meanwhile.
    pub unsafe fn from_raw<'a>(address: usize) -> &'a mut Buffer {
        &mut *(address as *mut Buffer)
    }
}

/// Cell level access to a text grid.
///
/// This is the only thing the [`Writer`](super::writer::Writer) needs from a
/// display, so the cursor logic does not care whether the cells are real VGA
/// memory or something else.
pub trait TextBuffer {
    /// Stores `cell` at `(row, col)`. Out of range positions are ignored.
    fn write_cell(&mut self, row: usize, col: usize, cell: ScreenChar);

    /// Loads the cell at `(row, col)`, or `None` if the position is off screen.
    fn read_cell(&self, row: usize, col: usize) -> Option<ScreenChar>;
}

impl TextBuffer for Buffer {
    fn write_cell(&mut self, row: usize, col: usize, cell: ScreenChar) {
        if let Some(slot) = self.chars.get_mut(row).and_then(|line| line.get_mut(col)) {
            slot.write(cell);
        }
    }

    fn read_cell(&self, row: usize, col: usize) -> Option<ScreenChar> {
        self.chars
            .get(row)
            .and_then(|line| line.get(col))
            .map(|slot| slot.read())
    }
}

impl<B: TextBuffer + ?Sized> TextBuffer for &mut B {
    #[inline]
    fn write_cell(&mut self, row: usize, col: usize, cell: ScreenChar) {
        (**self).write_cell(row, col, cell)
    }

    #[inline]
    fn read_cell(&self, row: usize, col: usize) -> Option<ScreenChar> {
        (**self).read_cell(row, col)
    }
}
