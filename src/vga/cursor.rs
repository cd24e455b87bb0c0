//! The blinking hardware cursor, driven through the CRT controller.
//!
//! **Notes**: <https://wiki.osdev.org/Text_Mode_Cursor>

use super::buffer::BUFFER_WIDTH;

#[cfg_attr(not(target_arch = "x86_64"), allow(dead_code))]
const CRTC_INDEX_PORT: u16 = 0x3D4;
#[cfg_attr(not(target_arch = "x86_64"), allow(dead_code))]
const CRTC_DATA_PORT: u16 = 0x3D5;

const CURSOR_START: u8 = 0x0A;
const CURSOR_END: u8 = 0x0B;
const CURSOR_LOCATION_HIGH: u8 = 0x0E;
const CURSOR_LOCATION_LOW: u8 = 0x0F;

/// Scanlines covered by the cursor: a two line underline in a 16 line cell.
const SCANLINE_START: u8 = 14;
const SCANLINE_END: u8 = 15;

/// Linear cell index the CRT controller expects for `(col, row)`.
#[inline]
pub const fn position(col: usize, row: usize) -> u16 {
    (row * BUFFER_WIDTH + col) as u16
}

/// Turns the cursor on and sets its shape.
pub fn enable() {
    write_register(CURSOR_START, SCANLINE_START);
    write_register(CURSOR_END, SCANLINE_END);
}

/// Moves the cursor to `(col, row)`.
pub fn update(col: usize, row: usize) {
    let [low, high] = position(col, row).to_le_bytes();

    write_register(CURSOR_LOCATION_LOW, low);
    write_register(CURSOR_LOCATION_HIGH, high);
}

#[cfg(target_arch = "x86_64")]
fn write_register(index: u8, value: u8) {
    use x86_64::instructions::port::Port;

    let mut index_port = Port::<u8>::new(CRTC_INDEX_PORT);
    let mut data_port = Port::<u8>::new(CRTC_DATA_PORT);

    unsafe {
        index_port.write(index);
        data_port.write(value);
    }
}

#[cfg(not(target_arch = "x86_64"))]
fn write_register(_index: u8, _value: u8) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vga::buffer::BUFFER_HEIGHT;

    #[test]
    fn position_is_row_major() {
        assert_eq!(position(0, 0), 0);
        assert_eq!(position(2, 0), 2);
        assert_eq!(position(0, 2), 160);
        assert_eq!(
            position(BUFFER_WIDTH - 1, BUFFER_HEIGHT - 1),
            (BUFFER_WIDTH * BUFFER_HEIGHT - 1) as u16
        );
    }

    #[test]
    fn position_splits_into_register_bytes() {
        let [low, high] = position(79, 24).to_le_bytes();
        assert_eq!((low, high), (0xCF, 0x07));
    }
}
