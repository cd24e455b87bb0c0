use core::fmt;

use super::buffer::{ScreenChar, TextBuffer, BUFFER_HEIGHT, BUFFER_WIDTH};
use super::color::ColorCode;

/// What to do once the cursor runs past the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Jump back to the top left cell and keep writing over the old content.
    #[default]
    Overwrite,
    /// Move every row up by one and continue on a blank last row.
    Scroll,
}

/// Tracks the cursor and the current color over a text grid.
///
/// The writer never fails. Every byte is accepted and the cursor is always
/// inside the grid once a method returns.
pub struct Writer<B: TextBuffer> {
    column_position: usize,
    row_position: usize,
    color_code: ColorCode,
    wrap_mode: WrapMode,
    buffer: B,
}

impl<B: TextBuffer> Writer<B> {
    /// Creates a writer over `buffer` with the cursor in the top left corner.
    ///
    /// The buffer is not touched until [`Writer::initialize`] is called.
    #[inline]
    pub fn new(buffer: B) -> Self {
        Self::with_wrap_mode(buffer, WrapMode::Overwrite)
    }

    #[inline]
    pub fn with_wrap_mode(buffer: B, wrap_mode: WrapMode) -> Self {
        Self {
            column_position: 0,
            row_position: 0,
            color_code: ColorCode::DEFAULT,
            wrap_mode,
            buffer,
        }
    }

    /// Resets the color to the default, homes the cursor and blanks every cell.
    pub fn initialize(&mut self) {
        self.color_code = ColorCode::DEFAULT;
        self.clear_screen();
    }

    /// Blanks every cell with the current color and homes the cursor.
    pub fn clear_screen(&mut self) {
        for row in 0..BUFFER_HEIGHT {
            self.clear_row(row);
        }

        self.column_position = 0;
        self.row_position = 0;
    }

    pub fn put_char(&mut self, byte: u8) {
        match byte {
            b'\n' => self.new_line(),

            byte => {
                let cell = ScreenChar::new(byte, self.color_code);

                self.write_cell(self.row_position, self.column_position, cell);
                self.column_position += 1;

                if self.column_position >= BUFFER_WIDTH {
                    self.new_line();
                }
            }
        }

        if self.row_position >= BUFFER_HEIGHT {
            match self.wrap_mode {
                WrapMode::Overwrite => {
                    self.column_position = 0;
                    self.row_position = 0;
                }

                WrapMode::Scroll => self.scroll_up(),
            }
        }
    }

    /// Writes `bytes` up to, but not including, the first NUL byte.
    pub fn print(&mut self, bytes: &[u8]) {
        for &byte in bytes.iter().take_while(|&&byte| byte != b'\0') {
            self.put_char(byte);
        }
    }

    /// Writes every byte of `string`. Bytes outside of ASCII show up as the
    /// code page 437 glyph with the same number.
    pub fn write_string(&mut self, string: &str) {
        for byte in string.bytes() {
            self.put_char(byte);
        }
    }

    /// Moves every row up by one and blanks the last row. The cursor follows
    /// the text and is left on the last row.
    pub fn scroll_up(&mut self) {
        for row in 1..BUFFER_HEIGHT {
            for col in 0..BUFFER_WIDTH {
                if let Some(cell) = self.buffer.read_cell(row, col) {
                    self.write_cell(row - 1, col, cell);
                }
            }
        }

        self.clear_row(BUFFER_HEIGHT - 1);
        self.row_position = self.row_position.saturating_sub(1).min(BUFFER_HEIGHT - 1);
    }

    #[inline]
    pub fn set_color(&mut self, color_code: ColorCode) {
        self.color_code = color_code;
    }

    #[inline]
    pub fn color(&self) -> ColorCode {
        self.color_code
    }

    #[inline]
    pub fn set_wrap_mode(&mut self, wrap_mode: WrapMode) {
        self.wrap_mode = wrap_mode;
    }

    #[inline]
    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap_mode
    }

    /// Returns the cursor as `(column, row)`.
    #[inline]
    pub fn cursor(&self) -> (usize, usize) {
        (self.column_position, self.row_position)
    }

    #[inline]
    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    fn new_line(&mut self) {
        self.column_position = 0;
        self.row_position += 1;
    }

    fn clear_row(&mut self, row: usize) {
        let blank = ScreenChar::blank(self.color_code);

        for col in 0..BUFFER_WIDTH {
            self.write_cell(row, col, blank);
        }
    }

    fn write_cell(&mut self, row: usize, col: usize, cell: ScreenChar) {
        if row < BUFFER_HEIGHT && col < BUFFER_WIDTH {
            self.buffer.write_cell(row, col, cell);
        }
    }
}

impl<B: TextBuffer> fmt::Write for Writer<B> {
    fn write_str(&mut self, string: &str) -> fmt::Result {
        self.write_string(string);

        Ok(())
    }
}
