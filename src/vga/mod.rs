//! The VGA text mode console.
//!
//! A single [`Writer`] over the memory at [`VGA_BUFFER_ADDRESS`] is shared by the
//! whole kernel through [`WRITER`]. Use the [`print!`](crate::print) and
//! [`println!`](crate::println) macros rather than locking it by hand.

use core::fmt;

use lazy_static::lazy_static;
use spin::Mutex;

pub mod buffer;
pub mod color;
pub mod cursor;
pub mod writer;

use buffer::{Buffer, VGA_BUFFER_ADDRESS};
use writer::{WrapMode, Writer};

lazy_static! {
    /// The console writer for the hardware text buffer.
    pub static ref WRITER: Mutex<Writer<&'static mut Buffer>> =
        Mutex::new(Writer::new(unsafe { Buffer::from_raw(VGA_BUFFER_ADDRESS) }));
}

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ($crate::vga::_print(format_args!($($arg)*)));
}

#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($($arg:tt)*) => ($crate::print!("{}\n", format_args!($($arg)*)));
}

/// Runs `f` with the console locked, then moves the hardware cursor to where
/// the writer left off.
///
/// Interrupts stay masked while the lock is held so that a handler printing to
/// the console cannot deadlock against the code it interrupted.
pub fn with_writer<R>(f: impl FnOnce(&mut Writer<&'static mut Buffer>) -> R) -> R {
    without_interrupts(|| {
        let mut writer = WRITER.lock();
        let result = f(&mut writer);

        let (col, row) = writer.cursor();
        cursor::update(col, row);

        result
    })
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    use core::fmt::Write;

    with_writer(|writer| {
        // Writing to the screen itself never fails.
        let _ = writer.write_fmt(args);
    });
}

/// Clears the screen with the default colors and turns on the hardware cursor.
pub fn init() {
    with_writer(|writer| writer.initialize());
    cursor::enable();
}

/// Chooses what happens when the console runs past the last row.
pub fn set_wrap_mode(wrap_mode: WrapMode) {
    with_writer(|writer| writer.set_wrap_mode(wrap_mode));
}

#[cfg(target_arch = "x86_64")]
#[inline]
fn without_interrupts<R>(f: impl FnOnce() -> R) -> R {
    x86_64::instructions::interrupts::without_interrupts(f)
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn without_interrupts<R>(f: impl FnOnce() -> R) -> R {
    f()
}
