//! # Textmode
//! A console driver for the x86 VGA text mode buffer.
//!
//! The screen is an 80x25 grid of cells living at physical address `0xB8000`.
//! Every cell holds a code page 437 glyph index and a color attribute. This crate
//! keeps track of a cursor and a color over that grid and turns a byte stream into
//! cell writes.
//!
//! ## Code organization
//! * [`vga::color`] - the 16 color palette and the packed attribute byte.
//! * [`vga::buffer`] - the memory mapped grid and the cell access trait.
//! * [`vga::writer`] - cursor, wrapping and scrolling policy.
//! * [`vga::cursor`] - the blinking hardware cursor.
//! * [`logger`] - a `log` backend printing to the console.
//!
//! **Notes**: <https://wiki.osdev.org/Text_UI>

#![cfg_attr(not(test), no_std)]

pub mod logger;
pub mod vga;

pub use vga::buffer::{Buffer, ScreenChar, TextBuffer, BUFFER_HEIGHT, BUFFER_WIDTH};
pub use vga::color::{Color, ColorCode};
pub use vga::writer::{WrapMode, Writer};
