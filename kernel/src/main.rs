//! # Textmode kernel
//! Boots, clears the VGA text console and greets the user.
//!
//! The console driver lives in the `textmode` crate; this binary is only the
//! entry point the bootloader jumps to.

#![no_std]
#![no_main]

use bootloader::{entry_point, BootInfo};
use log::LevelFilter;
use textmode::{logger, println, vga};

mod panic;

#[cfg(feature = "verbose")]
const LOG_LEVEL: LevelFilter = LevelFilter::Trace;
#[cfg(not(feature = "verbose"))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

entry_point!(kernel_main);

fn kernel_main(_boot_info: &'static BootInfo) -> ! {
    vga::init();

    if let Err(err) = logger::init(LOG_LEVEL) {
        println!("logger unavailable: {}", err);
    }

    #[cfg(feature = "scrolling")]
    vga::set_wrap_mode(textmode::WrapMode::Scroll);

    vga::with_writer(|writer| {
        writer.print(b"Hello, World!\n\0");
        writer.print(b"Welcome to the kernel.\n\0");
    });

    log::info!("Initialized console");

    halt_loop()
}

pub(crate) fn halt_loop() -> ! {
    loop {
        x86_64::instructions::hlt();
    }
}
