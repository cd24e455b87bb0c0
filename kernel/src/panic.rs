use core::panic::PanicInfo;

use textmode::vga::{self, WRITER};
use textmode::{println, Color, ColorCode};

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    x86_64::instructions::interrupts::disable();

    // The panic may have happened while the console was locked.
    unsafe { WRITER.force_unlock() };

    vga::with_writer(|writer| {
        writer.set_color(ColorCode::new(Color::White, Color::Blue));
        writer.clear_screen();
    });

    println!(":(\n\n\n\n{}", info);

    crate::halt_loop()
}
