//! A `log` backend that prints records on the VGA console.
//!
//! Every record is rendered as `[ LEVEL ] message` with the level tag colored
//! after its severity.

use core::fmt::Write;

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

use crate::vga::{self, buffer::TextBuffer, color::*, writer::Writer};

pub static LOGGER: ConsoleLogger = ConsoleLogger;

pub struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            vga::with_writer(|writer| render(writer, record));
        }
    }

    fn flush(&self) {}
}

const BRACKET_COLOR: ColorCode = ColorCode::new(Color::White, Color::Black);

fn level_color(level: Level) -> ColorCode {
    let foreground = match level {
        Level::Error => Color::LightRed,
        Level::Warn => Color::LightBrown,
        Level::Info => Color::LightGreen,
        Level::Debug => Color::LightCyan,
        Level::Trace => Color::DarkGrey,
    };

    ColorCode::new(foreground, Color::Black)
}

/// Writes `record` as one console line, leaving the writer's color as it was.
pub fn render<B: TextBuffer>(writer: &mut Writer<B>, record: &Record) {
    let color = writer.color();

    writer.set_color(BRACKET_COLOR);
    writer.write_string("[ ");

    writer.set_color(level_color(record.level()));
    let _ = write!(writer, "{:<5}", record.level());

    writer.set_color(BRACKET_COLOR);
    let _ = writeln!(writer, " ] {}", record.args());

    writer.set_color(color);
}

/// Installs the console logger and lets records up to `level` through.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vga::buffer::{ScreenChar, BUFFER_HEIGHT, BUFFER_WIDTH};

    struct Grid([[ScreenChar; BUFFER_WIDTH]; BUFFER_HEIGHT]);

    impl TextBuffer for Grid {
        fn write_cell(&mut self, row: usize, col: usize, cell: ScreenChar) {
            self.0[row][col] = cell;
        }

        fn read_cell(&self, row: usize, col: usize) -> Option<ScreenChar> {
            self.0.get(row).and_then(|line| line.get(col)).copied()
        }
    }

    fn writer() -> Writer<Grid> {
        let mut writer = Writer::new(Grid(
            [[ScreenChar::blank(ColorCode::DEFAULT); BUFFER_WIDTH]; BUFFER_HEIGHT],
        ));
        writer.initialize();
        writer
    }

    fn row_text(writer: &Writer<Grid>, row: usize) -> String {
        let text: String = writer.buffer().0[row]
            .iter()
            .map(|cell| cell.character as char)
            .collect();

        text.trim_end().to_string()
    }

    #[test]
    fn renders_level_tag_and_message() {
        let mut writer = writer();

        render(
            &mut writer,
            &Record::builder()
                .args(format_args!("Loaded console"))
                .level(Level::Info)
                .build(),
        );

        assert_eq!(row_text(&writer, 0), "[ INFO  ] Loaded console");
        assert_eq!(writer.cursor(), (0, 1));
    }

    #[test]
    fn colors_only_the_level_tag() {
        let mut writer = writer();

        render(
            &mut writer,
            &Record::builder()
                .args(format_args!("disk {} missing", 0))
                .level(Level::Error)
                .build(),
        );

        let cells = &writer.buffer().0[0];
        assert_eq!(cells[0].color_code, BRACKET_COLOR);
        assert_eq!(cells[2].character, b'E');
        assert_eq!(cells[2].color_code, level_color(Level::Error));
        assert_eq!(cells[6].color_code, level_color(Level::Error));
        assert_eq!(cells[8].character, b']');
        assert_eq!(cells[8].color_code, BRACKET_COLOR);
    }

    #[test]
    fn restores_the_previous_color() {
        let mut writer = writer();
        let custom = ColorCode::new(Color::Magenta, Color::Cyan);
        writer.set_color(custom);

        render(
            &mut writer,
            &Record::builder()
                .args(format_args!("careful"))
                .level(Level::Warn)
                .build(),
        );

        assert_eq!(writer.color(), custom);
        assert_eq!(row_text(&writer, 0), "[ WARN  ] careful");
    }

    #[test]
    fn levels_have_distinct_colors() {
        let levels = [
            Level::Error,
            Level::Warn,
            Level::Info,
            Level::Debug,
            Level::Trace,
        ];

        for (i, a) in levels.iter().enumerate() {
            for b in &levels[i + 1..] {
                assert_ne!(level_color(*a), level_color(*b));
            }
        }
    }
}
