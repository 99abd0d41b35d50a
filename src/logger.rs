use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Log sink writing `target message` lines to stderr, with the target
/// colored by severity.
pub struct Terminal(pub LevelFilter);

impl Terminal {
    pub fn install(level: LevelFilter) {
        if log::set_boxed_logger(Box::new(Terminal(level))).is_ok() {
            log::set_max_level(level);
        }
    }
}

impl Log for Terminal {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.0
    }

    #[allow(unused_must_use)]
    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match term::stderr() {
            Some(mut output) => {
                if record.level() < Level::Info {
                    output.fg(term::color::RED);
                } else {
                    output.fg(term::color::GREEN);
                }
                write!(output, "{:>12}", record.target());
                output.reset();
                writeln!(output, " {}", record.args());
            }
            None => eprintln!("{:>12} {}", record.target(), record.args()),
        }
    }

    fn flush(&self) {}
}
