use std::io;

use log::LevelFilter;

use cpu_schedule::config::{Command, OutputFormat, Verbosity, USAGE};
use cpu_schedule::{input, report, scheduler, validation, Error, Result};

mod logger;

fn main() {
    start().unwrap_or_else(|error| fail(error));
}

fn start() -> Result<()> {
    let (path, config, verbosity) = match Command::parse(std::env::args())? {
        Command::Help => help(),
        Command::Run {
            path,
            config,
            verbosity,
        } => (path, config, verbosity),
    };

    logger::Terminal::install(match verbosity {
        Verbosity::Quiet => LevelFilter::Warn,
        Verbosity::Verbose => LevelFilter::Info,
        Verbosity::Debug => LevelFilter::Debug,
    });

    let processes = input::open(&path)?;
    validation::validate_batch(&processes)?;
    log::info!(target: "cpu-schedule", "Scheduling {} processes", processes.len());

    let reports = scheduler::run_all(&processes, &config);

    let stdout = io::stdout();
    let mut output = stdout.lock();
    let rendered = match config.format {
        OutputFormat::Text => report::render_text(&mut output, &reports),
        OutputFormat::Json => report::render_json(&mut output, &reports),
    };
    rendered.map_err(Error::output)?;

    log::info!(target: "cpu-schedule", "Well done.");
    Ok(())
}

fn help() -> ! {
    println!("{}", USAGE.trim());
    std::process::exit(0);
}

#[allow(unused_must_use)]
fn fail(error: Error) -> ! {
    use std::io::Write;
    match term::stderr() {
        Some(mut output) => {
            output.fg(term::color::RED);
            writeln!(output, "Error: {}.", error);
            output.reset();
        }
        None => eprintln!("Error: {}.", error),
    }
    std::process::exit(1);
}
