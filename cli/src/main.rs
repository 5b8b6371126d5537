use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::debug;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use taskline_core::{Console, Session, Storage};

#[derive(Parser)]
#[command(name = "taskline")]
#[command(about = "A line-oriented personal task tracker", long_about = None)]
struct Cli {
    /// Directory holding the task file (defaults to ~/.taskline)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }

    fn write_lines(&mut self, lines: &[String]) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        for line in lines {
            let _ = writeln!(handle, "{line}");
        }
        let _ = handle.flush();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let storage = Storage::new(cli.data_dir)?;
    debug!("using task file {}", storage.path().display());
    let mut session = Session::new(storage, StdConsole);
    session.run();
    Ok(())
}
