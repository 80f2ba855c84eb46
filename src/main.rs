use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use padcalc::calculator::NumberFormat;
use padcalc::config::Config;
use padcalc::keypad::{Key, KeypadSession};

/// Replay calculator key presses and print the display.
///
/// Keys are digits, the decimal separator, `+ - x * /`, `=` and `c` (clear).
/// Without KEYS, each line read from stdin is replayed and the display is
/// printed after it.
#[derive(Parser, Debug)]
#[command(name = "padcalc", version, about)]
struct Args {
    /// Path to the config file (defaults to <config dir>/padcalc/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Key presses to replay, e.g. "12,5+3=" or "10 / 4 ="
    keys: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::load(args.config.as_deref()).context("Failed to load config")?;
    let mut session = KeypadSession::new(config.number_format(), config.error_text.clone());

    let mut stdout = io::stdout().lock();

    if !args.keys.is_empty() {
        for keys in &args.keys {
            replay(&mut session, keys);
        }
        writeln!(stdout, "{}", session.display())?;
        return Ok(());
    }

    replay_lines(&mut session, io::stdin().lock(), &mut stdout)
}

/// Replay each input line and write the display after it.
fn replay_lines<F: NumberFormat>(
    session: &mut KeypadSession<F>,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        replay(session, &line);
        writeln!(output, "{}", session.display())?;
    }

    Ok(())
}

/// Feed every key character of `input` into the session.
fn replay<F: NumberFormat>(session: &mut KeypadSession<F>, input: &str) {
    let separator = session.decimal_separator();
    for c in input.chars().filter(|c| !c.is_whitespace()) {
        match Key::from_char(c, separator) {
            Some(key) => {
                session.press(key);
            }
            None => warn!(key = %c, "ignoring unknown key"),
        }
    }
}
