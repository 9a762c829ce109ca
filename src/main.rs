//! Tetris Stack console runner (default binary).
//!
//! Prints the current queue and reserve stack, shows the option menu, reads one
//! integer option per line from stdin and runs the matching action. Option `0`
//! (or end of input) quits.
//!
//! Logging goes to stderr and is controlled only by `--debug` / `--verbose`.

use std::io::{self, IsTerminal};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tetris_stack::core::{Session, SessionConfig};
use tetris_stack::input::{MenuCommand, OptionInput, OptionReader};
use tetris_stack::term::{Console, StateView};
use tetris_stack::types::{DEFAULT_QUEUE_CAPACITY, DEFAULT_STACK_CAPACITY};

/// Tetris Stack - upcoming-piece queue and reserve stack manager
#[derive(Parser, Debug)]
#[command(name = "tetris-stack")]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of slots in the upcoming-piece queue
    #[arg(long, default_value_t = DEFAULT_QUEUE_CAPACITY)]
    queue_capacity: usize,

    /// Number of slots in the reserve stack
    #[arg(long, default_value_t = DEFAULT_STACK_CAPACITY)]
    stack_capacity: usize,

    /// RNG seed (defaults to a time-derived value)
    #[arg(long)]
    seed: Option<u32>,

    /// Disable coloured output (implied when stdout is not a terminal)
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        SessionConfig::new(
            self.queue_capacity,
            self.stack_capacity,
            self.seed.unwrap_or_else(time_seed),
        )
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn init_logging(args: &Args) {
    let filter = if args.debug {
        EnvFilter::new("debug")
    } else if args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let config = args.session_config();
    config.validate().context("invalid session configuration")?;
    info!(seed = config.seed, "configuration resolved");

    let stdout = io::stdout();
    let color = !args.no_color && stdout.is_terminal();
    let mut console = Console::new(stdout.lock(), color);
    let mut reader = OptionReader::new(io::stdin().lock());

    run(config, &mut console, &mut reader)
}

fn run<W, R>(
    config: SessionConfig,
    console: &mut Console<W>,
    reader: &mut OptionReader<R>,
) -> Result<()>
where
    W: io::Write,
    R: io::BufRead,
{
    let view = StateView::default();
    let mut session = Session::new(config);

    let initial = session.start();
    console.print(&view.banner_lines(session.config(), &initial))?;

    loop {
        console.print(&view.state_lines(session.queue(), session.stack()))?;
        console.print(&view.menu_lines())?;
        console.prompt("Chosen option: ")?;

        let input = reader.next_input().context("failed to read option")?;
        match input {
            None | Some(OptionInput::Command(MenuCommand::Quit)) => break,
            Some(OptionInput::Command(MenuCommand::Action(action))) => {
                match session.apply(action) {
                    Ok(outcome) => console.print(&view.outcome_lines(&outcome))?,
                    Err(err) => console.print(&view.error_lines(action, &err))?,
                }
            }
            Some(OptionInput::Invalid(_)) => console.print(&view.invalid_option_lines())?,
        }
    }

    console.print(&view.farewell_lines())?;
    info!(next_id = session.next_id(), "session finished");
    Ok(())
}
