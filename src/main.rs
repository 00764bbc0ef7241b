use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::error::InputError;
use connect_four::game::{instructions, GameEngine, Outcome};
use connect_four::input::{LineMoveSource, MoveSource};
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Read moves line by line from stdin instead of starting the TUI
    #[arg(long)]
    plain: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if cli.plain {
        init_logging(&config);
        let stdin = io::stdin();
        run_plain(&config, stdin.lock())
    } else {
        run_tui(&config)
    }
}

/// Log to stderr. Only used in plain mode; the TUI owns the terminal.
fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_plain(config: &AppConfig, input: impl BufRead) -> Result<()> {
    let symbols = &config.display;
    let mut source = LineMoveSource::new(input, config.input.one_based);
    let mut game = GameEngine::new();
    let mut stdout = io::stdout();

    println!("{}\n", instructions(symbols));

    while let Some(player) = game.next_player() {
        print!("{}", game.render_with(symbols));
        print!("{player}, which column do you want to drop your token into? ");
        stdout.flush().context("flushing prompt")?;

        let column = match source.next_column() {
            Ok(column) => column,
            Err(InputError::Exhausted) => {
                println!();
                return Ok(());
            }
            Err(InputError::NotANumber(text)) => {
                println!("'{text}' is not a column number, try again.");
                continue;
            }
            Err(err) => return Err(err).context("reading move"),
        };

        if let Err(err) = game.make_move(column) {
            debug!(column, error = %err, "move rejected");
            println!("Move rejected: {err}. Try again.");
        }
    }

    print!("{}", game.render_with(symbols));
    match game.winner() {
        Outcome::Winner(player) => println!("{player} wins!"),
        Outcome::Tie => println!("It's a tie!"),
        Outcome::InProgress => {}
    }
    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    // Create app and run
    let mut app = App::new(config.display);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running terminal UI")
}
