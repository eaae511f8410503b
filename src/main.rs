//! trazar: interactive terminal function plotter.
//!
//! Plots a single-variable real function (and optionally its derivative) on
//! a character-grid Cartesian plane, with pan, zoom, and live re-entry of
//! the expression.
//!
//! Install: `cargo install trazar`
//! Run: `trazar "sin(x)"`

use trazar::{app, config, ui};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::stdout;

use app::App;
use config::Config;

/// trazar: interactive terminal function plotter
#[derive(Parser, Debug)]
#[command(name = "trazar")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Plot a function and its derivative on a terminal Cartesian plane", long_about = None)]
struct Cli {
    /// Expression to plot, e.g. "sin(x)"
    expression: Option<String>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default_path().map_or_else(Config::default, Config::load_or_default),
    };

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &cli, &config);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    cli: &Cli,
    config: &Config,
) -> Result<()> {
    let size = terminal.size()?;
    let expression = cli.expression.as_deref().unwrap_or(&config.global.expression);
    let mut app = App::new(expression, config, size.width, size.height);

    loop {
        app.apply_pending_resize();

        terminal.draw(|f| ui::draw(f, &mut app))?;

        // Nothing renders without an event, so block indefinitely.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key.code, key.modifiers) {
                    return Ok(());
                }
            }
            Event::Resize(columns, rows) => app.queue_resize(columns, rows),
            _ => {}
        }
    }
}
