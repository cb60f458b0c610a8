//! sortviz Entry Point
//!
//! Launches the terminal sorting visualizer.
//!
//! # Usage
//!
//! ```bash
//! # Defaults (or values from ~/.config/sortviz/sortviz.toml)
//! sortviz
//!
//! # Heap sort, descending, 80 bars, 20ms per step
//! sortviz --algorithm heap --order desc --bars 80 --interval-ms 20
//!
//! # With logging (written to stderr)
//! RUST_LOG=sorter_core=debug sortviz 2> sortviz.log
//! ```

use std::io::{self, IsTerminal};
use std::panic;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sorter_core::config::{default_config_path, load_config_from_path};
use sorter_core::{AlgorithmKind, ConfigOverrides, DatasetShape, SortOrder};
use sortviz_tui::{App, Status};

/// sortviz - Watch sorting algorithms work, one step at a time
#[derive(Parser, Debug)]
#[command(name = "sortviz")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Algorithm: bubble, insertion, selection, merge, quick, heap
    #[arg(short = 'a', long, value_name = "NAME")]
    algorithm: Option<AlgorithmKind>,

    /// Order: ascending (asc) or descending (desc)
    #[arg(short = 'o', long, value_name = "ORDER")]
    order: Option<SortOrder>,

    /// Number of bars
    #[arg(short = 'n', long, value_name = "COUNT")]
    bars: Option<usize>,

    /// Pause between steps in milliseconds
    #[arg(short = 'i', long, value_name = "MS")]
    interval_ms: Option<u64>,

    /// Dataset shape: random, sorted, reversed, nearly-sorted
    #[arg(short = 's', long, value_name = "SHAPE")]
    shape: Option<DatasetShape>,

    /// Seed for reproducible datasets
    #[arg(long)]
    seed: Option<u64>,

    /// Configuration file path
    #[arg(short = 'c', long, env = "SORTVIZ_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            algorithm: self.algorithm,
            order: self.order,
            bars: self.bars,
            step_interval_ms: self.interval_ms,
            shape: self.shape,
            seed: self.seed,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never land on the alternate screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = load_config_from_path(args.config.clone().or_else(default_config_path))?;
    args.overrides().apply(&mut config);
    config.validate()?;
    tracing::info!(source = %config.source(), "Configuration resolved");

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: sortviz requires a terminal (TTY)");
        eprintln!();
        eprintln!("This usually means stdin or stdout is piped, or SSH ran without -t.");
        std::process::exit(1);
    }

    let app = App::new(config)?;

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(app, &mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let app = result?;
    if let Status::Sorted { algorithm, steps } = app.status() {
        println!("Last run: {} finished in {} steps", algorithm.label(), steps);
    }

    Ok(())
}

async fn run_app(
    mut app: App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> anyhow::Result<App> {
    app.run(terminal).await?;
    Ok(app)
}
