use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use env_logger::{Env, Target};
use ratatui::{backend::CrosstermBackend, Terminal};
use twenty48::config::AppConfig;
use twenty48::game::{BoardEngine, Session};
use twenty48::ui::App;

/// Play 2048 in the terminal.
#[derive(Parser)]
#[command(name = "twenty48", about = "Play 2048 in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "twenty48.toml")]
    config: PathBuf,

    /// Override number of grid rows
    #[arg(long)]
    height: Option<usize>,

    /// Override number of grid columns
    #[arg(long)]
    width: Option<usize>,

    /// Override the tile value that wins the game
    #[arg(long)]
    win_target: Option<u32>,

    /// Seed the tile spawner for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Draw tiles without colours
    #[arg(long)]
    no_color: bool,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,

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

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        env_logger::Builder::from_env(Env::default().default_filter_or("info"))
            .target(Target::Pipe(Box::new(file)))
            .init();
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(win_target) = cli.win_target {
        config.board.win_target = win_target;
    }
    if cli.no_color {
        config.ui.colors = false;
    }
    config.validate().context("validating configuration")?;

    let engine = match cli.seed {
        Some(seed) => BoardEngine::with_seed(&config.board, seed),
        None => BoardEngine::new(&config.board),
    };
    let mut app = App::new(Session::new(engine), &config.ui);

    run(&mut app).context("running terminal UI")?;

    let engine = app.session().engine();
    println!(
        "Final score: {}  High score: {}",
        engine.score(),
        engine.high_score().max(engine.score())
    );
    Ok(())
}

fn run(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
