use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::prelude::*;

use publicrush::runtime::{RandomSource, SeededRandom, SystemClock};
use publicrush::{events, headless, ui, App, AppConfig, ThemeChoice};

/// How long the TUI waits for input before updating and redrawing.
const TICK_RATE: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "publicrush")]
#[command(about = "Crowd-safety command center dashboard with simulated sensor data")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial view route (/, /monitoring, /alerts, /authorities)
    #[arg(short, long)]
    view: Option<String>,

    /// Seed for the random walk (reproducible runs)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Write logs to this file (RUST_LOG controls the level)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print readings as JSON lines instead of drawing the dashboard
    #[arg(long)]
    headless: bool,

    /// Stop after this many readings (headless only)
    #[arg(long, requires = "headless")]
    ticks: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        init_logging(path)?;
    }

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(ref route) = args.view {
        config.set_start_route(route)?;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(theme) = args.theme {
        config.theme = theme;
    }

    let rng: Box<dyn RandomSource> = match config.seed {
        Some(seed) => {
            info!(seed, "using seeded random walk");
            Box::new(SeededRandom::from_seed(seed))
        }
        None => Box::new(SeededRandom::from_entropy()),
    };

    if args.headless {
        // No terminal to query for a background color
        if config.theme == ThemeChoice::Auto {
            config.theme = ThemeChoice::Dark;
        }
        let app = App::new(config, Box::new(SystemClock::new()), rng);
        return run_headless(app, args.ticks);
    }

    let app = App::new(config, Box::new(SystemClock::new()), rng);
    run_tui(app)
}

/// Install a file-backed subscriber. Logging to the terminal would corrupt
/// the alternate screen.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

/// Run without a terminal, writing readings to stdout until `ticks` is
/// reached or Ctrl-C.
fn run_headless(mut app: App, ticks: Option<u64>) -> Result<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    rt.block_on(async {
        tokio::select! {
            result = headless::run(&mut app, &mut out, ticks, TICK_RATE) => result.map(|_| ()),
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                Ok(())
            }
        }
    })
}

/// Run the interactive dashboard
fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        app.update();
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Some(event) = events::poll_event(TICK_RATE)? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => {
                    events::handle_mouse_event(app, mouse, terminal.size()?);
                }
                // Resize is picked up by the next draw
                _ => {}
            }
        }
    }

    info!("quit");
    Ok(())
}
