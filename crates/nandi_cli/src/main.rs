//! Nandi CLI
//!
//! Drive the Nandighosh Bus page headlessly: take snapshots at a point in
//! time, replay scripted sessions, or watch the page play out in real time.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use nandi_app::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod script;

use script::Script;

#[derive(Parser)]
#[command(name = "nandi")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Nandighosh Bus site runtime", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Site configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the page as it looks at a given time
    Snapshot {
        /// Clock time in milliseconds after mount (at most one day)
        #[arg(long, default_value = "0", value_parser = clap::value_parser!(u64).range(..=MAX_AT_MS))]
        at: u64,

        /// Scroll offset in pixels
        #[arg(long, default_value = "0")]
        scroll: f32,

        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Replay a TOML script of timed events
    Script {
        /// Script file
        file: PathBuf,

        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Run the page against the wall clock, printing every change
    Play {
        /// How long to run, in page milliseconds
        #[arg(short, long, default_value = "10000")]
        duration: u64,

        /// Clock speed multiplier
        #[arg(short, long, default_value = "1.0")]
        speed: f64,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Latest snapshot time; repeating timers fire once per period up to it
const MAX_AT_MS: u64 = 24 * 60 * 60 * 1000;

/// Frame interval for real-time playback
const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so snapshots on stdout stay clean
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Snapshot { at, scroll, format } => cmd_snapshot(&config, at, scroll, format),
        Commands::Script { file, format } => cmd_script(&config, &file, format),
        Commands::Play { duration, speed } => cmd_play(&config, duration, speed),
        Commands::Config => cmd_config(&config),
    }
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => {
            debug!("no config given, using defaults");
            Ok(SiteConfig::default())
        }
    }
}

fn mounted_page(config: &SiteConfig) -> Result<(TimerScheduler, Page)> {
    let scheduler = TimerScheduler::new();
    let mut page = Page::new(config).context("Failed to build page")?;
    page.mount(&scheduler.handle());
    Ok((scheduler, page))
}

fn print_snapshot(snapshot: &PageSnapshot, format: Format) -> Result<()> {
    match format {
        Format::Text => println!("{}\n", render_text(snapshot)),
        Format::Json => println!(
            "{}",
            snapshot.to_json().context("Failed to serialize snapshot")?
        ),
    }
    Ok(())
}

fn cmd_snapshot(config: &SiteConfig, at: u64, scroll: f32, format: Format) -> Result<()> {
    let (scheduler, mut page) = mounted_page(config)?;

    page.dispatch(PageEvent::Scroll {
        offset: scroll,
        viewport_height: None,
    })?;
    let fired = page.advance_to(&scheduler, at);
    debug!(at, fired, "advanced");

    print_snapshot(&page.snapshot(), format)
}

fn cmd_script(config: &SiteConfig, file: &Path, format: Format) -> Result<()> {
    let script = Script::load(file)?;
    let (scheduler, mut page) = mounted_page(config)?;
    info!(steps = script.steps.len(), "running script");

    let last = script.run(&mut page, &scheduler, |index, snapshot| {
        if let Format::Text = format {
            println!("# step {index} @ {}ms", snapshot.now_ms);
        }
        print_snapshot(snapshot, format)
    })?;

    if let Format::Text = format {
        println!("# final @ {}ms", last.now_ms);
    }
    print_snapshot(&last, format)?;

    page.unmount();
    Ok(())
}

fn cmd_play(config: &SiteConfig, duration: u64, speed: f64) -> Result<()> {
    if !(speed.is_finite() && speed > 0.0) {
        anyhow::bail!("Invalid speed {speed}: must be a positive number");
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start runtime")?;

    runtime.block_on(play(config, duration, speed))
}

async fn play(config: &SiteConfig, duration: u64, speed: f64) -> Result<()> {
    let (scheduler, mut page) = mounted_page(config)?;
    let started = tokio::time::Instant::now();
    let mut frames = tokio::time::interval(FRAME);
    let mut shown: Option<PageSnapshot> = None;

    info!(duration, speed, "playing");
    loop {
        frames.tick().await;

        let elapsed = started.elapsed().as_secs_f64() * speed * 1000.0;
        let target = (elapsed as u64).min(duration);
        page.advance_to(&scheduler, target);

        let snapshot = page.snapshot();
        if shown.as_ref().map_or(true, |prev| !prev.same_content(&snapshot)) {
            print_snapshot(&snapshot, Format::Text)?;
            shown = Some(snapshot);
        }

        if target >= duration {
            break;
        }
    }

    page.unmount();
    info!(fired = scheduler.fired_count(), "playback finished");
    Ok(())
}

fn cmd_config(config: &SiteConfig) -> Result<()> {
    let text = config
        .to_toml()
        .context("Failed to serialize configuration")?;
    print!("{text}");
    Ok(())
}
