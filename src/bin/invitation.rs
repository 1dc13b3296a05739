use std::{
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "invitation", version)]
struct Cli {
    /// Invitation config JSON. Defaults to the built-in wedding page.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every element's target pose for one active panel.
    Targets(TargetsArgs),
    /// Print the time left until the configured countdown target.
    Countdown(CountdownArgs),
    /// Run a page through preload and a tap schedule, printing one JSON frame per step.
    Simulate(SimulateArgs),
    /// Print the effective configuration.
    Config,
}

#[derive(Parser, Debug)]
struct TargetsArgs {
    /// Active panel; out-of-range values are clamped.
    #[arg(long, allow_negative_numbers = true)]
    panel: i64,
}

#[derive(Parser, Debug)]
struct CountdownArgs {
    /// RFC 3339 instant to count from. Defaults to the current time.
    #[arg(long)]
    now: Option<String>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Load URL or query string carrying the guest `name`.
    #[arg(long, default_value = "")]
    query: String,

    /// Decode declared images under this root. Without it every image counts as loaded.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Virtual milliseconds per step.
    #[arg(long, default_value_t = 250)]
    step_ms: u64,

    /// Number of steps after preload.
    #[arg(long, default_value_t = 40)]
    steps: u32,

    /// Tap the active panel every N steps (0 disables taps).
    #[arg(long, default_value_t = 0)]
    tap_every: u32,

    /// RFC 3339 load instant. Defaults to the current time.
    #[arg(long)]
    now: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Targets(args) => cmd_targets(&config, args),
        Command::Countdown(args) => cmd_countdown(&config, args),
        Command::Simulate(args) => cmd_simulate(config, args),
        Command::Config => cmd_config(&config),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<invitation::InvitationConfig> {
    match path {
        Some(path) => invitation::InvitationConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display())),
        None => Ok(invitation::InvitationConfig::default()),
    }
}

fn parse_instant(raw: Option<&str>) -> anyhow::Result<OffsetDateTime> {
    match raw {
        Some(raw) => OffsetDateTime::parse(raw, &Rfc3339)
            .with_context(|| format!("parse RFC 3339 instant '{raw}'")),
        None => Ok(OffsetDateTime::now_utc()),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}

fn cmd_targets(config: &invitation::InvitationConfig, args: TargetsArgs) -> anyhow::Result<()> {
    let panel = invitation::PanelIndex::clamped(args.panel, config.panel_count());
    print_json(&config.elements.compute_targets(panel))
}

fn cmd_countdown(config: &invitation::InvitationConfig, args: CountdownArgs) -> anyhow::Result<()> {
    let countdown = config
        .countdown
        .as_ref()
        .context("config has no countdown")?;
    let now = parse_instant(args.now.as_deref())?;
    print_json(&invitation::compute_remaining(countdown.target, now))
}

fn cmd_config(config: &invitation::InvitationConfig) -> anyhow::Result<()> {
    println!("{}", config.to_json_pretty()?);
    Ok(())
}

fn cmd_simulate(config: invitation::InvitationConfig, args: SimulateArgs) -> anyhow::Result<()> {
    let guest = invitation::GuestName::from_query(&args.query);
    let load_instant = parse_instant(args.now.as_deref())?;
    let mut page = invitation::Page::new(
        config,
        guest,
        load_instant,
        invitation::RecordingSurface::default(),
    )?;

    let pending = page.begin_preload();
    match &args.assets {
        Some(root) => {
            let loader = invitation::FsImageLoader::new(root);
            page.preload_with(&loader);
        }
        None => {
            for path in &pending {
                page.asset_loaded(path)?;
            }
        }
    }
    if let invitation::PagePhase::Failed(failure) = page.phase() {
        return Err(invitation::InvitationError::from(failure.clone()).into());
    }

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_frame(&mut out, &page.frame())?;
    for step in 1..=args.steps {
        page.advance_by(args.step_ms);
        if args.tap_every > 0 && step % args.tap_every == 0 {
            page.tap()?;
        }
        write_frame(&mut out, &page.frame())?;
    }
    page.teardown();
    out.flush().context("flush stdout")?;

    tracing::info!(
        active = %page.active(),
        elapsed = %page.now(),
        scrolls = page.surface().scrolls.len(),
        "simulation finished"
    );
    Ok(())
}

fn write_frame(out: &mut impl std::io::Write, frame: &invitation::PageFrame) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, frame).context("serialize frame")?;
    writeln!(out).context("write frame")?;
    Ok(())
}
