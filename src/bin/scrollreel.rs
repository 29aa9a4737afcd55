use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::prelude::*;

use scrollreel::{
    DeviceProfile, HostCapabilities, MemoryMedia, Progress, RangeTable, Timeline,
    TimelineOrchestrator,
};

#[derive(Parser, Debug)]
#[command(name = "scrollreel", version)]
struct Cli {
    /// Log lifecycle events to stderr (overridden by `RUST_LOG`).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate a range table JSON.
    Validate(ValidateArgs),
    /// Print a built-in range table as JSON.
    Table(TableArgs),
    /// Print the writes for one progress value as JSON.
    Sample(SampleArgs),
    /// Drive a synthetic session and print one JSON line per frame.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input range table JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct TableArgs {
    /// Built-in profile.
    #[arg(long, value_enum, default_value_t = ProfileChoice::Desktop)]
    profile: ProfileChoice,
}

#[derive(Args, Debug)]
struct TableSource {
    /// Built-in profile.
    #[arg(long, value_enum, default_value_t = ProfileChoice::Desktop)]
    profile: ProfileChoice,

    /// Range table JSON; takes precedence over `--profile`.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    source: TableSource,

    /// Scroll progress in [0, 1].
    #[arg(long)]
    progress: f64,

    /// Clip durations in seconds, in segment order. A single value applies to every segment.
    #[arg(long = "duration")]
    durations: Vec<f64>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    source: TableSource,

    /// Wheel deltas in pixels; the i-th delta is fed on frame i.
    #[arg(long = "wheel", allow_negative_numbers = true)]
    wheel: Vec<f64>,

    /// Number of frames to run.
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// Frame rate of the synthetic clock.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 900.0)]
    viewport: f64,

    /// Clip durations in seconds, in segment order. A single value applies to every segment.
    #[arg(long = "duration", default_values_t = [10.0])]
    durations: Vec<f64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProfileChoice {
    Desktop,
    Constrained,
}

impl From<ProfileChoice> for DeviceProfile {
    fn from(value: ProfileChoice) -> Self {
        match value {
            ProfileChoice::Desktop => DeviceProfile::Desktop,
            ProfileChoice::Constrained => DeviceProfile::Constrained,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Table(args) => cmd_table(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "scrollreel=debug" } else { "warn" };
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default.into());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load_table(source: &TableSource) -> anyhow::Result<RangeTable> {
    match &source.in_path {
        Some(path) => RangeTable::from_path(path)
            .with_context(|| format!("load range table '{}'", path.display())),
        None => Ok(RangeTable::for_profile(source.profile.into())),
    }
}

fn expand_durations(durations: &[f64], segments: usize) -> anyhow::Result<Vec<Option<f64>>> {
    if let Some(bad) = durations.iter().find(|d| !d.is_finite() || **d <= 0.0) {
        anyhow::bail!("--duration must be finite and > 0, got {bad}");
    }
    match durations {
        [] => Ok(vec![None; segments]),
        [d] => Ok(vec![Some(*d); segments]),
        ds if ds.len() == segments => Ok(ds.iter().copied().map(Some).collect()),
        ds => anyhow::bail!(
            "expected 1 or {segments} --duration values, got {}",
            ds.len()
        ),
    }
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let table = RangeTable::from_path(&args.in_path)?;
    table.validate()?;
    eprintln!("ok {}", args.in_path.display());
    Ok(())
}

fn cmd_table(args: TableArgs) -> anyhow::Result<()> {
    let table = RangeTable::for_profile(args.profile.into());
    println!("{}", table.to_json_pretty()?);
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&args.progress) {
        anyhow::bail!("--progress must be in [0, 1], got {}", args.progress);
    }
    let table = load_table(&args.source)?;
    let timeline = Timeline::new(&table)?;
    let durations = expand_durations(&args.durations, timeline.segments().len())?;
    let writes = timeline.evaluate(Progress::new(args.progress), &durations);
    println!("{}", serde_json::to_string_pretty(&writes)?);
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    if !args.fps.is_finite() || args.fps <= 0.0 {
        anyhow::bail!("--fps must be finite and > 0, got {}", args.fps);
    }
    let table = load_table(&args.source)?;
    let mut orch: TimelineOrchestrator<MemoryMedia> =
        TimelineOrchestrator::new(&table, HostCapabilities::default(), args.viewport)?;
    let durations = expand_durations(&args.durations, orch.timeline().segments().len())?;
    let handles: Vec<(String, MemoryMedia)> = orch
        .timeline()
        .segments()
        .iter()
        .zip(durations)
        .map(|(seg, d)| {
            let media = d.map_or_else(MemoryMedia::pending, MemoryMedia::loaded);
            (seg.id.clone(), media)
        })
        .collect();
    let report = orch.mount(handles)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for i in 0..args.frames {
        let now = f64::from(i) / args.fps;
        if let Some(delta) = args.wheel.get(i as usize) {
            orch.on_wheel(*delta, now);
        }
        if let Some(writes) = orch.frame(report.frame, now) {
            serde_json::to_writer(&mut out, writes).context("write frame JSON")?;
            writeln!(out).context("write frame JSON")?;
        }
    }
    orch.teardown();
    Ok(())
}
