//! festival — cup circulation at a small festival.
//!
//! Runs the default scenario (8 visitors, two stands, 10×10 torus, 200
//! steps) or the one described by the TOML file named in
//! `FESTIVAL_CONFIG`.  Fields missing from the file keep their defaults:
//!
//! ```toml
//! visitors = 30
//! stands = [{ x = 0, y = 6 }, { x = 9, y = 4 }]
//! collection_awareness = 0.3
//! initial_litter = 10
//! reluctance = { mean = 1.5, sd = 0.5 }
//! ```
//!
//! CSV output goes to `output/festival`; the final grid is printed.

use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fc_core::{FestivalConfig, GridPos, Tick};
use fc_output::{CsvWriter, OutputWriter, SnapshotObserver};
use fc_sim::{CellCondition, FestivalBuilder, FestivalObserver, Snapshot, StepSummary};

const CONFIG_ENV: &str = "FESTIVAL_CONFIG";
const OUTPUT_DIR: &str = "output/festival";

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SnapshotObserver<W>,
    summary_rows:  usize,
    snapshot_rows: usize,
    peak_litter:   u64,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SnapshotObserver<W>) -> Self {
        Self { inner, summary_rows: 0, snapshot_rows: 0, peak_litter: 0 }
    }
}

impl<W: OutputWriter> FestivalObserver for CountingObserver<W> {
    fn on_step_end(&mut self, tick: Tick, summary: &StepSummary) {
        self.summary_rows += 1;
        self.peak_litter = self.peak_litter.max(summary.cups_on_floor);
        self.inner.on_step_end(tick, summary);
    }

    fn on_snapshot(&mut self, tick: Tick, snapshot: &Snapshot) {
        self.snapshot_rows += snapshot.visitors.len() + snapshot.stands.len() + snapshot.floor_cups.len();
        self.inner.on_snapshot(tick, snapshot);
    }

    fn on_run_end(&mut self, final_tick: Tick, snapshot: &Snapshot) {
        self.inner.on_run_end(final_tick, snapshot);
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config() -> Result<FestivalConfig> {
    let Some(path) = std::env::var_os(CONFIG_ENV) else {
        return Ok(FestivalConfig::default());
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", Path::new(&path).display()))?;
    let config: FestivalConfig = toml::from_str(&text)
        .with_context(|| format!("parsing {}", Path::new(&path).display()))?;
    Ok(config)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_target(false)
        .init();
}

// ── Grid rendering ────────────────────────────────────────────────────────────

/// One character per cell, top row first:
/// `S` stand, `V` visitor with cup, `o` visitor without cup, `x` litter.
fn render(snapshot: &Snapshot) -> String {
    let litter: HashSet<GridPos> = snapshot.floor_cups.iter().map(|c| c.pos).collect();
    let mut out = String::with_capacity((snapshot.width as usize + 1) * snapshot.height as usize);
    for y in (0..snapshot.height).rev() {
        for x in 0..snapshot.width {
            let pos = GridPos::new(x, y);
            out.push(match snapshot.cell(pos) {
                CellCondition::Stand             => 'S',
                CellCondition::VisitorWithCup    => 'V',
                CellCondition::VisitorWithoutCup => 'o',
                CellCondition::Empty if litter.contains(&pos) => 'x',
                CellCondition::Empty             => '.',
            });
        }
        out.push('\n');
    }
    out
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = load_config()?;
    init_tracing(config.verbose);

    println!("=== festival — cup circulation ===");
    println!(
        "Visitors: {}  |  Stands: {}  |  Grid: {}x{} {}  |  Steps: {}  |  Seed: {}",
        config.visitors,
        config.stands.len(),
        config.width,
        config.height,
        config.boundary,
        config.total_steps,
        config.seed,
    );
    println!();

    let mut festival = FestivalBuilder::new(config.clone()).build()?;

    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SnapshotObserver::new(writer, &config));

    let t0 = Instant::now();
    festival.run(&mut obs)?;
    let elapsed = t0.elapsed();
    info!(elapsed_ms = elapsed.as_millis() as u64, "run complete");

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }
    festival.verify_ledger()?;

    let report = festival.report();
    println!("Simulation complete in {:.3} s at {}", elapsed.as_secs_f64(), report.clock);
    println!("  step_summaries.csv  : {} rows", obs.summary_rows);
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!();

    print!("{}", render(&report));
    println!("legend: S stand  V visitor with cup  o visitor without cup  x litter");
    println!();

    let tally = festival.tally();
    println!("{:<18} {:>8}", "Counter", "Value");
    println!("{}", "-".repeat(27));
    for (label, value) in [
        ("drinks sold", report.drinks_sold),
        ("cups minted", report.cups_minted),
        ("cups returned", report.cups_returned),
        ("total reuses", report.total_reuses),
        ("cups dropped", report.cups_dropped),
        ("cups collected", report.cups_collected),
        ("cups on floor", report.cups_on_floor),
        ("peak on floor", obs.peak_litter),
        ("cups carried", tally.carried),
        ("cups at stands", tally.in_inventory),
    ] {
        println!("{label:<18} {value:>8}");
    }

    Ok(())
}
