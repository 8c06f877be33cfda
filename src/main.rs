//! Synchro Path.
//!
//! Liest eine Plan-Datei, baut die Bahn und gibt Soll-Pose und
//! Soll-Geschwindigkeit in festen Zeitschritten aus.
//!
//! Aufruf: `synchro_path <plan.toml> [abtastintervall_s]`

use anyhow::{bail, ensure, Context, Result};
use std::path::PathBuf;
use synchro_path::{MotionOptions, Movement, PlanFile, SplinePath};

/// Standard-Abtastintervall in Sekunden.
const DEFAULT_SAMPLE_INTERVAL: f64 = 0.1;

fn main() -> Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Synchro Path v{} startet...", env!("CARGO_PKG_VERSION"));

        let args = CliArgs::parse(std::env::args().skip(1))?;
        let plan = PlanFile::load(&args.plan_path)?;

        // Optionen aus TOML laden (oder Standardwerte), Plan-Datei hat Vorrang
        let options = match plan.motion {
            Some(motion) => motion,
            None => MotionOptions::load_from_file(&MotionOptions::config_path()),
        };

        let path = plan.build_path(options)?;
        log_summary(&path);
        print_samples(&path, args.sample_interval);
        Ok(())
    }
}

/// Kommandozeilen-Argumente.
struct CliArgs {
    plan_path: PathBuf,
    sample_interval: f64,
}

impl CliArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let Some(plan_path) = args.next() else {
            bail!("Aufruf: synchro_path <plan.toml> [abtastintervall_s]");
        };
        let sample_interval = match args.next() {
            Some(raw) => raw
                .parse::<f64>()
                .with_context(|| format!("Ungültiges Abtastintervall: {}", raw))?,
            None => DEFAULT_SAMPLE_INTERVAL,
        };
        ensure!(
            sample_interval.is_finite() && sample_interval > 0.0,
            "Abtastintervall muss positiv sein, war {}",
            sample_interval
        );
        Ok(Self {
            plan_path: PathBuf::from(plan_path),
            sample_interval,
        })
    }
}

fn log_summary(path: &SplinePath) {
    log::info!(
        "Bahn: {} Wegpunkte, Distanz {:.3} m, Dauer {:.3} s",
        path.waypoint_count(),
        path.total_distance(),
        path.duration()
    );
    for (index, span) in path.turn_groups().iter().enumerate() {
        log::info!(
            "Drehgruppe {}: Segmente {}..={}",
            index,
            span.first,
            span.last
        );
    }
}

fn print_samples(path: &SplinePath, interval: f64) {
    println!(
        "{:>8} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "t", "x", "y", "heading", "vx", "vy", "omega"
    );
    let steps = (path.duration() / interval).ceil() as usize;
    for step in 0..=steps {
        let t = (step as f64 * interval).min(path.duration());
        let pose = Movement::pose(path, t);
        let velocity = Movement::velocity(path, t);
        println!(
            "{:>8.3} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            t,
            pose.x(),
            pose.y(),
            pose.heading,
            velocity.x(),
            velocity.y(),
            velocity.heading
        );
    }
}
