use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hexcover::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

#[derive(Parser)]
#[command(name = "hexcover-cli")]
#[command(about = "Run the coverage placement engine on job files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Place devices for a JSON job and write the result plus a provenance sidecar
    Place(PlaceArgs),
    /// Export the devices of an existing result as CSV or Parquet
    Table {
        #[arg(long)]
        from: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a square-room job file to start from
    Demo {
        #[arg(long, default_value_t = 100.0)]
        side: f64,
        #[arg(long, default_value_t = 30.0)]
        radius: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the coverage report of an existing result
    Report {
        #[arg(long)]
        from: PathBuf,
    },
}

#[derive(clap::Args, Clone, Debug, Default)]
struct PlaceArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Also write a device table; format from the extension (.csv or .parquet)
    #[arg(long)]
    devices: Option<PathBuf>,
    /// Attach per-area diagnostics to the result
    #[arg(long)]
    debug: bool,
    /// Override the job's device radius (real-world units)
    #[arg(long)]
    radius: Option<f64>,
    /// Override the job's overlap factor
    #[arg(long)]
    overlap: Option<f64>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Place(args) => place(&args).map(|_| ()),
        Action::Table { from, out } => {
            let placement = read_json::<Placement>(&from)?;
            table::write_devices(&placement, &out).map(|_| ())
        }
        Action::Demo { side, radius, out } => demo(side, radius, &out),
        Action::Report { from } => {
            let placement = read_json::<Placement>(&from)?;
            print!("{}", render_report(&placement));
            Ok(())
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn place(args: &PlaceArgs) -> Result<Placement> {
    let mut job = read_json::<PlacementInput>(&args.input)?;
    if let Some(radius) = args.radius {
        job.radius = radius;
    }
    if let Some(overlap) = args.overlap {
        job.params.overlap_factor = overlap;
    }
    job.params.debug |= args.debug;
    tracing::info!(
        input = %args.input.display(),
        areas = job.service_areas.len(),
        exclusions = job.exclusions.len(),
        radius = job.radius,
        scale = ?job.scale,
        "place"
    );

    let placement = place_devices(&job)
        .with_context(|| format!("placing devices for {}", args.input.display()))?;
    write_json(&args.out, &placement)?;

    let mut extra = Vec::new();
    if let Some(devices) = &args.devices {
        table::write_devices(&placement, devices)?;
        extra.push(devices.clone());
    }
    let payload = provenance::Payload::new(serde_json::json!({
        "radius": job.radius,
        "scale": job.scale,
        "power": job.power,
        "cfg": job.params,
    }))
    .with_input(&args.input);
    provenance::write_sidecar(&args.out, &extra, payload)?;

    tracing::info!(
        devices = placement.report.device_count,
        coverage_pct = placement.report.coverage_pct,
        mode = %placement.report.mode,
        out = %args.out.display(),
        "placed"
    );
    Ok(placement)
}

fn demo_job(side: f64, radius: f64) -> PlacementInput {
    PlacementInput {
        service_areas: vec![Polygon::rect(0.0, 0.0, side, side)],
        exclusions: Vec::new(),
        scale: Some(1.0),
        radius,
        power: None,
        params: PlacementCfg::default(),
    }
}

fn demo(side: f64, radius: f64, out: &Path) -> Result<()> {
    tracing::info!(side, radius, out = %out.display(), "demo");
    write_json(out, &demo_job(side, radius))
}

fn report_line(label: &str, r: &CoverageReport) -> String {
    let mut flags = Vec::new();
    if r.alternative_seeding {
        flags.push("alternative-seeding");
    }
    if r.density_fallback {
        flags.push("density-fallback");
    }
    if r.cap_reached {
        flags.push("cap-reached");
    }
    format!(
        "{label}: devices={} min={} coverage={:.2}% target={:.2}% overlap={} mode={}{}{}\n",
        r.device_count,
        r.theoretical_min,
        r.coverage_pct,
        r.target_pct,
        r.overlap,
        r.mode,
        if flags.is_empty() { "" } else { " flags=" },
        flags.join(",")
    )
}

fn render_report(placement: &Placement) -> String {
    let mut out = report_line("total", &placement.report);
    for (k, area) in placement.areas.iter().enumerate() {
        out.push_str(&report_line(&format!("area {k}"), area));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::tempdir;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn demo_then_place_writes_result_sidecar_and_table() {
        let dir = tempdir().unwrap();
        let job = dir.path().join("job.json");
        demo(100.0, 30.0, &job).unwrap();

        let args = PlaceArgs {
            input: job.clone(),
            out: dir.path().join("out").join("result.json"),
            devices: Some(dir.path().join("out").join("devices.csv")),
            debug: true,
            ..PlaceArgs::default()
        };
        let placement = place(&args).unwrap();
        assert!(placement.report.coverage_pct >= 99.5);
        assert!(placement.debug.is_some());

        let stored: Placement = read_json(&args.out).unwrap();
        assert_eq!(stored, placement);
        let sidecar = dir.path().join("out").join("result.provenance.json");
        let prov: serde_json::Value = read_json(&sidecar).unwrap();
        assert_eq!(prov["params"]["radius"], 30.0);
        assert_eq!(prov["params"]["cfg"]["debug"], true);
        assert_eq!(prov["outputs"].as_array().unwrap().len(), 2);
        assert!(args.devices.as_ref().unwrap().exists());
    }

    #[test]
    fn flags_override_the_job() {
        let dir = tempdir().unwrap();
        let job = dir.path().join("job.json");
        demo(100.0, 30.0, &job).unwrap();
        let args = PlaceArgs {
            input: job,
            out: dir.path().join("result.json"),
            radius: Some(20.0),
            overlap: Some(0.7),
            ..PlaceArgs::default()
        };
        let placement = place(&args).unwrap();
        assert_eq!(placement.report.overlap, 0.7);
        assert!(placement.devices.iter().all(|d| d.radius == 20.0));
    }

    #[test]
    fn invalid_job_is_an_error() {
        let dir = tempdir().unwrap();
        let job = dir.path().join("job.json");
        demo(100.0, 30.0, &job).unwrap();
        let args = PlaceArgs {
            input: job,
            out: dir.path().join("result.json"),
            overlap: Some(-1.0),
            ..PlaceArgs::default()
        };
        assert!(place(&args).is_err());
        assert!(!args.out.exists());
    }

    #[test]
    fn report_lists_every_area() {
        let mut job = demo_job(100.0, 30.0);
        job.service_areas
            .push(Polygon::rect(0.0, 0.0, 400.0, 16.0));
        let placement = place_devices(&job).unwrap();
        let text = render_report(&placement);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("total: "));
        assert!(lines[2].contains("alternative-seeding"));
    }
}
