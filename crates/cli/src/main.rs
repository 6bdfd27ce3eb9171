mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use linegate::{classify_with, ClassificationResult, GateCfg, LineSegment, Point};
use polars::prelude::*;
use provenance::{GateSnapshot, Sidecar};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "linegate")]
#[command(about = "Classify points against a directed gate segment")]
struct Cmd {
    /// Compensation-band radius around each endpoint
    #[arg(long, global = true, default_value_t = linegate::EXTRA_CROSS_THRESHOLD)]
    threshold: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Classify a single point, e.g. `--point 100,80 --line 50,50,200,200`
    Classify {
        #[arg(long, allow_hyphen_values = true, value_parser = parse_point)]
        point: Point,
        #[arg(long, allow_hyphen_values = true, value_parser = parse_line)]
        line: LineSegment,
        /// Print JSON instead of the plain 4-tuple
        #[arg(long)]
        json: bool,
    },
    /// Classify the canonical example point (100,80) against ((50,50),(200,200))
    Demo,
    /// Classify every row of a CSV with `x`,`y` columns and write a JSON array
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_hyphen_values = true, value_parser = parse_line)]
        line: LineSegment,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = GateCfg::with_threshold(cmd.threshold);
    match cmd.action {
        Action::Classify { point, line, json } => {
            println!("{}", classify_one(point, line, &cfg, json)?);
            Ok(())
        }
        Action::Demo => demo(&cfg),
        Action::Batch { input, line, out } => batch(&input, line, &cfg, &out).map(|_| ()),
        Action::Report => report(&cfg),
    }
}

fn classify_one(point: Point, line: LineSegment, cfg: &GateCfg, json: bool) -> Result<String> {
    let res = classify_with(point, line, cfg)
        .with_context(|| format!("classifying {point:?} against {line:?}"))?;
    render(&res, json)
}

fn render(res: &ClassificationResult, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(res)?);
    }
    let (in_band, in_comp, distance, direction) = res.as_tuple();
    Ok(format!("{in_band} {in_comp} {distance} {direction}"))
}

fn demo(cfg: &GateCfg) -> Result<()> {
    let point = Point::new(100, 80);
    let line = LineSegment::from(((50, 50), (200, 200)));
    let res = classify_with(point, line, cfg).context("classifying demo point")?;
    tracing::info!(?point, ?line, "demo");
    println!("{}", render(&res, false)?);
    Ok(())
}

#[derive(Serialize)]
struct BatchRow {
    row: usize,
    point: Point,
    #[serde(flatten)]
    result: ClassificationResult,
}

fn batch(input: &Path, line: LineSegment, cfg: &GateCfg, out: &Path) -> Result<usize> {
    tracing::info!(input = %input.display(), out = %out.display(), ?line, "batch");
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading {}", input.display()))?;
    let xs = df.column("x")?.cast(&DataType::Float64)?;
    let ys = df.column("y")?.cast(&DataType::Float64)?;

    let mut rows = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.f64()?.into_iter().zip(ys.f64()?.into_iter()).enumerate() {
        let (Some(x), Some(y)) = (x, y) else {
            bail!("row {row}: missing coordinate");
        };
        let point = Point::from_f64(x, y).with_context(|| format!("row {row}"))?;
        let result = classify_with(point, line, cfg).with_context(|| format!("row {row}"))?;
        rows.push(BatchRow { row, point, result });
    }
    let in_band = rows.iter().filter(|r| r.result.in_band).count();
    tracing::info!(rows = rows.len(), in_band, "batch_classified");

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&rows)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let params = serde_json::json!({
        "input": input.to_string_lossy(),
        "rows": rows.len()
    });
    Sidecar::new(out, params)
        .with_gate(GateSnapshot::new(line, cfg))
        .write()?;
    Ok(rows.len())
}

fn report(cfg: &GateCfg) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": linegate::VERSION,
        "params": {
            "extra_cross_threshold": cfg.extra_cross_threshold,
            "sentinel_distance": cfg.sentinel_distance
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn parse_coords<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated numbers, got {:?}", s));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| format!("{part:?} is not a number: {e}"))?;
    }
    Ok(out)
}

fn parse_point(s: &str) -> Result<Point, String> {
    let [x, y] = parse_coords::<2>(s)?;
    Point::from_f64(x, y).map_err(|e| e.to_string())
}

fn parse_line(s: &str) -> Result<LineSegment, String> {
    let [x1, y1, x2, y2] = parse_coords::<4>(s)?;
    let p1 = Point::from_f64(x1, y1).map_err(|e| e.to_string())?;
    let p2 = Point::from_f64(x2, y2).map_err(|e| e.to_string())?;
    Ok(LineSegment::new(p1, p2))
}
