// File: crates/demo/src/main.rs
// Summary: Demo loads timestamped samples from CSV, aggregates them into calendar buckets,
// lays out a chart and writes it as SVG.

mod svg;

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vitals_chart_core::{
    aggregate, to_chart_points, AggregationMode, ChartData, ChartFamily, ChartLayout, LayoutOptions, Sample, Size,
    TimeSeries, TimeUnit,
};

use crate::svg::SvgBackend;

/// Positional CLI arguments: `<csv> [source-unit] [target-unit] [mode] [family] [tz] [out.svg]`.
struct Args {
    input: PathBuf,
    source: TimeUnit,
    target: TimeUnit,
    mode: AggregationMode,
    family: ChartFamily,
    tz: Tz,
    output: PathBuf,
}

impl Args {
    fn parse() -> Result<Self> {
        let raw: Vec<String> = std::env::args().skip(1).collect();
        let arg = |i: usize, default: &str| raw.get(i).cloned().unwrap_or_else(|| default.to_string());

        let input = PathBuf::from(arg(0, "crates/demo/data/heart_rate.csv"));
        let source: TimeUnit = arg(1, "hour").parse().context("source unit")?;
        let target: TimeUnit = arg(2, "day").parse().context("target unit")?;
        let mode: AggregationMode = arg(3, "average").parse().context("aggregation mode")?;
        let family: ChartFamily = arg(4, "line").parse().context("chart family")?;
        let tz_name = arg(5, "Asia/Seoul");
        let tz = tz_name
            .parse::<Tz>()
            .map_err(|e| anyhow::anyhow!("unknown time zone '{tz_name}': {e}"))?;
        let output = raw.get(6).map(PathBuf::from).unwrap_or_else(|| out_name(&input, family));
        Ok(Self { input, source, target, mode, family, tz, output })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse()?;
    info!(input = %args.input.display(), "loading samples");
    let samples = load_samples_csv(&args.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    if samples.is_empty() {
        anyhow::bail!("no samples loaded; expected 'timestamp,value' rows");
    }
    info!(count = samples.len(), unit = %args.source, "loaded samples");

    let series = TimeSeries::from_samples(samples, args.source);
    let aggregated = aggregate(&series, args.target, args.mode, &args.tz)
        .with_context(|| format!("aggregating {} into {} buckets", args.source, args.target))?;
    info!(buckets = aggregated.len(), target = %args.target, mode = %args.mode, "aggregated");

    let points = to_chart_points(&aggregated, None, &args.tz);
    let canvas = Size::new(720.0, 360.0);
    let layout = ChartLayout::compute(canvas, &ChartData::Points(points), &LayoutOptions::for_family(args.family));
    if let Some(m) = &layout.metrics {
        info!(min_y = m.min_y, max_y = m.max_y, ticks = ?m.ticks, "computed metrics");
    }

    let mut backend = SvgBackend::new(canvas);
    layout.draw(&mut backend);
    if let Some(parent) = args.output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&args.output, backend.finish())
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!(output = %args.output.display(), "wrote chart");
    Ok(())
}

/// Produce output file name like target/out/chart_<stem>_<family>.svg
fn out_name(input: &Path, family: ChartFamily) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("chart_{stem}_{family}.svg"))
}

/// Load `timestamp,value` rows. Timestamps may be RFC 3339 or epoch seconds/milliseconds.
fn load_samples_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["timestamp", "time", "date", "datetime"]).context("no timestamp column")?;
    let i_value = idx(&["value", "v", "count", "amount"]).context("no value column")?;

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let t = rec.get(i_time).and_then(parse_timestamp);
        let v = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok());
        match (t, v) {
            (Some(t), Some(v)) => out.push(Sample::new(t, v)),
            _ => warn!(row, "skipping unparsable row"),
        }
    }
    Ok(out)
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    let n = s.parse::<i64>().ok()?;
    if n > 10_i64.pow(12) {
        Utc.timestamp_millis_opt(n).single()
    } else {
        Utc.timestamp_opt(n, 0).single()
    }
}
