use std::fs;
use std::path::PathBuf;

use benchview::api::{Dashboard, DashboardConfig};
use benchview::core::{Metric, ThreadingMode};
use benchview::render::NullSurface;

const USAGE: &str = "usage: benchview_project --input <data.json|data.js> [--output <path>] \
[--test <name>] [--style <name>] [--metric <time|rate>] [--threading <single|multi>]";

#[derive(Debug, Default)]
struct CliArgs {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    test: Option<String>,
    style: Option<String>,
    metric: Option<Metric>,
    threading: Option<ThreadingMode>,
}

fn main() {
    let _ = benchview::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let input = args.input.ok_or_else(|| USAGE.to_owned())?;
    let source = fs::read_to_string(&input)
        .map_err(|err| format!("failed to read `{}`: {err}", input.display()))?;

    let config = DashboardConfig::default()
        .with_initial_metric(args.metric.unwrap_or_default())
        .with_initial_threading(args.threading.unwrap_or_default());
    let surface = NullSurface::new(config.viewport);
    let mut dashboard = Dashboard::new(surface, config).map_err(|err| err.to_string())?;

    dashboard
        .load_source_str(&source)
        .map_err(|err| err.to_string())?;
    if let Some(test) = args.test {
        dashboard.select_test(test).map_err(|err| err.to_string())?;
    }
    if let Some(style) = args.style {
        dashboard.select_style(style).map_err(|err| err.to_string())?;
    }

    let json = dashboard
        .snapshot_json_pretty()
        .map_err(|err| err.to_string())?;
    match args.output {
        Some(path) => fs::write(&path, format!("{json}\n"))
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut parsed = CliArgs::default();

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--input" => parsed.input = Some(PathBuf::from(value("--input")?)),
            "--output" => parsed.output = Some(PathBuf::from(value("--output")?)),
            "--test" => parsed.test = Some(value("--test")?),
            "--style" => parsed.style = Some(value("--style")?),
            "--metric" => {
                parsed.metric = Some(value("--metric")?.parse().map_err(|err| format!("{err}"))?);
            }
            "--threading" => {
                parsed.threading =
                    Some(value("--threading")?.parse().map_err(|err| format!("{err}"))?);
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(parsed)
}
