use anglerange::{norm_deg, AngleRange};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "AngleRange CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RangeJson {
    #[serde(default)]
    name: String,
    min_deg: f64,
    max_deg: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    ranges: Vec<RangeJson>,
    angles: Vec<f64>,
    output_path: Option<String>,
}

#[derive(Debug, Serialize)]
struct RangeRecord {
    name: String,
    min_deg: f64,
    max_deg: f64,
    wrapping: bool,
    span_deg: f64,
}

impl RangeRecord {
    fn new(name: String, range: &AngleRange) -> Self {
        Self {
            name,
            min_deg: range.min_deg(),
            max_deg: range.max_deg(),
            wrapping: range.is_wrapping(),
            span_deg: range.span_deg(),
        }
    }
}

#[derive(Debug, Serialize)]
struct AngleRecord {
    angle_deg: f64,
    normalized_deg: f64,
    inside: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Output {
    ranges: Vec<RangeRecord>,
    results: Vec<AngleRecord>,
}

fn build_ranges(config: &Config) -> Result<Vec<(String, AngleRange)>, Box<dyn std::error::Error>> {
    if config.ranges.is_empty() {
        return Err("at least one range must be set in the config".into());
    }
    if config.angles.is_empty() {
        return Err("at least one angle must be set in the config".into());
    }
    if let Some(angle) = config.angles.iter().find(|angle| !angle.is_finite()) {
        return Err(format!("angle {angle} is not finite").into());
    }

    config
        .ranges
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let name = if entry.name.is_empty() {
                format!("range_{idx}")
            } else {
                entry.name.clone()
            };
            let range = AngleRange::try_new(entry.min_deg, entry.max_deg)
                .map_err(|err| format!("range {name:?}: {err}"))?;
            tracing::info!(range = %range, name = %name, "loaded range");
            Ok::<_, Box<dyn std::error::Error>>((name, range))
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env()
                    .add_directive("anglerange=info".parse()?)
                    .add_directive("anglerange_cli=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    let ranges = build_ranges(&config)?;
    let results = config
        .angles
        .iter()
        .map(|&angle_deg| AngleRecord {
            angle_deg,
            normalized_deg: norm_deg(angle_deg),
            inside: ranges
                .iter()
                .filter(|(_, range)| range.contains(angle_deg))
                .map(|(name, _)| name.clone())
                .collect(),
        })
        .collect();
    let output = Output {
        ranges: ranges
            .iter()
            .map(|(name, range)| RangeRecord::new(name.clone(), range))
            .collect(),
        results,
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{build_ranges, Config, EXAMPLE_JSON};
    use anglerange::AngleRange;

    #[test]
    fn example_config_builds_named_ranges() {
        let config: Config = serde_json::from_str(EXAMPLE_JSON).unwrap();
        let ranges = build_ranges(&config).unwrap();
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[0].0, "north_cone");
        assert_eq!(ranges[0].1, AngleRange::new(330.0, 30.0));
        assert_eq!(ranges[2].1, AngleRange::new(350.0, 10.0));
    }

    #[test]
    fn unnamed_range_gets_positional_name() {
        let config: Config =
            serde_json::from_str(r#"{"ranges":[{"min_deg":350.0,"max_deg":10.0}],"angles":[0.0]}"#)
                .unwrap();
        let ranges = build_ranges(&config).unwrap();
        assert_eq!(ranges[0].0, "range_0");
    }

    #[test]
    fn range_with_misspelled_bounds_is_rejected() {
        let parsed = serde_json::from_str::<Config>(
            r#"{"ranges":[{"name":"seam","min":350.0,"max":10.0}],"angles":[180.0]}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn range_missing_a_bound_is_rejected() {
        let parsed = serde_json::from_str::<Config>(
            r#"{"ranges":[{"name":"seam","min_deg":350.0}],"angles":[180.0]}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn empty_ranges_are_rejected() {
        let config: Config = serde_json::from_str(r#"{"angles":[0.0]}"#).unwrap();
        let err = build_ranges(&config).err().unwrap();
        assert!(err.to_string().contains("at least one range"));
    }

    #[test]
    fn empty_angles_are_rejected() {
        let config: Config =
            serde_json::from_str(r#"{"ranges":[{"min_deg":0.0,"max_deg":10.0}]}"#).unwrap();
        let err = build_ranges(&config).err().unwrap();
        assert!(err.to_string().contains("at least one angle"));
    }

    #[test]
    fn non_finite_angle_is_rejected() {
        let mut config: Config =
            serde_json::from_str(r#"{"ranges":[{"min_deg":0.0,"max_deg":10.0}]}"#).unwrap();
        config.angles = vec![10.0, f64::INFINITY];
        let err = build_ranges(&config).err().unwrap();
        assert!(err.to_string().contains("not finite"));
    }

    #[test]
    fn non_finite_bound_is_rejected() {
        let mut config: Config = serde_json::from_str(
            r#"{"ranges":[{"name":"cone","min_deg":0.0,"max_deg":10.0}],"angles":[0.0]}"#,
        )
        .unwrap();
        config.ranges[0].max_deg = f64::NAN;
        let err = build_ranges(&config).err().unwrap();
        assert!(err.to_string().contains("\"cone\""));
        assert!(err.to_string().contains("max_deg"));
    }
}
