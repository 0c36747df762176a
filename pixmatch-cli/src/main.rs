use clap::Parser;
use pixmatch::io::{load_matrix, save_matrix};
use pixmatch::{similarity, LocateConfig, Locator, Preset};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "pixmatch CLI (JSON config driven)")]
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

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
enum Operation {
    Similarity,
    #[default]
    Locate,
    Transform,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
enum PresetConfig {
    LumaGray,
    PerceptualGray,
    AverageGray,
    Sunset,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct TransformConfig {
    preset: PresetConfig,
    /// Sunset ratio; `0.0` selects the default.
    ratio: f64,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            preset: PresetConfig::LumaGray,
            ratio: 0.0,
        }
    }
}

impl From<&TransformConfig> for Preset {
    fn from(value: &TransformConfig) -> Self {
        match value.preset {
            PresetConfig::LumaGray => Preset::LumaGray,
            PresetConfig::PerceptualGray => Preset::PerceptualGray,
            PresetConfig::AverageGray => Preset::AverageGray,
            PresetConfig::Sunset => Preset::Sunset(value.ratio),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    operation: Operation,
    image_path: String,
    template_path: Option<String>,
    output_path: Option<String>,
    output_image_path: Option<String>,
    transform: TransformConfig,
    parallel: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
enum Report {
    Similarity {
        score: u32,
    },
    Locate {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        score: u32,
    },
    Transform {
        width: usize,
        height: usize,
        output_image_path: String,
    },
}

fn run(config: &Config) -> Result<Report, Box<dyn std::error::Error>> {
    if config.image_path.is_empty() {
        return Err("image_path must be set in the config".into());
    }
    let image = load_matrix(&config.image_path)?;
    tracing::info!(
        operation = ?config.operation,
        width = image.width(),
        height = image.height(),
        "loaded image"
    );

    let report = match config.operation {
        Operation::Similarity => {
            let other = load_matrix(required(&config.template_path, "template_path")?)?;
            Report::Similarity {
                score: similarity(&image, &other)?,
            }
        }
        Operation::Locate => {
            let template = load_matrix(required(&config.template_path, "template_path")?)?;
            let found = Locator::new(&template)?
                .with_config(LocateConfig {
                    parallel: config.parallel,
                })
                .locate(&image)?;
            Report::Locate {
                x: found.offset.x,
                y: found.offset.y,
                width: template.width(),
                height: template.height(),
                score: found.score,
            }
        }
        Operation::Transform => {
            let path = required(&config.output_image_path, "output_image_path")?;
            let transform = Preset::from(&config.transform).transform();
            let mut processed = image;
            processed.process(transform.as_ref());
            save_matrix(&processed, path)?;
            Report::Transform {
                width: processed.width(),
                height: processed.height(),
                output_image_path: path.to_owned(),
            }
        }
    };
    Ok(report)
}

fn required<'a>(
    value: &'a Option<String>,
    field: &str,
) -> Result<&'a str, Box<dyn std::error::Error>> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(format!("{field} must be set for this operation").into()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("pixmatch=debug".parse()?))
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
    let report = run(&config)?;
    let json = serde_json::to_string_pretty(&report)?;

    match &config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
