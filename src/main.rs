//! Capture Template CLI
//!
//! Usage:
//!   capture-template [OPTIONS] <TEMPLATE>
//!
//! Options:
//!   -p, --pattern <REGEX>       Regex whose named groups supply the values
//!   -i, --input <TEXT>          Text matched against the pattern
//!   -v, --values <FILE>         Values file (TOML) instead of a regex
//!       --pad <NAME=WIDTH>      Left-pad a parameter with zeros
//!   -c, --config <FILE>         Interpolation limits (TOML)
//!   -h, --help                  Print help

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use regex::Regex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use capture_template::{
    interpolate_with_config, CaptureGroups, InterpolationConfig, InterpolationError, ValueSet,
};

#[derive(Parser)]
#[command(name = "capture-template")]
#[command(about = "Interpolate regex named captures into a template")]
struct Cli {
    /// Template, e.g. "{year}-{month}(-{day})"
    template: String,

    /// Regex whose named capture groups supply the values
    #[arg(short, long, requires = "input", conflicts_with = "values")]
    pattern: Option<String>,

    /// Text matched against the pattern
    #[arg(short, long, requires = "pattern")]
    input: Option<String>,

    /// Values file (TOML) with a [values] table and an optional `unmatched` list
    #[arg(short, long)]
    values: Option<PathBuf>,

    /// Left-pad a parameter's value with zeros to WIDTH characters
    #[arg(long, value_name = "NAME=WIDTH", value_parser = parse_pad)]
    pad: Vec<(String, usize)>,

    /// Interpolation limits file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn parse_pad(arg: &str) -> Result<(String, usize), String> {
    let (name, width) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=WIDTH, got '{}'", arg))?;
    let width = width
        .parse()
        .map_err(|e| format!("invalid width '{}': {}", width, e))?;
    Ok((name.to_string(), width))
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match InterpolationConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => fail(&format!("Error loading config '{}': {}", path.display(), e)),
        },
        None => InterpolationConfig::default(),
    };

    let padding: HashMap<&str, usize> = cli
        .pad
        .iter()
        .map(|(name, width)| (name.as_str(), *width))
        .collect();
    let process = |name: &str, value: Option<&str>| -> Option<String> {
        let value = value?;
        Some(match padding.get(name) {
            Some(&width) => format!("{:0>width$}", value, width = width),
            None => value.to_string(),
        })
    };

    let result = match (&cli.pattern, &cli.input, &cli.values) {
        (Some(pattern), Some(input), _) => {
            let regex = match Regex::new(pattern) {
                Ok(r) => r,
                Err(e) => fail(&format!("Invalid pattern: {}", e)),
            };
            let groups = match CaptureGroups::find(&regex, input) {
                Some(g) => g,
                None => fail(&format!("Pattern does not match input '{}'", input)),
            };
            interpolate_with_config(&cli.template, &groups, process, &config)
        }
        (_, _, Some(path)) => {
            let values = match ValueSet::from_file(path) {
                Ok(v) => v,
                Err(e) => fail(&format!("Error loading values '{}': {}", path.display(), e)),
            };
            interpolate_with_config(&cli.template, &values, process, &config)
        }
        _ => fail("Either --pattern with --input, or --values is required"),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => report(&cli.template, &e),
    }
}

fn report(template: &str, err: &InterpolationError) -> ! {
    eprint!("{}", err.format(template, "template"));
    std::process::exit(1);
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
