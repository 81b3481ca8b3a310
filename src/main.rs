use std::fs;
use std::fmt::Display;
use std::io::{self, Read};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use log::{debug, info, LevelFilter};
use serde::{de, Deserialize, Deserializer, Serialize};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use sentences::{parse_numbers, Number, OutputFormat, Report, Statistic};

#[derive(Clone, Debug, Parser, Serialize, Deserialize)]
#[command(version, about)]
struct Config {
    /// Numbers to describe, separated by spaces or commas
    #[arg(value_name = "NUMBERS", allow_negative_numbers = true)]
    #[serde(
        default,
        deserialize_with = "list_or_string",
        skip_serializing_if = "Vec::is_empty"
    )]
    numbers: Vec<String>,

    /// Read numbers from a file, or `-` for stdin
    #[arg(short, long, value_name = "PATH")]
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<String>,

    /// Statistic(s) to report, in order
    #[arg(short, long, value_enum, value_delimiter = ',', value_name = "STAT1,STAT2,...")]
    #[serde(
        default,
        deserialize_with = "list_or_string",
        skip_serializing_if = "Vec::is_empty"
    )]
    statistics: Vec<Statistic>,

    /// Output format
    #[arg(short, long, value_enum)]
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<OutputFormat>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(short, long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    log_level: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Item {
    Text(String),
    Int(i64),
    Float(f64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrItem {
    List(Vec<Item>),
    Item(Item),
}

// Accepts `[a, b]` as well as a bare `a,b` or `a b` string, which is how
// list values usually arrive from SENTENCES_* variables.
fn list_or_string<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let items = match ListOrItem::deserialize(deserializer)? {
        ListOrItem::List(items) => items,
        ListOrItem::Item(item) => vec![item],
    };
    let mut values = Vec::new();
    for item in items {
        let text = match item {
            Item::Text(text) => text,
            Item::Int(i) => i.to_string(),
            Item::Float(f) => f.to_string(),
        };
        for token in text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
        {
            values.push(token.parse().map_err(<D::Error as de::Error>::custom)?);
        }
    }
    Ok(values)
}

fn main() -> Result<()> {
    // Start with toml configuration file.
    let config: Config = Figment::from(Toml::file("sentences.toml"))
        // Override with anything set in environment variables.
        .merge(Env::prefixed("SENTENCES_"))
        // Override with anything set via flags.
        .merge(Serialized::defaults(Config::parse()))
        .extract()
        .context("invalid configuration")?;

    init_logging(config.log_level.as_deref().unwrap_or("warn"))?;
    debug!("configuration: {:?}", config);

    let numbers = gather_numbers(&config)?;
    info!("read {} numbers", numbers.len());

    let statistics = if config.statistics.is_empty() {
        Statistic::ALL.to_vec()
    } else {
        config.statistics.clone()
    };
    let report = Report::build(&statistics, &numbers)?;
    println!("{}", report.render(config.format.unwrap_or_default())?);
    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let level: LevelFilter = level
        .parse()
        .map_err(|_| anyhow!("invalid log level: {}", level))?;
    TermLogger::init(
        level,
        ConfigBuilder::new().build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

// Numbers come from flags first, then the input file. With neither, read stdin.
fn gather_numbers(config: &Config) -> Result<Vec<Number>> {
    let mut numbers = Vec::new();
    for argument in &config.numbers {
        numbers.extend(parse_numbers(argument)?);
    }

    let text = match config.input.as_deref() {
        Some("-") => Some(read_stdin()?),
        Some(path) => {
            debug!("reading numbers from {}", path);
            Some(fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?)
        }
        None if config.numbers.is_empty() => Some(read_stdin()?),
        None => None,
    };
    if let Some(text) = text {
        numbers.extend(parse_numbers(&text)?);
    }
    Ok(numbers)
}

fn read_stdin() -> Result<String> {
    debug!("reading numbers from stdin");
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}
