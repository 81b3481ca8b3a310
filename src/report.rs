use std::str::FromStr;

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::number::Number;
use crate::stats::{self, MEAN_DIGITS};
use crate::utils::math;

/// A statistic that can be reported as a sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    Mean,
    Sum,
    Median,
}

impl Statistic {
    pub const ALL: [Statistic; 3] = [Statistic::Mean, Statistic::Sum, Statistic::Median];

    /// The value embedded in this statistic's sentence.
    pub fn value(&self, numbers: &[Number]) -> Result<Number, StatsError> {
        match self {
            Statistic::Mean => Ok(math::round_to(math::mean(numbers)?, MEAN_DIGITS)),
            Statistic::Sum => Ok(math::sum(numbers)),
            Statistic::Median => math::median(numbers),
        }
    }

    pub fn sentence(&self, numbers: &[Number]) -> Result<String, StatsError> {
        match self {
            Statistic::Mean => stats::mean_sentence(numbers),
            Statistic::Sum => Ok(stats::sum_sentence(numbers)),
            Statistic::Median => stats::median_sentence(numbers),
        }
    }
}

impl FromStr for Statistic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One sentence per line
    #[default]
    Text,
    /// A JSON array of statistic, value and sentence
    Json,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Entry {
    pub statistic: Statistic,
    pub value: Number,
    pub sentence: String,
}

/// Sentences for a list of numbers, in the order the statistics were requested.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Report {
    pub entries: Vec<Entry>,
}

impl Report {
    /// Fails on the first statistic that cannot be computed.
    pub fn build(statistics: &[Statistic], numbers: &[Number]) -> Result<Report, StatsError> {
        debug!(
            "building report of {:?} over {} numbers",
            statistics,
            numbers.len()
        );
        let entries = statistics
            .iter()
            .map(|statistic| -> Result<Entry, StatsError> {
                Ok(Entry {
                    statistic: *statistic,
                    value: statistic.value(numbers)?,
                    sentence: statistic.sentence(numbers)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Report { entries })
    }

    pub fn render_text(&self) -> String {
        self.entries
            .iter()
            .map(|entry| entry.sentence.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.render_json(),
        }
    }
}
