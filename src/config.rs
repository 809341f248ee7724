use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub log_dir: PathBuf,
    /// Reference day for the dashboard views.
    pub review_date: NaiveDate,

    pub workload_days: u32,
    pub heatmap_weeks: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let review_date = match lookup("REVIEW_DATE") {
            Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .with_context(|| format!("REVIEW_DATE must be YYYY-MM-DD, got `{raw}`"))?,
            None => Utc::now().date_naive(),
        };

        Ok(Self {
            data_file: lookup("LEAVE_DATA_FILE")
                .unwrap_or_else(|| "data/seed.json".to_string())
                .into(),
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string()).into(),
            review_date,
            workload_days: parse_or(&lookup, "WORKLOAD_DAYS", 14)?,
            heatmap_weeks: parse_or(&lookup, "HEATMAP_WEEKS", 4)?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{key} is not a valid number: `{raw}`")),
        None => Ok(default),
    }
}
