/*!
This module defines the `Config` struct, which is used to configure the dashboard from an optional yaml file. Every field has a default, so an absent file or an empty file are both valid.
*/

use anyhow::{Context, Result};
use std::{collections::BTreeMap, path::Path};

pub const DEFAULT_CLASS_COLUMN: &str = "Class";
pub const DEFAULT_X_AXIS: &str = "V1";
pub const DEFAULT_Y_AXIS: &str = "Amount";
pub const DEFAULT_SAMPLE_CAP: usize = 100_000;
pub const DEFAULT_SAMPLE_SEED: u64 = 42;
pub const DEFAULT_ESTIMATE_DELAY_MS: u64 = 100;

#[derive(Debug, Default, serde::Deserialize)]
pub struct Config {
	pub column_types: Option<BTreeMap<String, ColumnType>>,
	pub class_column: Option<String>,
	pub sample: Option<SampleConfig>,
	pub default_x_axis: Option<String>,
	pub default_y_axis: Option<String>,
	pub estimate_delay_ms: Option<u64>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(tag = "type")]
pub enum ColumnType {
	#[serde(rename = "number")]
	Number,
	#[serde(rename = "enum")]
	Enum { options: Vec<String> },
	#[serde(rename = "text")]
	Text,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct SampleConfig {
	pub cap: Option<usize>,
	pub seed: Option<u64>,
}

pub fn load_config(config_path: Option<&Path>) -> Result<Option<Config>> {
	if let Some(config_path) = config_path {
		let config = std::fs::read_to_string(config_path)
			.with_context(|| format!("failed to read config file {}", config_path.display()))?;
		let config = serde_yaml::from_str(&config)
			.with_context(|| format!("failed to parse config file {}", config_path.display()))?;
		Ok(Some(config))
	} else {
		Ok(None)
	}
}

#[test]
fn test_parse_config() {
	let config: Config = serde_yaml::from_str(
		r#"
class_column: Class
sample:
  cap: 1000
  seed: 7
column_types:
  Amount:
    type: number
  Class:
    type: enum
    options: ["0", "1"]
"#,
	)
	.unwrap();
	assert_eq!(config.class_column.as_deref(), Some("Class"));
	let sample = config.sample.unwrap();
	assert_eq!(sample.cap, Some(1000));
	assert_eq!(sample.seed, Some(7));
	let column_types = config.column_types.unwrap();
	assert!(matches!(
		column_types.get("Amount"),
		Some(ColumnType::Number)
	));
	assert!(matches!(
		column_types.get("Class"),
		Some(ColumnType::Enum { .. })
	));
}

#[test]
fn test_empty_config() {
	let config: Config = serde_yaml::from_str("{}").unwrap();
	assert!(config.class_column.is_none());
	assert!(config.sample.is_none());
}
