use crate::config::{
	Config, DEFAULT_CLASS_COLUMN, DEFAULT_SAMPLE_CAP, DEFAULT_SAMPLE_SEED,
};
use anyhow::{Context, Result};
use fraudboard_dataframe::{ColumnType, DataFrame, FromCsvOptions};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use std::{collections::BTreeMap, path::Path};

/// The loaded dataset and the fixed sample the charts are drawn from. Both are immutable once the store is built: refreshes reuse the same sample, so charts vary only with the axis selection, not with sampling noise.
pub struct DatasetStore {
	dataframe: DataFrame,
	sample: DataFrame,
	class_column: String,
}

/// One entry in the axis selection menu offered by the ui layer.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AxisOption {
	pub label: String,
	pub value: String,
}

impl DatasetStore {
	/// Read the dataset from `file_path`. A load failure is logged and yields a store over the empty dataset, never an error: the dashboard then runs in its degenerate state until restart.
	pub fn load(file_path: &Path, config: Option<&Config>) -> Self {
		let dataframe = match load_dataframe(file_path, config) {
			Ok(dataframe) => dataframe,
			Err(error) => {
				log::error!("{:#}", error);
				DataFrame {
					columns: Vec::new(),
				}
			}
		};
		Self::new(dataframe, config)
	}

	/// Build a store over an already loaded dataframe. The sample is drawn here, once, with a seeded rng.
	pub fn new(dataframe: DataFrame, config: Option<&Config>) -> Self {
		let cap = config
			.and_then(|config| config.sample.as_ref())
			.and_then(|sample| sample.cap)
			.unwrap_or(DEFAULT_SAMPLE_CAP);
		let seed = config
			.and_then(|config| config.sample.as_ref())
			.and_then(|sample| sample.seed)
			.unwrap_or(DEFAULT_SAMPLE_SEED);
		let class_column = config
			.and_then(|config| config.class_column.clone())
			.unwrap_or_else(|| DEFAULT_CLASS_COLUMN.to_owned());
		let sample = draw_sample(&dataframe, cap, seed);
		Self {
			dataframe,
			sample,
			class_column,
		}
	}

	pub fn dataframe(&self) -> &DataFrame {
		&self.dataframe
	}

	pub fn sample(&self) -> &DataFrame {
		&self.sample
	}

	pub fn class_column(&self) -> &str {
		&self.class_column
	}

	pub fn is_empty(&self) -> bool {
		self.dataframe.nrows() == 0
	}

	pub fn column_names(&self) -> Vec<&str> {
		self.dataframe.column_names()
	}

	/// The options for the axis dropdowns, one per column. An empty dataset yields an empty menu.
	pub fn axis_options(&self) -> Vec<AxisOption> {
		self.dataframe
			.column_names()
			.into_iter()
			.map(|name| AxisOption {
				label: name.to_owned(),
				value: name.to_owned(),
			})
			.collect()
	}
}

fn load_dataframe(file_path: &Path, config: Option<&Config>) -> Result<DataFrame> {
	let mut column_types: BTreeMap<String, ColumnType> = config
		.and_then(|config| config.column_types.as_ref())
		.map(|column_types| {
			column_types
				.iter()
				.map(|(column_name, column_type)| {
					let column_type = match column_type {
						crate::config::ColumnType::Number => ColumnType::Number,
						crate::config::ColumnType::Enum { options } => ColumnType::Enum {
							options: options.clone(),
						},
						crate::config::ColumnType::Text => ColumnType::Text,
					};
					(column_name.clone(), column_type)
				})
				.collect()
		})
		.unwrap_or_default();
	// The class column is always a closed two valued enum so that the class distribution has exactly two counts even when one class never occurs.
	let class_column = config
		.and_then(|config| config.class_column.clone())
		.unwrap_or_else(|| DEFAULT_CLASS_COLUMN.to_owned());
	column_types.entry(class_column).or_insert(ColumnType::Enum {
		options: vec!["0".to_owned(), "1".to_owned()],
	});
	let dataframe = DataFrame::from_path(
		file_path,
		FromCsvOptions {
			column_types: Some(column_types),
			..Default::default()
		},
		|_| {},
	)
	.with_context(|| format!("failed to load dataset from {}", file_path.display()))?;
	Ok(dataframe)
}

/// Draw `cap` rows without replacement, or every row when the dataset is smaller than the cap.
fn draw_sample(dataframe: &DataFrame, cap: usize, seed: u64) -> DataFrame {
	let n_rows = dataframe.nrows();
	if n_rows <= cap {
		return dataframe.clone();
	}
	let mut rng = Xoshiro256Plus::seed_from_u64(seed);
	let row_indices = rand::seq::index::sample(&mut rng, n_rows, cap).into_vec();
	dataframe.take_rows(&row_indices)
}

#[cfg(test)]
mod test {
	use super::*;
	use fraudboard_dataframe::{Column, EnumColumn, NumberColumn};
	use std::num::NonZeroUsize;

	fn test_dataframe(n_rows: usize) -> DataFrame {
		DataFrame {
			columns: vec![
				Column::Number(NumberColumn {
					name: "V1".to_owned(),
					data: (0..n_rows).map(|index| index as f32).collect(),
				}),
				Column::Enum(EnumColumn {
					name: "Class".to_owned(),
					options: vec!["0".to_owned(), "1".to_owned()],
					data: (0..n_rows).map(|_| NonZeroUsize::new(1)).collect(),
				}),
			],
		}
	}

	#[test]
	fn test_sample_respects_cap() {
		let config = Config {
			sample: Some(crate::config::SampleConfig {
				cap: Some(3),
				seed: Some(42),
			}),
			..Default::default()
		};
		let store = DatasetStore::new(test_dataframe(10), Some(&config));
		assert_eq!(store.sample().nrows(), 3);
		assert_eq!(store.dataframe().nrows(), 10);
	}

	#[test]
	fn test_sample_smaller_dataset_is_whole_dataset() {
		let store = DatasetStore::new(test_dataframe(10), None);
		assert_eq!(store.sample().nrows(), 10);
	}

	#[test]
	fn test_sample_is_deterministic_for_a_seed() {
		let config = Config {
			sample: Some(crate::config::SampleConfig {
				cap: Some(5),
				seed: Some(7),
			}),
			..Default::default()
		};
		let store_a = DatasetStore::new(test_dataframe(100), Some(&config));
		let store_b = DatasetStore::new(test_dataframe(100), Some(&config));
		assert_eq!(store_a.sample(), store_b.sample());
	}

	#[test]
	fn test_load_failure_yields_empty_store() {
		let store = DatasetStore::load(Path::new("does-not-exist.csv"), None);
		assert!(store.is_empty());
		assert_eq!(store.sample().nrows(), 0);
		assert!(store.axis_options().is_empty());
	}

	#[test]
	fn test_axis_options() {
		let store = DatasetStore::new(test_dataframe(2), None);
		let options = store.axis_options();
		assert_eq!(options.len(), 2);
		assert_eq!(options[0].label, "V1");
		assert_eq!(options[0].value, "V1");
		assert_eq!(options[1].value, "Class");
	}
}
