use derive_more::{Display, Error};
use fraudboard_dataframe::{DataFrame, EnumColumn};

/// The class space is a closed two valued set: 0 is non-fraud, 1 is fraud.
pub const N_CLASSES: usize = 2;

/// The chart ready aggregates for one refresh. `series_x`, `series_y`, and `class_labels` have one entry per sample row, in sample order. `class_counts` is zero filled: a class that never occurs in the sample still gets a count of zero.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateOutput {
	pub series_x: Vec<f32>,
	pub series_y: Vec<f32>,
	pub class_labels: Vec<usize>,
	pub class_counts: [usize; N_CLASSES],
}

#[derive(Debug, Display, Error, PartialEq)]
pub enum AggregateError {
	#[display(fmt = "the sample has no rows")]
	EmptySample,
	#[display(fmt = "no numeric column named \"{}\"", name)]
	InvalidColumn { name: String },
	#[display(fmt = "no two valued class column named \"{}\"", name)]
	InvalidClassColumn { name: String },
	#[display(fmt = "row {} has no valid class label", row)]
	InvalidClassValue { row: usize },
}

/// Derive the aggregates for the current axis selection. This is a pure function of its inputs: the same sample and selection always produce the same output, and the sample is never reordered or resampled.
pub fn aggregate(
	sample: &DataFrame,
	x_column: &str,
	y_column: &str,
	class_column: &str,
) -> Result<AggregateOutput, AggregateError> {
	if sample.nrows() == 0 {
		return Err(AggregateError::EmptySample);
	}
	let series_x = number_column_data(sample, x_column)?;
	let series_y = number_column_data(sample, y_column)?;
	let class = class_column_data(sample, class_column)?;
	let mut class_labels = Vec::with_capacity(class.data.len());
	let mut class_counts = [0; N_CLASSES];
	for (row, value) in class.data.iter().enumerate() {
		let label = value
			.map(|value| value.get() - 1)
			.filter(|label| *label < N_CLASSES)
			.ok_or(AggregateError::InvalidClassValue { row })?;
		class_counts[label] += 1;
		class_labels.push(label);
	}
	Ok(AggregateOutput {
		series_x: series_x.to_vec(),
		series_y: series_y.to_vec(),
		class_labels,
		class_counts,
	})
}

fn number_column_data<'a>(
	sample: &'a DataFrame,
	name: &str,
) -> Result<&'a [f32], AggregateError> {
	sample
		.column(name)
		.and_then(|column| column.as_number())
		.map(|column| column.data.as_slice())
		.ok_or_else(|| AggregateError::InvalidColumn {
			name: name.to_owned(),
		})
}

fn class_column_data<'a>(
	sample: &'a DataFrame,
	name: &str,
) -> Result<&'a EnumColumn, AggregateError> {
	sample
		.column(name)
		.and_then(|column| column.as_enum())
		.filter(|column| column.options.len() == N_CLASSES)
		.ok_or_else(|| AggregateError::InvalidClassColumn {
			name: name.to_owned(),
		})
}

#[cfg(test)]
mod test {
	use super::*;
	use fraudboard_dataframe::{Column, NumberColumn, TextColumn};
	use std::num::NonZeroUsize;

	fn test_sample() -> DataFrame {
		DataFrame {
			columns: vec![
				Column::Number(NumberColumn {
					name: "V1".to_owned(),
					data: vec![1.0, 2.0],
				}),
				Column::Number(NumberColumn {
					name: "Amount".to_owned(),
					data: vec![10.0, 20.0],
				}),
				Column::Enum(EnumColumn {
					name: "Class".to_owned(),
					options: vec!["0".to_owned(), "1".to_owned()],
					data: vec![NonZeroUsize::new(1), NonZeroUsize::new(2)],
				}),
				Column::Text(TextColumn {
					name: "Merchant".to_owned(),
					data: vec!["acme".to_owned(), "globex".to_owned()],
				}),
			],
		}
	}

	#[test]
	fn test_aggregate() {
		let output = aggregate(&test_sample(), "V1", "Amount", "Class").unwrap();
		assert_eq!(output.series_x, vec![1.0, 2.0]);
		assert_eq!(output.series_y, vec![10.0, 20.0]);
		assert_eq!(output.class_labels, vec![0, 1]);
		assert_eq!(output.class_counts, [1, 1]);
	}

	#[test]
	fn test_aggregate_lengths_match_sample() {
		let sample = test_sample();
		let output = aggregate(&sample, "V1", "Amount", "Class").unwrap();
		assert_eq!(output.series_x.len(), sample.nrows());
		assert_eq!(output.series_y.len(), sample.nrows());
		assert_eq!(output.class_labels.len(), sample.nrows());
		assert_eq!(
			output.class_counts.iter().sum::<usize>(),
			sample.nrows()
		);
	}

	#[test]
	fn test_aggregate_is_pure() {
		let sample = test_sample();
		let output_a = aggregate(&sample, "V1", "Amount", "Class").unwrap();
		let output_b = aggregate(&sample, "V1", "Amount", "Class").unwrap();
		assert_eq!(output_a, output_b);
	}

	#[test]
	fn test_aggregate_zero_fills_unseen_class() {
		let sample = DataFrame {
			columns: vec![
				Column::Number(NumberColumn {
					name: "V1".to_owned(),
					data: vec![1.0, 2.0, 3.0],
				}),
				Column::Number(NumberColumn {
					name: "Amount".to_owned(),
					data: vec![10.0, 20.0, 30.0],
				}),
				Column::Enum(EnumColumn {
					name: "Class".to_owned(),
					options: vec!["0".to_owned(), "1".to_owned()],
					data: vec![
						NonZeroUsize::new(1),
						NonZeroUsize::new(1),
						NonZeroUsize::new(1),
					],
				}),
			],
		};
		let output = aggregate(&sample, "V1", "Amount", "Class").unwrap();
		assert_eq!(output.class_counts, [3, 0]);
	}

	#[test]
	fn test_aggregate_empty_sample() {
		let sample = DataFrame {
			columns: Vec::new(),
		};
		assert_eq!(
			aggregate(&sample, "V1", "Amount", "Class"),
			Err(AggregateError::EmptySample)
		);
	}

	#[test]
	fn test_aggregate_missing_column() {
		assert_eq!(
			aggregate(&test_sample(), "V99", "Amount", "Class"),
			Err(AggregateError::InvalidColumn {
				name: "V99".to_owned()
			})
		);
	}

	#[test]
	fn test_aggregate_text_column_is_not_chartable() {
		assert_eq!(
			aggregate(&test_sample(), "Merchant", "Amount", "Class"),
			Err(AggregateError::InvalidColumn {
				name: "Merchant".to_owned()
			})
		);
	}

	#[test]
	fn test_aggregate_missing_class_value() {
		let sample = DataFrame {
			columns: vec![
				Column::Number(NumberColumn {
					name: "V1".to_owned(),
					data: vec![1.0],
				}),
				Column::Number(NumberColumn {
					name: "Amount".to_owned(),
					data: vec![10.0],
				}),
				Column::Enum(EnumColumn {
					name: "Class".to_owned(),
					options: vec!["0".to_owned(), "1".to_owned()],
					data: vec![None],
				}),
			],
		};
		assert_eq!(
			aggregate(&sample, "V1", "Amount", "Class"),
			Err(AggregateError::InvalidClassValue { row: 0 })
		);
	}
}
