/*!
This crate provides a very small implementation of dataframes, which are two dimensional arrays of data where each column can have a different data type, like a spreadsheet. It implements only the features needed to hold a transactions dataset in memory and read slices of it back out for charting.
*/

use std::num::NonZeroUsize;

pub mod load;

pub use self::load::*;

#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
	pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Column {
	Number(NumberColumn),
	Enum(EnumColumn),
	Text(TextColumn),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberColumn {
	pub name: String,
	pub data: Vec<f32>,
}

/// An enum column stores each value as an index into its options, offset by one. A value that was not one of the options is stored as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumColumn {
	pub name: String,
	pub options: Vec<String>,
	pub data: Vec<Option<NonZeroUsize>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextColumn {
	pub name: String,
	pub data: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnType {
	Number,
	Enum { options: Vec<String> },
	Text,
}

impl DataFrame {
	pub fn new(column_names: Vec<String>, column_types: Vec<ColumnType>) -> Self {
		let columns = column_names
			.into_iter()
			.zip(column_types.into_iter())
			.map(|(column_name, column_type)| match column_type {
				ColumnType::Number => Column::Number(NumberColumn::new(column_name)),
				ColumnType::Enum { options } => Column::Enum(EnumColumn::new(column_name, options)),
				ColumnType::Text => Column::Text(TextColumn::new(column_name)),
			})
			.collect();
		Self { columns }
	}

	pub fn ncols(&self) -> usize {
		self.columns.len()
	}

	pub fn nrows(&self) -> usize {
		self.columns.first().map(|column| column.len()).unwrap_or(0)
	}

	pub fn column_names(&self) -> Vec<&str> {
		self.columns.iter().map(|column| column.name()).collect()
	}

	pub fn column(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|column| column.name() == name)
	}

	/// Build a new dataframe holding the rows at `row_indices`, in that order. All indices must be less than `nrows`.
	pub fn take_rows(&self, row_indices: &[usize]) -> Self {
		let columns = self
			.columns
			.iter()
			.map(|column| match column {
				Column::Number(column) => Column::Number(NumberColumn {
					name: column.name.clone(),
					data: row_indices.iter().map(|index| column.data[*index]).collect(),
				}),
				Column::Enum(column) => Column::Enum(EnumColumn {
					name: column.name.clone(),
					options: column.options.clone(),
					data: row_indices.iter().map(|index| column.data[*index]).collect(),
				}),
				Column::Text(column) => Column::Text(TextColumn {
					name: column.name.clone(),
					data: row_indices
						.iter()
						.map(|index| column.data[*index].clone())
						.collect(),
				}),
			})
			.collect();
		Self { columns }
	}
}

impl Column {
	pub fn len(&self) -> usize {
		match self {
			Self::Number(s) => s.data.len(),
			Self::Enum(s) => s.data.len(),
			Self::Text(s) => s.data.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		match self {
			Self::Number(s) => s.data.is_empty(),
			Self::Enum(s) => s.data.is_empty(),
			Self::Text(s) => s.data.is_empty(),
		}
	}

	pub fn name(&self) -> &str {
		match self {
			Self::Number(s) => s.name.as_str(),
			Self::Enum(s) => s.name.as_str(),
			Self::Text(s) => s.name.as_str(),
		}
	}

	pub fn as_number(&self) -> Option<&NumberColumn> {
		match self {
			Self::Number(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_enum(&self) -> Option<&EnumColumn> {
		match self {
			Self::Enum(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_text(&self) -> Option<&TextColumn> {
		match self {
			Self::Text(s) => Some(s),
			_ => None,
		}
	}
}

impl NumberColumn {
	pub fn new(name: String) -> Self {
		Self {
			name,
			data: Vec::new(),
		}
	}
}

impl EnumColumn {
	pub fn new(name: String, options: Vec<String>) -> Self {
		Self {
			name,
			options,
			data: Vec::new(),
		}
	}

	/// Return the zero based option index for the value at `index`, or `None` if the value was not one of the options.
	pub fn option_index(&self, index: usize) -> Option<usize> {
		self.data[index].map(|value| value.get() - 1)
	}
}

impl TextColumn {
	pub fn new(name: String) -> Self {
		Self {
			name,
			data: Vec::new(),
		}
	}
}

#[test]
fn test_take_rows() {
	let dataframe = DataFrame {
		columns: vec![
			Column::Number(NumberColumn {
				name: "Amount".to_owned(),
				data: vec![10.0, 20.0, 30.0],
			}),
			Column::Enum(EnumColumn {
				name: "Class".to_owned(),
				options: vec!["0".to_owned(), "1".to_owned()],
				data: vec![
					NonZeroUsize::new(1),
					NonZeroUsize::new(2),
					NonZeroUsize::new(1),
				],
			}),
		],
	};
	let taken = dataframe.take_rows(&[2, 0]);
	assert_eq!(taken.nrows(), 2);
	assert_eq!(
		taken.column("Amount").unwrap().as_number().unwrap().data,
		vec![30.0, 10.0]
	);
	assert_eq!(
		taken.column("Class").unwrap().as_enum().unwrap().data,
		vec![NonZeroUsize::new(1), NonZeroUsize::new(1)]
	);
}

#[test]
fn test_column_lookup() {
	let dataframe = DataFrame::new(
		vec!["V1".to_owned(), "Class".to_owned()],
		vec![
			ColumnType::Number,
			ColumnType::Enum {
				options: vec!["0".to_owned(), "1".to_owned()],
			},
		],
	);
	assert_eq!(dataframe.column_names(), vec!["V1", "Class"]);
	assert!(dataframe.column("V1").unwrap().as_number().is_some());
	assert!(dataframe.column("Class").unwrap().as_enum().is_some());
	assert!(dataframe.column("V2").is_none());
	assert_eq!(dataframe.nrows(), 0);
}
