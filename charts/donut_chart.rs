use crate::{chart::ChartSpec, common::ChartStyle};
use num_traits::ToPrimitive;

/// The fraction of the donut radius left as a hole.
pub const DONUT_HOLE_FRACTION: f32 = 0.4;

/// Slice labels for the class distribution donut, in class order.
pub const CLASS_SLICE_LABELS: [&str; 2] = ["Non-Fraud", "Fraud"];

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
pub struct DonutChartOptions {
	pub data: Vec<DonutChartSlice>,
	pub hole: f32,
	pub title: Option<String>,
	pub style: ChartStyle,
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
pub struct DonutChartSlice {
	pub label: String,
	pub value: u64,
}

/// Package the class counts as a two slice donut chart. The slice order is fixed: non-fraud first, fraud second, even when a count is zero.
pub fn build_donut_chart(class_counts: &[usize; 2]) -> ChartSpec {
	let data = CLASS_SLICE_LABELS
		.iter()
		.zip(class_counts.iter())
		.map(|(label, count)| DonutChartSlice {
			label: (*label).to_owned(),
			value: count.to_u64().unwrap(),
		})
		.collect();
	ChartSpec::Donut(DonutChartOptions {
		data,
		hole: DONUT_HOLE_FRACTION,
		title: Some("Fraud vs Non-Fraud Distribution".to_owned()),
		style: ChartStyle::transparent_light(),
	})
}

#[test]
fn test_build_donut_chart() {
	let chart = build_donut_chart(&[3, 1]);
	let options = chart.as_donut().unwrap();
	assert_eq!(options.hole, DONUT_HOLE_FRACTION);
	assert_eq!(
		options.title.as_deref(),
		Some("Fraud vs Non-Fraud Distribution")
	);
	assert_eq!(options.data.len(), 2);
	assert_eq!(options.data[0].label, "Non-Fraud");
	assert_eq!(options.data[0].value, 3);
	assert_eq!(options.data[1].label, "Fraud");
	assert_eq!(options.data[1].value, 1);
}

#[test]
fn test_build_donut_chart_zero_count() {
	let chart = build_donut_chart(&[4, 0]);
	let options = chart.as_donut().unwrap();
	assert_eq!(options.data[1].label, "Fraud");
	assert_eq!(options.data[1].value, 0);
}
