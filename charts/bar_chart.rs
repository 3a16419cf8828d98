use crate::{chart::ChartSpec, common::ChartStyle};

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
pub struct BarChartOptions {
	pub data: Vec<BarChartPoint>,
	pub title: Option<String>,
	pub x_axis_title: Option<String>,
	pub y_axis_title: Option<String>,
	pub style: ChartStyle,
}

/// One bar. `class` is the per-row class label bound to the color channel.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
pub struct BarChartPoint {
	pub x: f32,
	pub y: Option<f32>,
	pub class: usize,
}

/// Package the selected column values as a bar chart, one bar per row. The rows arrive in sample order and are kept in that order.
pub fn build_bar_chart(
	series_x: &[f32],
	series_y: &[f32],
	class_labels: &[usize],
	x_name: &str,
	y_name: &str,
) -> ChartSpec {
	debug_assert_eq!(series_x.len(), series_y.len());
	debug_assert_eq!(series_x.len(), class_labels.len());
	let data = series_x
		.iter()
		.zip(series_y.iter())
		.zip(class_labels.iter())
		.map(|((x, y), class)| BarChartPoint {
			x: *x,
			y: if y.is_finite() { Some(*y) } else { None },
			class: *class,
		})
		.collect();
	ChartSpec::Bar(BarChartOptions {
		data,
		title: Some(format!("Bar Graph of {} vs {}", x_name, y_name)),
		x_axis_title: Some(x_name.to_owned()),
		y_axis_title: Some(y_name.to_owned()),
		style: ChartStyle::transparent_light(),
	})
}

#[test]
fn test_build_bar_chart() {
	let chart = build_bar_chart(&[1.0, 2.0], &[10.0, 20.0], &[0, 1], "V1", "Amount");
	let options = chart.as_bar().unwrap();
	assert_eq!(
		options.title.as_deref(),
		Some("Bar Graph of V1 vs Amount")
	);
	assert_eq!(options.data.len(), 2);
	assert_eq!(options.data[0].x, 1.0);
	assert_eq!(options.data[0].y, Some(10.0));
	assert_eq!(options.data[0].class, 0);
	assert_eq!(options.data[1].class, 1);
	assert_eq!(
		options.style.background_color.as_deref(),
		Some(crate::common::TRANSPARENT_BACKGROUND)
	);
}

#[test]
fn test_build_bar_chart_nan_y() {
	let chart = build_bar_chart(&[1.0], &[std::f32::NAN], &[0], "V1", "Amount");
	let options = chart.as_bar().unwrap();
	assert_eq!(options.data[0].y, None);
}
