use crate::{bar_chart::BarChartOptions, donut_chart::DonutChartOptions};

/// A description of a single chart. `Empty` is the description emitted when there is no data to show.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum ChartSpec {
	#[serde(rename = "bar")]
	Bar(BarChartOptions),
	#[serde(rename = "donut")]
	Donut(DonutChartOptions),
	#[serde(rename = "empty")]
	Empty,
}

impl ChartSpec {
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	pub fn as_bar(&self) -> Option<&BarChartOptions> {
		match self {
			Self::Bar(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_donut(&self) -> Option<&DonutChartOptions> {
		match self {
			Self::Donut(s) => Some(s),
			_ => None,
		}
	}
}

#[test]
fn test_serialize_tag() {
	let json = serde_json::to_value(&ChartSpec::Empty).unwrap();
	assert_eq!(json, serde_json::json!({ "type": "empty" }));
}
