/// The background the dashboard draws charts on is dark, so charts default to a transparent background and light text.
pub const TRANSPARENT_BACKGROUND: &str = "rgba(0,0,0,0)";
pub const LIGHT_FONT_COLOR: &str = "white";

/// Style hints attached to every chart. Colors are css color strings.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
pub struct ChartStyle {
	pub background_color: Option<String>,
	pub font_color: Option<String>,
}

impl ChartStyle {
	pub fn transparent_light() -> Self {
		Self {
			background_color: Some(TRANSPARENT_BACKGROUND.to_owned()),
			font_color: Some(LIGHT_FONT_COLOR.to_owned()),
		}
	}
}
