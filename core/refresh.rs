use crate::{
	aggregate::aggregate,
	estimate::AccuracyEstimator,
	store::DatasetStore,
};
use fraudboard_charts::{build_bar_chart, build_donut_chart, ChartSpec};

/// The accuracy figures shown when there is no dataset to evaluate against.
pub const ACCURACY_NOT_AVAILABLE: &str = "N/A";

/// Why a refresh ran. The clock and the axis dropdowns live outside the pipeline; both deliver their events through [`Dashboard::refresh`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
	/// The fixed interval clock fired. Carries the tick number.
	Tick(u64),
	/// The user picked a different column for one of the axes.
	SelectionChange,
}

/// The dashboard is `Ready` when the dataset loaded with at least one row, and `Degenerate` otherwise. The state is fixed when the dashboard is built: there is no reload, so a degenerate dashboard stays degenerate until the process restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardState {
	Ready,
	Degenerate,
}

/// Everything the rendering layer needs for one refresh. Emitted once per trigger and replaced wholesale by the next refresh.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RefreshResult {
	pub bar_chart: ChartSpec,
	pub donut_chart: ChartSpec,
	pub training_accuracy: String,
	pub test_accuracy: String,
}

pub struct Dashboard {
	store: DatasetStore,
	estimator: AccuracyEstimator,
	state: DashboardState,
}

impl Dashboard {
	pub fn new(store: DatasetStore, estimator: AccuracyEstimator) -> Self {
		let state = if store.is_empty() {
			DashboardState::Degenerate
		} else {
			DashboardState::Ready
		};
		Self {
			store,
			estimator,
			state,
		}
	}

	pub fn state(&self) -> DashboardState {
		self.state
	}

	pub fn store(&self) -> &DatasetStore {
		&self.store
	}

	/// Run one refresh for the given trigger and axis selection. In the degenerate state this short circuits to empty charts and "N/A" figures without touching the aggregation engine or the estimator. An invalid selection degrades to the same output for this one refresh, it does not change the state.
	pub fn refresh(&mut self, trigger: Trigger, x_column: &str, y_column: &str) -> RefreshResult {
		if self.state == DashboardState::Degenerate {
			return degenerate_result();
		}
		let output = match aggregate(
			self.store.sample(),
			x_column,
			y_column,
			self.store.class_column(),
		) {
			Ok(output) => output,
			Err(error) => {
				log::warn!("refresh for {:?} degraded: {}", trigger, error);
				return degenerate_result();
			}
		};
		let bar_chart = build_bar_chart(
			&output.series_x,
			&output.series_y,
			&output.class_labels,
			x_column,
			y_column,
		);
		let donut_chart = build_donut_chart(&output.class_counts);
		let reading = self.estimator.estimate();
		RefreshResult {
			bar_chart,
			donut_chart,
			training_accuracy: format_accuracy(reading.training),
			test_accuracy: format_accuracy(reading.test),
		}
	}
}

fn degenerate_result() -> RefreshResult {
	RefreshResult {
		bar_chart: ChartSpec::Empty,
		donut_chart: ChartSpec::Empty,
		training_accuracy: ACCURACY_NOT_AVAILABLE.to_owned(),
		test_accuracy: ACCURACY_NOT_AVAILABLE.to_owned(),
	}
}

fn format_accuracy(value: f32) -> String {
	format!("{:.2}%", value * 100.0)
}

#[cfg(test)]
mod test {
	use super::*;
	use fraudboard_dataframe::{Column, DataFrame, EnumColumn, NumberColumn};
	use std::num::NonZeroUsize;
	use std::time::Duration;

	fn test_estimator() -> AccuracyEstimator {
		AccuracyEstimator::with_seed(Duration::from_millis(0), 42)
	}

	fn test_dataframe() -> DataFrame {
		DataFrame {
			columns: vec![
				Column::Number(NumberColumn {
					name: "V1".to_owned(),
					data: vec![1.0, 2.0],
				}),
				Column::Number(NumberColumn {
					name: "V2".to_owned(),
					data: vec![5.0, 6.0],
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
			],
		}
	}

	#[test]
	fn test_refresh_ready() {
		let store = DatasetStore::new(test_dataframe(), None);
		let mut dashboard = Dashboard::new(store, test_estimator());
		assert_eq!(dashboard.state(), DashboardState::Ready);
		let result = dashboard.refresh(Trigger::Tick(0), "V1", "Amount");
		let bar = result.bar_chart.as_bar().unwrap();
		assert_eq!(bar.data.len(), 2);
		assert_eq!(bar.data[0].x, 1.0);
		assert_eq!(bar.data[0].y, Some(10.0));
		assert_eq!(bar.data[1].class, 1);
		let donut = result.donut_chart.as_donut().unwrap();
		assert_eq!(donut.data[0].value, 1);
		assert_eq!(donut.data[1].value, 1);
		assert!(result.training_accuracy.ends_with('%'));
		assert!(result.test_accuracy.ends_with('%'));
	}

	#[test]
	fn test_refresh_degenerate() {
		let store = DatasetStore::new(
			DataFrame {
				columns: Vec::new(),
			},
			None,
		);
		let mut dashboard = Dashboard::new(store, test_estimator());
		assert_eq!(dashboard.state(), DashboardState::Degenerate);
		for tick in 0..3 {
			let result = dashboard.refresh(Trigger::Tick(tick), "V1", "Amount");
			assert!(result.bar_chart.is_empty());
			assert!(result.donut_chart.is_empty());
			assert_eq!(result.training_accuracy, ACCURACY_NOT_AVAILABLE);
			assert_eq!(result.test_accuracy, ACCURACY_NOT_AVAILABLE);
		}
	}

	#[test]
	fn test_refresh_invalid_selection_degrades_once() {
		let store = DatasetStore::new(test_dataframe(), None);
		let mut dashboard = Dashboard::new(store, test_estimator());
		let result = dashboard.refresh(Trigger::SelectionChange, "V99", "Amount");
		assert!(result.bar_chart.is_empty());
		assert_eq!(result.training_accuracy, ACCURACY_NOT_AVAILABLE);
		// The state is unchanged, so the next refresh with a valid selection succeeds.
		assert_eq!(dashboard.state(), DashboardState::Ready);
		let result = dashboard.refresh(Trigger::Tick(1), "V1", "Amount");
		assert!(result.bar_chart.as_bar().is_some());
	}

	#[test]
	fn test_selection_change_only_changes_series() {
		let store = DatasetStore::new(test_dataframe(), None);
		let mut dashboard = Dashboard::new(store, test_estimator());
		let before = dashboard.refresh(Trigger::Tick(0), "V1", "Amount");
		let after = dashboard.refresh(Trigger::SelectionChange, "V2", "Amount");
		let bar_before = before.bar_chart.as_bar().unwrap();
		let bar_after = after.bar_chart.as_bar().unwrap();
		assert_ne!(bar_before.data[0].x, bar_after.data[0].x);
		// The sample did not change, so the class distribution did not either.
		assert_eq!(before.donut_chart, after.donut_chart);
	}

	#[test]
	fn test_format_accuracy() {
		assert_eq!(format_accuracy(0.9123), "91.23%");
		assert_eq!(format_accuracy(0.9), "90.00%");
	}
}
