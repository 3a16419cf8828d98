//! This module contains the main entrypoint to the fraudboard cli. It is the clock for the dashboard: it builds the pipeline once, then emits one refresh result as a json line per tick until it is interrupted or `--ticks` runs out.

use anyhow::Result;
use clap::Clap;
use fraudboard_core::{
	load_config, AccuracyEstimator, Dashboard, DatasetStore, Trigger, DEFAULT_ESTIMATE_DELAY_MS,
	DEFAULT_X_AXIS, DEFAULT_Y_AXIS,
};
use std::{path::PathBuf, time::Duration};

#[derive(Clap)]
#[clap(about = "Serve refreshes of the fraud dashboard as json lines.")]
struct Options {
	#[clap(short, long, about = "the path to the transactions .csv file")]
	file: PathBuf,
	#[clap(short, long, about = "the path to a config file")]
	config: Option<PathBuf>,
	#[clap(long, about = "the column to chart on the x axis")]
	x_axis: Option<String>,
	#[clap(long, about = "the column to chart on the y axis")]
	y_axis: Option<String>,
	#[clap(
		long,
		env = "FRAUDBOARD_INTERVAL",
		default_value = "5",
		about = "seconds between refreshes"
	)]
	interval: u64,
	#[clap(long, about = "exit after this many refreshes")]
	ticks: Option<u64>,
}

fn main() -> Result<()> {
	let options = Options::parse();
	let env = env_logger::Env::default().default_filter_or("info");
	env_logger::from_env(env)
		.format_level(false)
		.format_module_path(false)
		.format_timestamp(None)
		.init();
	let config = load_config(options.config.as_deref())?;
	let store = DatasetStore::load(&options.file, config.as_ref());
	log::info!(
		"loaded {} rows, charting {} of them",
		store.dataframe().nrows(),
		store.sample().nrows(),
	);
	let x_axis = options
		.x_axis
		.or_else(|| {
			config
				.as_ref()
				.and_then(|config| config.default_x_axis.clone())
		})
		.unwrap_or_else(|| DEFAULT_X_AXIS.to_owned());
	let y_axis = options
		.y_axis
		.or_else(|| {
			config
				.as_ref()
				.and_then(|config| config.default_y_axis.clone())
		})
		.unwrap_or_else(|| DEFAULT_Y_AXIS.to_owned());
	let delay = config
		.as_ref()
		.and_then(|config| config.estimate_delay_ms)
		.unwrap_or(DEFAULT_ESTIMATE_DELAY_MS);
	let estimator = AccuracyEstimator::new(Duration::from_millis(delay));
	let mut dashboard = Dashboard::new(store, estimator);
	log::info!(
		"axis columns: {}",
		dashboard.store().column_names().join(", ")
	);
	let mut tick = 0;
	loop {
		let result = dashboard.refresh(Trigger::Tick(tick), &x_axis, &y_axis);
		println!("{}", serde_json::to_string(&result)?);
		tick += 1;
		if let Some(ticks) = options.ticks {
			if tick >= ticks {
				break;
			}
		}
		std::thread::sleep(Duration::from_secs(options.interval));
	}
	Ok(())
}
