use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use std::time::Duration;

pub const TRAINING_ACCURACY_MIN: f32 = 0.90;
pub const TRAINING_ACCURACY_MAX: f32 = 0.99;
pub const TEST_ACCURACY_MIN: f32 = 0.85;
pub const TEST_ACCURACY_MAX: f32 = 0.95;

/// One pair of simulated accuracy figures, regenerated on every refresh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracyReading {
	pub training: f32,
	pub test: f32,
}

/// Produces simulated accuracy readings. This stands in for scoring a real model: it blocks for a small fixed delay, then draws both figures uniformly from fixed ranges. It never fails and never touches the dataset.
pub struct AccuracyEstimator {
	delay: Duration,
	rng: Xoshiro256Plus,
}

impl AccuracyEstimator {
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			rng: Xoshiro256Plus::from_entropy(),
		}
	}

	/// A seeded estimator produces the same sequence of readings on every run.
	pub fn with_seed(delay: Duration, seed: u64) -> Self {
		Self {
			delay,
			rng: Xoshiro256Plus::seed_from_u64(seed),
		}
	}

	pub fn estimate(&mut self) -> AccuracyReading {
		std::thread::sleep(self.delay);
		let training = round_to_four_decimals(
			self.rng
				.gen_range(TRAINING_ACCURACY_MIN, TRAINING_ACCURACY_MAX),
		);
		let test =
			round_to_four_decimals(self.rng.gen_range(TEST_ACCURACY_MIN, TEST_ACCURACY_MAX));
		AccuracyReading { training, test }
	}
}

fn round_to_four_decimals(value: f32) -> f32 {
	(value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_estimates_stay_in_range() {
		let mut estimator = AccuracyEstimator::with_seed(Duration::from_millis(0), 42);
		for _ in 0..100 {
			let reading = estimator.estimate();
			assert!(reading.training >= TRAINING_ACCURACY_MIN);
			assert!(reading.training <= TRAINING_ACCURACY_MAX);
			assert!(reading.test >= TEST_ACCURACY_MIN);
			assert!(reading.test <= TEST_ACCURACY_MAX);
		}
	}

	#[test]
	fn test_estimates_are_rounded_to_four_decimals() {
		let mut estimator = AccuracyEstimator::with_seed(Duration::from_millis(0), 7);
		for _ in 0..100 {
			let reading = estimator.estimate();
			// A value with more than four decimals would land up to 0.5 away from an integer here; representation error only accounts for ~1e-3.
			for value in &[reading.training, reading.test] {
				let scaled = value * 10_000.0;
				assert!((scaled - scaled.round()).abs() < 1e-2);
			}
		}
	}

	#[test]
	fn test_round_to_four_decimals() {
		assert_eq!(round_to_four_decimals(0.912_345), 0.9123);
		assert_eq!(round_to_four_decimals(0.912_37), 0.9124);
	}
}
