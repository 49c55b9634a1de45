pub mod forest;
pub mod training;

pub use forest::{ForestConfig, RegressionForest, FEATURE_COUNT};
pub use training::{
    reference_label, sample_features, synthetic_training_set, TrainingSet, TRAINING_EXAMPLES,
};

use rand::Rng;

use crate::error::Result;
use crate::models::UserProfile;

/// Daily-calorie model, fitted once at process start and read-only after.
pub struct CalorieEstimator {
    forest: RegressionForest,
}

impl CalorieEstimator {
    /// Train on a fresh synthetic training set with default limits.
    pub fn train(rng: &mut impl Rng) -> Result<Self> {
        Self::train_with(TRAINING_EXAMPLES, &ForestConfig::default(), rng)
    }

    pub fn train_with(samples: usize, config: &ForestConfig, rng: &mut impl Rng) -> Result<Self> {
        let data = synthetic_training_set(rng, samples);
        let forest = RegressionForest::fit(&data.features, &data.labels, config, rng)?;
        Ok(Self { forest })
    }

    /// Raw model output for a feature vector.
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        self.forest.predict(features)
    }

    /// Daily calorie target for a profile, truncated to whole kcal.
    ///
    /// Assumes the profile was range-checked at the prompt boundary.
    pub fn estimate(&self, profile: &UserProfile) -> i64 {
        self.predict(&profile.features()) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Goal};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_train_produces_working_estimator() {
        let mut rng = StdRng::seed_from_u64(7);
        let estimator = CalorieEstimator::train(&mut rng).unwrap();

        let profile = UserProfile {
            age: 30,
            weight_kg: 75,
            height_cm: 175,
            activity: ActivityLevel::ModeratelyActive,
            goal: Goal::Maintenance,
        };
        let target = estimator.estimate(&profile);
        assert!(target > 0);
    }

    #[test]
    fn test_same_seed_gives_same_estimate() {
        let profile = UserProfile {
            age: 45,
            weight_kg: 60,
            height_cm: 160,
            activity: ActivityLevel::Sedentary,
            goal: Goal::WeightLoss,
        };

        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        let est1 = CalorieEstimator::train(&mut rng1).unwrap();
        let est2 = CalorieEstimator::train(&mut rng2).unwrap();

        assert_eq!(est1.estimate(&profile), est2.estimate(&profile));
    }

    #[test]
    fn test_empty_training_set_is_fatal() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = CalorieEstimator::train_with(0, &ForestConfig::default(), &mut rng);
        assert!(result.is_err());
    }
}
