use rand::Rng;

use crate::estimator::forest::FEATURE_COUNT;

/// Number of synthetic examples generated for a training run.
pub const TRAINING_EXAMPLES: usize = 100;

/// Sampling ranges for the numeric features (upper bound exclusive).
pub const AGE_SAMPLE_RANGE: (u32, u32) = (18, 60);
pub const WEIGHT_SAMPLE_RANGE: (u32, u32) = (50, 100);
pub const HEIGHT_SAMPLE_RANGE: (u32, u32) = (150, 190);

/// A synthetic training set: feature rows and their labels, index-aligned.
#[derive(Debug, Clone, Default)]
pub struct TrainingSet {
    pub features: Vec<[f64; FEATURE_COUNT]>,
    pub labels: Vec<f64>,
}

impl TrainingSet {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Draw one feature vector uniformly from the sampling ranges.
pub fn sample_features(rng: &mut impl Rng) -> [f64; FEATURE_COUNT] {
    [
        rng.gen_range(AGE_SAMPLE_RANGE.0..AGE_SAMPLE_RANGE.1) as f64,
        rng.gen_range(WEIGHT_SAMPLE_RANGE.0..WEIGHT_SAMPLE_RANGE.1) as f64,
        rng.gen_range(HEIGHT_SAMPLE_RANGE.0..HEIGHT_SAMPLE_RANGE.1) as f64,
        rng.gen_range(1..4) as f64,
        rng.gen_range(0..2) as f64,
    ]
}

/// Harris-Benedict style estimate used to label synthetic examples.
pub fn reference_label(features: &[f64; FEATURE_COUNT]) -> f64 {
    let [age, weight, height, activity, goal] = *features;
    weight * 10.0 + height * 6.25 - age * 5.0 + 5.0 * activity + 200.0 * (1.0 - goal)
}

/// Generate `samples` labeled examples for model fitting.
pub fn synthetic_training_set(rng: &mut impl Rng, samples: usize) -> TrainingSet {
    let mut set = TrainingSet {
        features: Vec::with_capacity(samples),
        labels: Vec::with_capacity(samples),
    };

    for _ in 0..samples {
        let features = sample_features(rng);
        set.labels.push(reference_label(&features));
        set.features.push(features);
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_reference_label_value() {
        // 70*10 + 170*6.25 - 25*5 + 5*2 + 200*(1-1) = 1647.5
        let features = [25.0, 70.0, 170.0, 2.0, 1.0];
        assert_float_absolute_eq!(reference_label(&features), 1647.5, 1e-9);

        // Goal code 0 adds the 200 kcal surplus.
        let features = [25.0, 70.0, 170.0, 2.0, 0.0];
        assert_float_absolute_eq!(reference_label(&features), 1847.5, 1e-9);
    }

    #[test]
    fn test_sampled_features_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let [age, weight, height, activity, goal] = sample_features(&mut rng);
            assert!((18.0..60.0).contains(&age));
            assert!((50.0..100.0).contains(&weight));
            assert!((150.0..190.0).contains(&height));
            assert!(activity == 1.0 || activity == 2.0 || activity == 3.0);
            assert!(goal == 0.0 || goal == 1.0);
        }
    }

    #[test]
    fn test_training_set_is_aligned() {
        let mut rng = StdRng::seed_from_u64(5);
        let set = synthetic_training_set(&mut rng, TRAINING_EXAMPLES);

        assert_eq!(set.len(), TRAINING_EXAMPLES);
        assert_eq!(set.features.len(), set.labels.len());
        for (features, label) in set.features.iter().zip(&set.labels) {
            assert_float_absolute_eq!(reference_label(features), *label, 1e-9);
        }
    }
}
