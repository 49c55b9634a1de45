use rand::Rng;

use crate::error::{DietError, Result};

/// Width of the model's input: age, weight, height, activity, goal.
pub const FEATURE_COUNT: usize = 5;

/// Growth limits for the regression forest.
#[derive(Debug, Clone)]
pub struct ForestConfig {
    /// Number of bootstrap trees.
    pub trees: usize,

    /// Maximum split depth per tree.
    pub max_depth: usize,

    /// Minimum samples on each side of a split.
    pub min_leaf: usize,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            trees: 30,
            max_depth: 8,
            min_leaf: 2,
        }
    }
}

#[derive(Debug)]
enum Node {
    Leaf(f64),
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        match self {
            Node::Leaf(value) => *value,
            Node::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if features[*feature] <= *threshold {
                    left.predict(features)
                } else {
                    right.predict(features)
                }
            }
        }
    }
}

/// A single CART regression tree grown by variance reduction.
#[derive(Debug)]
pub struct RegressionTree {
    root: Node,
}

impl RegressionTree {
    fn fit(
        features: &[[f64; FEATURE_COUNT]],
        labels: &[f64],
        indices: Vec<usize>,
        config: &ForestConfig,
    ) -> Self {
        Self {
            root: grow(features, labels, indices, 0, config),
        }
    }

    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        self.root.predict(features)
    }
}

fn mean(labels: &[f64], indices: &[usize]) -> f64 {
    indices.iter().map(|&i| labels[i]).sum::<f64>() / indices.len() as f64
}

struct BestSplit {
    feature: usize,
    threshold: f64,
    sse: f64,
}

fn grow(
    features: &[[f64; FEATURE_COUNT]],
    labels: &[f64],
    indices: Vec<usize>,
    depth: usize,
    config: &ForestConfig,
) -> Node {
    let node_mean = mean(labels, &indices);

    if depth >= config.max_depth || indices.len() < config.min_leaf * 2 {
        return Node::Leaf(node_mean);
    }

    // Stop when the node is already pure.
    let node_sse: f64 = indices
        .iter()
        .map(|&i| {
            let d = labels[i] - node_mean;
            d * d
        })
        .sum();
    if node_sse < 1e-12 {
        return Node::Leaf(node_mean);
    }

    let best = match best_split(features, labels, &indices, config.min_leaf) {
        Some(split) => split,
        None => return Node::Leaf(node_mean),
    };

    let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
        .into_iter()
        .partition(|&i| features[i][best.feature] <= best.threshold);

    Node::Split {
        feature: best.feature,
        threshold: best.threshold,
        left: Box::new(grow(features, labels, left_idx, depth + 1, config)),
        right: Box::new(grow(features, labels, right_idx, depth + 1, config)),
    }
}

/// Find the split minimizing the summed squared error of the two sides.
///
/// Candidate thresholds are midpoints between adjacent distinct feature
/// values; both sides must keep at least `min_leaf` samples.
fn best_split(
    features: &[[f64; FEATURE_COUNT]],
    labels: &[f64],
    indices: &[usize],
    min_leaf: usize,
) -> Option<BestSplit> {
    let n = indices.len();
    let mut best: Option<BestSplit> = None;

    for feature in 0..FEATURE_COUNT {
        let mut ordered = indices.to_vec();
        ordered.sort_by(|&a, &b| {
            features[a][feature]
                .partial_cmp(&features[b][feature])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut prefix_sum = vec![0.0; n + 1];
        let mut prefix_sq = vec![0.0; n + 1];
        for (pos, &i) in ordered.iter().enumerate() {
            prefix_sum[pos + 1] = prefix_sum[pos] + labels[i];
            prefix_sq[pos + 1] = prefix_sq[pos] + labels[i] * labels[i];
        }

        for cut in min_leaf..=(n - min_leaf) {
            let lo = features[ordered[cut - 1]][feature];
            let hi = features[ordered[cut]][feature];
            if hi <= lo {
                continue;
            }

            let left_n = cut as f64;
            let right_n = (n - cut) as f64;
            let left_sum = prefix_sum[cut];
            let right_sum = prefix_sum[n] - left_sum;
            let left_sse = prefix_sq[cut] - left_sum * left_sum / left_n;
            let right_sse = (prefix_sq[n] - prefix_sq[cut]) - right_sum * right_sum / right_n;
            let total = left_sse + right_sse;

            if best.as_ref().map_or(true, |b| total < b.sse) {
                best = Some(BestSplit {
                    feature,
                    threshold: (lo + hi) / 2.0,
                    sse: total,
                });
            }
        }
    }

    best
}

/// Bootstrap ensemble of regression trees; prediction is the tree mean.
#[derive(Debug)]
pub struct RegressionForest {
    trees: Vec<RegressionTree>,
}

impl RegressionForest {
    pub fn fit(
        features: &[[f64; FEATURE_COUNT]],
        labels: &[f64],
        config: &ForestConfig,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        if features.is_empty() {
            return Err(DietError::Training("training set is empty".to_string()));
        }
        if features.len() != labels.len() {
            return Err(DietError::Training(
                "feature and label counts differ".to_string(),
            ));
        }
        if config.trees == 0 {
            return Err(DietError::Training(
                "forest needs at least one tree".to_string(),
            ));
        }
        if config.min_leaf == 0 {
            return Err(DietError::Training(
                "leaves need at least one sample".to_string(),
            ));
        }
        if labels.iter().any(|l| !l.is_finite()) {
            return Err(DietError::Training(
                "non-finite label in training set".to_string(),
            ));
        }

        let n = features.len();
        let trees = (0..config.trees)
            .map(|_| {
                let sample: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
                RegressionTree::fit(features, labels, sample, config)
            })
            .collect();

        Ok(Self { trees })
    }

    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let total: f64 = self.trees.iter().map(|t| t.predict(features)).sum();
        total / self.trees.len() as f64
    }
}
