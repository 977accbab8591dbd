//! Decision Tree - CART classifier for the failure label
//!
//! Binary splits on `feature <= threshold`, Gini impurity, leaves store the
//! failure fraction of the samples that reached them. Nodes live in a flat
//! arena; the root is node 0.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::logic::features::FEATURE_COUNT;

/// Growth limits for a single tree
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeParams {
    pub max_depth: usize,
    pub min_samples_split: usize,
    /// Candidate features examined per split before settling
    pub max_features: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Leaf {
        /// Fraction of failing samples at this leaf
        failure_fraction: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// Training view: feature rows and their labels, addressed by index
pub struct TrainingSet<'a> {
    pub rows: &'a [[f64; FEATURE_COUNT]],
    pub labels: &'a [bool],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

struct SplitCandidate {
    impurity: f64,
    feature: usize,
    threshold: f64,
}

impl DecisionTree {
    /// Grow a tree on `samples` (indices into `data`, duplicates allowed).
    pub fn fit<R: Rng + ?Sized>(
        data: &TrainingSet<'_>,
        samples: &mut [usize],
        params: &TreeParams,
        rng: &mut R,
    ) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        tree.grow(data, samples, 0, params, rng);
        tree
    }

    /// Failure fraction of the leaf `x` falls into
    pub fn predict(&self, x: &[f64; FEATURE_COUNT]) -> f64 {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Leaf { failure_fraction } => return *failure_fraction,
                Node::Split { feature, threshold, left, right } => {
                    index = if x[*feature] <= *threshold { *left } else { *right };
                }
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Longest root-to-leaf path (root alone = 0)
    pub fn depth(&self) -> usize {
        fn walk(nodes: &[Node], index: usize) -> usize {
            match &nodes[index] {
                Node::Leaf { .. } => 0,
                Node::Split { left, right, .. } => 1 + walk(nodes, *left).max(walk(nodes, *right)),
            }
        }
        if self.nodes.is_empty() { 0 } else { walk(&self.nodes, 0) }
    }

    fn grow<R: Rng + ?Sized>(
        &mut self,
        data: &TrainingSet<'_>,
        samples: &mut [usize],
        depth: usize,
        params: &TreeParams,
        rng: &mut R,
    ) -> usize {
        let index = self.nodes.len();
        let total = samples.len();
        let failures = samples.iter().filter(|&&i| data.labels[i]).count();
        let failure_fraction = if total == 0 { 0.0 } else { failures as f64 / total as f64 };

        // Reserve slot so children get higher indices
        self.nodes.push(Node::Leaf { failure_fraction });

        let pure = failures == 0 || failures == total;
        if pure || depth >= params.max_depth || total < params.min_samples_split {
            return index;
        }

        let Some(best) = best_split(data, samples, failures, params.max_features, rng) else {
            return index;
        };

        // Partition in place: left block = feature <= threshold
        let mut boundary = 0;
        for k in 0..samples.len() {
            if data.rows[samples[k]][best.feature] <= best.threshold {
                samples.swap(k, boundary);
                boundary += 1;
            }
        }
        let (left_samples, right_samples) = samples.split_at_mut(boundary);

        let left = self.grow(data, left_samples, depth + 1, params, rng);
        let right = self.grow(data, right_samples, depth + 1, params, rng);
        self.nodes[index] = Node::Split {
            feature: best.feature,
            threshold: best.threshold,
            left,
            right,
        };
        index
    }
}

fn gini(failures: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let p = failures as f64 / total as f64;
    2.0 * p * (1.0 - p)
}

/// Lowest weighted-Gini split over a random feature order.
///
/// At least `max_features` features are examined; if none of them admits a
/// split (all values equal), the search continues through the rest.
fn best_split<R: Rng + ?Sized>(
    data: &TrainingSet<'_>,
    samples: &[usize],
    failures: usize,
    max_features: usize,
    rng: &mut R,
) -> Option<SplitCandidate> {
    let mut features: Vec<usize> = (0..FEATURE_COUNT).collect();
    features.shuffle(rng);

    let total = samples.len();
    let mut sorted = samples.to_vec();
    let mut best: Option<SplitCandidate> = None;

    for (examined, &feature) in features.iter().enumerate() {
        if examined >= max_features && best.is_some() {
            break;
        }

        sorted.sort_by(|&a, &b| data.rows[a][feature].total_cmp(&data.rows[b][feature]));

        let mut left_failures = 0;
        for split_at in 1..total {
            if data.labels[sorted[split_at - 1]] {
                left_failures += 1;
            }
            let lo = data.rows[sorted[split_at - 1]][feature];
            let hi = data.rows[sorted[split_at]][feature];
            if lo == hi {
                continue;
            }

            let right_total = total - split_at;
            let impurity = (split_at as f64 * gini(left_failures, split_at)
                + right_total as f64 * gini(failures - left_failures, right_total))
                / total as f64;

            if best.as_ref().map_or(true, |b| impurity < b.impurity) {
                best = Some(SplitCandidate {
                    impurity,
                    feature,
                    threshold: lo + (hi - lo) / 2.0,
                });
            }
        }
    }

    best
}
