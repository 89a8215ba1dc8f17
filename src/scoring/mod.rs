pub mod algorithm;
pub mod calculator;
pub mod extractor;
pub mod normalize;
pub mod weights;

pub use algorithm::{rank_scores, ScoringAlgorithm};
pub use calculator::ScoreCalculator;
pub use extractor::FeatureExtractor;
pub use normalize::{min_max_normalize, EPSILON};
pub use weights::ScoringWeights;
