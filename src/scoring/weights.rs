use serde::{Deserialize, Serialize};

/// Relative weight of each normalized feature in the composite score.
/// Weights are fractions of 1.0, not percentages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub tx_count: f64,
    pub net_borrow: f64,
    pub liquidations: f64,
    pub recency: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            tx_count: 0.20,
            net_borrow: 0.25,
            liquidations: 0.30,
            recency: 0.25,
        }
    }
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.tx_count + self.net_borrow + self.liquidations + self.recency
    }

    pub fn validate(&self) -> Result<(), String> {
        let total = self.total();
        if (total - 1.0).abs() > 1e-6 {
            return Err(format!("Weights must sum to 1.0, got {}", total));
        }

        if self.tx_count < 0.0
            || self.net_borrow < 0.0
            || self.liquidations < 0.0
            || self.recency < 0.0
        {
            return Err("All weights must be non-negative".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_are_valid() {
        assert!(ScoringWeights::default().validate().is_ok());
    }

    #[test]
    fn rejects_weights_not_summing_to_one() {
        let weights = ScoringWeights {
            tx_count: 0.5,
            net_borrow: 0.5,
            liquidations: 0.5,
            recency: 0.5,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn rejects_negative_weight() {
        let weights = ScoringWeights {
            tx_count: -0.2,
            net_borrow: 0.45,
            liquidations: 0.5,
            recency: 0.25,
        };
        assert!(weights.validate().is_err());
    }
}
