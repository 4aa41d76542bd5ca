use serde::{Deserialize, Serialize};

/// Relative weight of each compatibility factor. Only factors both profiles
/// can supply are applied, and the result is divided by the applied weights,
/// so the weights need not sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityWeights {
    pub iq: f64,
    pub eq: f64,
    pub personality: f64,
    pub intent: f64,
}

impl CompatibilityWeights {
    pub const CANONICAL: Self = Self {
        iq: 0.25,
        eq: 0.25,
        personality: 0.30,
        intent: 0.20,
    };

    /// Replace any negative or non-finite weight with its canonical value.
    /// A split whose total overflows falls back to the canonical split.
    pub fn sanitized(self) -> Self {
        fn pick(value: f64, fallback: f64) -> f64 {
            if value.is_finite() && value >= 0.0 {
                value
            } else {
                fallback
            }
        }

        let weights = Self {
            iq: pick(self.iq, Self::CANONICAL.iq),
            eq: pick(self.eq, Self::CANONICAL.eq),
            personality: pick(self.personality, Self::CANONICAL.personality),
            intent: pick(self.intent, Self::CANONICAL.intent),
        };
        if weights.sum().is_finite() {
            weights
        } else {
            Self::CANONICAL
        }
    }

    pub fn sum(&self) -> f64 {
        self.iq + self.eq + self.personality + self.intent
    }
}

impl Default for CompatibilityWeights {
    fn default() -> Self {
        Self::CANONICAL
    }
}
