use crate::types::scoring::{Score, ScoreCategory};

const EXCELLENT: ScoreCategory = ScoreCategory {
    category: "Excellent",
    description: "Your skin is in great condition! Keep up your routine.",
    color: "#10B981",
};

const GOOD: ScoreCategory = ScoreCategory {
    category: "Good",
    description: "Your skin is healthy with minor concerns to address.",
    color: "#14B8A6",
};

const FAIR: ScoreCategory = ScoreCategory {
    category: "Fair",
    description: "Improvement possible with consistent skincare.",
    color: "#F59E0B",
};

const NEEDS_ATTENTION: ScoreCategory = ScoreCategory {
    category: "Needs Attention",
    description: "Focus on addressing key skin concerns.",
    color: "#F97316",
};

const NEEDS_IMPROVEMENT: ScoreCategory = ScoreCategory {
    category: "Needs Improvement",
    description: "Consult a dermatologist for personalized care.",
    color: "#EF4444",
};

/// Descending cutoffs, first match wins. Scores outside 0-100 land in the
/// nearest tier.
pub fn score_category(score: Score) -> ScoreCategory {
    match score {
        s if s >= 85 => EXCELLENT,
        s if s >= 70 => GOOD,
        s if s >= 55 => FAIR,
        s if s >= 40 => NEEDS_ATTENTION,
        _ => NEEDS_IMPROVEMENT,
    }
}
