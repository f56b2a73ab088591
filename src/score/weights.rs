use crate::types::issue::IssueName;
use crate::types::scoring::SeverityLevel;

/// Points deducted from the base score for one detected issue.
pub fn deduction_weight(issue: IssueName, level: SeverityLevel) -> u32 {
    use SeverityLevel::{Mild, Moderate, Severe};

    match (issue, level) {
        (IssueName::Acne, Severe) => 30,
        (IssueName::Acne, Moderate) => 20,
        (IssueName::Acne, Mild) => 10,
        (IssueName::DarkSpots, Severe) => 25,
        (IssueName::DarkSpots, Moderate) => 15,
        (IssueName::DarkSpots, Mild) => 8,
        (IssueName::FineLines, Severe) => 20,
        (IssueName::FineLines, Moderate) => 12,
        (IssueName::FineLines, Mild) => 6,
        (IssueName::Oiliness | IssueName::Redness, Severe) => 15,
        (IssueName::Oiliness | IssueName::Redness, Moderate) => 10,
        (IssueName::Oiliness | IssueName::Redness, Mild) => 5,
        (IssueName::UnevenTexture, Severe) => 10,
        (IssueName::UnevenTexture, Moderate) => 6,
        (IssueName::UnevenTexture, Mild) => 3,
    }
}
