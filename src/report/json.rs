use crate::types::scoring::{Score, ScoreCategory};
use serde::Serialize;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[derive(Serialize)]
struct CategoryView<'a> {
    score: Score,
    #[serde(flatten)]
    category: &'a ScoreCategory,
}

pub fn category_to_json(score: Score, category: &ScoreCategory) -> Result<String, serde_json::Error> {
    to_json(&CategoryView { score, category })
}
