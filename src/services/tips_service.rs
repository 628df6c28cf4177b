use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

lazy_static! {
    static ref TIPS: HashMap<&'static str, Vec<&'static str>> = {
        let mut tips = HashMap::new();
        tips.insert(
            "transportation",
            vec!["Carpool when possible", "Use public transport", "Bike more often"],
        );
        tips.insert(
            "energy",
            vec!["Switch to LED bulbs", "Unplug unused devices", "Use energy-efficient appliances"],
        );
        tips.insert(
            "diet",
            vec!["Eat less red meat", "Buy local produce", "Avoid food waste"],
        );
        tips.insert(
            "waste",
            vec!["Recycle regularly", "Use reusable bags", "Avoid single-use plastics"],
        );
        tips
    };
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TipsResponse {
    pub category: String,
    pub tips: Vec<String>,
}

/// Unknown categories yield an empty list. Lookup is case-sensitive.
pub fn get_tips(category: &str) -> TipsResponse {
    let tips = TIPS
        .get(category)
        .map(|tips| tips.iter().map(|t| t.to_string()).collect())
        .unwrap_or_default();

    TipsResponse {
        category: category.to_string(),
        tips,
    }
}
