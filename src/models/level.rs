use serde::{Deserialize, Serialize};
use std::fmt;

/// Gamification label derived from a user's summed points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum Level {
    #[serde(rename = "Newbie")]
    Newbie,
    #[serde(rename = "Eco Starter")]
    EcoStarter,
    #[serde(rename = "Green Hero")]
    GreenHero,
    #[serde(rename = "Eco Master")]
    EcoMaster,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::Newbie => "Newbie",
            Level::EcoStarter => "Eco Starter",
            Level::GreenHero => "Green Hero",
            Level::EcoMaster => "Eco Master",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Thresholds are inclusive; the highest one reached wins.
pub fn calculate_level(points: i64) -> Level {
    if points >= 500 {
        Level::EcoMaster
    } else if points >= 200 {
        Level::GreenHero
    } else if points >= 50 {
        Level::EcoStarter
    } else {
        Level::Newbie
    }
}
