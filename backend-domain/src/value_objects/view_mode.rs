// Activity view mode value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Daily,
    Hourly,
    Weekly,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Daily => "daily",
            ViewMode::Hourly => "hourly",
            ViewMode::Weekly => "weekly",
        }
    }
}

impl From<&str> for ViewMode {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hourly" => ViewMode::Hourly,
            "weekly" => ViewMode::Weekly,
            _ => ViewMode::Daily,
        }
    }
}
