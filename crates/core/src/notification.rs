//! Scenario notification channel types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where a scenario notification is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationType {
    MsTeams,
    Gchat,
    Slack,
}

impl NotificationType {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationType::MsTeams => "ms-teams",
            NotificationType::Gchat => "gchat",
            NotificationType::Slack => "slack",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ms-teams" => Ok(NotificationType::MsTeams),
            "gchat" => Ok(NotificationType::Gchat),
            "slack" => Ok(NotificationType::Slack),
            other => Err(format!("unknown notification type '{other}'")),
        }
    }
}
