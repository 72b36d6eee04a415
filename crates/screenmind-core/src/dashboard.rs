//! Dashboard tabs and the data they display.
//!
//! Each tab is bound to a [`DashboardProvider`]. Until real sensor pipelines
//! exist, [`StubProvider`] returns the fixed sample content for its tab.

use std::fmt;
use std::str::FromStr;

use enum_map::{Enum, EnumMap};
use serde::{Deserialize, Serialize};

/// Dashboard tabs inside the home screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Usage,
    Sleep,
    Social,
    #[serde(alias = "mobility")]
    Isolation,
}

impl Tab {
    /// Returns all tabs in display order.
    pub fn all() -> &'static [Tab] {
        &[Tab::Usage, Tab::Sleep, Tab::Social, Tab::Isolation]
    }

    /// Route name of the tab.
    pub fn route_name(self) -> &'static str {
        match self {
            Tab::Usage => "Usage",
            Tab::Sleep => "Sleep",
            Tab::Social => "Social",
            Tab::Isolation => "Isolation",
        }
    }

    /// Label shown in the tab bar.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Usage => "Usage",
            Tab::Sleep => "Sleep",
            Tab::Social => "Social",
            Tab::Isolation => "Mobility",
        }
    }

    pub fn index(self) -> usize {
        self.into_usize()
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::all().get(index).copied()
    }

    /// Next tab, wrapping around after the last.
    #[must_use]
    pub fn next(self) -> Tab {
        let all = Tab::all();
        all[(self.index() + 1) % all.len()]
    }

    /// Previous tab, wrapping around before the first.
    #[must_use]
    pub fn prev(self) -> Tab {
        let all = Tab::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Tab {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "usage" => Ok(Tab::Usage),
            "sleep" => Ok(Tab::Sleep),
            "social" => Ok(Tab::Social),
            "isolation" | "mobility" => Ok(Tab::Isolation),
            other => anyhow::bail!(
                "Unknown tab '{other}' (expected usage, sleep, social or mobility)"
            ),
        }
    }
}

/// Sentiment estimate for social interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
            Sentiment::Positive => "Positive",
        })
    }
}

/// Coarse movement level derived from location entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobilityLevel {
    Low,
    Moderate,
    High,
}

impl fmt::Display for MobilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MobilityLevel::Low => "Low",
            MobilityLevel::Moderate => "Moderate",
            MobilityLevel::High => "High",
        })
    }
}

/// The payload a dashboard shows inside its placeholder box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reading {
    Placeholder(String),
    SleepScore(u8),
    Mood(Sentiment),
    Movement(MobilityLevel),
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Placeholder(label) => f.write_str(label),
            Reading::SleepScore(score) => write!(f, "Sleep Score: {score}"),
            Reading::Mood(sentiment) => write!(f, "Mood: {sentiment}"),
            Reading::Movement(level) => write!(f, "Movement: {level}"),
        }
    }
}

/// Everything a dashboard view needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub title: String,
    pub subtitle: String,
    pub reading: Reading,
}

/// Data source bound to a dashboard view.
pub trait DashboardProvider: Send + Sync {
    fn snapshot(&self) -> DashboardSnapshot;
}

/// Provider returning fixed sample content for one tab.
#[derive(Debug, Clone, Copy)]
pub struct StubProvider {
    tab: Tab,
}

impl StubProvider {
    pub fn new(tab: Tab) -> Self {
        Self { tab }
    }
}

impl DashboardProvider for StubProvider {
    fn snapshot(&self) -> DashboardSnapshot {
        let (title, subtitle, reading) = match self.tab {
            Tab::Usage => (
                "📱 Screen Usage",
                "Analyzing Logs & Addiction Risk",
                Reading::Placeholder("Graph Goes Here".to_string()),
            ),
            Tab::Sleep => (
                "😴 Sleep Pattern",
                "Light Sensor & Accelerometer Data",
                Reading::SleepScore(85),
            ),
            Tab::Social => (
                "💬 Social Interaction",
                "Sentiment Analysis (NLP)",
                Reading::Mood(Sentiment::Positive),
            ),
            Tab::Isolation => (
                "📍 Mobility & Isolation",
                "GPS & Movement Entropy",
                Reading::Movement(MobilityLevel::High),
            ),
        };
        DashboardSnapshot {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            reading,
        }
    }
}

/// One provider per tab.
pub type Providers = EnumMap<Tab, Box<dyn DashboardProvider>>;

/// Builds the stub provider set used until real providers are wired in.
pub fn stub_providers() -> Providers {
    EnumMap::from_fn(|tab| Box::new(StubProvider::new(tab)) as Box<dyn DashboardProvider>)
}
