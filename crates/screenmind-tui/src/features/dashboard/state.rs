//! Dashboard state.

use enum_map::EnumMap;
use screenmind_core::dashboard::{DashboardSnapshot, Providers, Tab};

/// Content for every tab, captured once from the providers.
///
/// Views read from here; switching tabs never asks a provider again.
#[derive(Debug, Clone)]
pub struct DashboardState {
    snapshots: EnumMap<Tab, DashboardSnapshot>,
}

impl DashboardState {
    pub fn from_providers(providers: &Providers) -> Self {
        Self {
            snapshots: EnumMap::from_fn(|tab| providers[tab].snapshot()),
        }
    }

    pub fn snapshot(&self, tab: Tab) -> &DashboardSnapshot {
        &self.snapshots[tab]
    }
}

#[cfg(test)]
mod tests {
    use screenmind_core::dashboard::{Reading, stub_providers};

    use super::*;

    #[test]
    fn test_snapshots_follow_providers() {
        let state = DashboardState::from_providers(&stub_providers());
        assert_eq!(state.snapshot(Tab::Sleep).reading, Reading::SleepScore(85));
        assert_eq!(state.snapshot(Tab::Usage).title, "📱 Screen Usage");
    }
}
