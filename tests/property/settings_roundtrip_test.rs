//! Property-based tests for AppSettings persistence.
//!
//! Whatever sequence of dark mode toggles is applied, a fresh engine reading
//! the same file sees the last value written.

use proptest::prelude::*;
use tempfile::TempDir;

use securepass::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use securepass::types::settings::AppSettings;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn last_toggle_wins(toggles in proptest::collection::vec(any::<bool>(), 1..10)) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");

        let mut engine = SettingsEngine::new(path.clone());
        engine.load();
        for t in &toggles {
            engine.set_dark_mode(*t).unwrap();
        }

        let mut reopened = SettingsEngine::new(path);
        let loaded = reopened.load();
        prop_assert_eq!(loaded.dark_mode, *toggles.last().unwrap());
    }

    #[test]
    fn serde_roundtrip(dark_mode in any::<bool>()) {
        let settings = AppSettings { dark_mode };
        let json = serde_json::to_string(&settings).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, settings);
    }
}
