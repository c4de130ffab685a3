use serde::{Deserialize, Serialize};

/// User preferences persisted in `config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    #[serde(default)]
    pub dark_mode: bool,
}
