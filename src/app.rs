//! App Core for SecurePass.
//!
//! Central struct holding the generator, the password history and the
//! settings engine, all rooted at one base directory.

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::services::password_generator::PasswordGenerator;
use crate::services::password_store::PasswordStore;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

/// File name of the saved password history.
pub const PASSWORD_FILE: &str = "passwords.json";
/// File name of the user settings.
pub const CONFIG_FILE: &str = "config.json";

/// Central application struct holding all services.
pub struct App {
    pub generator: PasswordGenerator<StdRng>,
    pub password_store: PasswordStore,
    pub settings_engine: SettingsEngine,
}

impl App {
    /// Creates an App whose files live in `base_dir` and loads saved settings.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self::with_generator(base_dir, PasswordGenerator::with_rng(StdRng::from_entropy()))
    }

    /// Like `new`, but with a reproducible password sequence.
    pub fn with_seed(base_dir: impl AsRef<Path>, seed: u64) -> Self {
        Self::with_generator(base_dir, PasswordGenerator::seeded(seed))
    }

    fn with_generator(base_dir: impl AsRef<Path>, generator: PasswordGenerator<StdRng>) -> Self {
        let base_dir = base_dir.as_ref();
        debug!(base_dir = %base_dir.display(), "initializing app");

        let password_store = PasswordStore::new(base_dir.join(PASSWORD_FILE));
        let mut settings_engine = SettingsEngine::new(base_dir.join(CONFIG_FILE));
        settings_engine.load();

        Self {
            generator,
            password_store,
            settings_engine,
        }
    }
}
