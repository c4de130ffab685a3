// SecurePass services
// Password generation, password history persistence, and user settings.

pub mod password_generator;
pub mod password_store;
pub mod settings_engine;
