pub mod config;
pub mod export;
pub mod open;
pub mod remote;
pub mod store;

pub use config::*;
pub use export::*;
pub use open::*;
pub use remote::*;
pub use store::*;

use crate::core::{error::Result, Settings};
use std::path::Path;

/// Settings from `path` when given, otherwise from the user config directory
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
}
