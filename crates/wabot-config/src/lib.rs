//! # Wabot Config
//!
//! Environment-backed configuration for the Wabot chat bot.
//!
//! Every setting resolves from the process environment, optionally
//! pre-populated by a dotenv-style override file, and falls back to a
//! built-in default when absent. The resolved table is published behind an
//! atomic pointer and can be hot-reloaded when the override file changes.
//!
//! ```no_run
//! use std::sync::Arc;
//! use wabot_config::{ConfigManager, ConfigWatcher, DEFAULT_OVERRIDE_FILE};
//!
//! let manager = Arc::new(ConfigManager::load(DEFAULT_OVERRIDE_FILE));
//! let _watcher = ConfigWatcher::spawn(Arc::clone(&manager))?;
//!
//! let config = manager.current();
//! println!("bot name: {}", config.get("BOT_NAME").unwrap());
//! # Ok::<(), wabot_common::WabotError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod loader;
pub mod manager;
pub mod settings;
pub mod source;
pub mod watcher;

pub use loader::ConfigLoader;
pub use manager::ConfigManager;
pub use settings::{ConfigTable, Setting, SETTINGS};
pub use source::{EnvSource, DEFAULT_OVERRIDE_FILE};
pub use watcher::ConfigWatcher;
