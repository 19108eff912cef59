#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod locator;
pub mod models;
pub mod registry;
pub mod roots;
pub mod script_ref;

pub use config::LocatorConfig;
pub use locator::ScriptLocator;
pub use models::ResolvedScript;
pub use registry::{AppLocation, AppRegistry, StaticAppRegistry};
pub use roots::{ServerLayout, Theme};
