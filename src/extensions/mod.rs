//! Hooks notified by the overlay after each update.

pub mod plugins;

pub use plugins::{GridEvent, GridPlugin, PluginContext};
