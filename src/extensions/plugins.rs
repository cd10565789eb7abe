use serde::{Deserialize, Serialize};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub instance_id: u64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Configured (non-empty) lines slots.
    pub lines_len: usize,
    /// Configured (non-empty) axis slots.
    pub axes_len: usize,
    pub update_count: u64,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridEvent {
    /// One successful `update` or `refresh` call completed.
    Updated,
}

/// Extension hook interface for observing overlay updates.
///
/// Plugins read overlay context without mutating the element pool.
pub trait GridPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: GridEvent, context: PluginContext);
}
