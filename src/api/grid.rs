use crate::core::ResolvedViewport;
use crate::extensions::GridPlugin;
use crate::render::Renderer;

use super::{GridConfig, GridStats};

/// Grid overlay facade consumed by host applications.
///
/// `GridOverlay` owns the persistent configuration, the renderer holding the
/// element pool, and the plugins notified after each update.
pub struct GridOverlay<R: Renderer> {
    pub(super) renderer: R,
    pub(super) instance_id: u64,
    pub(super) config: GridConfig,
    pub(super) viewport: Option<ResolvedViewport>,
    pub(super) group_stats: Vec<GridStats>,
    pub(super) plugins: Vec<Box<dyn GridPlugin>>,
    pub(super) update_count: u64,
}

impl<R: Renderer> GridOverlay<R> {
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access for hosts that resize the container between updates.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Identifier separating this overlay's elements from other instances.
    #[must_use]
    pub fn instance_id(&self) -> u64 {
        self.instance_id
    }

    /// Viewport resolved by the last pass.
    #[must_use]
    pub fn viewport(&self) -> Option<&ResolvedViewport> {
        self.viewport.as_ref()
    }

    /// Per-group stats of the last pass, in lines-slot order.
    #[must_use]
    pub fn group_stats(&self) -> &[GridStats] {
        &self.group_stats
    }

    /// Number of completed update passes.
    #[must_use]
    pub fn update_count(&self) -> u64 {
        self.update_count
    }
}
