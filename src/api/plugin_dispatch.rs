use crate::extensions::{GridEvent, PluginContext};
use crate::render::Renderer;

use super::GridOverlay;

impl<R: Renderer> GridOverlay<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        let (viewport_width, viewport_height) = self
            .viewport
            .as_ref()
            .map_or((0.0, 0.0), |viewport| (viewport.width, viewport.height));
        PluginContext {
            instance_id: self.instance_id,
            viewport_width,
            viewport_height,
            lines_len: self.config.lines.iter().flatten().count(),
            axes_len: self.config.axes.iter().flatten().count(),
            update_count: self.update_count,
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: GridEvent) {
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
