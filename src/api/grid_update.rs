use tracing::{debug, trace, warn};

use crate::error::GridResult;
use crate::extensions::GridEvent;
use crate::render::Renderer;

use super::reconciler::{GroupPass, hide_all, hide_stale_axes, reconcile_group};
use super::validation::validate_grid_config;
use super::{GridOverlay, GridUpdate};

impl<R: Renderer> GridOverlay<R> {
    /// Merges `update` into the stored configuration and reconciles the pool.
    ///
    /// The merged configuration is validated before it replaces the stored
    /// one. A failing group aborts the pass; groups before it stay applied.
    pub fn update(&mut self, update: GridUpdate) -> GridResult<()> {
        let mut candidate = self.config.clone();
        candidate.apply(update);
        validate_grid_config(&candidate)?;
        self.config = candidate;

        self.run_pass()?;
        self.emit_plugin_event(GridEvent::Updated);
        Ok(())
    }

    /// Re-runs a pass with the stored configuration, e.g. after a resize.
    pub fn refresh(&mut self) -> GridResult<()> {
        self.run_pass()?;
        self.emit_plugin_event(GridEvent::Updated);
        Ok(())
    }

    pub(super) fn run_pass(&mut self) -> GridResult<()> {
        let container = self.renderer.container_size();
        let viewport = self.config.viewport.resolve(container)?;
        self.renderer.place_overlay(&viewport.rect)?;
        debug!(
            instance_id = self.instance_id,
            lines = self.config.lines.len(),
            axes = self.config.axes.len(),
            width = viewport.width,
            height = viewport.height,
            "starting grid update"
        );

        let hidden = hide_all(&mut self.renderer)?;
        trace!(hidden, "hid existing lines and labels");

        self.group_stats.clear();
        let mut shown_axes = Vec::new();
        for (index, slot) in self.config.lines.iter().enumerate() {
            let Some(group) = slot else {
                continue;
            };
            let pass = GroupPass {
                index,
                instance_id: self.instance_id,
                group,
                axis: self.config.axis(index),
                viewport: &viewport,
                locale: self.config.locale,
            };
            let outcome = match reconcile_group(&mut self.renderer, pass) {
                Ok(outcome) => outcome,
                Err(err) => {
                    warn!(group = index, error = %err, "aborting grid update");
                    self.viewport = Some(viewport);
                    return Err(err);
                }
            };
            if outcome.lines_created > 0 || outcome.labels_created > 0 {
                debug!(
                    group = index,
                    lines_created = outcome.lines_created,
                    labels_created = outcome.labels_created,
                    "created grid elements"
                );
            }
            shown_axes.extend(outcome.axis);
            self.group_stats.push(outcome.stats);
        }

        hide_stale_axes(&mut self.renderer, &shown_axes)?;
        self.viewport = Some(viewport);
        self.update_count += 1;
        Ok(())
    }
}
