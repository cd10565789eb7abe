use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::error::GridResult;
use crate::render::Renderer;

use super::validation::validate_grid_config;
use super::{GridConfig, GridOverlay};

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

impl<R: Renderer> GridOverlay<R> {
    /// Creates the overlay and runs its first update pass.
    pub fn new(renderer: R, config: GridConfig) -> GridResult<Self> {
        validate_grid_config(&config)?;

        let instance_id = NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed);
        debug!(instance_id, "creating grid overlay");

        let mut overlay = Self {
            renderer,
            instance_id,
            config,
            viewport: None,
            group_stats: Vec::new(),
            plugins: Vec::new(),
            update_count: 0,
        };
        overlay.run_pass()?;
        Ok(overlay)
    }
}
