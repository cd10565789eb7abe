mod grid;
mod grid_config;
mod grid_init;
mod grid_update;
mod json_contract;
mod label_format;
mod layout_mapper;
mod plugin_dispatch;
mod plugin_registry;
mod reconciler;
mod stats;
mod tick_generator;
mod validation;
mod value_source;

pub use grid::GridOverlay;
pub use grid_config::{
    AxisConfig, AxisUpdate, GridConfig, GridUpdate, LinesGroupConfig, LinesGroupUpdate,
};
pub use json_contract::{GRID_CONFIG_JSON_SCHEMA_V1, GridConfigJsonContractV1};
pub use label_format::{LabelLocale, format_locale_number};
pub use layout_mapper::{label_layout, line_layout, offset_percent};
pub use stats::GridStats;
pub use tick_generator::{TICK_SPACING_PX, TickRequest, computed_ticks, generate_ticks};
pub use value_source::{TextGeneratorFn, TextSource, ValueGeneratorFn, ValueSource};
