mod axis_config_builder;
mod customized_configuration;
mod data_config_builder;
mod grid_config_builder;
mod hover_style_resolver;
mod json_contract;
mod label_formatter;
mod labels_config_builder;
mod legend_builder;
mod merge;
mod percent_config_builder;
mod render_config;
mod stacking_config_builder;
mod title_config_builder;
mod tooltip_config_builder;
mod tooltip_formatter;
mod tooltip_positioner;

pub use axis_config_builder::axes_configuration;
pub use customized_configuration::{CONFIGURATORS, Configurator, get_customized_configuration};
pub use data_config_builder::{colored_series, data_configuration, palette_color};
pub use grid_config_builder::grid_configuration;
pub use hover_style_resolver::{HOVER_BRIGHTNESS, MINIMUM_SAFE_BRIGHTNESS, hover_styles};
pub use json_contract::{RENDER_CONFIGURATION_JSON_SCHEMA_V1, RenderConfigurationJsonContractV1};
pub use label_formatter::{
    AxisLabelFormatter, DataLabelContext, DataLabelFormatter, StackLabelContext,
    StackLabelFormatter, format_label, has_only_positive_values,
};
pub use labels_config_builder::labels_configuration;
pub use legend_builder::{
    LegendConfig, LegendItem, build_legend, legend_items, should_legend_be_enabled,
};
pub use merge::{Merge, merged};
pub use percent_config_builder::percent_configuration;
pub use render_config::{
    AxisConfig, AxisLabels, AxisTitle, DataLabels, DrilldownConfig, HaloConfig, HoverState,
    MarkerConfig, MarkerHover, MarkerStates, PlotOptions, PointConfig, RenderConfiguration,
    SeriesConfig, SeriesPlotOptions, StackLabels, StatesConfig, TextStyle, TooltipConfig,
    TypePlotOptions,
};
pub use stacking_config_builder::stacking_configuration;
pub use title_config_builder::title_configuration;
pub use tooltip_config_builder::{should_follow_pointer, tooltip_configuration};
pub use tooltip_formatter::{TooltipContext, TooltipFormatter};
pub use tooltip_positioner::{
    ArrowAlignment, PlotArea, TOOLTIP_ARROW_OFFSET, TOOLTIP_BAR_CHART_VERTICAL_OFFSET,
    TOOLTIP_FULLSCREEN_THRESHOLD, TOOLTIP_MAX_WIDTH, TOOLTIP_VERTICAL_OFFSET, TooltipAnchor,
    TooltipPosition, TooltipPositioner, arrow_alignment, tooltip_horizontal_start,
};
