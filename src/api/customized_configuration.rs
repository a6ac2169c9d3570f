use tracing::{debug, trace};

use crate::core::ChartOptions;
use crate::error::ChartResult;

use super::axis_config_builder::axes_configuration;
use super::data_config_builder::data_configuration;
use super::grid_config_builder::grid_configuration;
use super::hover_style_resolver::hover_styles;
use super::labels_config_builder::labels_configuration;
use super::merge::{Merge, merged};
use super::percent_config_builder::percent_configuration;
use super::render_config::RenderConfiguration;
use super::stacking_config_builder::stacking_configuration;
use super::title_config_builder::title_configuration;
use super::tooltip_config_builder::tooltip_configuration;

/// One pipeline step: derives a fragment from the options and everything
/// merged so far.
pub type Configurator =
    fn(&ChartOptions, &RenderConfiguration) -> ChartResult<RenderConfiguration>;

/// Pipeline steps in merge order. Later fragments win on conflicting leaves.
pub const CONFIGURATORS: [(&str, Configurator); 9] = [
    ("axes", |options, _| Ok(axes_configuration(options))),
    ("title", |options, _| Ok(title_configuration(options))),
    ("stacking", |options, _| Ok(stacking_configuration(options))),
    ("percent", |options, _| Ok(percent_configuration(options))),
    ("labels", |options, _| Ok(labels_configuration(options))),
    ("data", |options, _| Ok(data_configuration(options))),
    ("tooltip", |options, _| Ok(tooltip_configuration(options))),
    ("hover", hover_styles),
    ("grid", |options, _| Ok(grid_configuration(options))),
];

/// Derives the full engine configuration for `options`.
///
/// The accumulator is never handed back directly; callers receive a fresh
/// value merged into an empty configuration.
pub fn get_customized_configuration(options: &ChartOptions) -> ChartResult<RenderConfiguration> {
    debug!(
        chart_type = %options.chart_type,
        series = options.series().len(),
        x_axes = options.x_axes.len(),
        y_axes = options.y_axes.len(),
        "derive customized configuration"
    );

    let mut config = RenderConfiguration::default();
    for (name, configurator) in CONFIGURATORS {
        let fragment = configurator(options, &config)?;
        trace!(configurator = name, empty = fragment.is_empty(), "merge fragment");
        config.merge_from(fragment);
    }

    let config = merged(&RenderConfiguration::default(), config);
    debug!(
        series = config.series.len(),
        x_axes = config.x_axis.len(),
        y_axes = config.y_axis.len(),
        "customized configuration ready"
    );
    Ok(config)
}
