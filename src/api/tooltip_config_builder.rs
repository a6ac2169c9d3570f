use crate::core::ChartOptions;

use super::axis_config_builder::parse_bound;
use super::render_config::{RenderConfiguration, TooltipConfig};
use super::tooltip_formatter::TooltipFormatter;
use super::tooltip_positioner::TooltipPositioner;

/// HTML tooltip with chart-type aware placement; empty without a tooltip callback.
#[must_use]
pub fn tooltip_configuration(options: &ChartOptions) -> RenderConfiguration {
    let Some(callback) = options.actions.tooltip.clone() else {
        return RenderConfiguration::default();
    };

    RenderConfiguration {
        tooltip: Some(TooltipConfig {
            border_width: Some(0.0),
            border_radius: Some(0.0),
            shadow: Some(false),
            use_html: Some(true),
            follow_pointer: Some(should_follow_pointer(options)),
            positioner: Some(TooltipPositioner::new(options.chart_type, options.stacking)),
            formatter: Some(TooltipFormatter::new(
                options.chart_type,
                options.stacking,
                callback,
            )),
        }),
        ..RenderConfiguration::default()
    }
}

/// A point clipped by an explicit axis bound has no visible anchor, so the
/// tooltip follows the pointer instead.
#[must_use]
pub fn should_follow_pointer(options: &ChartOptions) -> bool {
    let props = options.value_axis_props();
    let min = parse_bound(props.and_then(|props| props.min.as_deref()), "min");
    let max = parse_bound(props.and_then(|props| props.max.as_deref()), "max");
    if min.is_none() && max.is_none() {
        return false;
    }

    let Some((data_min, data_max)) = data_value_range(options) else {
        return false;
    };
    max.is_some_and(|max| data_max > max) || min.is_some_and(|min| data_min < min)
}

fn data_value_range(options: &ChartOptions) -> Option<(f64, f64)> {
    options
        .series()
        .iter()
        .flat_map(|series| {
            let stacked = series.y_data.iter().copied().flatten();
            let plotted = series
                .data
                .iter()
                .flatten()
                .filter_map(|point| point.y.or(point.value));
            stacked.chain(plotted)
        })
        .filter(|value| value.is_finite())
        .fold(None, |range, value| match range {
            None => Some((value, value)),
            Some((min, max)) => Some((f64::min(min, value), f64::max(max, value))),
        })
}
