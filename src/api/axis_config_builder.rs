use tracing::warn;

use crate::core::{Axis, AxisProps, AxisTheme, ChartOptions};

use super::render_config::{AxisConfig, AxisLabels, AxisTitle, RenderConfiguration, TextStyle};

const Y_AXIS_TITLE_MARGIN: f64 = 15.0;
const X_AXIS_TITLE_MARGIN: f64 = 10.0;
const X_AXIS_MAX_PADDING: f64 = 0.05;
const X_AXIS_AUTO_ROTATION: i32 = -90;

/// Visual axis configuration: visibility, bounds, tick snapping and styling.
///
/// Output vectors are index-aligned with `y_axes`/`x_axes`; absent slots map
/// to a hidden axis.
#[must_use]
pub fn axes_configuration(options: &ChartOptions) -> RenderConfiguration {
    let y_axis = options
        .y_axes
        .iter()
        .map(|axis| match axis {
            Some(axis) => y_axis_config(axis, options.value_axis_props(), &options.theme),
            None => AxisConfig::hidden(),
        })
        .collect();

    let x_axis = options
        .x_axes
        .iter()
        .map(|axis| match axis {
            Some(_) => x_axis_config(options.category_axis_props(), &options.theme),
            None => AxisConfig::hidden(),
        })
        .collect();

    RenderConfiguration {
        x_axis,
        y_axis,
        ..RenderConfiguration::default()
    }
}

fn y_axis_config(axis: &Axis, props: Option<&AxisProps>, theme: &AxisTheme) -> AxisConfig {
    let min = parse_bound(props.and_then(|props| props.min.as_deref()), "min");
    let max = parse_bound(props.and_then(|props| props.max.as_deref()), "max");
    let visible = props.and_then(|props| props.visible).unwrap_or(true);
    let labels_enabled = props.and_then(|props| props.labels_enabled).unwrap_or(true);

    AxisConfig {
        visible: Some(visible),
        min,
        max,
        start_on_tick: Some(should_snap_to_tick(min, max)),
        end_on_tick: Some(should_snap_to_tick(min, max)),
        opposite: axis.opposite,
        grid_line_color: Some(theme.grid_line_color.clone()),
        labels: Some(AxisLabels {
            enabled: Some(labels_enabled),
            style: Some(label_style(theme)),
            ..AxisLabels::default()
        }),
        title: Some(AxisTitle {
            margin: Some(Y_AXIS_TITLE_MARGIN),
            style: Some(title_style(theme)),
            ..AxisTitle::default()
        }),
        ..AxisConfig::default()
    }
}

fn x_axis_config(props: Option<&AxisProps>, theme: &AxisTheme) -> AxisConfig {
    let visible = props.and_then(|props| props.visible).unwrap_or(true);

    // Label enablement on category axes is owned by the data configurator.
    AxisConfig {
        visible: Some(visible),
        line_color: Some(theme.axis_line_color.clone()),
        minor_tick_length: Some(0.0),
        tick_length: Some(0.0),
        max_padding: Some(X_AXIS_MAX_PADDING),
        labels: Some(AxisLabels {
            style: Some(label_style(theme)),
            auto_rotation: Some(vec![X_AXIS_AUTO_ROTATION]),
            ..AxisLabels::default()
        }),
        title: Some(AxisTitle {
            margin: Some(X_AXIS_TITLE_MARGIN),
            style: Some(title_style(theme)),
            ..AxisTitle::default()
        }),
        ..AxisConfig::default()
    }
}

fn label_style(theme: &AxisTheme) -> TextStyle {
    TextStyle {
        color: Some(theme.label_color.clone()),
        font: Some(theme.label_font.clone()),
        text_shadow: None,
    }
}

fn title_style(theme: &AxisTheme) -> TextStyle {
    TextStyle {
        color: Some(theme.title_color.clone()),
        font: Some(theme.title_font.clone()),
        text_shadow: None,
    }
}

/// Parses a user-entered bound; empty and non-numeric input count as "no bound".
pub(crate) fn parse_bound(raw: Option<&str>, bound: &'static str) -> Option<f64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            warn!(bound, value = raw, "ignoring non-numeric axis bound");
            None
        }
    }
}

/// Tick snapping would stretch the scale past a user-set limit.
fn should_snap_to_tick(min: Option<f64>, max: Option<f64>) -> bool {
    min.is_none() && max.is_none()
}
