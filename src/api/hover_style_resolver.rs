use tracing::warn;

use crate::core::{ChartOptions, HoverFamily, lighter_color};
use crate::error::ChartResult;

use super::render_config::{
    HaloConfig, HoverState, MarkerConfig, MarkerHover, MarkerStates, PointConfig,
    RenderConfiguration, SeriesConfig, StatesConfig,
};

/// Brightness delta applied to hovered drillable shapes.
pub const HOVER_BRIGHTNESS: f64 = 0.1;
/// Smallest brightness the engine still treats as "hover enabled" without
/// visibly changing the slice.
pub const MINIMUM_SAFE_BRIGHTNESS: f64 = f64::from_bits(1);

const COMBO_LINE_SERIES_TYPE: &str = "line";

/// Hover and drilldown visual states for the series accumulated so far.
///
/// Unknown chart types are rejected when options are parsed, so every
/// family here is matched exhaustively.
pub fn hover_styles(
    options: &ChartOptions,
    config: &RenderConfiguration,
) -> ChartResult<RenderConfiguration> {
    let family = options.chart_type.hover_family();
    let series = config
        .series
        .iter()
        .map(|series| match family {
            HoverFamily::Line => line_series_hover(series),
            HoverFamily::Bar => bar_series_hover(series),
            HoverFamily::Combo => {
                if series.series_type.as_deref() == Some(COMBO_LINE_SERIES_TYPE) {
                    line_series_hover(series)
                } else {
                    bar_series_hover(series)
                }
            }
            HoverFamily::Slice => slice_series_hover(series),
        })
        .collect();

    Ok(RenderConfiguration {
        series,
        ..RenderConfiguration::default()
    })
}

fn line_series_hover(series: &SeriesConfig) -> SeriesConfig {
    let mut series = series.clone();
    if series.drillable() {
        let fill_color = series.color.as_deref().and_then(|color| {
            let lighter = lighter_color(color, HOVER_BRIGHTNESS);
            if lighter.is_none() {
                warn!(color, "cannot lighten series color for hover marker");
            }
            lighter.or_else(|| Some(color.to_owned()))
        });
        series.marker = Some(MarkerConfig {
            states: Some(MarkerStates {
                hover: Some(MarkerHover { fill_color }),
            }),
        });
        series.cursor = Some("pointer".to_owned());
    } else {
        series.states = Some(StatesConfig {
            hover: Some(HoverState {
                halo: Some(HaloConfig { size: Some(0.0) }),
                ..HoverState::default()
            }),
        });
    }
    series
}

fn bar_series_hover(series: &SeriesConfig) -> SeriesConfig {
    let mut series = series.clone();
    series.states = Some(StatesConfig {
        hover: Some(HoverState {
            brightness: Some(HOVER_BRIGHTNESS),
            enabled: Some(series.drillable()),
            halo: None,
        }),
    });
    series
}

// Slices drill individually, so hover state lives on the points.
fn slice_series_hover(series: &SeriesConfig) -> SeriesConfig {
    let mut series = series.clone();
    for point in series.data.iter_mut().flatten() {
        slice_point_hover(point);
    }
    series
}

fn slice_point_hover(point: &mut PointConfig) {
    let drillable = point.drillable();
    let brightness = if drillable {
        HOVER_BRIGHTNESS
    } else {
        MINIMUM_SAFE_BRIGHTNESS
    };
    point.states = Some(StatesConfig {
        hover: Some(HoverState {
            brightness: Some(brightness),
            ..HoverState::default()
        }),
    });
    if !drillable {
        point.halo = Some(HaloConfig { size: Some(0.0) });
    }
}
