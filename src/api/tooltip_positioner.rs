use serde::Serialize;

use crate::core::{ChartType, StackingMode};

pub const TOOLTIP_ARROW_OFFSET: f64 = 23.0;
pub const TOOLTIP_FULLSCREEN_THRESHOLD: f64 = 480.0;
pub const TOOLTIP_MAX_WIDTH: f64 = 366.0;
pub const TOOLTIP_BAR_CHART_VERTICAL_OFFSET: f64 = 5.0;
pub const TOOLTIP_VERTICAL_OFFSET: f64 = 14.0;

/// Side of the tooltip box the arrow (tail) is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowAlignment {
    Left,
    Right,
    Center,
}

impl ArrowAlignment {
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

/// Plot rectangle of the rendered chart, in container pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
}

impl PlotArea {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64) -> Self {
        Self { left, top, width }
    }
}

/// Geometry of the hovered point handed to the positioner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TooltipAnchor {
    pub plot_x: f64,
    pub plot_y: f64,
    /// Shape height; zero for coordinate-only points.
    pub height: f64,
    pub negative: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPosition {
    pub x: f64,
    pub y: f64,
}

/// Tooltip box placement bound to a chart type and stacking mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipPositioner {
    chart_type: ChartType,
    stacking: Option<StackingMode>,
}

impl TooltipPositioner {
    #[must_use]
    pub const fn new(chart_type: ChartType, stacking: Option<StackingMode>) -> Self {
        Self {
            chart_type,
            stacking,
        }
    }

    /// Computes the top-left corner of a `label_width` x `label_height` tooltip.
    #[must_use]
    pub fn position(
        &self,
        label_width: f64,
        label_height: f64,
        point: &TooltipAnchor,
        plot: &PlotArea,
    ) -> TooltipPosition {
        let stacked = self.stacking.is_some();
        let height = finite_or_zero(point.height);

        let end = data_point_end(self.chart_type, point.negative, point.plot_x, height, stacked);
        let arrow = arrow_horizontal_position(self.chart_type, stacked, end, height);
        let start_x = tooltip_horizontal_start(arrow, plot.width, label_width);
        let vertical_offset = tooltip_vertical_offset(self.chart_type, stacked, point.negative);
        let start_y =
            data_point_start(self.chart_type, point.negative, point.plot_y, height, stacked);

        TooltipPosition {
            x: plot.left + start_x,
            y: plot.top + start_y - (label_height + vertical_offset),
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Right when the tooltip would overflow the right edge only, left when it
/// would overflow the left edge only, centered otherwise.
#[must_use]
pub fn arrow_alignment(arrow_position: f64, chart_width: f64) -> ArrowAlignment {
    let min_x = -TOOLTIP_ARROW_OFFSET;
    let max_x = chart_width + TOOLTIP_ARROW_OFFSET;
    let half_width = TOOLTIP_MAX_WIDTH / 2.0;

    if arrow_position + half_width > max_x && arrow_position - half_width > min_x {
        return ArrowAlignment::Right;
    }
    if arrow_position - half_width < min_x && arrow_position + half_width < max_x {
        return ArrowAlignment::Left;
    }
    ArrowAlignment::Center
}

#[must_use]
pub fn tooltip_horizontal_start(arrow_position: f64, chart_width: f64, tooltip_width: f64) -> f64 {
    match arrow_alignment(arrow_position, chart_width) {
        ArrowAlignment::Right => arrow_position - tooltip_width + TOOLTIP_ARROW_OFFSET,
        ArrowAlignment::Left => arrow_position - TOOLTIP_ARROW_OFFSET,
        ArrowAlignment::Center => arrow_position - tooltip_width / 2.0,
    }
}

/// Stacked bars point the arrow at the middle of the segment.
pub(crate) fn arrow_horizontal_position(
    chart_type: ChartType,
    stacked: bool,
    data_point_end: f64,
    data_point_height: f64,
) -> f64 {
    if chart_type.is_bar() && stacked {
        return data_point_end - data_point_height / 2.0;
    }
    data_point_end
}

pub(crate) fn data_point_end(
    chart_type: ChartType,
    negative: bool,
    end: f64,
    height: f64,
    stacked: bool,
) -> f64 {
    if chart_type.is_bar() && negative && stacked {
        end + height
    } else {
        end
    }
}

fn data_point_start(
    chart_type: ChartType,
    negative: bool,
    start: f64,
    height: f64,
    stacked: bool,
) -> f64 {
    if chart_type.is_column() && negative && stacked {
        start - height
    } else {
        start
    }
}

fn tooltip_vertical_offset(chart_type: ChartType, stacked: bool, negative: bool) -> f64 {
    if chart_type.is_column() && (stacked || negative) {
        return 0.0;
    }
    if chart_type.is_bar() {
        return TOOLTIP_BAR_CHART_VERTICAL_OFFSET;
    }
    TOOLTIP_VERTICAL_OFFSET
}

#[cfg(test)]
mod tests {
    use super::{ArrowAlignment, arrow_alignment, tooltip_horizontal_start};

    #[test]
    fn alignment_prefers_the_side_with_room() {
        assert_eq!(arrow_alignment(450.0, 500.0), ArrowAlignment::Right);
        assert_eq!(arrow_alignment(50.0, 500.0), ArrowAlignment::Left);
        assert_eq!(arrow_alignment(250.0, 500.0), ArrowAlignment::Center);
        // overflows both edges
        assert_eq!(arrow_alignment(100.0, 150.0), ArrowAlignment::Center);
    }

    #[test]
    fn horizontal_start_follows_alignment() {
        assert_eq!(tooltip_horizontal_start(450.0, 500.0, 200.0), 273.0);
        assert_eq!(tooltip_horizontal_start(50.0, 500.0, 200.0), 27.0);
        assert_eq!(tooltip_horizontal_start(250.0, 500.0, 200.0), 150.0);
    }
}
