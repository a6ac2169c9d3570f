use smallvec::SmallVec;
use tracing::trace;

use crate::core::{ChartType, HoveredPoint, StackingMode, TooltipCallback, plain_number};

use super::tooltip_positioner::{
    ArrowAlignment, PlotArea, TOOLTIP_FULLSCREEN_THRESHOLD, arrow_alignment,
    arrow_horizontal_position, data_point_end,
};

/// Runtime state the engine exposes while asking for tooltip content.
#[derive(Debug, Clone, Copy)]
pub struct TooltipContext<'a> {
    pub point: &'a HoveredPoint,
    pub plot: PlotArea,
    /// Set while a drag/brush selection is in progress.
    pub mouse_is_down: bool,
    /// Width of the host viewport in CSS pixels.
    pub viewport_width: f64,
}

/// Tooltip markup builder bound to a chart type, stacking mode and content callback.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipFormatter {
    chart_type: ChartType,
    stacking: Option<StackingMode>,
    callback: TooltipCallback,
}

impl TooltipFormatter {
    #[must_use]
    pub fn new(
        chart_type: ChartType,
        stacking: Option<StackingMode>,
        callback: TooltipCallback,
    ) -> Self {
        Self {
            chart_type,
            stacking,
            callback,
        }
    }

    /// Horizontal arrow position inside the plot for the hovered point.
    #[must_use]
    pub fn arrow_position(&self, point: &HoveredPoint) -> f64 {
        let stacked = self.stacking.is_some();
        let point_based = self.chart_type.is_point_based();

        let end = match point.tooltip_pos {
            Some([x, _, height]) if !point_based => {
                data_point_end(self.chart_type, point.negative, x, height, stacked)
            }
            _ => point.plot_x,
        };
        let height = match point.shape_args {
            Some(shape) if !point_based && shape.height.is_finite() => shape.height,
            _ => 0.0,
        };
        arrow_horizontal_position(self.chart_type, stacked, end, height)
    }

    #[must_use]
    pub fn alignment(&self, point: &HoveredPoint, plot: &PlotArea) -> ArrowAlignment {
        arrow_alignment(self.arrow_position(point), plot.width)
    }

    /// Returns the tooltip markup, or `None` while the user is brushing.
    #[must_use]
    pub fn format(&self, context: &TooltipContext<'_>) -> Option<String> {
        if context.mouse_is_down {
            trace!(chart_type = %self.chart_type, "tooltip suppressed while brushing");
            return None;
        }

        let point = context.point;
        let arrow = self.arrow_position(point);
        let align = arrow_alignment(arrow, context.plot.width);
        let fullscreen = context.viewport_width <= TOOLTIP_FULLSCREEN_THRESHOLD;

        let stroke_style = point
            .color
            .as_deref()
            .map(|color| format!("border-top-color: {color};"))
            .unwrap_or_default();
        let tail_style = if fullscreen {
            format!(
                " style=\"left: {}px;\"",
                plain_number(arrow + context.plot.left)
            )
        } else {
            String::new()
        };
        let tail_classes = |base: &'static str| {
            let mut classes: SmallVec<[&str; 2]> = SmallVec::new();
            classes.push(base);
            if !fullscreen {
                classes.push(align.as_class());
            }
            classes.join(" ")
        };

        let content = self.callback.call(point);
        Some(format!(
            "<div class=\"hc-tooltip\">\n\
             <span class=\"stroke\" style=\"{stroke_style}\"></span>\n\
             <div class=\"content\">\n{content}\n</div>\n\
             <div class=\"{}\"{tail_style}></div>\n\
             <div class=\"{}\"{tail_style}></div>\n\
             </div>",
            tail_classes("tail1"),
            tail_classes("tail2"),
        ))
    }
}
