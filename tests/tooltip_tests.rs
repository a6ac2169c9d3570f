use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use approx::assert_relative_eq;
use chart_config::api::{
    ArrowAlignment, PlotArea, TooltipAnchor, TooltipContext, TooltipFormatter, TooltipPositioner,
    arrow_alignment, should_follow_pointer, tooltip_configuration, tooltip_horizontal_start,
};
use chart_config::core::{
    AxisProps, ChartData, ChartOptions, ChartType, HoveredPoint, Series, ShapeArgs, StackingMode,
    TooltipCallback,
};

fn hovered(plot_x: f64) -> HoveredPoint {
    HoveredPoint {
        plot_x,
        plot_y: 120.0,
        color: Some("rgb(20,178,226)".to_owned()),
        series_name: Some("Revenue".to_owned()),
        ..HoveredPoint::default()
    }
}

fn echo_callback() -> TooltipCallback {
    TooltipCallback::new(|point: &HoveredPoint| {
        format!("<b>{}</b>", point.series_name.as_deref().unwrap_or_default())
    })
}

#[test]
fn arrow_alignment_follows_available_room() {
    assert_eq!(arrow_alignment(450.0, 500.0), ArrowAlignment::Right);
    assert_eq!(arrow_alignment(50.0, 500.0), ArrowAlignment::Left);
    assert_eq!(arrow_alignment(250.0, 500.0), ArrowAlignment::Center);
    assert_eq!(arrow_alignment(100.0, 150.0), ArrowAlignment::Center);
}

#[test]
fn horizontal_start_depends_on_alignment() {
    assert_relative_eq!(tooltip_horizontal_start(450.0, 500.0, 200.0), 273.0);
    assert_relative_eq!(tooltip_horizontal_start(50.0, 500.0, 200.0), 27.0);
    assert_relative_eq!(tooltip_horizontal_start(250.0, 500.0, 200.0), 150.0);
}

#[test]
fn column_tooltip_sits_above_the_point() {
    let positioner = TooltipPositioner::new(ChartType::Column, None);
    let anchor = TooltipAnchor {
        plot_x: 100.0,
        plot_y: 200.0,
        height: 50.0,
        negative: false,
    };
    let position = positioner.position(100.0, 40.0, &anchor, &PlotArea::new(10.0, 20.0, 500.0));

    assert_relative_eq!(position.x, 87.0);
    assert_relative_eq!(position.y, 166.0);
}

#[test]
fn stacked_negative_bar_points_at_segment_middle() {
    let positioner = TooltipPositioner::new(ChartType::Bar, Some(StackingMode::Normal));
    let anchor = TooltipAnchor {
        plot_x: 300.0,
        plot_y: 100.0,
        height: 40.0,
        negative: true,
    };
    let position = positioner.position(100.0, 30.0, &anchor, &PlotArea::new(0.0, 0.0, 500.0));

    assert_relative_eq!(position.x, 270.0);
    assert_relative_eq!(position.y, 65.0);
}

#[test]
fn stacked_negative_column_anchors_below_the_segment_top() {
    let positioner = TooltipPositioner::new(ChartType::Column, Some(StackingMode::Normal));
    let anchor = TooltipAnchor {
        plot_x: 250.0,
        plot_y: 100.0,
        height: 40.0,
        negative: true,
    };
    let position = positioner.position(100.0, 30.0, &anchor, &PlotArea::new(0.0, 0.0, 500.0));

    assert_relative_eq!(position.x, 200.0);
    assert_relative_eq!(position.y, 30.0);
}

#[test]
fn non_finite_shape_height_is_treated_as_zero() {
    let positioner = TooltipPositioner::new(ChartType::Bar, Some(StackingMode::Normal));
    let anchor = TooltipAnchor {
        plot_x: 250.0,
        plot_y: 100.0,
        height: f64::NAN,
        negative: true,
    };
    let position = positioner.position(100.0, 30.0, &anchor, &PlotArea::new(0.0, 0.0, 500.0));

    assert!(position.x.is_finite());
    assert_relative_eq!(position.x, 200.0);
}

#[test]
fn formatter_wraps_callback_markup_with_aligned_tails() {
    let formatter = TooltipFormatter::new(ChartType::Line, None, echo_callback());
    let point = hovered(450.0);
    let markup = formatter
        .format(&TooltipContext {
            point: &point,
            plot: PlotArea::new(10.0, 0.0, 500.0),
            mouse_is_down: false,
            viewport_width: 1024.0,
        })
        .expect("tooltip markup");

    assert!(markup.starts_with("<div class=\"hc-tooltip\">"));
    assert!(markup.contains("border-top-color: rgb(20,178,226);"));
    assert!(markup.contains("<b>Revenue</b>"));
    assert!(markup.contains("class=\"tail1 right\""));
    assert!(markup.contains("class=\"tail2 right\""));
    assert!(!markup.contains("left: "));
}

#[test]
fn formatter_positions_tails_inline_on_small_viewports() {
    let formatter = TooltipFormatter::new(ChartType::Line, None, echo_callback());
    let point = hovered(450.0);
    let markup = formatter
        .format(&TooltipContext {
            point: &point,
            plot: PlotArea::new(10.0, 0.0, 500.0),
            mouse_is_down: false,
            viewport_width: 480.0,
        })
        .expect("tooltip markup");

    assert!(markup.contains("class=\"tail1\" style=\"left: 460px;\""));
    assert!(!markup.contains("tail1 right"));
}

#[test]
fn formatter_is_silent_while_brushing() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let callback = TooltipCallback::new(move |_: &HoveredPoint| {
        counter.fetch_add(1, Ordering::SeqCst);
        String::from("content")
    });
    let formatter = TooltipFormatter::new(ChartType::Column, None, callback);
    let point = hovered(100.0);

    let markup = formatter.format(&TooltipContext {
        point: &point,
        plot: PlotArea::new(0.0, 0.0, 500.0),
        mouse_is_down: true,
        viewport_width: 1024.0,
    });

    assert_eq!(markup, None);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn stacked_bar_arrow_uses_tooltip_anchor_and_shape_height() {
    let formatter =
        TooltipFormatter::new(ChartType::Bar, Some(StackingMode::Normal), echo_callback());
    let point = HoveredPoint {
        plot_x: 999.0,
        tooltip_pos: Some([200.0, 50.0, 30.0]),
        shape_args: Some(ShapeArgs {
            height: 40.0,
            ..ShapeArgs::default()
        }),
        ..HoveredPoint::default()
    };

    assert_relative_eq!(formatter.arrow_position(&point), 180.0);
    assert_eq!(
        formatter.alignment(&point, &PlotArea::new(0.0, 0.0, 500.0)),
        ArrowAlignment::Center
    );
}

#[test]
fn tooltip_is_configured_only_with_a_callback() {
    let without = ChartOptions::new(ChartType::Column);
    assert!(tooltip_configuration(&without).is_empty());

    let with = ChartOptions::new(ChartType::Column).with_tooltip(|_| String::from("x"));
    let tooltip = tooltip_configuration(&with).tooltip.expect("tooltip config");
    assert_eq!(tooltip.use_html, Some(true));
    assert_eq!(tooltip.border_width, Some(0.0));
    assert_eq!(tooltip.shadow, Some(false));
    assert_eq!(tooltip.follow_pointer, Some(false));
    assert_eq!(
        tooltip.positioner,
        Some(TooltipPositioner::new(ChartType::Column, None))
    );
    assert!(tooltip.formatter.is_some());
}

#[test]
fn tooltip_follows_pointer_when_data_exceeds_axis_bounds() {
    let data = ChartData::new(
        vec![Series::new("Amount").with_values(&[Some(5.0), Some(120.0)])],
        vec![vec!["a".to_owned(), "b".to_owned()]],
    );
    let clipped = ChartOptions::new(ChartType::Column)
        .with_data(data.clone())
        .with_y_axis_props(AxisProps::default().with_max("100"));
    assert!(should_follow_pointer(&clipped));

    let inside = ChartOptions::new(ChartType::Column)
        .with_data(data.clone())
        .with_y_axis_props(AxisProps::default().with_max("200"));
    assert!(!should_follow_pointer(&inside));

    let clipped_bar = ChartOptions::new(ChartType::Bar)
        .with_data(data)
        .with_x_axis_props(AxisProps::default().with_min("10"));
    assert!(should_follow_pointer(&clipped_bar));
}
