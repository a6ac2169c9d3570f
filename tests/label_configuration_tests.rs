use chart_config::api::{
    AxisLabelFormatter, DataLabelContext, DataLabelFormatter, StackLabelContext,
    StackLabelFormatter, format_label, labels_configuration, percent_configuration,
    stacking_configuration, title_configuration,
};
use chart_config::core::{Axis, ChartOptions, ChartType, Series, StackingMode};

#[test]
fn titles_are_escaped_once_and_null_slots_stay_empty() {
    let options = ChartOptions::new(ChartType::Column)
        .with_y_axes(vec![Some(Axis::new("<b>Sales</b>")), None])
        .with_x_axes(vec![Some(Axis::new("Q1 & Q2"))]);
    let config = title_configuration(&options);

    assert_eq!(config.y_axis.len(), 2);
    let title = config.y_axis[0].title.as_ref().expect("y title");
    assert_eq!(title.text.as_deref(), Some("&lt;b&gt;Sales&lt;/b&gt;"));
    assert_eq!(config.y_axis[1].title, None);
    let x_title = config.x_axis[0].title.as_ref().expect("x title");
    assert_eq!(x_title.text.as_deref(), Some("Q1 & Q2"));
}

#[test]
fn percent_formatter_is_installed_only_on_percent_axes() {
    let options = ChartOptions::new(ChartType::Line).with_y_axes(vec![
        Some(Axis::new("Share").with_format("#,##0.0%")),
        Some(Axis::new("Amount").with_format("#,##0")),
        None,
    ]);
    let config = percent_configuration(&options);

    let formatter = |index: usize| {
        config.y_axis[index]
            .labels
            .as_ref()
            .and_then(|labels| labels.formatter)
    };
    assert_eq!(formatter(0), Some(AxisLabelFormatter::Percent));
    assert_eq!(formatter(1), None);
    assert_eq!(formatter(2), None);
}

#[test]
fn percent_axis_labels_hide_float_noise() {
    assert_eq!(AxisLabelFormatter::Percent.format(0.07), "7%");
    assert_eq!(AxisLabelFormatter::Percent.format(0.3), "30%");
    assert_eq!(AxisLabelFormatter::Percent.format(1.0), "100%");
}

#[test]
fn unstacked_charts_get_no_stacking_fragment() {
    let options = ChartOptions::new(ChartType::Column).with_y_axes(vec![Some(Axis::new("A"))]);
    assert!(stacking_configuration(&options).is_empty());
}

#[test]
fn stacked_charts_get_stack_labels_on_every_y_axis() {
    let options = ChartOptions::new(ChartType::Column)
        .with_stacking(StackingMode::Percent)
        .with_y_axes(vec![Some(Axis::new("A")), None]);
    let config = stacking_configuration(&options);

    let stacking = config
        .plot_options
        .as_ref()
        .and_then(|plot| plot.series.as_ref())
        .and_then(|series| series.stacking);
    assert_eq!(stacking, Some(StackingMode::Percent));
    assert_eq!(config.y_axis.len(), 2);
    assert!(config.y_axis.iter().all(|axis| axis.stack_labels.is_some()));
}

fn column_series(values: &[&[Option<f64>]]) -> Vec<Series> {
    values
        .iter()
        .enumerate()
        .map(|(index, values)| Series::new(format!("s{index}")).with_values(values))
        .collect()
}

#[test]
fn stack_total_of_zero_with_hidden_negative_is_suppressed() {
    let series = column_series(&[&[Some(0.0)], &[Some(-5.0)]]);

    let positive = StackLabelContext {
        total: 0.0,
        is_negative: false,
        x: 0,
        axis_series: &series,
        default_format: Some("#,##0"),
    };
    assert_eq!(StackLabelFormatter.format(&positive), None);

    let negative = StackLabelContext {
        total: -5.0,
        is_negative: true,
        ..positive
    };
    assert_eq!(StackLabelFormatter.format(&negative).as_deref(), Some("-5"));
}

#[test]
fn all_zero_column_still_shows_its_total() {
    let series = column_series(&[&[Some(0.0)], &[Some(0.0)]]);
    let context = StackLabelContext {
        total: 0.0,
        is_negative: false,
        x: 0,
        axis_series: &series,
        default_format: Some("#,##0"),
    };
    assert_eq!(StackLabelFormatter.format(&context).as_deref(), Some("0"));
}

#[test]
fn null_values_count_as_not_positive() {
    let series = column_series(&[&[None], &[Some(3.0)]]);
    let context = StackLabelContext {
        total: 0.0,
        is_negative: false,
        x: 0,
        axis_series: &series,
        default_format: None,
    };
    assert_eq!(StackLabelFormatter.format(&context), None);
}

#[test]
fn data_labels_use_point_format_and_skip_missing_values() {
    let context = DataLabelContext {
        y: Some(1234.6),
        point_format: Some("[red]#,##0"),
        ..DataLabelContext::default()
    };
    assert_eq!(
        DataLabelFormatter::Value.format(&context).as_deref(),
        Some("1,235")
    );

    let missing = DataLabelContext::default();
    assert_eq!(DataLabelFormatter::Value.format(&missing), None);
}

#[test]
fn heat_map_labels_use_cell_value_and_options_format() {
    let context = DataLabelContext {
        y: Some(1.0),
        value: Some(0.5),
        point_format: Some("#,##0"),
        options_format: Some("#,##0.0%"),
    };
    assert_eq!(
        DataLabelFormatter::HeatMap.format(&context).as_deref(),
        Some("50.0%")
    );
}

#[test]
fn formatted_labels_are_escaped() {
    assert_eq!(
        format_label(Some(3.0), Some("\"<\"0")).as_deref(),
        Some("&lt;3")
    );
    assert_eq!(format_label(None, Some("#,##0")), None);
}

#[test]
fn stacked_data_labels_switch_to_white_text() {
    let options = ChartOptions::new(ChartType::Column)
        .with_stacking(StackingMode::Normal)
        .with_y_axes(vec![Some(Axis::new("A").with_format("#,##0.00"))]);
    let config = labels_configuration(&options);

    let column_style = config
        .plot_options
        .as_ref()
        .and_then(|plot| plot.column.as_ref())
        .and_then(|column| column.data_labels.as_ref())
        .and_then(|labels| labels.style.as_ref())
        .expect("column label style");
    assert_eq!(column_style.color.as_deref(), Some("#ffffff"));
    assert_eq!(column_style.text_shadow.as_deref(), Some("0 0 1px #000000"));
    assert!(config.drilldown.is_some());
    assert_eq!(config.y_axis[0].default_format.as_deref(), Some("#,##0.00"));
}

#[test]
fn unstacked_data_labels_stay_black_without_drilldown_style() {
    let options = ChartOptions::new(ChartType::Bar).with_y_axes(vec![Some(Axis::new("A"))]);
    let config = labels_configuration(&options);

    let bar_labels = config
        .plot_options
        .as_ref()
        .and_then(|plot| plot.bar.as_ref())
        .and_then(|bar| bar.data_labels.as_ref())
        .expect("bar data labels");
    assert_eq!(bar_labels.formatter, Some(DataLabelFormatter::Value));
    assert_eq!(
        bar_labels.style.as_ref().and_then(|style| style.color.as_deref()),
        Some("#000000")
    );
    assert_eq!(config.drilldown, None);

    let heatmap_formatter = config
        .plot_options
        .as_ref()
        .and_then(|plot| plot.heatmap.as_ref())
        .and_then(|heatmap| heatmap.data_labels.as_ref())
        .and_then(|labels| labels.formatter);
    assert_eq!(heatmap_formatter, Some(DataLabelFormatter::HeatMap));
}
