use chart_config::api::{LegendItem, build_legend, legend_items, should_legend_be_enabled};
use chart_config::core::{
    ChartData, ChartOptions, ChartType, DataPoint, LegendOptions, LegendPosition, Series,
    StackingMode,
};

fn with_series(chart_type: ChartType, series: Vec<Series>) -> ChartOptions {
    ChartOptions::new(chart_type).with_data(ChartData::new(series, Vec::new()))
}

#[test]
fn several_series_enable_the_legend() {
    let options = with_series(ChartType::Column, vec![Series::new("a"), Series::new("b")]);
    assert!(should_legend_be_enabled(&options));

    let single = with_series(ChartType::Column, vec![Series::new("a")]);
    assert!(!should_legend_be_enabled(&single));
}

#[test]
fn stacking_enables_the_legend_except_for_lone_area_series() {
    let stacked_column = with_series(ChartType::Column, vec![Series::new("a")])
        .with_stacking(StackingMode::Normal);
    assert!(should_legend_be_enabled(&stacked_column));

    let lone_area =
        with_series(ChartType::Area, vec![Series::new("a")]).with_stacking(StackingMode::Normal);
    assert!(!should_legend_be_enabled(&lone_area));

    let stacked_by_attribute = lone_area.clone().with_stack_by_attribute(true);
    assert!(should_legend_be_enabled(&stacked_by_attribute));
}

#[test]
fn slice_charts_need_more_than_one_category() {
    let two_slices = with_series(
        ChartType::Pie,
        vec![Series::new("slices").with_points(vec![
            DataPoint::named("a").with_y(1.0),
            DataPoint::named("b").with_y(2.0),
        ])],
    );
    assert!(should_legend_be_enabled(&two_slices));

    let one_slice = with_series(
        ChartType::Donut,
        vec![Series::new("slices").with_points(vec![DataPoint::named("a").with_y(1.0)])],
    );
    assert!(!should_legend_be_enabled(&one_slice));
}

#[test]
fn scatter_needs_a_named_series() {
    let named = with_series(ChartType::Scatter, vec![Series::new("Region")]);
    assert!(should_legend_be_enabled(&named));

    let anonymous = with_series(ChartType::Scatter, vec![Series::default()]);
    assert!(!should_legend_be_enabled(&anonymous));
}

#[test]
fn items_come_from_points_for_category_charts() {
    let mut point = DataPoint::named("East").with_y(1.0);
    point.color = Some("#aaaaaa".to_owned());
    point.legend_index = Some(0);
    let options = with_series(
        ChartType::Funnel,
        vec![Series::new("ignored").with_points(vec![point])],
    );

    assert_eq!(
        legend_items(&options),
        vec![LegendItem {
            name: Some("East".to_owned()),
            color: Some("#aaaaaa".to_owned()),
            legend_index: Some(0),
        }]
    );
}

#[test]
fn items_come_from_series_otherwise() {
    let options = with_series(
        ChartType::Line,
        vec![Series::new("a").with_color("#111111"), Series::new("b")],
    );
    let names: Vec<_> = legend_items(&options)
        .into_iter()
        .map(|item| item.name.unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn legend_defaults_to_right_and_respects_user_options() {
    let options = with_series(ChartType::Column, vec![Series::new("a"), Series::new("b")]);
    let legend = build_legend(&options);
    assert!(legend.enabled);
    assert_eq!(legend.position, LegendPosition::Right);
    assert_eq!(legend.items.len(), 2);

    let top = build_legend(&options.clone().with_legend(LegendOptions {
        enabled: Some(true),
        position: Some(LegendPosition::Top),
    }));
    assert_eq!(top.position, LegendPosition::Top);

    let disabled = build_legend(&options.with_legend(LegendOptions {
        enabled: Some(false),
        position: None,
    }));
    assert!(!disabled.enabled);
}

#[test]
fn some_chart_types_force_a_right_legend() {
    for chart_type in [ChartType::Scatter, ChartType::Treemap, ChartType::Bubble] {
        let options = with_series(chart_type, vec![Series::new("a")]).with_legend(LegendOptions {
            enabled: None,
            position: Some(LegendPosition::Bottom),
        });
        assert_eq!(build_legend(&options).position, LegendPosition::Right, "{chart_type}");
    }
}

#[test]
fn missing_data_degrades_to_a_disabled_empty_legend() {
    for chart_type in ChartType::ALL {
        let legend = build_legend(&ChartOptions::new(chart_type));
        assert!(!legend.enabled, "{chart_type}");
        assert!(legend.items.is_empty(), "{chart_type}");
    }
}
