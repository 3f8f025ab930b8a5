use dashchart::api::{ChartEngine, ChartEngineConfig};
use dashchart::core::{Padding, RawSample, RawSeriesMap, SeriesDescriptor};
use dashchart::error::ChartError;
use dashchart::interaction::CursorPhase;
use dashchart::render::NullRenderer;

fn fixture_config() -> ChartEngineConfig {
    ChartEngineConfig::new(
        vec![SeriesDescriptor::new("s1", "Sensor 1")],
        vec![SeriesDescriptor::new("e1", "Relay 1")],
    )
    .with_size(1050.0, 650.0)
    .with_padding(Padding {
        top: 50.0,
        right: 30.0,
        bottom: 0.0,
        left: 20.0,
    })
}

fn fixture_data() -> RawSeriesMap {
    let mut raw = RawSeriesMap::new();
    raw.insert(
        "s1".to_owned(),
        vec![
            RawSample::new("2024-01-01T00:00", Some(1.0)),
            RawSample::new("2024-01-01T01:00", Some(3.0)),
        ],
    );
    raw.insert(
        "e1".to_owned(),
        vec![
            RawSample::new("2024-01-01T00:00", Some(1.0)),
            RawSample::new("2024-01-01T01:00", Some(0.0)),
        ],
    );
    raw
}

#[test]
fn engine_smoke_flow() {
    let renderer = NullRenderer::default();
    let mut engine = ChartEngine::new(renderer, fixture_config()).expect("engine init");

    engine.set_data(fixture_data());
    engine.render().expect("render should succeed");

    let layout = engine.layout().expect("layout available after render");
    assert_eq!(layout.chart_width, 1000.0);
    assert_eq!(layout.line_chart_height, 300.0);

    engine.pointer_enter();
    assert_eq!(engine.cursor_phase(), CursorPhase::Visible);
    let snapshot = engine.pointer_move(100.0).expect("cursor visible");
    assert_eq!(snapshot.hits.len(), 1);

    let overlay = engine
        .cursor_overlay()
        .expect("overlay build")
        .expect("overlay present");
    assert_eq!(overlay.lines.len(), 1, "one shared guideline");
    assert_eq!(overlay.circles.len(), 1, "one marker per line series");
    assert_eq!(overlay.texts.len(), 2, "value label plus shared date label");

    engine.pointer_leave();
    assert_eq!(engine.cursor_phase(), CursorPhase::Hidden);
    assert!(engine.cursor_overlay().expect("overlay build").is_none());

    let scene = engine.scene().expect("scene").clone();
    let renderer = engine.into_renderer();
    assert_eq!(renderer.render_calls, 1);
    assert_eq!(renderer.last_rect_count, scene.chart.rects.len());
    assert_eq!(renderer.last_text_count, scene.chart.texts.len());
}

#[test]
fn render_without_data_fails_fast() {
    let renderer = NullRenderer::default();
    let mut engine = ChartEngine::new(renderer, fixture_config()).expect("engine init");

    let error = engine.render().expect_err("must fail without data");
    assert!(matches!(error, ChartError::Configuration(_)));
}

#[test]
fn config_without_descriptors_is_rejected() {
    let config = ChartEngineConfig::new(Vec::new(), Vec::new());
    let result = ChartEngine::new(NullRenderer::default(), config);
    assert!(matches!(result, Err(ChartError::Configuration(_))));
}

#[test]
fn out_of_range_ratio_is_rejected() {
    let config = fixture_config().with_line_chart_height_ratio(1.5);
    let result = ChartEngine::new(NullRenderer::default(), config);
    assert!(matches!(result, Err(ChartError::Configuration(_))));
}

#[test]
fn malformed_palette_entry_is_rejected() {
    let config = fixture_config().with_palette(vec!["#zzzzzz".to_owned()]);
    let result = ChartEngine::new(NullRenderer::default(), config);
    assert!(matches!(result, Err(ChartError::Configuration(_))));
}

#[test]
fn pointer_events_before_first_render_are_inert() {
    let renderer = NullRenderer::default();
    let mut engine = ChartEngine::new(renderer, fixture_config()).expect("engine init");

    engine.pointer_enter();
    assert!(engine.pointer_move(100.0).is_none());
    assert!(engine.cursor_overlay().expect("overlay build").is_none());
}

#[test]
fn config_round_trips_through_json() {
    let config = fixture_config();
    let json = config.to_json_pretty().expect("serialize");
    let restored = ChartEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(config, restored);
}

#[test]
fn minimal_json_config_applies_documented_defaults() {
    let config = ChartEngineConfig::from_json_str(
        r#"{
            "line_series": [{"key": "s1", "name": "Sensor 1"}],
            "bar_series": []
        }"#,
    )
    .expect("parse");

    assert_eq!(config.container, "#chart");
    assert_eq!(config.legend_container, "#chart_legend");
    assert_eq!(config.line_chart_height_ratio, 0.5);
    assert_eq!(config.charts_gap, 25.0);
    assert_eq!(config.wide_layout_min_width, 1000.0);
    assert_eq!(config.palette.len(), 10);
    config.validate().expect("defaults must validate");
}
