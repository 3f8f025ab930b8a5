use tracing::trace;

use crate::core::{
    BandScale, ChartLayout, ColorScale, DashboardData, RawSeriesMap, TimeScale, ValueScale,
};
use crate::error::ChartResult;
use crate::interaction::{CursorSnapshot, END_ANCHOR_DX, TextAnchor};
use crate::render::{
    BandLegendEntry, CirclePrimitive, Color, LegendEntry, LegendPanel, LinePrimitive,
    RectPrimitive, RenderFrame, Scene, TextHAlign, TextPrimitive,
};

use super::axis::{
    AXIS_TIME_TARGET_SPACING_PX, AXIS_TIME_TICK_PADDING_PX, AXIS_VALUE_TARGET_SPACING_PX,
    AXIS_VALUE_TICK_PADDING_PX, TickLabelPreset, axis_tick_target_count, time_ticks, value_ticks,
};
use super::config::ChartEngineConfig;
use super::labels::{format_cursor_date, format_time_tick, format_value};

const BAND_PADDING_INNER: f64 = 0.2;
const AXIS_FONT_SIZE_PX: f64 = 11.0;
const CURSOR_FONT_SIZE_PX: f64 = 13.0;
const CURSOR_DATE_FONT_SIZE_PX: f64 = 11.0;
const LINE_STROKE_WIDTH: f64 = 2.0;
const MARKER_RADIUS: f64 = 5.0;
const LABEL_DX: f64 = 10.0;

const AXIS_TEXT_COLOR: Color = Color::rgb(0.10, 0.10, 0.10);
const GRID_COLOR: Color = Color::rgb(0.85, 0.85, 0.85);
const GUIDELINE_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
const MARKER_FILL: Color = Color::rgb(1.0, 1.0, 1.0);
const HALO_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);

/// The four scales of one render cycle, derived from normalized data and the
/// current layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Scales {
    pub time: TimeScale,
    pub value: ValueScale,
    pub band: BandScale,
    pub color: ColorScale<Color>,
}

impl Scales {
    /// Builds all scales.
    ///
    /// The color domain spans every raw data key in map order so colors stay
    /// stable however the descriptor lists slice the data.
    pub fn build(
        raw: &RawSeriesMap,
        data: &DashboardData,
        layout: &ChartLayout,
        palette: Vec<Color>,
    ) -> ChartResult<Self> {
        let time = TimeScale::new(data.date_range, layout.chart_width)?;
        let value = ValueScale::from_max(data.max_line_value(), layout.line_chart_height)?;
        let band = BandScale::new(
            data.bar_series
                .iter()
                .map(|series| series.key.clone())
                .collect(),
            layout.on_offs_height.max(0.0),
            BAND_PADDING_INNER,
        )?;
        let color = ColorScale::new(raw.keys().cloned().collect(), palette)?;

        Ok(Self {
            time,
            value,
            band,
            color,
        })
    }
}

/// Builds the declarative scene for one render cycle.
///
/// Draw order: axes, line paths, bar rows, legend. The cursor overlay is a
/// separate frame (`build_cursor_overlay`) so interaction visuals never
/// contaminate the base scene.
pub(crate) fn build_scene(
    config: &ChartEngineConfig,
    data: &DashboardData,
    layout: &ChartLayout,
    scales: &Scales,
) -> ChartResult<Scene> {
    let mut chart = RenderFrame::new(layout.viewport);
    let origin_x = layout.padding.left;
    let origin_y = layout.padding.top;

    push_time_axis(&mut chart, config, data, layout, scales, origin_x, origin_y);
    push_value_axis(&mut chart, layout, scales, origin_x, origin_y);
    push_line_paths(&mut chart, data, scales, origin_x, origin_y);
    push_bar_rows(&mut chart, config, data, layout, scales, origin_x, origin_y);

    let legend = build_legend(config, data, layout, scales);

    let scene = Scene { chart, legend };
    scene.validate()?;
    trace!(
        primitives = scene.chart.primitive_count(),
        legend_entries = scene.legend.entry_count(),
        "scene built"
    );
    Ok(scene)
}

fn push_time_axis(
    chart: &mut RenderFrame,
    config: &ChartEngineConfig,
    data: &DashboardData,
    layout: &ChartLayout,
    scales: &Scales,
    origin_x: f64,
    origin_y: f64,
) {
    let preset = TickLabelPreset::for_width(layout.viewport.width, config.wide_layout_min_width);
    let tick_count = axis_tick_target_count(layout.chart_width, AXIS_TIME_TARGET_SPACING_PX, 2, 10);

    for tick in time_ticks(data.date_range, tick_count) {
        let x = origin_x + scales.time.to_pixel(tick);
        chart.push_line(LinePrimitive::new(
            x,
            origin_y,
            x,
            origin_y + layout.chart_height,
            1.0,
            GRID_COLOR,
        ));
        chart.push_text(
            TextPrimitive::new(
                format_time_tick(tick),
                x + preset.offset_px,
                origin_y - AXIS_TIME_TICK_PADDING_PX,
                AXIS_FONT_SIZE_PX,
                AXIS_TEXT_COLOR,
                TextHAlign::Right,
            )
            .with_rotation(preset.rotation_deg),
        );
    }
}

fn push_value_axis(
    chart: &mut RenderFrame,
    layout: &ChartLayout,
    scales: &Scales,
    origin_x: f64,
    origin_y: f64,
) {
    let tick_count = axis_tick_target_count(
        layout.line_chart_height,
        AXIS_VALUE_TARGET_SPACING_PX,
        2,
        10,
    );
    let (_, domain_max) = scales.value.domain();

    for tick in value_ticks(domain_max, tick_count) {
        let y = origin_y + scales.value.to_pixel(tick);
        chart.push_line(LinePrimitive::new(
            origin_x,
            y,
            origin_x + layout.chart_width,
            y,
            1.0,
            GRID_COLOR,
        ));
        chart.push_text(TextPrimitive::new(
            format_value(tick),
            origin_x - AXIS_VALUE_TICK_PADDING_PX,
            y,
            AXIS_FONT_SIZE_PX,
            AXIS_TEXT_COLOR,
            TextHAlign::Right,
        ));
    }
}

fn push_line_paths(
    chart: &mut RenderFrame,
    data: &DashboardData,
    scales: &Scales,
    origin_x: f64,
    origin_y: f64,
) {
    for series in &data.line_series {
        let color = scales.color.color(&series.key);
        for pair in series.points.windows(2) {
            chart.push_line(LinePrimitive::new(
                origin_x + scales.time.to_pixel(pair[0].date),
                origin_y + scales.value.to_pixel(pair[0].value),
                origin_x + scales.time.to_pixel(pair[1].date),
                origin_y + scales.value.to_pixel(pair[1].value),
                LINE_STROKE_WIDTH,
                color,
            ));
        }
    }
}

fn push_bar_rows(
    chart: &mut RenderFrame,
    config: &ChartEngineConfig,
    data: &DashboardData,
    layout: &ChartLayout,
    scales: &Scales,
    origin_x: f64,
    origin_y: f64,
) {
    let bars_origin_y = origin_y + layout.line_chart_height + config.charts_gap;
    let bandwidth = scales.band.bandwidth();

    for series in &data.bar_series {
        let color = scales.color.color(&series.key);
        let Some(band_top) = scales.band.position(&series.key) else {
            continue;
        };
        for bar in series.bars.iter().filter(|bar| bar.is_on()) {
            let start_px = scales.time.to_pixel(bar.start_date);
            let end_px = scales.time.to_pixel(bar.end_date);
            chart.push_rect(RectPrimitive::new(
                origin_x + start_px,
                bars_origin_y + band_top,
                (start_px - end_px).abs(),
                bandwidth,
                color,
            ));
        }
    }
}

fn build_legend(
    config: &ChartEngineConfig,
    data: &DashboardData,
    layout: &ChartLayout,
    scales: &Scales,
) -> LegendPanel {
    let line_entries = data
        .line_series
        .iter()
        .map(|series| LegendEntry {
            key: series.key.clone(),
            name: series.name.clone(),
            swatch: scales.color.color(&series.key),
        })
        .collect();

    let on_off_entries = data
        .bar_series
        .iter()
        .map(|series| BandLegendEntry {
            key: series.key.clone(),
            name: series.name.clone(),
            swatch: scales.color.color(&series.key),
            top: scales.band.position(&series.key).unwrap_or(0.0),
            height: scales.band.bandwidth(),
        })
        .collect();

    LegendPanel {
        padding_top: (layout.padding.top - 30.0).max(0.0),
        lines_section_height: layout.line_chart_height + config.charts_gap,
        line_entries,
        on_off_entries,
    }
}

/// Builds the cursor overlay frame for the current snapshot: shared vertical
/// guideline, per-series markers and value labels, shared date label.
pub(crate) fn build_cursor_overlay(
    snapshot: &CursorSnapshot,
    config: &ChartEngineConfig,
    layout: &ChartLayout,
    scales: &Scales,
) -> ChartResult<RenderFrame> {
    let mut overlay = RenderFrame::new(layout.viewport);
    let origin_x = layout.padding.left;
    let origin_y = layout.padding.top;
    // The guideline dips partway into the gap so it visually bridges toward
    // the on/offs region without crossing into it.
    let guideline_reach = layout.line_chart_height + config.charts_gap * 0.7;

    let (h_align, anchor_dx) = match snapshot.anchor {
        TextAnchor::Start => (TextHAlign::Left, 0.0),
        TextAnchor::End => (TextHAlign::Right, END_ANCHOR_DX),
    };

    let guideline_x = origin_x + snapshot.guideline_x;
    overlay.push_line(LinePrimitive::new(
        guideline_x,
        origin_y + guideline_reach,
        guideline_x,
        origin_y,
        1.0,
        GUIDELINE_COLOR,
    ));

    for hit in &snapshot.hits {
        let marker_x = origin_x + hit.x;
        let marker_y = origin_y + hit.y;
        overlay.push_circle(CirclePrimitive::new(
            marker_x,
            marker_y,
            MARKER_RADIUS,
            MARKER_FILL,
            scales.color.color(&hit.key),
            1.0,
        ));
        overlay.push_text(
            TextPrimitive::new(
                format_value(hit.value),
                marker_x + LABEL_DX + anchor_dx,
                marker_y,
                CURSOR_FONT_SIZE_PX,
                AXIS_TEXT_COLOR,
                h_align,
            )
            .with_halo(HALO_COLOR, 2.0),
        );
    }

    overlay.push_text(TextPrimitive::new(
        format_cursor_date(snapshot.date),
        guideline_x + LABEL_DX + anchor_dx,
        origin_y + guideline_reach - 5.0,
        CURSOR_DATE_FONT_SIZE_PX,
        AXIS_TEXT_COLOR,
        h_align,
    ));

    overlay.validate()?;
    Ok(overlay)
}
