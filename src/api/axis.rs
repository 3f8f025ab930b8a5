use chrono::{DateTime, Duration, Utc};

use crate::core::DateRange;

pub(crate) const AXIS_TIME_TARGET_SPACING_PX: f64 = 130.0;
pub(crate) const AXIS_VALUE_TARGET_SPACING_PX: f64 = 45.0;
pub(crate) const AXIS_TIME_TICK_PADDING_PX: f64 = 15.0;
pub(crate) const AXIS_VALUE_TICK_PADDING_PX: f64 = 5.0;

/// Rotation and offset applied to time-axis tick labels.
///
/// Wide layouts get a shallow rotation; narrow layouts rotate steeply so
/// long timestamp labels stay clear of each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickLabelPreset {
    pub rotation_deg: f64,
    pub offset_px: f64,
}

impl TickLabelPreset {
    #[must_use]
    pub fn for_width(viewport_width: f64, wide_layout_min_width: f64) -> Self {
        if viewport_width >= wide_layout_min_width {
            Self {
                rotation_deg: -45.0,
                offset_px: 4.0,
            }
        } else {
            Self {
                rotation_deg: -90.0,
                offset_px: 10.0,
            }
        }
    }
}

pub(crate) fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Evenly spaced tick instants across the shared date range.
pub(crate) fn time_ticks(range: DateRange, tick_count: usize) -> Vec<DateTime<Utc>> {
    if tick_count == 0 {
        return Vec::new();
    }

    let span_millis = (range.end - range.start).num_milliseconds();
    if tick_count == 1 || span_millis <= 0 {
        return vec![range.start];
    }

    let denominator = (tick_count - 1) as f64;
    (0..tick_count)
        .map(|index| {
            let ratio = (index as f64) / denominator;
            range.start + Duration::milliseconds((span_millis as f64 * ratio).round() as i64)
        })
        .collect()
}

/// Evenly spaced tick values over `[0, domain_max]`.
pub(crate) fn value_ticks(domain_max: f64, tick_count: usize) -> Vec<f64> {
    if tick_count == 0 {
        return Vec::new();
    }
    if tick_count == 1 || domain_max <= 0.0 {
        return vec![0.0];
    }

    let denominator = (tick_count - 1) as f64;
    (0..tick_count)
        .map(|index| domain_max * (index as f64) / denominator)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{TickLabelPreset, axis_tick_target_count, time_ticks, value_ticks};
    use crate::core::DateRange;
    use chrono::{TimeZone, Utc};

    #[test]
    fn tick_count_scales_with_span_and_clamps() {
        assert_eq!(axis_tick_target_count(1000.0, 130.0, 2, 10), 8);
        assert_eq!(axis_tick_target_count(100.0, 130.0, 2, 10), 2);
        assert_eq!(axis_tick_target_count(10_000.0, 130.0, 2, 10), 10);
        assert_eq!(axis_tick_target_count(f64::NAN, 130.0, 2, 10), 2);
    }

    #[test]
    fn time_ticks_cover_domain_edges() {
        let range = DateRange::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        );
        let ticks = time_ticks(range, 5);
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0], range.start);
        assert_eq!(ticks[4], range.end);
    }

    #[test]
    fn degenerate_time_domain_yields_single_tick() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let ticks = time_ticks(DateRange::new(instant, instant), 5);
        assert_eq!(ticks, vec![instant]);
    }

    #[test]
    fn degenerate_value_domain_yields_zero_tick() {
        assert_eq!(value_ticks(0.0, 5), vec![0.0]);
        assert_eq!(value_ticks(-3.0, 5), vec![0.0]);
    }

    #[test]
    fn presets_switch_on_width_threshold() {
        let wide = TickLabelPreset::for_width(1200.0, 1000.0);
        let narrow = TickLabelPreset::for_width(500.0, 1000.0);
        assert_eq!(wide.rotation_deg, -45.0);
        assert_eq!(narrow.rotation_deg, -90.0);
        assert!(wide.offset_px < narrow.offset_px);
    }
}
