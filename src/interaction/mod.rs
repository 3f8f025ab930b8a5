use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::{LineSeries, TimeScale, ValueScale};

/// Cursor tracker states: hidden until the pointer enters the line-region
/// hit rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorPhase {
    #[default]
    Hidden,
    Visible,
}

/// Anchoring side for cursor labels, flipping near the right edge so labels
/// never run off the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    End,
}

/// Pointer-x fraction of chart width past which labels anchor to the end.
pub const ANCHOR_FLIP_RATIO: f64 = 0.7;

/// Label x-offset applied when end-anchored.
pub const END_ANCHOR_DX: f64 = -18.0;

/// Precomputed band midpoints for one line series, in ascending pixel order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesBands {
    pub key: String,
    pub midpoints: Vec<f64>,
}

/// Leftmost insertion point of `x` into the ascending midpoint sequence.
///
/// A pointer sitting exactly on a midpoint boundary selects the later point.
#[must_use]
pub fn bisect_left(midpoints: &[f64], x: f64) -> usize {
    midpoints.partition_point(|midpoint| *midpoint < x)
}

/// The active data point of one series under the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesHit {
    pub key: String,
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub date: DateTime<Utc>,
}

/// Everything a cursor overlay needs for one pointer position.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorSnapshot {
    pub pointer_x: f64,
    /// Guideline position, taken from the series whose snapped point is
    /// nearest the pointer.
    pub guideline_x: f64,
    /// Shared date label value, from the same nearest series.
    pub date: DateTime<Utc>,
    pub anchor: TextAnchor,
    pub hits: Vec<SeriesHit>,
}

/// Tracks pointer state over the line region and resolves per-series hits
/// via bisection over precomputed band midpoints.
#[derive(Debug, Default)]
pub struct CursorTracker {
    phase: CursorPhase,
    bands: Vec<SeriesBands>,
    snapshot: Option<CursorSnapshot>,
}

impl CursorTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> CursorPhase {
        self.phase
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&CursorSnapshot> {
        self.snapshot.as_ref()
    }

    #[must_use]
    pub fn bands(&self) -> &[SeriesBands] {
        &self.bands
    }

    /// Recomputes per-series band midpoints; runs on every render/resize
    /// cycle after the scales are rebuilt.
    pub fn rebuild_bands(&mut self, line_series: &[LineSeries], time_scale: TimeScale) {
        self.bands = line_series
            .iter()
            .map(|series| SeriesBands {
                key: series.key.clone(),
                midpoints: series
                    .points
                    .iter()
                    .map(|point| {
                        let band_width =
                            (time_scale.to_pixel(point.next_date) - time_scale.to_pixel(point.date))
                                .floor();
                        time_scale.to_pixel(point.date) + band_width / 2.0
                    })
                    .collect(),
            })
            .collect();
        self.snapshot = None;
    }

    pub fn pointer_enter(&mut self) {
        self.phase = CursorPhase::Visible;
    }

    pub fn pointer_leave(&mut self) {
        self.phase = CursorPhase::Hidden;
        self.snapshot = None;
    }

    /// Resolves the active point of every series for the given pointer x.
    ///
    /// Any series whose lookup misses (pointer past its last band) hides the
    /// whole cursor; the shared guideline follows the series nearest the
    /// pointer.
    pub fn pointer_move(
        &mut self,
        pointer_x: f64,
        line_series: &[LineSeries],
        time_scale: TimeScale,
        value_scale: ValueScale,
        chart_width: f64,
    ) -> Option<&CursorSnapshot> {
        if self.phase != CursorPhase::Visible {
            return None;
        }

        let mut hits = Vec::with_capacity(line_series.len());
        for (series, bands) in line_series.iter().zip(self.bands.iter()) {
            let index = bisect_left(&bands.midpoints, pointer_x);
            let Some(point) = series.points.get(index) else {
                self.phase = CursorPhase::Hidden;
                self.snapshot = None;
                return None;
            };
            hits.push(SeriesHit {
                key: series.key.clone(),
                x: time_scale.to_pixel(point.date),
                y: value_scale.to_pixel(point.value),
                value: point.value,
                date: point.date,
            });
        }

        let mut candidates: SmallVec<[(OrderedFloat<f64>, usize); 4]> = SmallVec::new();
        for (index, hit) in hits.iter().enumerate() {
            candidates.push((OrderedFloat((hit.x - pointer_x).abs()), index));
        }
        let nearest = candidates.into_iter().min_by_key(|(distance, _)| *distance);
        let Some((_, nearest_index)) = nearest else {
            self.snapshot = None;
            return None;
        };

        let anchor = if pointer_x > chart_width * ANCHOR_FLIP_RATIO {
            TextAnchor::End
        } else {
            TextAnchor::Start
        };

        self.snapshot = Some(CursorSnapshot {
            pointer_x,
            guideline_x: hits[nearest_index].x,
            date: hits[nearest_index].date,
            anchor,
            hits,
        });
        self.snapshot.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::bisect_left;

    #[test]
    fn bisect_left_uses_leftmost_insertion_semantics() {
        let midpoints = [10.0, 20.0, 30.0];
        assert_eq!(bisect_left(&midpoints, 5.0), 0);
        assert_eq!(bisect_left(&midpoints, 20.0), 1);
        assert_eq!(bisect_left(&midpoints, 25.0), 2);
        assert_eq!(bisect_left(&midpoints, 31.0), 3);
    }

    #[test]
    fn bisect_left_on_empty_sequence_is_zero() {
        assert_eq!(bisect_left(&[], 10.0), 0);
    }
}
