use std::f64::consts::PI;

use serde::Serialize;

use super::classify::{Strategy, classify_scenario};
use super::types::Scenario;

pub const ALLOCATION_PALETTE: [&str; 6] = [
    "#6366f1", "#06b6d4", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6",
];

pub fn palette_color(index: usize) -> &'static str {
    ALLOCATION_PALETTE[index % ALLOCATION_PALETTE.len()]
}

#[derive(Copy, Clone, Debug)]
pub struct PieLayout {
    pub size: f64,
    pub inner_radius: f64,
}

impl Default for PieLayout {
    fn default() -> Self {
        PieLayout {
            size: 200.0,
            inner_radius: 50.0,
        }
    }
}

impl PieLayout {
    pub fn dashboard() -> Self {
        PieLayout {
            size: 160.0,
            inner_radius: 46.0,
        }
    }

    pub fn center(self) -> (f64, f64) {
        (self.size / 2.0, self.size / 2.0)
    }

    pub fn radius(self) -> f64 {
        self.size / 2.0 - 2.0
    }
}

#[derive(Copy, Clone, Debug)]
pub struct PieSector {
    pub start_angle: f64,
    pub end_angle: f64,
    pub large_arc: bool,
    pub color: &'static str,
}

impl PieSector {
    pub fn span(self) -> f64 {
        self.end_angle - self.start_angle
    }
}

// Shares are fractions of the running total mapped onto the full circle.
// A zero total divides by one instead, collapsing every sector to nothing
// while keeping the angles finite.
pub fn pie_sectors(amounts: &[f64]) -> Vec<PieSector> {
    let sum: f64 = amounts.iter().sum();
    let total = if sum == 0.0 { 1.0 } else { sum };

    let mut sectors = Vec::with_capacity(amounts.len());
    let mut cumulative = 0.0;
    for (idx, amount) in amounts.iter().enumerate() {
        let start_angle = cumulative / total * (2.0 * PI);
        cumulative += amount;
        let end_angle = cumulative / total * (2.0 * PI);
        sectors.push(PieSector {
            start_angle,
            end_angle,
            large_arc: end_angle - start_angle > PI,
            color: palette_color(idx),
        });
    }
    sectors
}

// Angles are measured from 12 o'clock, clockwise, hence the quarter-turn
// offset before the trig.
pub fn sector_path(sector: PieSector, cx: f64, cy: f64, r: f64) -> String {
    let x1 = cx + r * (sector.start_angle - PI / 2.0).cos();
    let y1 = cy + r * (sector.start_angle - PI / 2.0).sin();
    let x2 = cx + r * (sector.end_angle - PI / 2.0).cos();
    let y2 = cy + r * (sector.end_angle - PI / 2.0).sin();
    let large = if sector.large_arc { 1 } else { 0 };
    format!("M {cx} {cy} L {x1} {y1} A {r} {r} 0 {large} 1 {x2} {y2} Z")
}

#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineLayout {
    pub width: f64,
    pub height: f64,
    pub edge_offset: f64,
}

impl Default for TimelineLayout {
    fn default() -> Self {
        TimelineLayout {
            width: 1100.0,
            height: 110.0,
            edge_offset: 20.0,
        }
    }
}

impl TimelineLayout {
    fn track_width(self) -> f64 {
        self.width - 2.0 * self.edge_offset
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineTrack {
    pub layout: TimelineLayout,
    pub min_age: f64,
    pub max_age: f64,
    pub ticks: Vec<TimelineTick>,
    pub markers: Vec<TimelineMarker>,
}

#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineTick {
    pub x: f64,
    pub age: i64,
}

#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineMarker {
    pub x: f64,
    pub roi: Option<f64>,
    pub age_at_fi: Option<f64>,
    pub color: &'static str,
    pub balanced: bool,
}

const TICK_COUNT: usize = 6;

pub fn timeline_track(
    scenarios: &[Scenario],
    current_age: f64,
    layout: TimelineLayout,
) -> Option<TimelineTrack> {
    if scenarios.is_empty() {
        return None;
    }

    // Invalid ages take part as 0 so their scenarios stay visible.
    let ages: Vec<f64> = scenarios
        .iter()
        .map(|s| s.age_at_fi.positive().unwrap_or(0.0))
        .collect();

    let mut min_age = current_age;
    let mut max_age = f64::NEG_INFINITY;
    for &age in &ages {
        min_age = min_age.min(age);
        max_age = max_age.max(age);
    }
    let min_age = min_age - 1.0;
    let max_age = max_age + 1.0;
    let span = (max_age - min_age).max(1.0);

    let scale = |age: f64| layout.edge_offset + (age - min_age) / span * layout.track_width();

    let ticks = (0..TICK_COUNT)
        .map(|i| {
            let fraction = i as f64 / (TICK_COUNT - 1) as f64;
            let age = js_round(min_age + fraction * (max_age - min_age));
            TimelineTick {
                x: scale(age),
                age: age as i64,
            }
        })
        .collect();

    let markers = scenarios
        .iter()
        .zip(&ages)
        .map(|(scenario, &coerced_age)| {
            let class = classify_scenario(scenario);
            TimelineMarker {
                x: scale(coerced_age),
                roi: scenario.roi.value(),
                age_at_fi: scenario.age_at_fi.positive(),
                color: class.marker_color,
                balanced: class.strategy == Strategy::Balanced,
            }
        })
        .collect();

    Some(TimelineTrack {
        layout,
        min_age,
        max_age,
        ticks,
        markers,
    })
}

// Rounds half toward positive infinity, the way the tick labels were
// originally rounded.
fn js_round(value: f64) -> f64 {
    (value + 0.5).floor()
}

// Dash/gap pair for a progress ring: the dash covers percent of the
// circumference, the offset spins the start to 12 o'clock.
pub fn ring_dasharray(percent: f64, size: f64, stroke: f64) -> RingGeometry {
    let radius = (size - stroke) / 2.0;
    let circumference = 2.0 * PI * radius;
    let dash = percent.clamp(0.0, 100.0) / 100.0 * circumference;
    RingGeometry {
        radius,
        dash,
        gap: circumference - dash,
        offset: -circumference * 0.25,
    }
}

#[derive(Copy, Clone, Debug)]
pub struct RingGeometry {
    pub radius: f64,
    pub dash: f64,
    pub gap: f64,
    pub offset: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Numeric;
    use proptest::collection;
    use proptest::prelude::{prop_assert, proptest};

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn scenario(roi: f64, age_at_fi: Numeric) -> Scenario {
        Scenario {
            roi: Numeric::from_f64(roi),
            years_to_fi: Numeric::Value(10.0),
            age_at_fi,
        }
    }

    #[test]
    fn sector_spans_cover_the_full_circle() {
        let sectors = pie_sectors(&[600.0, 250.0, 150.0]);
        let total: f64 = sectors.iter().map(|s| s.span()).sum();
        assert_approx(total, 2.0 * PI);
        assert_approx(sectors[0].start_angle, 0.0);
        assert_approx(sectors[2].end_angle, 2.0 * PI);
    }

    #[test]
    fn zero_total_collapses_sectors_without_nan() {
        let sectors = pie_sectors(&[0.0, 0.0]);
        for sector in sectors {
            assert_approx(sector.span(), 0.0);
            assert!(sector.start_angle.is_finite());
            assert!(sector.end_angle.is_finite());
        }
    }

    #[test]
    fn single_amount_fills_the_circle_with_a_large_arc() {
        let sectors = pie_sectors(&[42.0]);
        assert_eq!(sectors.len(), 1);
        assert_approx(sectors[0].span(), 2.0 * PI);
        assert!(sectors[0].large_arc);
    }

    #[test]
    fn large_arc_flag_set_only_past_half_circle() {
        let sectors = pie_sectors(&[3.0, 1.0]);
        assert!(sectors[0].large_arc);
        assert!(!sectors[1].large_arc);
    }

    #[test]
    fn palette_cycles_by_index() {
        assert_eq!(palette_color(0), "#6366f1");
        assert_eq!(palette_color(5), "#8b5cf6");
        assert_eq!(palette_color(6), "#6366f1");
        let sectors = pie_sectors(&[1.0; 8]);
        assert_eq!(sectors[6].color, sectors[0].color);
    }

    #[test]
    fn sector_path_shape_is_move_line_arc_close() {
        let layout = PieLayout::default();
        let (cx, cy) = layout.center();
        let sectors = pie_sectors(&[1.0, 1.0, 1.0, 1.0]);
        let path = sector_path(sectors[0], cx, cy, layout.radius());
        assert!(path.starts_with("M 100 100 L "));
        assert!(path.contains(" A 98 98 0 0 1 "));
        assert!(path.ends_with(" Z"));
    }

    #[test]
    fn dashboard_layout_matches_the_rendered_chart() {
        let layout = PieLayout::dashboard();
        assert_approx(layout.size, 160.0);
        assert_approx(layout.inner_radius, 46.0);
        assert_approx(layout.radius(), 78.0);
    }

    #[test]
    fn timeline_positions_interpolate_between_padded_bounds() {
        let scenarios = [
            scenario(10.0, Numeric::Value(35.0)),
            scenario(13.0, Numeric::Value(40.0)),
            scenario(18.0, Numeric::Value(45.0)),
        ];
        let track =
            timeline_track(&scenarios, 25.0, TimelineLayout::default()).expect("non-empty track");

        assert_approx(track.min_age, 24.0);
        assert_approx(track.max_age, 46.0);
        // age 35 sits 11/22 of the way across the 1060-unit track
        assert_approx(track.markers[0].x, 20.0 + 11.0 / 22.0 * 1060.0);
        assert_approx(track.markers[2].x, 20.0 + 21.0 / 22.0 * 1060.0);
    }

    #[test]
    fn ticks_are_six_evenly_spaced_rounded_ages() {
        let scenarios = [
            scenario(10.0, Numeric::Value(35.0)),
            scenario(18.0, Numeric::Value(45.0)),
        ];
        let track =
            timeline_track(&scenarios, 25.0, TimelineLayout::default()).expect("non-empty track");

        assert_eq!(track.ticks.len(), 6);
        assert_eq!(track.ticks[0].age, 24);
        assert_eq!(track.ticks[5].age, 46);
        let labels: Vec<i64> = track.ticks.iter().map(|t| t.age).collect();
        assert_eq!(labels, vec![24, 28, 33, 37, 42, 46]);
    }

    #[test]
    fn invalid_age_keeps_its_marker_with_a_missing_label() {
        let scenarios = [scenario(13.0, Numeric::NotAvailable)];
        let track =
            timeline_track(&scenarios, 25.0, TimelineLayout::default()).expect("non-empty track");

        // Coerced age 0 drags the lower bound to -1 and still lands on the track.
        assert_approx(track.min_age, -1.0);
        assert_approx(track.max_age, 1.0);
        assert_approx(track.markers[0].x, 20.0 + 0.5 * 1060.0);
        assert_eq!(track.markers[0].age_at_fi, None);
        assert!(track.markers[0].balanced);
    }

    #[test]
    fn marker_colors_follow_the_roi_bands() {
        let scenarios = [
            scenario(10.0, Numeric::Value(35.0)),
            scenario(12.0, Numeric::Value(40.0)),
            scenario(16.0, Numeric::Value(45.0)),
        ];
        let track =
            timeline_track(&scenarios, 25.0, TimelineLayout::default()).expect("non-empty track");
        assert_eq!(track.markers[0].color, "#06b6d4");
        assert_eq!(track.markers[1].color, "#10B981");
        assert_eq!(track.markers[2].color, "#ef4444");
        assert!(track.markers[1].balanced);
        assert!(!track.markers[2].balanced);
    }

    #[test]
    fn empty_scenarios_produce_no_track() {
        assert!(timeline_track(&[], 25.0, TimelineLayout::default()).is_none());
    }

    #[test]
    fn ring_geometry_scales_with_percent() {
        let ring = ring_dasharray(72.0, 160.0, 16.0);
        assert_approx(ring.radius, 72.0);
        assert_approx(ring.dash + ring.gap, 2.0 * PI * 72.0);
        assert_approx(ring.dash, 0.72 * 2.0 * PI * 72.0);
        assert_approx(ring.offset, -(2.0 * PI * 72.0) * 0.25);
    }

    #[test]
    fn ring_percent_is_clamped() {
        let over = ring_dasharray(150.0, 160.0, 16.0);
        assert_approx(over.gap, 0.0);
        let under = ring_dasharray(-20.0, 160.0, 16.0);
        assert_approx(under.dash, 0.0);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]
        #[test]
        fn sector_spans_always_sum_to_the_full_circle(
            amounts in collection::vec(0.01f64..1.0e9, 1..12)
        ) {
            let sectors = pie_sectors(&amounts);
            let total: f64 = sectors.iter().map(|s| s.span()).sum();
            prop_assert!((total - 2.0 * PI).abs() < 1e-6);
            for sector in sectors {
                prop_assert!(sector.span() >= 0.0);
            }
        }

        #[test]
        fn marker_positions_stay_on_the_track(
            ages in collection::vec(20.0f64..90.0, 1..8),
            current_age in 18.0f64..80.0,
        ) {
            let scenarios: Vec<Scenario> = ages
                .iter()
                .map(|&a| scenario(12.0, Numeric::Value(a)))
                .collect();
            let layout = TimelineLayout::default();
            let track = timeline_track(&scenarios, current_age, layout).expect("non-empty");
            for marker in track.markers {
                prop_assert!(marker.x >= layout.edge_offset - 1e-9);
                prop_assert!(marker.x <= layout.width - layout.edge_offset + 1e-9);
            }
        }
    }
}
