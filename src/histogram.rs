//! Traffic histogram layout engine.
//!
//! Turns a [`BucketSeries`] (rx/tx packet counts per fixed time window, oldest
//! first) into bar geometry that fits a fixed pixel budget, then draws it with
//! static axes and a summary label.
//!
//! # Layout
//!
//! ```text
//!  ^  LAST 36m, MAX:20
//!  |
//!  |     █
//!  |   █ █       █                   t
//!  | █ █ █ █   █ █ █
//!  +─────────────────────────────────>   y = BASELINE_Y
//! ```
//!
//! # Scaling
//!
//! - Horizontal: at most `MAX_BUCKET_COUNT` bars share `AVAIL_WIDTH` pixels.
//!   `bucket_width = floor(AVAIL_WIDTH / displayed) - 1`, each bar is
//!   `bucket_width - 1` wide, leaving a 1px gap. Buckets past the cap are cut from
//!   the high-index end; there is no resampling.
//! - Vertical: `unit = AVAIL_HEIGHT / rx_max`, bar height `round(rx * unit)`. The
//!   bucket holding `rx_max` always reaches the full chart height.
//!
//! A series with `rx_max == 0` or no buckets yields no layout: an all-zero chart
//! carries no information, and the page skips instead.

use std::collections::BTreeMap;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::Point;

use crate::canvas::Canvas;
use crate::config::{AVAIL_HEIGHT, AVAIL_WIDTH, AXIS_X, BASELINE_Y, MAX_BUCKET_COUNT, SCREEN_WIDTH, START_WIDTH};
use crate::widgets::{ArrowDirection, LineText, draw_axis_arrow, line_text};

// =============================================================================
// Decoration Positions
// =============================================================================

/// Top of the vertical axis (arrow tip).
const Y_AXIS_TIP: Point = Point::new(AXIS_X, 0);

/// Chart origin where both axes meet.
const ORIGIN: Point = Point::new(AXIS_X, BASELINE_Y);

/// Right end of the horizontal axis (arrow tip).
const X_AXIS_TIP: Point = Point::new(SCREEN_WIDTH as i32 - 1, BASELINE_Y);

/// Position of the time axis label.
const TIME_LABEL_POS: Point = Point::new(121, 45);

/// Position of the summary label.
const SUMMARY_POS: Point = Point::new(10, 0);

// =============================================================================
// Input Model
// =============================================================================

/// Packet counts for one bucket.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct BucketCounts {
    pub rx: u64,
    pub tx: u64,
}

/// Time-bucketed traffic counts as published by the metrics endpoint.
///
/// `buckets` is sparse: indices absent from the map count as `{rx: 0, tx: 0}`.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct BucketSeries {
    pub bucket_count: usize,
    /// Seconds per bucket.
    pub bucket_size: u64,
    pub buckets: BTreeMap<usize, BucketCounts>,
    /// Largest single-bucket rx count across the whole series.
    pub rx_max: u64,
}

impl BucketSeries {
    /// Counts for bucket `index`, zero when the source left it out.
    #[inline]
    pub fn counts(&self, index: usize) -> BucketCounts {
        self.buckets.get(&index).copied().unwrap_or_default()
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Geometry of one bar. `x` is the left edge; the bar grows up from the baseline.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Bar {
    pub index: usize,
    pub x: i32,
    pub width: i32,
    pub height: i32,
}

/// Everything needed to draw the histogram page.
#[derive(Clone, PartialEq, Debug)]
pub struct HistogramLayout {
    /// Bars actually drawn: `min(bucket_count, MAX_BUCKET_COUNT)`.
    pub displayed_count: usize,
    /// Horizontal pitch between bar left edges.
    pub bucket_width: i32,
    /// Pixels per received packet.
    pub unit: f64,
    /// One entry per displayed bucket, in index (time) order.
    pub bars: Vec<Bar>,
    /// `LAST <minutes>m, MAX:<rx_max>`.
    pub label: LineText,
}

impl HistogramLayout {
    /// Lay out `series`, or `None` when there is nothing worth drawing.
    pub fn compute(series: &BucketSeries) -> Option<Self> {
        let displayed_count = series.bucket_count.min(MAX_BUCKET_COUNT);
        if series.rx_max == 0 || displayed_count == 0 {
            return None;
        }

        let bucket_width = (AVAIL_WIDTH as usize / displayed_count) as i32 - 1;
        let unit = f64::from(AVAIL_HEIGHT) / series.rx_max as f64;

        let bars = (0..displayed_count)
            .map(|index| Bar {
                index,
                x: START_WIDTH + index as i32 * bucket_width,
                width: bucket_width - 1,
                height: bar_height(series.counts(index).rx, unit),
            })
            .collect();

        // bucket_size comes straight off the wire
        let minutes = (displayed_count as u64).saturating_mul(series.bucket_size) / 60;
        let label = line_text(format_args!("LAST {minutes}m, MAX:{}", series.rx_max));

        Some(Self {
            displayed_count,
            bucket_width,
            unit,
            bars,
            label,
        })
    }

    /// Draw axes, bars and label onto `canvas`.
    pub fn draw(&self, canvas: &mut Canvas) {
        draw_axes(canvas);

        for bar in &self.bars {
            // Zero-height bars leave only the baseline; sub-pixel widths draw nothing
            if bar.width < 1 || bar.height < 1 {
                continue;
            }
            canvas.draw_rect(
                bar.x,
                BASELINE_Y - 1,
                bar.x + bar.width - 1,
                BASELINE_Y - bar.height,
                BinaryColor::On,
                Some(BinaryColor::On),
            );
        }

        canvas.draw_text(SUMMARY_POS.x, SUMMARY_POS.y, &self.label, BinaryColor::On);
    }
}

/// Scaled bar height, capped at the chart height for buckets above `rx_max`.
#[inline]
fn bar_height(rx: u64, unit: f64) -> i32 {
    ((rx as f64 * unit).round() as i32).min(AVAIL_HEIGHT as i32)
}

/// Static chart decoration: both axes with arrowheads and the `t` label.
fn draw_axes(canvas: &mut Canvas) {
    draw_axis_arrow(canvas, ORIGIN, Y_AXIS_TIP, ArrowDirection::Up);
    draw_axis_arrow(canvas, ORIGIN, X_AXIS_TIP, ArrowDirection::Right);
    canvas.draw_text(TIME_LABEL_POS.x, TIME_LABEL_POS.y, "t", BinaryColor::On);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn series(bucket_count: usize, bucket_size: u64, rx_max: u64, buckets: &[(usize, u64)]) -> BucketSeries {
        BucketSeries {
            bucket_count,
            bucket_size,
            buckets: buckets.iter().map(|&(i, rx)| (i, BucketCounts { rx, tx: 0 })).collect(),
            rx_max,
        }
    }

    /// Lit pixels in column `x` strictly above the baseline, below the label row.
    fn column_height(canvas: &Canvas, x: i32) -> i32 {
        (BASELINE_Y - AVAIL_HEIGHT as i32..BASELINE_Y)
            .filter(|&y| canvas.pixel(x, y))
            .count() as i32
    }

    // -------------------------------------------------------------------------
    // Skip Conditions
    // -------------------------------------------------------------------------

    #[test]
    fn test_zero_rx_max_yields_nothing() {
        let s = series(10, 60, 0, &[(0, 5), (1, 7)]);
        assert!(HistogramLayout::compute(&s).is_none());
    }

    #[test]
    fn test_zero_buckets_yields_nothing() {
        let s = series(0, 60, 10, &[]);
        assert!(HistogramLayout::compute(&s).is_none());
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    #[test]
    fn test_tallest_bucket_reaches_full_height() {
        let s = series(10, 60, 20, &[(0, 20)]);
        let layout = HistogramLayout::compute(&s).unwrap();

        assert_eq!(layout.bucket_width, 11);
        assert_eq!(layout.bars[0].height, AVAIL_HEIGHT as i32);

        let mut canvas = Canvas::new();
        layout.draw(&mut canvas);
        assert_eq!(column_height(&canvas, layout.bars[0].x), AVAIL_HEIGHT as i32);
    }

    #[test]
    fn test_cap_truncates_from_high_end() {
        let buckets: Vec<_> = (0..100).map(|i| (i, i as u64 + 1)).collect();
        let s = series(100, 60, 100, &buckets);
        let layout = HistogramLayout::compute(&s).unwrap();

        assert_eq!(layout.displayed_count, MAX_BUCKET_COUNT);
        assert_eq!(layout.bars.len(), 36);
        let indices: Vec<_> = layout.bars.iter().map(|b| b.index).collect();
        assert_eq!(indices, (0..36).collect::<Vec<_>>());
        // floor(120 / 36) - 1
        assert_eq!(layout.bucket_width, 2);
        assert_eq!(layout.bars[35].x, START_WIDTH + 35 * 2);
    }

    #[test]
    fn test_missing_bucket_is_zero_height() {
        let s = series(4, 60, 8, &[(0, 8), (2, 4), (3, 2)]);
        let layout = HistogramLayout::compute(&s).unwrap();
        assert_eq!(layout.bars[1].height, 0);

        let mut canvas = Canvas::new();
        layout.draw(&mut canvas);
        let bar = layout.bars[1];
        for x in bar.x..bar.x + bar.width {
            assert_eq!(column_height(&canvas, x), 0, "missing bucket drew pixels at x={x}");
            assert!(canvas.pixel(x, BASELINE_Y), "baseline must stay under an empty bar");
        }
    }

    #[test]
    fn test_linear_scaling_rounds() {
        // unit = 40 / 30; 10 * 1.333.. = 13.33 -> 13, 20 * 1.333.. = 26.67 -> 27
        let s = series(3, 60, 30, &[(0, 10), (1, 20), (2, 30)]);
        let layout = HistogramLayout::compute(&s).unwrap();
        let heights: Vec<_> = layout.bars.iter().map(|b| b.height).collect();
        assert_eq!(heights, vec![13, 27, 40]);
    }

    #[test]
    fn test_bucket_above_rx_max_is_capped() {
        let s = series(2, 60, 10, &[(0, 25)]);
        let layout = HistogramLayout::compute(&s).unwrap();
        assert_eq!(layout.bars[0].height, AVAIL_HEIGHT as i32);
    }

    #[test]
    fn test_bar_width_leaves_gap() {
        let s = series(10, 60, 5, &[(0, 5), (1, 5)]);
        let layout = HistogramLayout::compute(&s).unwrap();
        let (a, b) = (layout.bars[0], layout.bars[1]);
        assert_eq!(a.width, layout.bucket_width - 1);
        assert_eq!(b.x - (a.x + a.width), 1);

        let mut canvas = Canvas::new();
        layout.draw(&mut canvas);
        let gap_x = a.x + a.width;
        assert_eq!(column_height(&canvas, gap_x), 0);
        assert_eq!(column_height(&canvas, gap_x + 1), AVAIL_HEIGHT as i32);
    }

    // -------------------------------------------------------------------------
    // Label
    // -------------------------------------------------------------------------

    #[test]
    fn test_label_minutes_and_max() {
        let s = series(10, 60, 20, &[(0, 20)]);
        let layout = HistogramLayout::compute(&s).unwrap();
        assert_eq!(layout.label.as_str(), "LAST 10m, MAX:20");
    }

    #[test]
    fn test_label_uses_displayed_count() {
        // 100 buckets of 5 minutes, capped at 36 -> 180 minutes
        let s = series(100, 300, 7, &[(0, 7)]);
        let layout = HistogramLayout::compute(&s).unwrap();
        assert_eq!(layout.label.as_str(), "LAST 180m, MAX:7");
    }

    #[test]
    fn test_label_minutes_truncate() {
        // 3 * 50s = 150s = 2.5m -> 2m
        let s = series(3, 50, 1, &[(0, 1)]);
        let layout = HistogramLayout::compute(&s).unwrap();
        assert_eq!(layout.label.as_str(), "LAST 2m, MAX:1");
    }

    #[test]
    fn test_label_saturates_on_huge_bucket_size() {
        let s = series(2, u64::MAX, 5, &[(0, 5)]);
        let layout = HistogramLayout::compute(&s).unwrap();
        // u64::MAX / 60, cut to the panel width
        assert!(layout.label.starts_with("LAST 30744573456"));
        assert_eq!(layout.bars[0].height, AVAIL_HEIGHT as i32);
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    #[test]
    fn test_axes_drawn() {
        let s = series(1, 60, 1, &[]);
        let layout = HistogramLayout::compute(&s).unwrap();
        let mut canvas = Canvas::new();
        layout.draw(&mut canvas);

        assert!(canvas.pixel(AXIS_X, 0));
        assert!(canvas.pixel(AXIS_X, BASELINE_Y));
        assert!(canvas.pixel(127, BASELINE_Y));
        assert!(canvas.pixel(0, 3));
        assert!(canvas.pixel(6, 3));
        assert!(canvas.pixel(124, 57));
        assert!(canvas.pixel(124, 63));
    }

    #[test]
    fn test_draw_is_deterministic() {
        let s = series(20, 120, 9, &[(0, 9), (3, 4), (19, 1)]);
        let layout = HistogramLayout::compute(&s).unwrap();
        let mut a = Canvas::new();
        let mut b = Canvas::new();
        layout.draw(&mut a);
        HistogramLayout::compute(&s).unwrap().draw(&mut b);
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_bars_stay_inside_chart(
            bucket_count in 1usize..200,
            rx_max in 1u64..10_000,
            rx in proptest::collection::vec(0u64..10_000, 0..200),
        ) {
            let buckets: BTreeMap<usize, BucketCounts> = rx
                .iter()
                .enumerate()
                .map(|(i, &rx)| (i, BucketCounts { rx: rx.min(rx_max), tx: 0 }))
                .collect();
            let s = BucketSeries { bucket_count, bucket_size: 60, buckets, rx_max };
            let layout = HistogramLayout::compute(&s).unwrap();

            prop_assert_eq!(layout.bars.len(), bucket_count.min(MAX_BUCKET_COUNT));
            for bar in &layout.bars {
                prop_assert!(bar.height >= 0 && bar.height <= AVAIL_HEIGHT as i32);
                prop_assert!(bar.x >= START_WIDTH);
                prop_assert!(bar.x + bar.width <= START_WIDTH + AVAIL_WIDTH as i32);
            }
        }

        #[test]
        fn prop_rx_max_bucket_is_full_height(
            bucket_count in 1usize..=MAX_BUCKET_COUNT,
            rx_max in 1u64..1_000_000,
            slot in 0usize..MAX_BUCKET_COUNT,
        ) {
            let slot = slot % bucket_count;
            let s = series(bucket_count, 60, rx_max, &[(slot, rx_max)]);
            let layout = HistogramLayout::compute(&s).unwrap();
            prop_assert_eq!(layout.bars[slot].height, AVAIL_HEIGHT as i32);
        }
    }
}
