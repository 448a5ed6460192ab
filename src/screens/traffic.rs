//! Traffic page: LoRaWAN rx histogram.
//!
//! Fetches the bucket series, lays it out with [`HistogramLayout`] and draws it.
//! This is the only page that skips: when the endpoint is unreachable, returns
//! garbage, or reports no received packets at all.

use tracing::debug;

use crate::canvas::Canvas;
use crate::histogram::HistogramLayout;
use crate::pages::{Page, RenderOutcome};
use crate::sources::MetricsSource;

pub struct TrafficPage<M> {
    source: M,
}

impl<M: MetricsSource> TrafficPage<M> {
    pub const fn new(source: M) -> Self {
        Self { source }
    }
}

impl<M: MetricsSource> Page for TrafficPage<M> {
    fn name(&self) -> &'static str {
        "traffic"
    }

    fn render(&mut self, canvas: &mut Canvas) -> RenderOutcome {
        let series = match self.source.fetch() {
            Ok(series) => series,
            Err(e) => {
                debug!(error = %e, "no traffic metrics");
                return RenderOutcome::Skipped;
            }
        };

        let Some(layout) = HistogramLayout::compute(&series) else {
            debug!(
                bucket_count = series.bucket_count,
                rx_max = series.rx_max,
                "nothing to chart"
            );
            return RenderOutcome::Skipped;
        };

        layout.draw(canvas);
        RenderOutcome::Rendered
    }
}
