//! Stats page: host resource readings.
//!
//! # Layout
//!
//! ```text
//! ┌─────────────────────┐
//! │STATS                │  header
//! │CPU: 7.5%            │
//! │Free memory: 62.3%   │
//! │Temperature: 48.3'C  │
//! │Uptime: 3d 4h 12m    │
//! └─────────────────────┘
//! ```
//!
//! Each reading is queried independently. A failed query leaves its value blank
//! (the label is still drawn) and never causes a skip.

use core::fmt::Display;

use tracing::debug;

use crate::canvas::Canvas;
use crate::error::SourceError;
use crate::pages::{Page, RenderOutcome};
use crate::sources::SystemSource;
use crate::widgets::{LineText, draw_header, draw_row, line_text};

const TITLE: &str = "STATS";

/// Label + value, or label alone when the query failed.
fn labeled<T: Display>(label: &str, reading: Result<T, SourceError>) -> LineText {
    match reading {
        Ok(value) => line_text(format_args!("{label}{value}")),
        Err(e) => {
            debug!(label, error = %e, "stat unavailable");
            line_text(format_args!("{label}"))
        }
    }
}

/// The four stat rows, in display order.
pub fn stats_lines<S: SystemSource + ?Sized>(source: &mut S) -> [LineText; 4] {
    let cpu = source.cpu_percent().map(Percent);
    let free = source.memory_used_percent().map(|used| Percent(100.0 - used));
    [
        labeled("CPU: ", cpu),
        labeled("Free memory: ", free),
        labeled("Temperature: ", source.temperature()),
        labeled("Uptime: ", source.uptime()),
    ]
}

/// One-decimal percentage, `12.5%`.
struct Percent(f32);

impl Display for Percent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

pub struct StatsPage<S> {
    source: S,
}

impl<S: SystemSource> StatsPage<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: SystemSource> Page for StatsPage<S> {
    fn name(&self) -> &'static str {
        "stats"
    }

    fn render(&mut self, canvas: &mut Canvas) -> RenderOutcome {
        draw_header(canvas, TITLE);
        for (row, line) in stats_lines(&mut self.source).iter().enumerate() {
            draw_row(canvas, row + 1, line);
        }
        RenderOutcome::Rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct FakeSystem {
        cpu: Option<f32>,
        mem_used: Option<f32>,
        temp: Option<&'static str>,
        uptime: Option<&'static str>,
    }

    impl FakeSystem {
        fn healthy() -> Self {
            Self {
                cpu: Some(7.46),
                mem_used: Some(37.7),
                temp: Some("48.3'C"),
                uptime: Some("3d 4h 12m"),
            }
        }

        fn broken() -> Self {
            Self {
                cpu: None,
                mem_used: None,
                temp: None,
                uptime: None,
            }
        }
    }

    fn or_unavailable<T>(value: Option<T>) -> Result<T, SourceError> {
        value.ok_or(SourceError::Unavailable("fake"))
    }

    impl SystemSource for FakeSystem {
        fn cpu_percent(&mut self) -> Result<f32, SourceError> {
            or_unavailable(self.cpu)
        }

        fn memory_used_percent(&mut self) -> Result<f32, SourceError> {
            or_unavailable(self.mem_used)
        }

        fn temperature(&mut self) -> Result<String, SourceError> {
            or_unavailable(self.temp.map(str::to_owned))
        }

        fn uptime(&mut self) -> Result<String, SourceError> {
            or_unavailable(self.uptime.map(str::to_owned))
        }
    }

    fn as_strs(lines: &[LineText; 4]) -> Vec<&str> {
        lines.iter().map(|l| l.as_str()).collect()
    }

    #[test]
    fn test_lines_with_all_readings() {
        let lines = stats_lines(&mut FakeSystem::healthy());
        assert_eq!(
            as_strs(&lines),
            ["CPU: 7.5%", "Free memory: 62.3%", "Temperature: 48.3'C", "Uptime: 3d 4h 12m"]
        );
    }

    #[test]
    fn test_failed_readings_render_blank_values() {
        let lines = stats_lines(&mut FakeSystem::broken());
        assert_eq!(as_strs(&lines), ["CPU: ", "Free memory: ", "Temperature: ", "Uptime: "]);
    }

    #[test]
    fn test_partial_failure() {
        let mut system = FakeSystem::healthy();
        system.temp = None;
        let lines = stats_lines(&mut system);
        assert_eq!(lines[0].as_str(), "CPU: 7.5%");
        assert_eq!(lines[2].as_str(), "Temperature: ");
        assert_eq!(lines[3].as_str(), "Uptime: 3d 4h 12m");
    }

    #[test]
    fn test_render_never_skips() {
        let mut page = StatsPage::new(FakeSystem::broken());
        let mut canvas = Canvas::new();
        assert_eq!(page.render(&mut canvas), RenderOutcome::Rendered);
        assert!(!canvas.is_blank());
    }

    #[test]
    fn test_render_layout() {
        let mut page = StatsPage::new(FakeSystem::healthy());
        let mut canvas = Canvas::new();
        page.render(&mut canvas);

        let mut expected = Canvas::new();
        draw_header(&mut expected, "STATS");
        draw_row(&mut expected, 1, "CPU: 7.5%");
        draw_row(&mut expected, 2, "Free memory: 62.3%");
        draw_row(&mut expected, 3, "Temperature: 48.3'C");
        draw_row(&mut expected, 4, "Uptime: 3d 4h 12m");
        assert_eq!(canvas, expected);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut page = StatsPage::new(FakeSystem::healthy());
        let mut a = Canvas::new();
        let mut b = Canvas::new();
        page.render(&mut a);
        page.render(&mut b);
        assert_eq!(a, b);
    }
}
