//! Page rotation.
//!
//! The scheduler owns the ordered page list and a cursor naming the page to try
//! next. Each tick it renders onto a fresh canvas, starting at the cursor. A page
//! that skips hands the tick to its successor, so one tick shows at most one
//! frame and never more than a full lap of attempts is made.
//!
//! ```text
//!   tick 1: [Network]  Stats   Traffic      -> Network
//!   tick 2:  Network  [Stats]  Traffic      -> Stats
//!   tick 3:  Network   Stats  [Traffic]     -> skipped, retry
//!           [Network]  Stats   Traffic      -> Network
//! ```
//!
//! [`Scheduler::run`] drives ticks on a fixed period against a
//! [`DisplayDriver`] until the stop channel fires.

use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError};
use tracing::{debug, info, warn};

use crate::canvas::Canvas;
use crate::display::DisplayDriver;
use crate::error::{DisplayError, SchedulerError};
use crate::pages::{Page, RenderOutcome};

/// One rendered tick.
#[derive(Debug)]
pub struct Frame {
    pub canvas: Canvas,
    /// Name of the page that produced the frame.
    pub page: &'static str,
    /// Pages that skipped before this one rendered.
    pub skipped: usize,
}

pub struct Scheduler {
    pages: Vec<Box<dyn Page>>,
    cursor: usize,
}

impl Scheduler {
    pub fn new(pages: Vec<Box<dyn Page>>) -> Result<Self, SchedulerError> {
        if pages.is_empty() {
            return Err(SchedulerError::NoPages);
        }
        Ok(Self { pages, cursor: 0 })
    }

    /// Index of the page the next tick starts with.
    #[inline]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn page_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pages.iter().map(|p| p.name())
    }

    /// Produce the next frame.
    ///
    /// Returns `None` only when every page skipped. The cursor has then made a
    /// full lap and is back where it started.
    pub fn tick(&mut self) -> Option<Frame> {
        let mut canvas = Canvas::new();

        for skipped in 0..self.pages.len() {
            canvas.clear();
            let page = &mut self.pages[self.cursor];
            let outcome = page.render(&mut canvas);
            let name = page.name();
            self.cursor = (self.cursor + 1) % self.pages.len();

            match outcome {
                RenderOutcome::Rendered => return Some(Frame { canvas, page: name, skipped }),
                RenderOutcome::Skipped => debug!(page = name, "page skipped"),
            }
        }

        None
    }

    /// Tick every `interval` and push frames to `display` until `stop` receives
    /// a message or disconnects.
    ///
    /// The first tick runs immediately. Ticks are never overlapped: if one runs
    /// past its deadline the missed slots are dropped and the schedule restarts
    /// from now. Push failures are logged and the loop continues, except for a
    /// closed simulator window which ends the run. With `once` set the loop
    /// exits after the first tick.
    ///
    /// Returns the number of frames pushed successfully.
    pub fn run<D>(&mut self, display: &mut D, interval: Duration, once: bool, stop: &Receiver<()>) -> u64
    where
        D: DisplayDriver + ?Sized,
    {
        let mut shown: u64 = 0;
        let mut deadline = Instant::now();

        loop {
            let started = Instant::now();

            match self.tick() {
                Some(frame) => {
                    debug!(
                        page = frame.page,
                        skipped = frame.skipped,
                        render_ms = started.elapsed().as_millis() as u64,
                        "frame ready"
                    );
                    match display.show(&frame.canvas) {
                        Ok(()) => shown += 1,
                        Err(DisplayError::Closed) => {
                            info!("display closed, stopping");
                            break;
                        }
                        Err(e) => warn!(page = frame.page, error = %e, "frame push failed"),
                    }
                }
                None => warn!(pages = self.pages.len(), "every page skipped, keeping previous frame"),
            }

            if once {
                break;
            }

            deadline += interval;
            let now = Instant::now();
            if deadline <= now {
                debug!(overrun_ms = (now - deadline).as_millis() as u64, "tick overran its slot");
                deadline = now + interval;
            }

            match stop.recv_deadline(deadline) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    info!("stop requested");
                    break;
                }
            }
        }

        shown
    }
}
