//! Board session
//!
//! Holds what a board front end needs between user actions: the placed
//! points, the bound, the enumeration currently being paged through, and a
//! count computed off the caller's thread. Every change to the visible points
//! restarts both engines.

pub mod config;

pub use config::{ConfigError, SessionConfig, MAX_BOUND, MIN_BOUND};

use crate::geometry::{CircleInfo, Point};
use crate::search::{count_circles, count_circles_until, CircleEnumerator};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors surfaced by a session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("circle count worker panicked")]
    CountWorkerPanicked,
    #[error("circle count was cancelled")]
    CountCancelled,
}

/// Progress of the background count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountState {
    Computing,
    Ready(i64),
    Failed,
}

impl fmt::Display for CountState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountState::Computing => write!(f, "computing concyclic sets..."),
            CountState::Ready(0) => write!(f, "no concyclic sets"),
            CountState::Ready(1) => write!(f, "1 concyclic set"),
            CountState::Ready(n) => write!(f, "{} concyclic sets", n),
            CountState::Failed => write!(f, "count unavailable"),
        }
    }
}

#[derive(Debug)]
enum PendingCount {
    Running {
        handle: JoinHandle<Option<i64>>,
        cancel: Arc<AtomicBool>,
    },
    Ready(i64),
    Failed,
}

impl PendingCount {
    fn start(points: Vec<Point>) -> Self {
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);
        let spawned = thread::Builder::new()
            .name("circle-count".into())
            .spawn(move || count_circles_until(&points, &flag));

        match spawned {
            Ok(handle) => PendingCount::Running { handle, cancel },
            Err(e) => {
                warn!("could not spawn count worker: {}", e);
                PendingCount::Failed
            }
        }
    }

    fn state(&self) -> CountState {
        match self {
            PendingCount::Running { .. } => CountState::Computing,
            PendingCount::Ready(n) => CountState::Ready(*n),
            PendingCount::Failed => CountState::Failed,
        }
    }

    /// Ask a running worker to stop; it is left to exit on its own
    fn cancel(&self) {
        if let PendingCount::Running { cancel, .. } = self {
            cancel.store(true, Ordering::Relaxed);
        }
    }
}

/// Interactive state around a changing point set
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    points: Vec<Point>,
    enumerator: CircleEnumerator,
    current: Option<CircleInfo>,
    count: PendingCount,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            points: Vec::new(),
            enumerator: CircleEnumerator::new(Vec::new()),
            current: None,
            count: PendingCount::Ready(0),
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Every placed point, including those outside the bound
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Placed points inside the bound, in placement order
    pub fn visible_points(&self) -> Vec<Point> {
        self.points
            .iter()
            .copied()
            .filter(|p| p.is_visible(self.config.bound))
            .collect()
    }

    /// Remove `point` if placed, otherwise append it
    pub fn toggle_point(&mut self, point: Point) {
        match self.points.iter().position(|p| *p == point) {
            Some(index) => {
                self.points.remove(index);
            }
            None => self.points.push(point),
        }
        self.refresh();
    }

    /// Append every point not already placed
    pub fn add_points(&mut self, points: impl IntoIterator<Item = Point>) {
        for point in points {
            if !self.points.contains(&point) {
                self.points.push(point);
            }
        }
        self.refresh();
    }

    /// Replace the whole point set; later duplicates are dropped
    pub fn set_points(&mut self, points: Vec<Point>) {
        self.points.clear();
        self.add_points(points);
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.refresh();
    }

    /// Change the board side; rejected values leave the session untouched
    pub fn set_bound(&mut self, bound: i32) -> Result<(), ConfigError> {
        config::check_bound(bound)?;
        if bound != self.config.bound {
            self.config.bound = bound;
            self.refresh();
        }
        Ok(())
    }

    pub fn set_display_computation(&mut self, display: bool) {
        self.config.display_computation = display;
    }

    /// Circle at the enumeration cursor, if any
    pub fn current_circle(&self) -> Option<CircleInfo> {
        self.current
    }

    /// Circle to mark on the board; hidden while computation display is off
    pub fn displayed_circle(&self) -> Option<CircleInfo> {
        self.current.filter(|_| self.config.display_computation)
    }

    /// Whether `point` lies on the displayed circle
    pub fn is_highlighted(&self, point: Point) -> bool {
        self.displayed_circle()
            .map_or(false, |circle| circle.contains(point))
    }

    /// Advance to the next circle, wrapping to a fresh enumeration at the end
    pub fn show_next(&mut self) -> Option<CircleInfo> {
        self.current = match self.enumerator.next() {
            Some(circle) => Some(circle),
            None => {
                debug!("enumeration exhausted, restarting");
                self.enumerator = CircleEnumerator::new(self.visible_points());
                self.enumerator.next()
            }
        };
        self.current
    }

    /// Count state without blocking
    pub fn count_state(&self) -> CountState {
        self.count.state()
    }

    /// Collect the count if the worker has finished
    pub fn poll_count(&mut self) -> Result<CountState, SessionError> {
        let finished =
            matches!(&self.count, PendingCount::Running { handle, .. } if handle.is_finished());
        if finished {
            self.join_count()?;
        }
        Ok(self.count.state())
    }

    /// Block until the count is known
    pub fn wait_count(&mut self) -> Result<i64, SessionError> {
        self.join_count()
    }

    fn join_count(&mut self) -> Result<i64, SessionError> {
        match std::mem::replace(&mut self.count, PendingCount::Failed) {
            PendingCount::Running { handle, .. } => match handle.join() {
                Ok(Some(n)) => {
                    debug!(circles = n, "count resolved");
                    self.count = PendingCount::Ready(n);
                    Ok(n)
                }
                Ok(None) => Err(SessionError::CountCancelled),
                Err(_) => Err(SessionError::CountWorkerPanicked),
            },
            PendingCount::Ready(n) => {
                self.count = PendingCount::Ready(n);
                Ok(n)
            }
            PendingCount::Failed => {
                // Retry inline on the current points
                let n = count_circles(&self.visible_points());
                self.count = PendingCount::Ready(n);
                Ok(n)
            }
        }
    }

    fn refresh(&mut self) {
        let visible = self.visible_points();
        debug!(
            placed = self.points.len(),
            visible = visible.len(),
            "point set changed"
        );

        self.count.cancel();
        self.count = PendingCount::start(visible.clone());
        self.enumerator = CircleEnumerator::new(visible);
        self.current = self.enumerator.next();
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.count.cancel();
    }
}
