//! Client-side view-state for the learning path: loading/error phase,
//! the current path, and completion tracking.

use std::collections::HashSet;

use crate::error::PathError;
use crate::models::LearningPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Ticket for one submission. Only the most recently issued token may write
/// its outcome back, so when submissions overlap the latest user intent wins
/// and stale responses are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Default)]
pub struct PathState {
    phase: Phase,
    path: Option<LearningPath>,
    error: Option<String>,
    completed: HashSet<String>,
    latest_token: u64,
}

impl PathState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters `Loading` synchronously. The previous error and completed-step
    /// set are cleared here, not when the response lands, so a retried
    /// request never shows stale completion state.
    pub fn begin_submission(&mut self) -> RequestToken {
        self.phase = Phase::Loading;
        self.error = None;
        self.completed.clear();
        self.latest_token += 1;
        RequestToken(self.latest_token)
    }

    /// Applies a generation outcome. Returns `false` (and changes nothing)
    /// if a newer submission has been issued since `token`.
    pub fn resolve(
        &mut self,
        token: RequestToken,
        outcome: Result<LearningPath, PathError>,
    ) -> bool {
        if token.0 != self.latest_token {
            return false;
        }
        match outcome {
            Ok(path) => {
                self.phase = Phase::Ready;
                self.path = Some(path);
                self.completed.clear();
            }
            Err(err) => {
                // The path is only ever overwritten on success; an existing
                // rendered path stays visible behind the error banner.
                self.phase = Phase::Failed;
                self.error = Some(err.display_message());
            }
        }
        true
    }

    /// Flips completion for one step id. Ids not in the current path are
    /// ignored, so the completed set stays a subset of the path's ids.
    pub fn toggle_step(&mut self, id: &str) {
        let known = self
            .path
            .as_ref()
            .is_some_and(|p| p.steps.iter().any(|s| s.id == id));
        if !known {
            return;
        }
        if !self.completed.remove(id) {
            self.completed.insert(id.to_string());
        }
    }

    /// `round(100 * completed / steps)`, 0 with no path or no steps.
    /// Derived on every call, never stored.
    pub fn progress(&self) -> u8 {
        let total = self.path.as_ref().map_or(0, |p| p.steps.len());
        if total == 0 {
            return 0;
        }
        ((self.completed.len() as f64 / total as f64) * 100.0).round() as u8
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn path(&self) -> Option<&LearningPath> {
        self.path.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn completed_steps(&self) -> &HashSet<String> {
        &self.completed
    }

    /// The submit control is disabled while this is true, preventing
    /// duplicate concurrent submissions from the same view.
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}
