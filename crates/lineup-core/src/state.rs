//! Per-submission display state.
//!
//! Every submission recomputes the whole state; nothing carries over except
//! by being overwritten. Holding the result, error, table, and portrait as
//! one tagged union (instead of parallel mutable slots) makes partial
//! updates unrepresentable and the state machine testable without any
//! rendering attached.

use serde::Serialize;

use crate::projector::{self, MatchDisplay};
use crate::response::Detection;
use crate::selector;

/// Shown when the response is a well-formed empty array: the upstream
/// classifier only answers for faces with two visible eyes.
pub const NO_DETECTION_MESSAGE: &str =
    "Can't classify image. Classifier was not able to detect face and two eyes properly.";

/// Shown for request construction, network, or non-success responses. The
/// user resubmits; nothing is retried automatically.
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Error while processing the image. Please try again.";

/// Terminal display state of one submission.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DisplayState {
    /// No submission yet; only the static gallery is shown.
    Idle,
    Error { message: String },
    Matched(MatchDisplay),
}

impl DisplayState {
    /// Interpret a well-formed classification response.
    ///
    /// Empty → the no-detection error. Otherwise the best-supported face is
    /// selected and projected; a malformed entry (bad dictionary index or
    /// empty probability vector) fails the whole submission rather than
    /// rendering a partial table.
    pub fn from_response(detections: &[Detection]) -> Self {
        let Some(best) = selector::select_best_match(detections) else {
            return Self::no_detection();
        };

        match projector::project(best) {
            Ok(matched) => {
                tracing::debug!(identity = %matched.identity, faces = detections.len(), "matched");
                Self::Matched(matched)
            }
            Err(err) => {
                tracing::warn!(error = %err, "malformed classification payload");
                Self::Error {
                    message: format!("Can't classify image. {err}."),
                }
            }
        }
    }

    pub fn no_detection() -> Self {
        Self::Error {
            message: NO_DETECTION_MESSAGE.to_string(),
        }
    }

    pub fn transport_failure() -> Self {
        Self::Error {
            message: TRANSPORT_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}
