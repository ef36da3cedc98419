//! Best-match selection across all faces in one response.

use crate::response::Detection;

/// Confidence of one detection: the score of whichever subject this face
/// most resembles. An empty probability vector yields negative infinity so
/// a malformed entry can never beat a real one.
pub fn confidence(detection: &Detection) -> f64 {
    detection
        .class_probability
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Pick the detection with the greatest confidence.
///
/// Returns `None` for an empty response (no usable face detected). On equal
/// confidence the earlier detection wins: the fold starts with the first
/// element and only a STRICTLY greater confidence replaces the running best.
/// Which face wins among equals is user-visible, so the tie-break is part of
/// the contract.
pub fn select_best_match(detections: &[Detection]) -> Option<&Detection> {
    let mut best = detections.first()?;
    let mut best_confidence = confidence(best);

    for detection in &detections[1..] {
        let c = confidence(detection);
        if c > best_confidence {
            best_confidence = c;
            best = detection;
        }
    }

    Some(best)
}
