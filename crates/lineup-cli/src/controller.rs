//! Submission controller: owns the single display-state slot.
//!
//! One submission is in flight at a time; each submission replaces the
//! whole state, never a field of it. A stale response can therefore never
//! interleave with a newer one — callers driving submissions concurrently
//! would need to tag requests with a submission id first.

use std::path::Path;

use lineup_client::{encode_image, ClassifierClient};
use lineup_core::DisplayState;

pub struct Controller {
    client: ClassifierClient,
    state: DisplayState,
}

impl Controller {
    pub fn new(client: ClassifierClient) -> Self {
        Self {
            client,
            state: DisplayState::Idle,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Run one submission end to end: encode, classify, interpret.
    ///
    /// Encode and transport faults both surface as the retry-prompting
    /// error state; the underlying cause goes to the log. The state slot is
    /// always replaced wholesale, so a previous match or error cannot leak
    /// into the new result.
    pub async fn submit(&mut self, image: &Path) -> &DisplayState {
        self.state = match encode_image(image) {
            Ok(image_data) => match self.client.classify(&image_data).await {
                Ok(detections) => DisplayState::from_response(&detections),
                Err(err) => {
                    tracing::warn!(error = %err, "classification request failed");
                    DisplayState::transport_failure()
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, path = %image.display(), "image encoding failed");
                DisplayState::transport_failure()
            }
        };
        &self.state
    }
}
