//! lineup-core — Response interpretation for the sports-person classifier.
//!
//! Takes a raw classification response (one entry per detected face, each
//! with a probability vector and a subject dictionary), selects the single
//! best-supported match, and derives the display artifacts: identity label,
//! portrait path, and a two-decimal score table.

pub mod gallery;
pub mod projector;
pub mod response;
pub mod selector;
pub mod state;

pub use projector::{MatchDisplay, ProjectError, ScoreRow};
pub use response::{ClassDictionary, Detection};
pub use selector::select_best_match;
pub use state::DisplayState;
