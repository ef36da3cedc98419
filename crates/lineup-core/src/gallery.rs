//! Static gallery of known subjects.
//!
//! The classifier is trained on a fixed closed set; these names drive the
//! gallery strip and its portrait assets. Gallery names are already
//! underscored, so they resolve to portraits directly, without the label
//! transform applied to classifier output.

/// Root under which portrait assets are served.
pub const IMAGE_ROOT: &str = "/images";

/// Subjects the classifier knows, in gallery display order.
pub const KNOWN_SUBJECTS: [&str; 5] = [
    "Lionel_Messi",
    "Maria_Sharapova",
    "Roger_Federer",
    "Serena_Williams",
    "Virat_Kohli",
];

/// Portrait path for a gallery subject.
pub fn gallery_portrait(subject: &str) -> String {
    format!("{IMAGE_ROOT}/{subject}.jpeg")
}
