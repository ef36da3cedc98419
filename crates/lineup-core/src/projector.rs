//! Projection of the selected detection into display artifacts.

use serde::Serialize;
use thiserror::Error;

use crate::gallery::IMAGE_ROOT;
use crate::response::Detection;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("detection for {label:?} has an empty probability vector")]
    EmptyProbabilities { label: String },
    #[error("dictionary index {index} for {subject:?} is out of range (vector has {len} scores)")]
    IndexOutOfRange {
        subject: String,
        index: usize,
        len: usize,
    },
}

/// One line of the per-candidate confidence table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRow {
    pub subject: String,
    /// Probability rendered with exactly two decimal digits.
    pub score: String,
}

/// Display artifacts for a matched submission.
#[derive(Debug, Clone, Serialize)]
pub struct MatchDisplay {
    /// Predicted identity, verbatim from the classifier.
    pub identity: String,
    /// Static portrait asset path for the identity.
    pub portrait: String,
    /// Score table in the dictionary's declaration order.
    pub rows: Vec<ScoreRow>,
}

/// Portrait asset path for a classifier label.
///
/// Upper-cases the label and replaces only the FIRST space with an
/// underscore. The single replacement is deliberate: it mirrors the asset
/// naming convention the portrait gallery was built against, so a label
/// with two or more spaces keeps its remaining spaces.
pub fn portrait_ref(label: &str) -> String {
    format!("{IMAGE_ROOT}/{}.jpeg", label.to_uppercase().replacen(' ', "_", 1))
}

/// Build the display artifacts for the selected detection.
///
/// Emits one [`ScoreRow`] per dictionary entry, in declaration order. A
/// dictionary index outside the probability vector, or an empty vector,
/// fails the whole projection — a partial table would misrepresent the
/// classifier's output.
pub fn project(detection: &Detection) -> Result<MatchDisplay, ProjectError> {
    if detection.class_probability.is_empty() {
        return Err(ProjectError::EmptyProbabilities {
            label: detection.label.clone(),
        });
    }

    let len = detection.class_probability.len();
    let mut rows = Vec::with_capacity(detection.class_dictionary.len());
    for (subject, index) in detection.class_dictionary.iter() {
        let score = detection.class_probability.get(index).ok_or_else(|| {
            ProjectError::IndexOutOfRange {
                subject: subject.to_string(),
                index,
                len,
            }
        })?;
        rows.push(ScoreRow {
            subject: subject.to_string(),
            score: format!("{score:.2}"),
        });
    }

    Ok(MatchDisplay {
        identity: detection.label.clone(),
        portrait: portrait_ref(&detection.label),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::ClassDictionary;

    fn detection(label: &str, probs: &[f64], dict: &[(&str, usize)]) -> Detection {
        Detection {
            label: label.to_string(),
            class_probability: probs.to_vec(),
            class_dictionary: dict
                .iter()
                .map(|(name, idx)| (name.to_string(), *idx))
                .collect::<ClassDictionary>(),
        }
    }

    #[test]
    fn test_portrait_ref_uppercases_and_underscores() {
        assert_eq!(portrait_ref("Lionel Messi"), "/images/LIONEL_MESSI.jpeg");
    }

    #[test]
    fn test_portrait_ref_replaces_only_first_space() {
        // Multi-space labels keep their remaining spaces.
        assert_eq!(portrait_ref("A B C"), "/images/A_B C.jpeg");
    }

    #[test]
    fn test_portrait_ref_no_space() {
        assert_eq!(portrait_ref("roger_federer"), "/images/ROGER_FEDERER.jpeg");
    }

    #[test]
    fn test_one_row_per_dictionary_entry_in_order() {
        let det = detection(
            "roger_federer",
            &[0.1, 0.9],
            &[("roger_federer", 1), ("serena_williams", 0)],
        );
        let display = project(&det).unwrap();
        assert_eq!(display.identity, "roger_federer");
        assert_eq!(
            display.rows,
            vec![
                ScoreRow {
                    subject: "roger_federer".to_string(),
                    score: "0.90".to_string(),
                },
                ScoreRow {
                    subject: "serena_williams".to_string(),
                    score: "0.10".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_score_has_exactly_two_decimals() {
        let det = detection("x", &[0.6667], &[("x", 0)]);
        let display = project(&det).unwrap();
        assert_eq!(display.rows[0].score, "0.67");
    }

    #[test]
    fn test_whole_number_score_padded_to_two_decimals() {
        let det = detection("x", &[1.0], &[("x", 0)]);
        let display = project(&det).unwrap();
        assert_eq!(display.rows[0].score, "1.00");
    }

    #[test]
    fn test_out_of_range_index_fails_whole_projection() {
        let det = detection("x", &[0.5], &[("x", 0), ("y", 3)]);
        let err = project(&det).unwrap_err();
        assert!(matches!(
            err,
            ProjectError::IndexOutOfRange { index: 3, len: 1, .. }
        ));
    }

    #[test]
    fn test_empty_probabilities_rejected() {
        let det = detection("x", &[], &[("x", 0)]);
        assert!(matches!(
            project(&det).unwrap_err(),
            ProjectError::EmptyProbabilities { .. }
        ));
    }
}
