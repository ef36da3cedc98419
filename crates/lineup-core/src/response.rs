//! Wire types for the classification endpoint's JSON response.
//!
//! The endpoint returns an array with one entry per detected face:
//! `{"class": ..., "class_probability": [...], "class_dictionary": {...}}`.
//! An empty array is a legitimate response meaning no face with two visible
//! eyes was found.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One face detected in the submitted image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    /// Predicted identity, from the classifier's closed set of subjects.
    #[serde(rename = "class")]
    pub label: String,
    /// One score per known subject, indexed via [`ClassDictionary`].
    pub class_probability: Vec<f64>,
    /// Subject name → position in `class_probability`.
    pub class_dictionary: ClassDictionary,
}

/// Subject→index mapping that preserves the JSON object's key order.
///
/// The score table is rendered in the order the upstream payload declares
/// its subjects, so a plain `HashMap` (or a sorted `BTreeMap`) would change
/// user-visible row order. Stored as an insertion-ordered pair list; lookups
/// are linear over a handful of subjects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassDictionary(Vec<(String, usize)>);

impl ClassDictionary {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in upstream declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(name, idx)| (name.as_str(), *idx))
    }
}

impl FromIterator<(String, usize)> for ClassDictionary {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for ClassDictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, idx) in &self.0 {
            map.serialize_entry(name, idx)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ClassDictionary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DictVisitor;

        impl<'de> Visitor<'de> for DictVisitor {
            type Value = ClassDictionary;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of subject name to probability index")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, idx)) = access.next_entry::<String, usize>()? {
                    entries.push((name, idx));
                }
                Ok(ClassDictionary(entries))
            }
        }

        deserializer.deserialize_map(DictVisitor)
    }
}
