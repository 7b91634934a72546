//! Board layouts: which buckets a board has, and in which order they are displayed
//!
//! A layout is fixed when a [`Board`](crate::Board) is built. Every request that names a bucket is checked against it,
//! so that a typo in a column or day name is reported as [`BoardError::UnknownBucket`] instead of silently creating a new bucket.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::BoardError;

/// The key of a bucket (e.g. `todo`, or `monday`)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BucketName {
    name: String,
}

impl BucketName {
    /// Returns an error if `name` is blank
    pub fn new<S: Into<String>>(name: S) -> Result<Self, BoardError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BoardError::BlankBucketName);
        }
        Ok(Self { name })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl Display for BucketName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.name)
    }
}

impl PartialEq<str> for BucketName {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}
impl PartialEq<&str> for BucketName {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

/// Used to support serde
impl Serialize for BucketName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.name)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for BucketName {
    fn deserialize<D>(deserializer: D) -> Result<BucketName, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        BucketName::new(name).map_err(serde::de::Error::custom)
    }
}


/// The ordered, closed set of buckets of a board, with their display titles
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    buckets: Vec<(BucketName, String)>,
}

impl Layout {
    /// Build a custom layout out of `(name, title)` pairs.
    ///
    /// Names must be non-blank and unique, and there must be at least one of them.
    pub fn new<N, T, I>(buckets: I) -> Result<Self, BoardError>
    where
        N: Into<String>,
        T: Into<String>,
        I: IntoIterator<Item = (N, T)>,
    {
        let mut seen = HashSet::new();
        let mut validated = Vec::new();
        for (name, title) in buckets {
            let name = BucketName::new(name)?;
            if seen.insert(name.clone()) == false {
                return Err(BoardError::DuplicateBucket(name.to_string()));
            }
            validated.push((name, title.into()));
        }

        if validated.is_empty() {
            return Err(BoardError::EmptyLayout);
        }
        Ok(Self { buckets: validated })
    }

    /// Three columns: `todo`, `proceso` and `delegadas`
    pub fn kanban() -> Self {
        Self::from_static(&[
            ("todo", "To Do"),
            ("proceso", "Proceso"),
            ("delegadas", "Delegadas"),
        ])
    }

    /// One bucket per working day, Monday to Friday
    pub fn workweek() -> Self {
        Self::from_static(&[
            ("monday", "Monday"),
            ("tuesday", "Tuesday"),
            ("wednesday", "Wednesday"),
            ("thursday", "Thursday"),
            ("friday", "Friday"),
        ])
    }

    /// A single `tasks` bucket, for plain to-do lists
    pub fn single_list() -> Self {
        Self::from_static(&[(SINGLE_LIST_BUCKET, "Tasks")])
    }

    /// For buckets that have already been checked (e.g. those of an existing board)
    pub(crate) fn from_validated(buckets: Vec<(BucketName, String)>) -> Self {
        Self { buckets }
    }

    fn from_static(buckets: &[(&'static str, &'static str)]) -> Self {
        Self {
            buckets: buckets.iter()
                .map(|(name, title)| (BucketName{ name: name.to_string() }, title.to_string()))
                .collect()
        }
    }

    /// The bucket names and titles, in display order
    pub fn buckets(&self) -> &[(BucketName, String)] {
        &self.buckets
    }

    pub fn names(&self) -> impl Iterator<Item = &BucketName> {
        self.buckets.iter().map(|(name, _)| name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::kanban()
    }
}

/// The name of the only bucket of [`Layout::single_list`]
pub const SINGLE_LIST_BUCKET: &str = "tasks";
