// crates/shared-kernel/src/value_objects/team.rs
use std::{borrow::Borrow, cmp::Ordering, fmt, ops::Deref};

use serde::{Deserialize, Serialize};

/// Team name as written in the match list.
///
/// Identity is case-sensitive: `Arsenal` and `arsenal` are different teams.
/// [`TeamName::cmp_ignore_case`] provides the ordering used for standings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct TeamName(String);

impl TeamName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Case-insensitive comparison, falling back to the exact text for names
    /// that only differ by case so the result is a total order.
    pub fn cmp_ignore_case(&self, other: &Self) -> Ordering {
        let folded = self.0.chars().flat_map(char::to_lowercase);
        let other_folded = other.0.chars().flat_map(char::to_lowercase);
        folded.cmp(other_folded).then_with(|| self.0.cmp(&other.0))
    }
}

impl Deref for TeamName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for TeamName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TeamName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TeamName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TeamName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl PartialEq<str> for TeamName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TeamName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
