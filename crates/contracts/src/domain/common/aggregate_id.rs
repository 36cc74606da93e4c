use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of a record in the static data set.
///
/// The data files carry numeric ids (`"id": 3`), while routes and `<select>`
/// values carry their string form, so every id converts both ways.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// String form used in URLs and form controls
    fn as_string(&self) -> String;

    /// Parse the string form back into an id
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid i64 '{}': {}", s, e))
    }
}
