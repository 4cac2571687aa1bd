// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Container tags.

use std::borrow::Borrow;
use std::fmt;

/// An opaque, user-chosen, globally unique container identifier.
///
/// Unlike the generated IDs elsewhere in this crate, a `Tag` is never
/// synthesized by us — it arrives from the caller and is carried verbatim
/// through every RPC, cgroup path, and log line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Tag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let tag = Tag::from("web-1");
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, "\"web-1\"");
        let back: Tag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);
    }

    #[test]
    fn borrows_as_str_for_map_lookup() {
        use std::collections::HashMap;
        let mut map: HashMap<Tag, u32> = HashMap::new();
        map.insert(Tag::from("one"), 1);
        assert_eq!(map.get("one"), Some(&1));
    }
}
