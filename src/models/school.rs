//! School resource models.

use serde::{Deserialize, Serialize};

/// A single school as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    pub id: u64,
    pub name: String,
}

impl School {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Fields a client supplies when creating or renaming a school.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolInput {
    pub name: String,
}

/// A page of schools with collection metadata and navigation links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolList {
    pub schools: Vec<School>,
    pub meta: Meta,
    pub links: Links,
}

/// Metadata about the whole collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Meta {
    pub total: u64,
}

/// Absolute URLs for the pages around the current one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Links {
    pub first: String,
    pub last: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_links_are_omitted() {
        let links = Links {
            first: "http://localhost/schools?offset=0&limit=10".to_string(),
            last: "http://localhost/schools?offset=0&limit=10".to_string(),
            next: None,
            prev: None,
        };
        let json = serde_json::to_value(&links).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("first"));
        assert!(obj.contains_key("last"));
        assert!(!obj.contains_key("next"));
        assert!(!obj.contains_key("prev"));
    }
}
