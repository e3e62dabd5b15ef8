//! Shell command handlers
//!
//! One module per verb. Every handler validates its inputs, performs a single
//! storage operation through the ObjectStore trait, and returns a Response
//! with the fixed confirmation message or listing lines for that verb.

use serde::Serialize;

pub mod createdir;
pub mod delete;
pub mod deletedir;
pub mod download;
pub mod find;
pub mod listdir;
pub mod upload;

/// Result of a successfully dispatched command
///
/// Confirmation verbs carry a message; listing verbs carry display lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

impl Response {
    /// A plain confirmation message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            items: Vec::new(),
        }
    }

    /// A listing, one display line per entry
    pub fn listing(items: Vec<String>) -> Self {
        Self {
            message: None,
            items,
        }
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for item in &self.items {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{item}")?;
            first = false;
        }
        if let Some(message) = &self.message {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{message}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_message_display() {
        let resp = Response::message("Directory docs created.");
        assert_eq!(resp.to_string(), "Directory docs created.");
    }

    #[test]
    fn test_response_listing_display() {
        let resp = Response::listing(vec!["a.txt".into(), "b.txt".into()]);
        assert_eq!(resp.to_string(), "a.txt\nb.txt");
    }

    #[test]
    fn test_empty_listing_displays_nothing() {
        let resp = Response::listing(Vec::new());
        assert_eq!(resp.to_string(), "");
    }
}
