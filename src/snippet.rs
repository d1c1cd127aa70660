//! Snippet - the single stored entity
//!
//! A snippet is created once, never updated, and stays physically stored
//! after it expires. Reads only ever see snippets whose `expires` is still
//! in the future.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored text item with its creation and expiry timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// System-assigned identifier, strictly increasing with insertion order
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Set by the database clock at insertion time
    pub created: DateTime<Utc>,
    /// `created` plus the requested number of days
    pub expires: DateTime<Utc>,
}

impl Snippet {
    /// Lifetime the snippet was created with.
    pub fn lifetime(&self) -> chrono::Duration {
        self.expires - self.created
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample(created: DateTime<Utc>, days: i64) -> Snippet {
        Snippet {
            id: 1,
            title: "An old silent pond".to_string(),
            content: "A frog jumps into the pond".to_string(),
            created,
            expires: created + Duration::days(days),
        }
    }

    #[test]
    fn test_lifetime() {
        let snippet = sample(Utc::now(), 365);
        assert_eq!(snippet.lifetime(), Duration::days(365));
    }
}
