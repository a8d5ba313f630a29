//! Book record and create payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A live book row. `id` is assigned by the store and never changes or gets reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/v1/book`. Any `id` the client sends is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBook {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_book_ignores_client_id() {
        let b: NewBook = serde_json::from_str(r#"{"title":"Dune","id":42}"#).unwrap();
        assert_eq!(b.title, "Dune");
    }

    #[test]
    fn new_book_requires_title() {
        assert!(serde_json::from_str::<NewBook>(r#"{"id":1}"#).is_err());
        assert!(serde_json::from_str::<NewBook>(r#"{"title":7}"#).is_err());
    }

    #[test]
    fn book_serializes_flat() {
        let at = DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let book = Book {
            id: 3,
            title: "Emma".into(),
            created_at: at,
            updated_at: at,
        };
        let v = serde_json::to_value(&book).unwrap();
        assert_eq!(v["id"], 3);
        assert_eq!(v["title"], "Emma");
        assert_eq!(v["created_at"], "2024-05-01T10:00:00Z");
    }
}
