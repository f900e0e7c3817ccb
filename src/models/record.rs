use mongodb::bson::{Bson, Document};
use thiserror::Error;

use super::Entity;

pub const FIELD_ID: &str = "id";

/// A stored document that could not be mapped onto its typed record.
#[derive(Debug, Error)]
#[error("Malformed {entity} record: {reason}")]
pub struct RecordError {
    pub entity: Entity,
    pub reason: String,
}

/// Typed record with an explicit two-way mapping to the store's document shape.
pub trait Record: Sized {
    const ENTITY: Entity;

    fn to_document(&self) -> Document;

    fn from_document(doc: &Document) -> Result<Self, RecordError>;
}

pub(crate) fn required_str(doc: &Document, entity: Entity, field: &str) -> Result<String, RecordError> {
    doc.get_str(field)
        .map(str::to_owned)
        .map_err(|_| RecordError {
            entity,
            reason: format!("missing string field '{}'", field),
        })
}

/// Missing, null or non-string values read as `None`.
pub(crate) fn optional_str(doc: &Document, field: &str) -> Option<String> {
    doc.get_str(field).ok().map(str::to_owned)
}

/// Missing, null or non-boolean values read as `default`.
pub(crate) fn bool_or(doc: &Document, field: &str, default: bool) -> bool {
    doc.get_bool(field).unwrap_or(default)
}

pub(crate) fn number(doc: &Document, entity: Entity, field: &str) -> Result<f64, RecordError> {
    match doc.get(field) {
        Some(Bson::Double(value)) => Ok(*value),
        Some(Bson::Int32(value)) => Ok(f64::from(*value)),
        Some(Bson::Int64(value)) => Ok(*value as f64),
        _ => Err(RecordError {
            entity,
            reason: format!("missing numeric field '{}'", field),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_optional_and_bool_defaults() {
        let doc = doc! { "travel": Bson::Null, "busy": "yes" };
        assert_eq!(optional_str(&doc, "travel"), None);
        assert_eq!(optional_str(&doc, "car"), None);
        assert!(!bool_or(&doc, "busy", false));
        assert!(bool_or(&doc, "available", true));
    }

    #[test]
    fn test_number_accepts_integers() {
        let doc = doc! { "a": 2.5, "b": 3_i32, "c": 4_i64, "d": "5" };
        assert_eq!(number(&doc, Entity::Payments, "a").unwrap(), 2.5);
        assert_eq!(number(&doc, Entity::Payments, "b").unwrap(), 3.0);
        assert_eq!(number(&doc, Entity::Payments, "c").unwrap(), 4.0);
        assert!(number(&doc, Entity::Payments, "d").is_err());
    }

    #[test]
    fn test_required_str_reports_field() {
        let err = required_str(&doc! {}, Entity::Users, FIELD_ID).unwrap_err();
        assert_eq!(err.to_string(), "Malformed users record: missing string field 'id'");
    }
}
