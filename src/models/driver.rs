use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

use super::record::{bool_or, optional_str, required_str, Record, RecordError, FIELD_ID};
use super::Entity;
use crate::utils::{required, AppError};

pub const ID_PREFIX: &str = "d_";

const FIELD_NAME: &str = "name";
const FIELD_TRAVELING: &str = "traveling";
const FIELD_TRAVEL: &str = "travel";
const FIELD_BUSY: &str = "busy";
const FIELD_CAR: &str = "car";

/// Driver (stored in the drivers collection)
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct Driver {
    pub id: String,
    pub name: Option<String>,
    pub traveling: bool,
    /// Ride id while traveling
    pub travel: Option<String>,
    pub busy: bool,
    pub car: Option<String>,
}

impl Driver {
    pub fn new(id: String, new: NewDriver) -> Self {
        Driver {
            id,
            name: Some(new.name),
            traveling: false,
            travel: None,
            busy: false,
            car: new.car,
        }
    }
}

impl Record for Driver {
    const ENTITY: Entity = Entity::Drivers;

    fn to_document(&self) -> Document {
        doc! {
            FIELD_ID: &self.id,
            FIELD_NAME: self.name.clone(),
            FIELD_TRAVELING: self.traveling,
            FIELD_TRAVEL: self.travel.clone(),
            FIELD_BUSY: self.busy,
            FIELD_CAR: self.car.clone(),
        }
    }

    fn from_document(doc: &Document) -> Result<Self, RecordError> {
        Ok(Driver {
            id: required_str(doc, Self::ENTITY, FIELD_ID)?,
            name: optional_str(doc, FIELD_NAME),
            traveling: bool_or(doc, FIELD_TRAVELING, false),
            travel: optional_str(doc, FIELD_TRAVEL),
            busy: bool_or(doc, FIELD_BUSY, false),
            car: optional_str(doc, FIELD_CAR),
        })
    }
}

/// Create request body
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateDriverRequest {
    pub name: Option<String>,
    pub car: Option<String>,
}

/// Validated create input
#[derive(Debug, Clone)]
pub struct NewDriver {
    pub name: String,
    pub car: Option<String>,
}

impl TryFrom<CreateDriverRequest> for NewDriver {
    type Error = AppError;

    fn try_from(request: CreateDriverRequest) -> Result<Self, Self::Error> {
        Ok(NewDriver {
            name: required(request.name)?,
            car: request.car,
        })
    }
}

/// Travel status update. `busy` and `car` are only written when present.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverRequest {
    pub id: Option<String>,
    pub traveling: Option<bool>,
    #[serde(alias = "travel")]
    pub ride_id: Option<String>,
    pub busy: Option<bool>,
    pub car: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DriverUpdate {
    pub id: String,
    pub traveling: bool,
    pub travel: Option<String>,
    pub busy: Option<bool>,
    pub car: Option<String>,
}

impl DriverUpdate {
    /// Fields for the `$set` of this update.
    pub fn changes(&self) -> Document {
        let mut changes = doc! {
            FIELD_TRAVELING: self.traveling,
            FIELD_TRAVEL: self.travel.clone(),
        };
        if let Some(busy) = self.busy {
            changes.insert(FIELD_BUSY, busy);
        }
        if let Some(car) = &self.car {
            changes.insert(FIELD_CAR, car);
        }
        changes
    }
}

impl TryFrom<UpdateDriverRequest> for DriverUpdate {
    type Error = AppError;

    fn try_from(request: UpdateDriverRequest) -> Result<Self, Self::Error> {
        Ok(DriverUpdate {
            id: required(request.id)?,
            traveling: request.traveling.unwrap_or(false),
            travel: request.ride_id,
            busy: request.busy,
            car: request.car,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn test_new_driver_defaults() {
        let driver = Driver::new(
            "d_1".into(),
            NewDriver { name: "Alice".into(), car: None },
        );
        assert_eq!(driver.name.as_deref(), Some("Alice"));
        assert!(!driver.traveling);
        assert!(!driver.busy);
        assert_eq!(driver.travel, None);
        assert_eq!(driver.car, None);
    }

    #[test]
    fn test_document_mapping_keeps_nulls() {
        let driver = Driver::new(
            "d_1".into(),
            NewDriver { name: "Alice".into(), car: Some("Sedan".into()) },
        );
        let doc = driver.to_document();
        assert_eq!(doc.get("travel"), Some(&Bson::Null));
        assert_eq!(Driver::from_document(&doc).unwrap(), driver);
    }

    #[test]
    fn test_from_document_defaults_missing_fields() {
        let driver = Driver::from_document(&doc! { "id": "d_2" }).unwrap();
        assert!(!driver.traveling);
        assert!(!driver.busy);
        assert_eq!(driver.name, None);
        assert!(Driver::from_document(&doc! { "name": "Bob" }).is_err());
    }

    #[test]
    fn test_json_projection_emits_null_fields() {
        let driver = Driver::new("d_1".into(), NewDriver { name: "Alice".into(), car: None });
        let json = serde_json::to_value(&driver).unwrap();
        assert_eq!(json["car"], serde_json::Value::Null);
        assert_eq!(json["travel"], serde_json::Value::Null);
        assert_eq!(json.as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_update_changes_are_partial() {
        let request: UpdateDriverRequest =
            serde_json::from_str(r#"{"id":"d_1","traveling":true,"rideId":"r_9"}"#).unwrap();
        let update = DriverUpdate::try_from(request).unwrap();
        let changes = update.changes();
        assert_eq!(changes.get_bool("traveling").unwrap(), true);
        assert_eq!(changes.get_str("travel").unwrap(), "r_9");
        assert!(!changes.contains_key("busy"));
        assert!(!changes.contains_key("car"));
    }

    #[test]
    fn test_update_accepts_travel_alias_and_clears_ride() {
        let request: UpdateDriverRequest =
            serde_json::from_str(r#"{"id":"d_1","travel":"r_1","busy":true,"car":"Van"}"#).unwrap();
        let changes = DriverUpdate::try_from(request).unwrap().changes();
        assert_eq!(changes.get_str("travel").unwrap(), "r_1");
        assert_eq!(changes.get_bool("busy").unwrap(), true);
        assert_eq!(changes.get_str("car").unwrap(), "Van");

        let request: UpdateDriverRequest = serde_json::from_str(r#"{"id":"d_1"}"#).unwrap();
        let changes = DriverUpdate::try_from(request).unwrap().changes();
        assert_eq!(changes.get("travel"), Some(&Bson::Null));
        assert_eq!(changes.get_bool("traveling").unwrap(), false);
    }

    #[test]
    fn test_validation_requires_name_and_id() {
        let blank = CreateDriverRequest { name: Some("  ".into()), car: None };
        assert!(NewDriver::try_from(blank).is_err());

        let request: UpdateDriverRequest = serde_json::from_str(r#"{"traveling":true}"#).unwrap();
        assert!(DriverUpdate::try_from(request).is_err());
    }
}
