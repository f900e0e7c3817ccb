use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

use super::record::{bool_or, optional_str, required_str, Record, RecordError, FIELD_ID};
use super::Entity;
use crate::utils::{required, AppError};

pub const ID_PREFIX: &str = "r_";

const FIELD_DRIVER: &str = "driver";
const FIELD_AVAILABLE: &str = "available";
const FIELD_PASSENGER_ID: &str = "passengerId";

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    pub id: String,
    /// Driver id, not checked against the drivers collection
    pub driver: Option<String>,
    pub available: bool,
    pub passenger_id: Option<String>,
}

impl Ride {
    /// A new ride is open: available, no passenger.
    pub fn new(id: String, new: NewRide) -> Self {
        Ride {
            id,
            driver: Some(new.driver),
            available: true,
            passenger_id: None,
        }
    }
}

impl Record for Ride {
    const ENTITY: Entity = Entity::Rides;

    fn to_document(&self) -> Document {
        doc! {
            FIELD_ID: &self.id,
            FIELD_DRIVER: self.driver.clone(),
            FIELD_AVAILABLE: self.available,
            FIELD_PASSENGER_ID: self.passenger_id.clone(),
        }
    }

    fn from_document(doc: &Document) -> Result<Self, RecordError> {
        Ok(Ride {
            id: required_str(doc, Self::ENTITY, FIELD_ID)?,
            driver: optional_str(doc, FIELD_DRIVER),
            available: bool_or(doc, FIELD_AVAILABLE, true),
            passenger_id: optional_str(doc, FIELD_PASSENGER_ID),
        })
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateRideRequest {
    pub driver: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewRide {
    pub driver: String,
}

impl TryFrom<CreateRideRequest> for NewRide {
    type Error = AppError;

    fn try_from(request: CreateRideRequest) -> Result<Self, Self::Error> {
        Ok(NewRide {
            driver: required(request.driver)?,
        })
    }
}

/// Both fields are always written; a missing `available` means false.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRideRequest {
    pub id: Option<String>,
    pub available: Option<bool>,
    pub passenger_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RideUpdate {
    pub id: String,
    pub available: bool,
    pub passenger_id: Option<String>,
}

impl RideUpdate {
    pub fn changes(&self) -> Document {
        doc! {
            FIELD_AVAILABLE: self.available,
            FIELD_PASSENGER_ID: self.passenger_id.clone(),
        }
    }
}

impl TryFrom<UpdateRideRequest> for RideUpdate {
    type Error = AppError;

    fn try_from(request: UpdateRideRequest) -> Result<Self, Self::Error> {
        Ok(RideUpdate {
            id: required(request.id)?,
            available: request.available.unwrap_or(false),
            passenger_id: request.passenger_id,
        })
    }
}
