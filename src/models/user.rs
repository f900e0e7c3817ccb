use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

use super::record::{bool_or, optional_str, required_str, Record, RecordError, FIELD_ID};
use super::Entity;
use crate::utils::{required, AppError};

pub const ID_PREFIX: &str = "u_";

const FIELD_NAME: &str = "name";
const FIELD_TRAVELING: &str = "traveling";
const FIELD_TRAVEL: &str = "travel";

/// Rider account
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub traveling: bool,
    pub travel: Option<String>,
}

impl User {
    pub fn new(id: String, new: NewUser) -> Self {
        User {
            id,
            name: Some(new.name),
            traveling: false,
            travel: None,
        }
    }
}

impl Record for User {
    const ENTITY: Entity = Entity::Users;

    fn to_document(&self) -> Document {
        doc! {
            FIELD_ID: &self.id,
            FIELD_NAME: self.name.clone(),
            FIELD_TRAVELING: self.traveling,
            FIELD_TRAVEL: self.travel.clone(),
        }
    }

    fn from_document(doc: &Document) -> Result<Self, RecordError> {
        Ok(User {
            id: required_str(doc, Self::ENTITY, FIELD_ID)?,
            name: optional_str(doc, FIELD_NAME),
            traveling: bool_or(doc, FIELD_TRAVELING, false),
            travel: optional_str(doc, FIELD_TRAVEL),
        })
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    pub name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = AppError;

    fn try_from(request: CreateUserRequest) -> Result<Self, Self::Error> {
        Ok(NewUser {
            name: required(request.name)?,
        })
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub id: Option<String>,
    pub traveling: Option<bool>,
    #[serde(alias = "travel")]
    pub ride_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: String,
    pub traveling: bool,
    pub travel: Option<String>,
}

impl UserUpdate {
    pub fn changes(&self) -> Document {
        doc! {
            FIELD_TRAVELING: self.traveling,
            FIELD_TRAVEL: self.travel.clone(),
        }
    }
}

impl TryFrom<UpdateUserRequest> for UserUpdate {
    type Error = AppError;

    fn try_from(request: UpdateUserRequest) -> Result<Self, Self::Error> {
        Ok(UserUpdate {
            id: required(request.id)?,
            traveling: request.traveling.unwrap_or(false),
            travel: request.ride_id,
        })
    }
}
