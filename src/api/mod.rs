pub mod drivers;
pub mod health;
pub mod payments;
pub mod rides;
pub mod swagger;
pub mod users;

use actix_web::{http::Method, web, HttpRequest};
use futures::StreamExt;
use serde::{de::DeserializeOwned, Deserialize};
use std::sync::Arc;

use crate::{
    database::RecordStore,
    models::Entity,
    services::{DriverService, PaymentService, RideService, UserService},
    utils::{is_blank, AppError},
};

/// What an inbound method asks the handler to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// List everything, or fetch one when `?id=` is given
    Read,
    Create,
    Update,
    Delete,
}

/// Maps an HTTP method onto a handler operation. Pure; touches no state.
pub fn route(method: &Method, entity: Entity) -> Result<Operation, AppError> {
    match *method {
        Method::GET => Ok(Operation::Read),
        Method::POST => Ok(Operation::Create),
        Method::PUT => Ok(Operation::Update),
        Method::DELETE if entity.allows_delete() => Ok(Operation::Delete),
        _ => Err(AppError::MethodNotAllowed),
    }
}

#[derive(Debug, Deserialize)]
struct IdQuery {
    id: Option<String>,
}

/// The `id` query parameter: `None` when absent, 400 when present but blank.
pub fn id_param(req: &HttpRequest) -> Result<Option<String>, AppError> {
    let query = web::Query::<IdQuery>::from_query(req.query_string())
        .map_err(|_| AppError::InvalidRequest)?;

    match query.into_inner().id {
        None => Ok(None),
        Some(id) if is_blank(&id) => Err(AppError::InvalidRequest),
        Some(id) => Ok(Some(id)),
    }
}

/// Largest request body the handlers read.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

/// Drains the request payload. Only the create and update arms call this, so
/// the method check never depends on the body. Oversized or broken payloads
/// are a client error.
pub async fn read_body(mut payload: web::Payload) -> Result<web::Bytes, AppError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| {
            log::debug!("🔍 Failed to read request body: {}", e);
            AppError::InvalidRequest
        })?;
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            log::debug!("🔍 Rejected request body over {} bytes", MAX_BODY_BYTES);
            return Err(AppError::InvalidRequest);
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}

/// Parses a JSON object body. Empty, `null`, non-object and malformed bodies
/// are all the same client error.
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    let value: serde_json::Value = serde_json::from_slice(body).map_err(rejected)?;
    if !value.is_object() {
        log::debug!("🔍 Rejected request body: not a JSON object");
        return Err(AppError::InvalidRequest);
    }
    serde_json::from_value(value).map_err(rejected)
}

fn rejected(e: serde_json::Error) -> AppError {
    log::debug!("🔍 Rejected request body: {}", e);
    AppError::InvalidRequest
}

/// The entity handlers this process hosts, each bound to its own store.
#[derive(Clone, Default)]
pub struct Handlers {
    drivers: Option<web::Data<DriverService>>,
    rides: Option<web::Data<RideService>>,
    users: Option<web::Data<UserService>>,
    payments: Option<web::Data<PaymentService>>,
}

impl Handlers {
    pub fn with_store(mut self, entity: Entity, store: Arc<dyn RecordStore>) -> Self {
        match entity {
            Entity::Drivers => self.drivers = Some(web::Data::new(DriverService::new(store))),
            Entity::Rides => self.rides = Some(web::Data::new(RideService::new(store))),
            Entity::Users => self.users = Some(web::Data::new(UserService::new(store))),
            Entity::Payments => self.payments = Some(web::Data::new(PaymentService::new(store))),
        }
        self
    }

    pub fn enabled(&self) -> Vec<Entity> {
        let mut enabled = Vec::new();
        if self.drivers.is_some() {
            enabled.push(Entity::Drivers);
        }
        if self.rides.is_some() {
            enabled.push(Entity::Rides);
        }
        if self.users.is_some() {
            enabled.push(Entity::Users);
        }
        if self.payments.is_some() {
            enabled.push(Entity::Payments);
        }
        enabled
    }

    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        if let Some(service) = &self.drivers {
            cfg.service(drivers::resource(service.clone()));
        }
        if let Some(service) = &self.rides {
            cfg.service(rides::resource(service.clone()));
        }
        if let Some(service) = &self.users {
            cfg.service(users::resource(service.clone()));
        }
        if let Some(service) = &self.payments {
            cfg.service(payments::resource(service.clone()));
        }
    }
}
