use actix_web::{web, HttpRequest, HttpResponse, Resource};

use super::{id_param, parse_body, read_body, route, Operation};
use crate::{
    models::{CreateDriverRequest, Driver, DriverUpdate, Entity, NewDriver, UpdateDriverRequest},
    services::DriverService,
    utils::AppError,
};

const ENTITY: Entity = Entity::Drivers;

/// `/drivers`, accepting every method; the router decides what is allowed.
pub fn resource(service: web::Data<DriverService>) -> Resource {
    web::resource(ENTITY.path())
        .app_data(service)
        .route(web::route().to(handle))
}

pub async fn handle(
    req: HttpRequest,
    payload: web::Payload,
    service: web::Data<DriverService>,
) -> Result<HttpResponse, AppError> {
    match route(req.method(), ENTITY)? {
        Operation::Read => get_drivers(service, id_param(&req)?).await,
        Operation::Create => create_driver(service, read_body(payload).await?).await,
        Operation::Update => update_driver(service, read_body(payload).await?).await,
        Operation::Delete => Err(AppError::MethodNotAllowed),
    }
}

/// GET /drivers - Lists every driver, or fetches one with `?id=`
#[utoipa::path(
    get,
    path = "/drivers",
    tag = "Drivers",
    params(
        ("id" = Option<String>, Query, description = "Driver id; omit to list all drivers")
    ),
    responses(
        (status = 200, description = "The driver, or an array of every driver when no id is given", body = Driver),
        (status = 400, description = "Invalid request body (blank id)"),
        (status = 404, description = "Driver not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_drivers(
    service: web::Data<DriverService>,
    id: Option<String>,
) -> Result<HttpResponse, AppError> {
    match id {
        Some(id) => {
            let driver = service.find(&id).await?.ok_or(AppError::NotFound(ENTITY))?;
            Ok(HttpResponse::Ok().json(driver))
        }
        None => {
            let drivers = service.list().await?;
            log::info!("📋 GET /drivers - Listed {} drivers", drivers.len());
            Ok(HttpResponse::Ok().json(drivers))
        }
    }
}

/// POST /drivers - Registers a driver
#[utoipa::path(
    post,
    path = "/drivers",
    tag = "Drivers",
    request_body = CreateDriverRequest,
    responses(
        (status = 201, description = "Driver created", body = Driver),
        (status = 400, description = "Invalid request body"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_driver(
    service: web::Data<DriverService>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request: CreateDriverRequest = parse_body(&body)?;
    let driver = service.create(NewDriver::try_from(request)?).await?;
    Ok(HttpResponse::Created().json(driver))
}

/// PUT /drivers - Updates travel status (and optionally `busy`/`car`)
#[utoipa::path(
    put,
    path = "/drivers",
    tag = "Drivers",
    request_body = UpdateDriverRequest,
    responses(
        (status = 200, description = "Driver after the update", body = Driver),
        (status = 400, description = "Invalid request body"),
        (status = 404, description = "Driver not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_driver(
    service: web::Data<DriverService>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request: UpdateDriverRequest = parse_body(&body)?;
    let update = DriverUpdate::try_from(request)?;
    let driver = service.update(update).await?.ok_or(AppError::NotFound(ENTITY))?;
    Ok(HttpResponse::Ok().json(driver))
}
