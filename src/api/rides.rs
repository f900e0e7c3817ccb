use actix_web::{web, HttpRequest, HttpResponse, Resource};

use super::{id_param, parse_body, read_body, route, Operation};
use crate::{
    models::{CreateRideRequest, Entity, NewRide, Ride, RideUpdate, UpdateRideRequest},
    services::RideService,
    utils::AppError,
};

const ENTITY: Entity = Entity::Rides;

pub fn resource(service: web::Data<RideService>) -> Resource {
    web::resource(ENTITY.path())
        .app_data(service)
        .route(web::route().to(handle))
}

pub async fn handle(
    req: HttpRequest,
    payload: web::Payload,
    service: web::Data<RideService>,
) -> Result<HttpResponse, AppError> {
    match route(req.method(), ENTITY)? {
        Operation::Read => get_rides(service, id_param(&req)?).await,
        Operation::Create => create_ride(service, read_body(payload).await?).await,
        Operation::Update => update_ride(service, read_body(payload).await?).await,
        Operation::Delete => Err(AppError::MethodNotAllowed),
    }
}

/// GET /rides - Lists every ride, or fetches one with `?id=`
#[utoipa::path(
    get,
    path = "/rides",
    tag = "Rides",
    params(
        ("id" = Option<String>, Query, description = "Ride id; omit to list all rides")
    ),
    responses(
        (status = 200, description = "The ride, or an array of every ride when no id is given", body = Ride),
        (status = 400, description = "Invalid request body (blank id)"),
        (status = 404, description = "Ride not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_rides(
    service: web::Data<RideService>,
    id: Option<String>,
) -> Result<HttpResponse, AppError> {
    match id {
        Some(id) => {
            let ride = service.find(&id).await?.ok_or(AppError::NotFound(ENTITY))?;
            Ok(HttpResponse::Ok().json(ride))
        }
        None => {
            let rides = service.list().await?;
            log::info!("📋 GET /rides - Listed {} rides", rides.len());
            Ok(HttpResponse::Ok().json(rides))
        }
    }
}

/// POST /rides - Opens a ride for a driver
#[utoipa::path(
    post,
    path = "/rides",
    tag = "Rides",
    request_body = CreateRideRequest,
    responses(
        (status = 201, description = "Ride created, available and without passenger", body = Ride),
        (status = 400, description = "Invalid request body"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_ride(
    service: web::Data<RideService>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request: CreateRideRequest = parse_body(&body)?;
    let ride = service.create(NewRide::try_from(request)?).await?;
    Ok(HttpResponse::Created().json(ride))
}

/// PUT /rides - Books or releases a ride
#[utoipa::path(
    put,
    path = "/rides",
    tag = "Rides",
    request_body = UpdateRideRequest,
    responses(
        (status = 200, description = "Ride after the update", body = Ride),
        (status = 400, description = "Invalid request body"),
        (status = 404, description = "Ride not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_ride(
    service: web::Data<RideService>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request: UpdateRideRequest = parse_body(&body)?;
    let update = RideUpdate::try_from(request)?;
    let ride = service.update(update).await?.ok_or(AppError::NotFound(ENTITY))?;
    Ok(HttpResponse::Ok().json(ride))
}
