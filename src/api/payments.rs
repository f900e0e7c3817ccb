use actix_web::{web, HttpRequest, HttpResponse, Resource};

use super::{id_param, parse_body, read_body, route, Operation};
use crate::{
    models::{CreatePaymentRequest, Entity, NewPayment, Payment, PaymentUpdate, UpdatePaymentRequest},
    services::PaymentService,
    utils::AppError,
};

const ENTITY: Entity = Entity::Payments;

/// Payments are the only entity that also accepts DELETE.
pub fn resource(service: web::Data<PaymentService>) -> Resource {
    web::resource(ENTITY.path())
        .app_data(service)
        .route(web::route().to(handle))
}

pub async fn handle(
    req: HttpRequest,
    payload: web::Payload,
    service: web::Data<PaymentService>,
) -> Result<HttpResponse, AppError> {
    match route(req.method(), ENTITY)? {
        Operation::Read => get_payments(service, id_param(&req)?).await,
        Operation::Create => create_payment(service, read_body(payload).await?).await,
        Operation::Update => update_payment(service, read_body(payload).await?).await,
        Operation::Delete => delete_payment(service, id_param(&req)?).await,
    }
}

/// GET /payments - Lists every payment, or fetches one with `?id=`
#[utoipa::path(
    get,
    path = "/payments",
    tag = "Payments",
    params(
        ("id" = Option<String>, Query, description = "Payment id; omit to list all payments")
    ),
    responses(
        (status = 200, description = "The payment, or an array of every payment when no id is given", body = Payment),
        (status = 400, description = "Invalid request body (blank id)"),
        (status = 404, description = "Payment not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_payments(
    service: web::Data<PaymentService>,
    id: Option<String>,
) -> Result<HttpResponse, AppError> {
    match id {
        Some(id) => {
            let payment = service.find(&id).await?.ok_or(AppError::NotFound(ENTITY))?;
            Ok(HttpResponse::Ok().json(payment))
        }
        None => {
            let payments = service.list().await?;
            log::info!("📋 GET /payments - Listed {} payments", payments.len());
            Ok(HttpResponse::Ok().json(payments))
        }
    }
}

/// POST /payments - Records a pending payment for a ride
#[utoipa::path(
    post,
    path = "/payments",
    tag = "Payments",
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Payment created, not yet processed", body = Payment),
        (status = 400, description = "Invalid request body"),
        (status = 500, description = "Internal server error (includes an unacknowledged insert)")
    )
)]
pub async fn create_payment(
    service: web::Data<PaymentService>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request: CreatePaymentRequest = parse_body(&body)?;
    let payment = service.create(NewPayment::try_from(request)?).await?;
    Ok(HttpResponse::Created().json(payment))
}

/// PUT /payments - Stores the processing result
#[utoipa::path(
    put,
    path = "/payments",
    tag = "Payments",
    request_body = UpdatePaymentRequest,
    responses(
        (status = 200, description = "Payment after the update", body = Payment),
        (status = 400, description = "Invalid request body"),
        (status = 404, description = "Payment not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_payment(
    service: web::Data<PaymentService>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request: UpdatePaymentRequest = parse_body(&body)?;
    let update = PaymentUpdate::try_from(request)?;
    let payment = service.update(update).await?.ok_or(AppError::NotFound(ENTITY))?;
    Ok(HttpResponse::Ok().json(payment))
}

/// DELETE /payments?id= - Removes a payment
#[utoipa::path(
    delete,
    path = "/payments",
    tag = "Payments",
    params(
        ("id" = String, Query, description = "Payment id")
    ),
    responses(
        (status = 200, description = "Deleted payment", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid request body (missing or blank id)"),
        (status = 404, description = "Payment not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_payment(
    service: web::Data<PaymentService>,
    id: Option<String>,
) -> Result<HttpResponse, AppError> {
    let id = id.ok_or(AppError::InvalidRequest)?;
    if !service.delete(&id).await? {
        return Err(AppError::NotFound(ENTITY));
    }
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Deleted payment"))
}
