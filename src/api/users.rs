use actix_web::{web, HttpRequest, HttpResponse, Resource};

use super::{id_param, parse_body, read_body, route, Operation};
use crate::{
    models::{CreateUserRequest, Entity, NewUser, UpdateUserRequest, User, UserUpdate},
    services::UserService,
    utils::AppError,
};

const ENTITY: Entity = Entity::Users;

pub fn resource(service: web::Data<UserService>) -> Resource {
    web::resource(ENTITY.path())
        .app_data(service)
        .route(web::route().to(handle))
}

pub async fn handle(
    req: HttpRequest,
    payload: web::Payload,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    match route(req.method(), ENTITY)? {
        Operation::Read => get_users(service, id_param(&req)?).await,
        Operation::Create => create_user(service, read_body(payload).await?).await,
        Operation::Update => update_user(service, read_body(payload).await?).await,
        Operation::Delete => Err(AppError::MethodNotAllowed),
    }
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(
        ("id" = Option<String>, Query, description = "User id; omit to list all users")
    ),
    responses(
        (status = 200, description = "The user, or an array of every user when no id is given", body = User),
        (status = 400, description = "Invalid request body (blank id)"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_users(
    service: web::Data<UserService>,
    id: Option<String>,
) -> Result<HttpResponse, AppError> {
    match id {
        Some(id) => {
            let user = service.find(&id).await?.ok_or(AppError::NotFound(ENTITY))?;
            Ok(HttpResponse::Ok().json(user))
        }
        None => Ok(HttpResponse::Ok().json(service.list().await?)),
    }
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid request body"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_user(
    service: web::Data<UserService>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request: CreateUserRequest = parse_body(&body)?;
    let user = service.create(NewUser::try_from(request)?).await?;
    Ok(HttpResponse::Created().json(user))
}

#[utoipa::path(
    put,
    path = "/users",
    tag = "Users",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User after the update", body = User),
        (status = 400, description = "Invalid request body"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_user(
    service: web::Data<UserService>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request: UpdateUserRequest = parse_body(&body)?;
    let update = UserUpdate::try_from(request)?;
    let user = service.update(update).await?.ok_or(AppError::NotFound(ENTITY))?;
    Ok(HttpResponse::Ok().json(user))
}
