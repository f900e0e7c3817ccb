use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ride Service API",
        version = "1.0.0",
        description = "CRUD handlers for the ride-hailing backend.\n\nEvery entity lives on a single path and is addressed with the `id` query parameter (GET, DELETE) or the `id` body field (PUT). Only payments can be deleted. Errors are plain text."
    ),
    paths(
        crate::api::health::health_check,

        crate::api::drivers::get_drivers,
        crate::api::drivers::create_driver,
        crate::api::drivers::update_driver,

        crate::api::rides::get_rides,
        crate::api::rides::create_ride,
        crate::api::rides::update_ride,

        crate::api::users::get_users,
        crate::api::users::create_user,
        crate::api::users::update_user,

        crate::api::payments::get_payments,
        crate::api::payments::create_payment,
        crate::api::payments::update_payment,
        crate::api::payments::delete_payment,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::Driver,
            crate::models::CreateDriverRequest,
            crate::models::UpdateDriverRequest,
            crate::models::Ride,
            crate::models::CreateRideRequest,
            crate::models::UpdateRideRequest,
            crate::models::User,
            crate::models::CreateUserRequest,
            crate::models::UpdateUserRequest,
            crate::models::Payment,
            crate::models::CreatePaymentRequest,
            crate::models::UpdatePaymentRequest,
        )
    ),
    tags(
        (name = "Drivers", description = "Driver registry and travel status. Ids are prefixed `d_`."),
        (name = "Rides", description = "Ride offers and bookings. Ids are prefixed `r_`."),
        (name = "Users", description = "Rider accounts and travel status. Ids are prefixed `u_`."),
        (name = "Payments", description = "Ride payments and their processing result. Ids are prefixed `pay_`."),
        (name = "Health", description = "Liveness check."),
    )
)]
pub struct ApiDoc;
