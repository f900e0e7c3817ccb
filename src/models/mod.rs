pub mod driver;
pub mod entity;
pub mod payment;
pub mod record;
pub mod ride;
pub mod user;

pub use driver::{CreateDriverRequest, Driver, DriverUpdate, NewDriver, UpdateDriverRequest};
pub use entity::Entity;
pub use payment::{CreatePaymentRequest, NewPayment, Payment, PaymentUpdate, UpdatePaymentRequest};
pub use record::{Record, RecordError};
pub use ride::{CreateRideRequest, NewRide, Ride, RideUpdate, UpdateRideRequest};
pub use user::{CreateUserRequest, NewUser, UpdateUserRequest, User, UserUpdate};
