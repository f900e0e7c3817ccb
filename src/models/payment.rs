use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};

use super::record::{bool_or, number, optional_str, required_str, Record, RecordError, FIELD_ID};
use super::Entity;
use crate::utils::{required, AppError};

pub const ID_PREFIX: &str = "pay_";

const FIELD_USER_ID: &str = "userId";
const FIELD_AMOUNT: &str = "amount";
const FIELD_PROCESSED: &str = "processed";
const FIELD_TRANSACTION_ID: &str = "transactionId";
const FIELD_RIDE_ID: &str = "rideId";

/// Payment for a ride (stored in the payments collection)
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub user_id: Option<String>,
    pub amount: f64,
    pub processed: bool,
    /// Set once the payment provider has processed it
    pub transaction_id: Option<String>,
    pub ride_id: Option<String>,
}

impl Payment {
    pub fn new(id: String, new: NewPayment) -> Self {
        Payment {
            id,
            user_id: Some(new.user_id),
            amount: new.amount,
            processed: false,
            transaction_id: None,
            ride_id: Some(new.ride_id),
        }
    }
}

impl Record for Payment {
    const ENTITY: Entity = Entity::Payments;

    fn to_document(&self) -> Document {
        doc! {
            FIELD_ID: &self.id,
            FIELD_USER_ID: self.user_id.clone(),
            FIELD_AMOUNT: self.amount,
            FIELD_PROCESSED: self.processed,
            FIELD_TRANSACTION_ID: self.transaction_id.clone(),
            FIELD_RIDE_ID: self.ride_id.clone(),
        }
    }

    fn from_document(doc: &Document) -> Result<Self, RecordError> {
        Ok(Payment {
            id: required_str(doc, Self::ENTITY, FIELD_ID)?,
            user_id: optional_str(doc, FIELD_USER_ID),
            amount: number(doc, Self::ENTITY, FIELD_AMOUNT)?,
            processed: bool_or(doc, FIELD_PROCESSED, false),
            transaction_id: optional_str(doc, FIELD_TRANSACTION_ID),
            ride_id: optional_str(doc, FIELD_RIDE_ID),
        })
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub user_id: Option<String>,
    /// Defaults to 0 when absent
    pub amount: Option<f64>,
    pub ride_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewPayment {
    pub user_id: String,
    pub amount: f64,
    pub ride_id: String,
}

impl TryFrom<CreatePaymentRequest> for NewPayment {
    type Error = AppError;

    fn try_from(request: CreatePaymentRequest) -> Result<Self, Self::Error> {
        Ok(NewPayment {
            user_id: required(request.user_id)?,
            amount: request.amount.unwrap_or(0.0),
            ride_id: required(request.ride_id)?,
        })
    }
}

/// Processing result. `amount` is only written when present.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentRequest {
    pub id: Option<String>,
    pub processed: Option<bool>,
    pub transaction_id: Option<String>,
    pub ride_id: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct PaymentUpdate {
    pub id: String,
    pub processed: bool,
    pub transaction_id: String,
    pub ride_id: String,
    pub amount: Option<f64>,
}

impl PaymentUpdate {
    pub fn changes(&self) -> Document {
        let mut changes = doc! {
            FIELD_PROCESSED: self.processed,
            FIELD_TRANSACTION_ID: &self.transaction_id,
            FIELD_RIDE_ID: &self.ride_id,
        };
        if let Some(amount) = self.amount {
            changes.insert(FIELD_AMOUNT, amount);
        }
        changes
    }
}

impl TryFrom<UpdatePaymentRequest> for PaymentUpdate {
    type Error = AppError;

    fn try_from(request: UpdatePaymentRequest) -> Result<Self, Self::Error> {
        Ok(PaymentUpdate {
            id: required(request.id)?,
            processed: request.processed.unwrap_or(false),
            transaction_id: required(request.transaction_id)?,
            ride_id: required(request.ride_id)?,
            amount: request.amount,
        })
    }
}
