use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::ServiceStage;

// Intake form submission. Presence checks only; anything non-empty is
// accepted as-is.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRequest {
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub customer_name: String,
    #[validate(length(min = 1, message = "Make is required"))]
    pub make: String,
    #[validate(length(min = 1, message = "Model is required"))]
    pub model: String,
    #[validate(length(min = 1, message = "Registration is required"))]
    pub registration: String,
}

// Status change from a card's dropdown. Deserializing through
// `ServiceStage` rejects values outside the fixed list.
#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: ServiceStage,
}

// Response for a successful intake; the id is store-assigned.
#[derive(Debug, Serialize)]
pub struct CreatedVehicleResponse {
    pub id: String,
}

// Generic envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
