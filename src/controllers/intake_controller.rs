use std::sync::Arc;

use tracing::{error, info};
use validator::Validate;

use crate::dto::vehicle_dto::{ApiResponse, CreatedVehicleResponse, IntakeRequest};
use crate::models::vehicle::NewVehicle;
use crate::store::client::VehicleWriter;
use crate::utils::errors::AppError;

/// Books new vehicles in: presence checks, then one create with the fixed
/// booking defaults. A failed write changes nothing; the caller may retry.
pub struct IntakeController {
    writer: Arc<dyn VehicleWriter>,
}

impl IntakeController {
    pub fn new(writer: Arc<dyn VehicleWriter>) -> Self {
        Self { writer }
    }

    pub async fn submit(
        &self,
        request: IntakeRequest,
    ) -> Result<ApiResponse<CreatedVehicleResponse>, AppError> {
        // All four fields are required; nothing is written otherwise.
        request.validate()?;

        let vehicle = NewVehicle::booked_in(
            request.customer_name,
            request.make,
            request.model,
            request.registration,
        );

        let id = match self.writer.create(&vehicle).await {
            Ok(id) => id,
            Err(e) => {
                error!("vehicle intake write failed: {}", e);
                return Err(e.into());
            }
        };

        info!(%id, customer = %vehicle.customer_name, "vehicle booked in");
        Ok(ApiResponse::success_with_message(
            CreatedVehicleResponse { id },
            "Vehicle booked in".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::{
        ServiceStage, DEFAULT_ESTIMATED_COMPLETION_TIME, DEFAULT_SERVICE_ADVISOR,
    };
    use crate::store::client::StoreError;
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingWriter {
        creates: Mutex<Vec<NewVehicle>>,
        fail_writes: bool,
    }

    #[async_trait]
    impl VehicleWriter for RecordingWriter {
        async fn create(&self, vehicle: &NewVehicle) -> Result<String, StoreError> {
            self.creates.lock().unwrap().push(vehicle.clone());
            if self.fail_writes {
                return Err(StoreError::Rejected(StatusCode::SERVICE_UNAVAILABLE));
            }
            Ok("generated-id".to_string())
        }

        async fn update_field(&self, _: &str, _: &str, _: &str) -> Result<(), StoreError> {
            panic!("intake must never issue field updates");
        }
    }

    fn request(customer: &str, make: &str, model: &str, registration: &str) -> IntakeRequest {
        IntakeRequest {
            customer_name: customer.into(),
            make: make.into(),
            model: model.into(),
            registration: registration.into(),
        }
    }

    #[tokio::test]
    async fn populated_submission_creates_exactly_once_with_booking_policy() {
        let writer = Arc::new(RecordingWriter::default());
        let controller = IntakeController::new(writer.clone());

        let response = controller
            .submit(request("Thandi", "Toyota", "Hilux", "CA 123-456"))
            .await
            .expect("valid submission");

        assert!(response.success);
        assert_eq!(response.data.unwrap().id, "generated-id");

        let creates = writer.creates.lock().unwrap();
        assert_eq!(creates.len(), 1);
        assert_eq!(creates[0].status, ServiceStage::BookedIn);
        assert_eq!(creates[0].service_advisor, DEFAULT_SERVICE_ADVISOR);
        assert_eq!(
            creates[0].estimated_completion_time,
            DEFAULT_ESTIMATED_COMPLETION_TIME
        );
    }

    #[tokio::test]
    async fn any_empty_field_blocks_the_write() {
        let cases = [
            request("", "Toyota", "Hilux", "CA 123-456"),
            request("Thandi", "", "Hilux", "CA 123-456"),
            request("Thandi", "Toyota", "", "CA 123-456"),
            request("Thandi", "Toyota", "Hilux", ""),
        ];

        for case in cases {
            let writer = Arc::new(RecordingWriter::default());
            let controller = IntakeController::new(writer.clone());

            let err = controller.submit(case).await.expect_err("must be rejected");
            assert!(matches!(err, AppError::Validation(_)));
            assert!(writer.creates.lock().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn failed_write_surfaces_as_write_error() {
        let writer = Arc::new(RecordingWriter {
            fail_writes: true,
            ..Default::default()
        });
        let controller = IntakeController::new(writer.clone());

        let err = controller
            .submit(request("Thandi", "Toyota", "Hilux", "CA 123-456"))
            .await
            .expect_err("store rejected the write");

        assert!(matches!(err, AppError::Write(_)));
        // The attempt was made; retrying is up to the user.
        assert_eq!(writer.creates.lock().unwrap().len(), 1);
    }
}
