use std::sync::Arc;

use tracing::{error, info};

use crate::dto::vehicle_dto::{ApiResponse, StatusUpdateRequest};
use crate::store::client::VehicleWriter;
use crate::utils::errors::AppError;

/// Applies status changes from the card dropdowns: one single-field update
/// per selection, issued immediately. The controller never consults the
/// current board value, so selecting the stage a vehicle is already in
/// still writes (no no-op short-circuit); last write wins at the store.
pub struct StatusController {
    writer: Arc<dyn VehicleWriter>,
}

impl StatusController {
    pub fn new(writer: Arc<dyn VehicleWriter>) -> Self {
        Self { writer }
    }

    pub async fn change_status(
        &self,
        id: &str,
        request: StatusUpdateRequest,
    ) -> Result<ApiResponse<()>, AppError> {
        if let Err(e) = self
            .writer
            .update_field(id, "status", request.status.as_str())
            .await
        {
            error!(%id, "status update failed: {}", e);
            return Err(e.into());
        }

        info!(%id, stage = %request.status, "status update issued");
        Ok(ApiResponse::success_with_message(
            (),
            format!("Status updated to {}", request.status),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::{NewVehicle, ServiceStage};
    use crate::store::client::StoreError;
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingWriter {
        updates: Mutex<Vec<(String, String, String)>>,
        fail_writes: bool,
    }

    #[async_trait]
    impl VehicleWriter for RecordingWriter {
        async fn create(&self, _: &NewVehicle) -> Result<String, StoreError> {
            panic!("status changes must never create documents");
        }

        async fn update_field(&self, id: &str, field: &str, value: &str) -> Result<(), StoreError> {
            self.updates
                .lock()
                .unwrap()
                .push((id.to_string(), field.to_string(), value.to_string()));
            if self.fail_writes {
                return Err(StoreError::Rejected(StatusCode::SERVICE_UNAVAILABLE));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn selection_updates_exactly_the_status_field() {
        let writer = Arc::new(RecordingWriter::default());
        let controller = StatusController::new(writer.clone());

        controller
            .change_status(
                "a",
                StatusUpdateRequest {
                    status: ServiceStage::ReadyForCollection,
                },
            )
            .await
            .expect("update accepted");

        let updates = writer.updates.lock().unwrap();
        assert_eq!(
            *updates,
            vec![(
                "a".to_string(),
                "status".to_string(),
                "Ready for Collection".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn unchanged_stage_still_issues_the_write() {
        // The controller has no notion of the record's current value; the
        // write goes out either way.
        let writer = Arc::new(RecordingWriter::default());
        let controller = StatusController::new(writer.clone());

        controller
            .change_status(
                "a",
                StatusUpdateRequest {
                    status: ServiceStage::BookedIn,
                },
            )
            .await
            .expect("update accepted");
        controller
            .change_status(
                "a",
                StatusUpdateRequest {
                    status: ServiceStage::BookedIn,
                },
            )
            .await
            .expect("update accepted");

        assert_eq!(writer.updates.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn failed_update_surfaces_as_write_error() {
        let writer = Arc::new(RecordingWriter {
            fail_writes: true,
            ..Default::default()
        });
        let controller = StatusController::new(writer);

        let err = controller
            .change_status(
                "a",
                StatusUpdateRequest {
                    status: ServiceStage::InWorkshop,
                },
            )
            .await
            .expect_err("store rejected the write");
        assert!(matches!(err, AppError::Write(_)));
    }
}
