//! Vehicle records and the fixed service-stage list.
//!
//! Field names on the wire are the document store's camelCase names.
//! `VehicleRecord.status` stays a plain string: incoming documents are not
//! validated on read (an out-of-list value simply matches no dropdown option
//! and gets replaced on the next edit), while status *writes* go through
//! [`ServiceStage`] and are always valid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Record creation policy: advisor assigned to every new booking.
pub const DEFAULT_SERVICE_ADVISOR: &str = "Busi";

/// Record creation policy: placeholder until the workshop commits to a time.
pub const DEFAULT_ESTIMATED_COMPLETION_TIME: &str = "To be confirmed";

/// The eight workshop stages a vehicle passes through, in board order.
/// Any stage may move to any other stage; no transition rules are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceStage {
    #[serde(rename = "Booked In")]
    BookedIn,
    #[serde(rename = "In Wash Bay")]
    InWashBay,
    #[serde(rename = "In Workshop")]
    InWorkshop,
    #[serde(rename = "Awaiting Parts")]
    AwaitingParts,
    #[serde(rename = "Quality Check")]
    QualityCheck,
    #[serde(rename = "Final Wash & Vacuum")]
    FinalWashAndVacuum,
    #[serde(rename = "Ready for Collection")]
    ReadyForCollection,
    #[serde(rename = "Invoiced & Completed")]
    InvoicedAndCompleted,
}

impl ServiceStage {
    pub const ALL: [ServiceStage; 8] = [
        ServiceStage::BookedIn,
        ServiceStage::InWashBay,
        ServiceStage::InWorkshop,
        ServiceStage::AwaitingParts,
        ServiceStage::QualityCheck,
        ServiceStage::FinalWashAndVacuum,
        ServiceStage::ReadyForCollection,
        ServiceStage::InvoicedAndCompleted,
    ];

    /// Stage every newly booked vehicle starts in.
    pub const INITIAL: ServiceStage = ServiceStage::BookedIn;

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStage::BookedIn => "Booked In",
            ServiceStage::InWashBay => "In Wash Bay",
            ServiceStage::InWorkshop => "In Workshop",
            ServiceStage::AwaitingParts => "Awaiting Parts",
            ServiceStage::QualityCheck => "Quality Check",
            ServiceStage::FinalWashAndVacuum => "Final Wash & Vacuum",
            ServiceStage::ReadyForCollection => "Ready for Collection",
            ServiceStage::InvoicedAndCompleted => "Invoiced & Completed",
        }
    }
}

impl fmt::Display for ServiceStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown service stage: {0}")]
pub struct ParseStageError(pub String);

impl FromStr for ServiceStage {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| ParseStageError(s.to_string()))
    }
}

/// A vehicle document as pushed by the store's subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: String,
    pub customer_name: String,
    pub make: String,
    pub model: String,
    pub registration: String,
    pub status: String,
    #[serde(default)]
    pub service_advisor: String,
    #[serde(default)]
    pub estimated_completion_time: String,
}

/// The document sent to the store at intake; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    pub customer_name: String,
    pub make: String,
    pub model: String,
    pub registration: String,
    pub status: ServiceStage,
    pub service_advisor: String,
    pub estimated_completion_time: String,
}

impl NewVehicle {
    /// Apply the booking policy: initial stage plus the two fixed defaults.
    pub fn booked_in(
        customer_name: String,
        make: String,
        model: String,
        registration: String,
    ) -> Self {
        Self {
            customer_name,
            make,
            model,
            registration,
            status: ServiceStage::INITIAL,
            service_advisor: DEFAULT_SERVICE_ADVISOR.to_string(),
            estimated_completion_time: DEFAULT_ESTIMATED_COMPLETION_TIME.to_string(),
        }
    }
}
