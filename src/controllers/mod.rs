pub mod intake_controller;
pub mod status_controller;
