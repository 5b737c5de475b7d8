pub mod estimator_controller;
pub mod quotation_controller;
pub mod settings_controller;
pub mod tracking_controller;
