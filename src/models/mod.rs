pub mod catalog;
pub mod estimate;
pub mod order;
pub mod quotation;
pub mod settings;
