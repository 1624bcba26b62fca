pub mod replicate_prediction_status;
pub mod transform_model;
