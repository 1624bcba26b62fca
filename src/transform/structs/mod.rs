pub mod replicate_prediction_response;
