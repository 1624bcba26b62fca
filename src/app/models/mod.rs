pub mod api_error;
