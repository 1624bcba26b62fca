pub mod replicate_file_response;
