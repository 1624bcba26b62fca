pub mod replicate_files;
