pub mod file_creation_error;
pub mod file_creator;
