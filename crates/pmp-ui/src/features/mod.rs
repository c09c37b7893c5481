//! Feature slices of the console.
pub mod generate_api_key;
