//! Shared output formatting helpers for commands

pub mod status;

pub use status::{print_json, print_json_status, print_records_data, print_records_header};
