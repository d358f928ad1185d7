pub mod helpers;

pub use helpers::{contract_file_name, write_contract_file};
