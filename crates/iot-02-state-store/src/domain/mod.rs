pub mod errors;
pub mod transaction;
