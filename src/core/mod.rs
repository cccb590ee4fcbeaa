pub mod errors;
pub mod models;
pub mod tasks;
pub mod utils;

pub use errors::{ FailureKind, FetchFailure, ReibunError };
pub use models::{ FetchRequest, ReviewCard };
