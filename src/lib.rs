pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod parser;
pub mod response;
pub mod schedule;
pub mod service;
pub mod types;
pub mod utils;
pub mod validation;

pub use config::AppConfig;
pub use error::StatusCode;
pub use response::TransferResponse;
pub use service::TransferService;
pub use types::{Account, TransferRequest};
