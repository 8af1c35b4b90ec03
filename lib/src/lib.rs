pub mod config;
pub mod email;
pub mod error;
pub mod form;
pub mod smtp;
pub mod spool;

pub use error::Error;
