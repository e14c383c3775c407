pub mod config;
pub mod error;
pub mod logging;

pub mod comments;
pub mod fetch;
pub mod pages;
pub mod pipeline;
pub mod resolve;
pub mod storage;

pub use error::{DmkError, Result};
