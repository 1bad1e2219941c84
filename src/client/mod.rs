//! HTTP client for the wolweb device service.

mod error;
mod service;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use error::ClientError;
pub use service::{DEFAULT_TIMEOUT, DeviceClient};
pub use types::{Device, DeviceListResponse, WakeResult};
