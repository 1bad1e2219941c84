pub mod cli;
pub mod client;
pub mod config;

pub use client::{ClientError, Device, DeviceClient};
pub use config::Config;
