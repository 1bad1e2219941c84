use serde::{Deserialize, Serialize};

/// A host known to the wolweb service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    pub mac: String,
}

/// Body of `GET /wolweb/data/get`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceListResponse {
    pub devices: Vec<Device>,
}

/// Body of `GET /wolweb/wake/{name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WakeResult {
    pub success: bool,
    pub message: String,
}
