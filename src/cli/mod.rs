mod devices;
mod wake;

pub use devices::{list_devices, render_devices};
pub use wake::wake_device;
