use anyhow::{Context, Result};
use std::io::{self, Write};

use crate::client::{Device, DeviceClient};

pub async fn list_devices(client: &DeviceClient) -> Result<()> {
    let devices = client
        .list_devices()
        .await
        .with_context(|| format!("Failed to get devices from {}", client.server()))?;

    let mut stdout = io::stdout().lock();
    render_devices(&mut stdout, &devices)?;
    stdout.flush()?;

    Ok(())
}

/// Write the device list as a bulleted `name: mac` list.
///
/// An empty list is a valid answer from the server and renders as `(none)`.
pub fn render_devices<W: Write>(out: &mut W, devices: &[Device]) -> io::Result<()> {
    writeln!(out, "Devices:")?;

    if devices.is_empty() {
        writeln!(out, "  (none)")?;
        return Ok(());
    }

    for device in devices {
        writeln!(out, " * {}: {}", device.name, device.mac)?;
    }

    Ok(())
}
