use anyhow::{Context, Result};

use crate::client::DeviceClient;

pub async fn wake_device(client: &DeviceClient, name: &str) -> Result<()> {
    let message = client
        .wake_device(name)
        .await
        .with_context(|| format!("Failed to wake device '{}'", name))?;

    println!("{}", message);

    Ok(())
}
