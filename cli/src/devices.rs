use anyhow::{Context, Result};
use kinesis::types::DeviceType;
use kinesis::{DeviceManager, LibrarySettings};
use log::{debug, warn};

pub fn list_devices(libraries: &LibrarySettings, device_type: Option<DeviceType>) -> Result<()> {
    let manager = DeviceManager::load(libraries).context("Could not load the device manager")?;

    manager
        .build_device_list()
        .context("Could not build the device list")?;
    debug!("Device manager reports {} device(s)", manager.get_device_list_size()?);

    let serials = match device_type {
        Some(device_type) => manager.get_device_list_by_type(device_type)?,
        None => manager.get_device_list()?,
    };

    if serials.is_empty() {
        println!("No devices found.");
        return Ok(());
    }

    for serial in serials {
        match manager.get_device_info(&serial)? {
            Some(info) => println!(
                "{} - {} ({}), {} channel(s)",
                info.serial_no(),
                info.description(),
                info.device_type()
                    .map(|device_type| device_type.to_string())
                    .unwrap_or_else(|| format!("type {}", { info.type_id })),
                { info.max_channels }
            ),
            None => {
                warn!("No details available for {}", serial);
                println!("{}", serial);
            }
        }
    }
    Ok(())
}
