use crate::cli::NanoTrakAction;
use crate::settings::Settings;
use anyhow::{Context, Result};
use kinesis::NanoTrak;
use log::{debug, warn};

pub fn run(settings: &Settings, serial: &str, action: NanoTrakAction) -> Result<()> {
    let nanotrak =
        NanoTrak::load(&settings.libraries).context("Could not load the NanoTrak library")?;
    drive(&nanotrak, settings, serial, action)
}

fn drive(
    nanotrak: &NanoTrak,
    settings: &Settings,
    serial: &str,
    action: NanoTrakAction,
) -> Result<()> {
    let interval = settings.polling_interval()?;

    nanotrak
        .device_manager()
        .build_device_list()
        .context("Could not build the device list")?;
    nanotrak
        .open_device(serial)
        .with_context(|| format!("Could not open NanoTrak {}", serial))?;

    let result = match nanotrak.start_polling(serial, interval) {
        Ok(started) => {
            if !started {
                warn!("Polling didn't start for {}, readings may be stale", serial);
            }
            debug!("Polling {} every {}ms", serial, interval);

            let result = perform(nanotrak, serial, action);
            if let Err(e) = nanotrak.stop_polling(serial) {
                warn!("Could not stop polling {}: {}", serial, e);
            }
            result
        }
        Err(e) => Err(e).with_context(|| format!("Could not start polling {}", serial)),
    };
    // NT_Close reports no status, only a missing export can fail here.
    let closed = nanotrak.close_device(serial);

    result?;
    closed.with_context(|| format!("Could not close NanoTrak {}", serial))
}

fn perform(nanotrak: &NanoTrak, serial: &str, action: NanoTrakAction) -> Result<()> {
    match action {
        NanoTrakAction::Identify => nanotrak.identify(serial)?,
        NanoTrakAction::Status => {
            let flags: Vec<String> = nanotrak
                .status(serial)?
                .iter()
                .map(|flag| flag.to_string())
                .collect();
            println!("Status: {}", flags.join(", "));
        }
        NanoTrakAction::Reading => {
            let reading = nanotrak.get_reading(serial)?;
            println!("Absolute: {}", { reading.absolute_reading });
            println!("Relative: {}", { reading.relative_reading });
            match reading.selected_range() {
                Some(range) => println!("Range: {}", range),
                None => println!("Range: unknown ({})", { reading.selected_range }),
            }
        }
        NanoTrakAction::Mode { mode: Some(mode) } => nanotrak.set_mode(serial, mode)?,
        NanoTrakAction::Mode { mode: None } => println!("Mode: {}", nanotrak.get_mode(serial)?),
        NanoTrakAction::Circle => {
            let params = nanotrak.get_circle_params(serial)?;
            let position = nanotrak.get_circle_position(serial)?;
            println!("Diameter: {}", { params.diameter });
            println!("Samples per revolution: {}", { params.samples_per_revolution });
            println!(
                "Diameter range: {} - {}",
                { params.min_diameter },
                { params.max_diameter }
            );
            println!(
                "Position: {}, {}",
                { position.horizontal_component },
                { position.vertical_component }
            );
        }
        NanoTrakAction::HomeCircle => nanotrak.home_circle(serial)?,
        NanoTrakAction::Gain { gain: Some(gain) } => nanotrak.set_gain(serial, gain)?,
        NanoTrakAction::Gain { gain: None } => println!("Gain: {}", nanotrak.get_gain(serial)?),
    }
    Ok(())
}
