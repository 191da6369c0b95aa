use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

use crate::cli::{Cli, SubCommands};
use crate::settings::Settings;

mod cli;
mod devices;
mod motor;
mod nanotrak;
mod settings;
mod signatures;
#[cfg(test)]
mod test_library;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    CombinedLogger::init(vec![TermLogger::new(
        args.log_level.into(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .context("Could not configure the logger")?;

    debug!("Starting Kinesis CLI v{}", VERSION);
    let mut settings = Settings::load(&args.config)?;
    if let Some(install_dir) = args.install_dir {
        info!("Using Kinesis libraries from {}", install_dir.display());
        settings.libraries.install_dir = install_dir;
    }

    match args.command {
        SubCommands::Devices { device_type } => {
            devices::list_devices(&settings.libraries, device_type)?
        }
        SubCommands::Signatures { module, check } => {
            if check {
                signatures::check_signatures(&settings.libraries, module)?;
            } else {
                signatures::print_signatures(module);
            }
        }
        SubCommands::Motor {
            serial,
            channel,
            action,
        } => motor::run(&settings, &serial, channel, action)?,
        SubCommands::Nanotrak { serial, action } => nanotrak::run(&settings, &serial, action)?,
    }

    Ok(())
}
