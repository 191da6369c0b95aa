use crate::cli::Module;
use anyhow::{Context, Result};
use kinesis::{
    BrushlessMotor, BrushlessMotorApi, DeviceManager, DeviceManagerApi, LibrarySettings, NanoTrak,
    NanoTrakApi, Signature,
};

fn modules(module: Option<Module>) -> Vec<Module> {
    match module {
        Some(module) => vec![module],
        None => vec![Module::Manager, Module::Motor, Module::Nanotrak],
    }
}

fn table(module: Module) -> &'static [Signature] {
    match module {
        Module::Manager => DeviceManagerApi::SIGNATURES,
        Module::Motor => BrushlessMotorApi::SIGNATURES,
        Module::Nanotrak => NanoTrakApi::SIGNATURES,
    }
}

pub fn print_signatures(module: Option<Module>) {
    for module in modules(module) {
        for signature in table(module) {
            println!("{}", signature);
        }
    }
}

/// Loads each library and lists the functions it doesn't export.
pub fn check_signatures(libraries: &LibrarySettings, module: Option<Module>) -> Result<()> {
    for module in modules(module) {
        let (library, missing) = match module {
            Module::Manager => {
                let manager =
                    DeviceManager::load(libraries).context("Could not load the device manager")?;
                (manager.library_name().to_string(), manager.api().missing())
            }
            Module::Motor => {
                let motor = BrushlessMotor::load(libraries)
                    .context("Could not load the brushless motor library")?;
                (motor.library_name().to_string(), motor.api().missing())
            }
            Module::Nanotrak => {
                let nanotrak =
                    NanoTrak::load(libraries).context("Could not load the NanoTrak library")?;
                (nanotrak.library_name().to_string(), nanotrak.api().missing())
            }
        };

        let total = table(module).len();
        println!("{}: {} of {} functions exported", library, total - missing.len(), total);
        for symbol in missing {
            println!("  missing {}", symbol);
        }
    }
    Ok(())
}
