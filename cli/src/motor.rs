use crate::cli::MotorAction;
use crate::settings::Settings;
use anyhow::{bail, Context, Result};
use kinesis::types::motor::MotorStatus;
use kinesis::BrushlessMotor;
use log::{debug, info, warn};
use std::thread::sleep;
use std::time::{Duration, Instant};

/// Opens the motor, runs one action with polling running, then shuts it down again.
pub fn run(settings: &Settings, serial: &str, channel: i16, action: MotorAction) -> Result<()> {
    let motor = BrushlessMotor::load(&settings.libraries)
        .context("Could not load the brushless motor library")?;
    drive(&motor, settings, serial, channel, action)
}

fn drive(
    motor: &BrushlessMotor,
    settings: &Settings,
    serial: &str,
    channel: i16,
    action: MotorAction,
) -> Result<()> {
    let interval = settings.polling_interval()?;

    motor
        .device_manager()
        .build_device_list()
        .context("Could not build the device list")?;
    motor
        .open_device(serial)
        .with_context(|| format!("Could not open motor {}", serial))?;

    let result = match motor.start_polling(serial, channel, interval) {
        Ok(started) => {
            if !started {
                warn!("Polling didn't start for {}, status may be stale", serial);
            }
            debug!("Polling {} every {}ms", serial, interval);

            let result = perform(motor, settings, serial, channel, action);
            if let Err(e) = motor.stop_polling(serial, channel) {
                warn!("Could not stop polling {}: {}", serial, e);
            }
            result
        }
        Err(e) => Err(e).with_context(|| format!("Could not start polling {}", serial)),
    };
    let closed = motor.close_device(serial);

    result?;
    closed.with_context(|| format!("Could not close motor {}", serial))
}

fn perform(
    motor: &BrushlessMotor,
    settings: &Settings,
    serial: &str,
    channel: i16,
    action: MotorAction,
) -> Result<()> {
    match action {
        MotorAction::Identify => motor.identify(serial)?,
        MotorAction::Enable => motor.enable_channel(serial, channel)?,
        MotorAction::Disable => motor.disable_channel(serial, channel)?,
        MotorAction::Status => {
            let position = motor.get_position(serial, channel)?;
            let status = motor.status(serial, channel)?;
            let flags: Vec<String> = status.iter().map(|flag| flag.to_string()).collect();

            println!("Position: {}", position);
            println!("Status: {}", flags.join(", "));
        }
        MotorAction::Home { wait } => {
            info!("Homing {}", serial);
            motor.home(serial, channel)?;
            if wait {
                wait_until_settled(motor, settings, serial, channel)?;
            }
        }
        MotorAction::MoveTo { position, wait } => {
            info!("Moving {} to {}", serial, position);
            motor.set_move_absolute_position(serial, channel, position)?;
            motor.move_absolute(serial, channel)?;
            if wait {
                wait_until_settled(motor, settings, serial, channel)?;
            }
        }
        MotorAction::MoveBy { distance, wait } => {
            info!("Moving {} by {}", serial, distance);
            motor.move_relative(serial, channel, distance)?;
            if wait {
                wait_until_settled(motor, settings, serial, channel)?;
            }
        }
        MotorAction::Jog { direction } => motor.move_jog(serial, channel, direction)?,
        MotorAction::Stop { profiled } => {
            if profiled {
                motor.stop_profiled(serial, channel)?;
            } else {
                motor.stop_immediate(serial, channel)?;
            }
        }
        MotorAction::Velocity {
            acceleration,
            max_velocity,
        } => {
            let (current_acceleration, current_max_velocity) =
                motor.get_vel_params(serial, channel)?;
            if acceleration.is_none() && max_velocity.is_none() {
                println!("Acceleration: {}", current_acceleration);
                println!("Max velocity: {}", current_max_velocity);
            } else {
                motor.set_vel_params(
                    serial,
                    channel,
                    acceleration.unwrap_or(current_acceleration),
                    max_velocity.unwrap_or(current_max_velocity),
                )?;
            }
        }
    }
    Ok(())
}

fn wait_until_settled(
    motor: &BrushlessMotor,
    settings: &Settings,
    serial: &str,
    channel: i16,
) -> Result<()> {
    let interval = Duration::from_millis(settings.polling_interval_ms.into());
    let deadline = Instant::now() + Duration::from_millis(settings.settle_timeout_ms);

    loop {
        sleep(interval);
        if !MotorStatus::is_moving(motor.status(serial, channel)?) {
            debug!("{} settled at {}", serial, motor.get_position(serial, channel)?);
            return Ok(());
        }
        if Instant::now() >= deadline {
            bail!(
                "{} was still moving after {}ms",
                serial,
                settings.settle_timeout_ms
            );
        }
    }
}
