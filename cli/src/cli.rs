use clap::{Parser, Subcommand, ValueEnum};
use directories::ProjectDirs;
use kinesis_types::motor::TravelDirection;
use kinesis_types::nanotrak::NanoTrakMode;
use kinesis_types::DeviceType;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about, version, author)]
pub struct Cli {
    /// Minimum log level to print out
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LevelFilter,

    /// Location of the configuration file on disk
    #[arg(long, default_value_os_t = default_config_location())]
    pub config: PathBuf,

    /// Directory holding the Kinesis libraries, overrides the configuration for this run
    #[arg(long)]
    pub install_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: SubCommands,
}

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    /// List the connected devices
    Devices {
        /// Only list devices of this type
        #[arg(long = "type", value_enum)]
        device_type: Option<DeviceType>,
    },

    /// Print the native functions each library is expected to export
    Signatures {
        #[arg(long, value_enum)]
        module: Option<Module>,

        /// Load the installed libraries and report functions they don't export
        #[arg(long)]
        check: bool,
    },

    /// Control a KCube brushless motor
    Motor {
        serial: String,

        #[arg(long, default_value = "1")]
        channel: i16,

        #[command(subcommand)]
        action: MotorAction,
    },

    /// Control a NanoTrak
    Nanotrak {
        serial: String,

        #[command(subcommand)]
        action: NanoTrakAction,
    },
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Module {
    Manager,
    Motor,
    Nanotrak,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum MotorAction {
    /// Flash the front panel LED
    Identify,
    Enable,
    Disable,

    /// Print position and status flags
    Status,

    /// Home the stage
    Home {
        /// Wait for the move to finish
        #[arg(long)]
        wait: bool,
    },

    /// Move to an absolute position, in device units
    MoveTo {
        #[arg(allow_negative_numbers = true)]
        position: i32,

        #[arg(long)]
        wait: bool,
    },

    /// Move by a distance, in device units
    MoveBy {
        #[arg(allow_negative_numbers = true)]
        distance: i32,

        #[arg(long)]
        wait: bool,
    },

    /// Jog one step using the stored jog parameters
    Jog {
        #[arg(value_enum)]
        direction: TravelDirection,
    },

    Stop {
        /// Decelerate using the velocity profile rather than stopping immediately
        #[arg(long)]
        profiled: bool,
    },

    /// Show the move velocity parameters, or set them when a value is given
    Velocity {
        #[arg(long)]
        acceleration: Option<i32>,

        #[arg(long)]
        max_velocity: Option<i32>,
    },
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum NanoTrakAction {
    /// Flash the front panel LED
    Identify,

    /// Print the status flags
    Status,

    /// Print the latest TIA reading
    Reading,

    /// Show the operating mode, or change it
    Mode {
        #[arg(value_enum)]
        mode: Option<NanoTrakMode>,
    },

    /// Print the circle parameters and current circle position
    Circle,

    /// Move the circle to its home position
    HomeCircle,

    /// Show the loop gain, or change it
    Gain { gain: Option<i16> },
}

fn default_config_location() -> PathBuf {
    ProjectDirs::from("com", "Thorlabs", "Kinesis-CLI")
        .map(|dirs| dirs.config_dir().join("settings.json"))
        .unwrap_or_else(|| PathBuf::from("settings.json"))
}

#[repr(usize)]
#[derive(ValueEnum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum LevelFilter {
    /// A level lower than all log levels.
    Off,
    /// Corresponds to the `Error` log level.
    Error,
    /// Corresponds to the `Warn` log level.
    Warn,
    /// Corresponds to the `Info` log level.
    Info,
    /// Corresponds to the `Debug` log level.
    Debug,
    /// Corresponds to the `Trace` log level.
    Trace,
}

impl From<LevelFilter> for log::LevelFilter {
    fn from(level: LevelFilter) -> Self {
        match level {
            LevelFilter::Off => log::LevelFilter::Off,
            LevelFilter::Error => log::LevelFilter::Error,
            LevelFilter::Warn => log::LevelFilter::Warn,
            LevelFilter::Info => log::LevelFilter::Info,
            LevelFilter::Debug => log::LevelFilter::Debug,
            LevelFilter::Trace => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn motor_commands() {
        let cli = Cli::try_parse_from([
            "kinesis-cli",
            "motor",
            "28250123",
            "move-by",
            "-5000",
            "--wait",
        ])
        .unwrap();
        match cli.command {
            SubCommands::Motor {
                serial,
                channel,
                action,
            } => {
                assert_eq!(serial, "28250123");
                assert_eq!(channel, 1);
                assert_eq!(
                    action,
                    MotorAction::MoveBy {
                        distance: -5000,
                        wait: true
                    }
                );
            }
            other => panic!("Unexpected command: {other:?}"),
        }
    }

    #[test]
    fn nanotrak_commands() {
        let cli = Cli::try_parse_from([
            "kinesis-cli",
            "--log-level",
            "debug",
            "nanotrak",
            "52000001",
            "mode",
            "tracking",
        ])
        .unwrap();

        assert_eq!(cli.log_level, LevelFilter::Debug);
        assert!(matches!(
            cli.command,
            SubCommands::Nanotrak {
                action: NanoTrakAction::Mode {
                    mode: Some(NanoTrakMode::Tracking)
                },
                ..
            }
        ));
    }

    #[test]
    fn signature_options() {
        let cli =
            Cli::try_parse_from(["kinesis-cli", "signatures", "--module", "motor", "--check"])
                .unwrap();
        assert!(matches!(
            cli.command,
            SubCommands::Signatures {
                module: Some(Module::Motor),
                check: true
            }
        ));
    }
}
