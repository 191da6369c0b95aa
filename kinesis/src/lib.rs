//! Bindings to the Kinesis motion control libraries.
//!
//! [`BrushlessMotor`] wraps the KCube brushless motor controller, [`NanoTrak`] the NanoTrak
//! auto alignment controller. Both load the shared [`DeviceManager`] library first.

pub use kinesis_types as types;

#[macro_use]
pub mod binding;

pub mod brushless_motor;
pub mod device_manager;
pub mod error;
pub mod library;
pub mod nanotrak;

pub use binding::{ReturnPolicy, Signature};
pub use brushless_motor::{BrushlessMotor, BrushlessMotorApi};
pub use device_manager::{DeviceManager, DeviceManagerApi};
pub use error::{KinesisError, Result};
pub use library::{LibraryLoader, LibrarySettings, NativeLibrary};
pub use nanotrak::{NanoTrak, NanoTrakApi};
