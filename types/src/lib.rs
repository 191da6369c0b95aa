//! Types shared with the Kinesis native libraries.
//!
//! Everything in here mirrors the vendor headers byte for byte. Structures are `#[repr(C, packed)]`
//! because the headers are compiled under `#pragma pack(1)`, so fields must be copied out before
//! being borrowed (`{ params.max_velocity }`), never referenced in place.

#[cfg(feature = "clap")]
use clap::ValueEnum;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ffi::c_char;
use strum::{Display, EnumCount, EnumIter, FromRepr};

// Enum typed fields are stored raw, the native side can write anything into them.
macro_rules! enum_accessors {
    ($($getter:ident, $setter:ident => $field:ident: $enum:ty;)*) => {
        $(
            pub fn $getter(&self) -> Option<$enum> {
                <$enum>::from_repr(self.$field)
            }

            pub fn $setter(&mut self, value: $enum) {
                self.$field = value as _;
            }
        )*
    };
}

pub mod device;
pub mod motor;
pub mod nanotrak;

pub use device::{DeviceInfo, HardwareInformation};

/// Device type ids as reported by the device manager. The first two digits of a serial number
/// are its type id.
#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i32)]
pub enum DeviceType {
    KCubeBrushlessMotor = 28,
    ModularNanoTrak = 52,
    KCubeNanoTrak = 57,
}

impl DeviceType {
    pub fn type_id(&self) -> i32 {
        *self as i32
    }

    /// Work out the device type from the leading digits of a serial number.
    pub fn from_serial(serial_no: &str) -> Option<Self> {
        let prefix = serial_no.get(0..2)?;
        prefix.parse::<i32>().ok().and_then(Self::from_repr)
    }
}

/// A message popped from a device's message queue.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceMessage {
    pub message_type: u16,
    pub message_id: u16,
    pub message_data: u32,
}

/// Selects which quantity a real/device unit conversion applies to.
#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i32)]
pub enum UnitType {
    Distance = 0,
    Velocity = 1,
    Acceleration = 2,
}

/// Reads a fixed size, NUL padded `char[]` field.
pub(crate) fn fixed_string(field: &[c_char]) -> String {
    let bytes: Vec<u8> = field
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Writes into a fixed size `char[]` field, truncating and always leaving a terminating NUL.
pub(crate) fn write_fixed_string(field: &mut [c_char], value: &str) {
    field.fill(0);
    let limit = field.len().saturating_sub(1);
    for (slot, byte) in field.iter_mut().zip(value.bytes().take(limit)) {
        *slot = byte as c_char;
    }
}
