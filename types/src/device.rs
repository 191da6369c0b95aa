use crate::{fixed_string, DeviceType};
use std::ffi::c_char;
use strum::{Display, EnumIter, FromRepr};

/// MOT_MotorTypes
#[derive(Copy, Clone, Debug, Display, EnumIter, FromRepr, PartialEq, Eq)]
#[repr(i32)]
pub enum MotorType {
    NotMotor = 0,
    DcMotor = 1,
    StepperMotor = 2,
    BrushlessMotor = 3,
    CustomMotor = 100,
}

/// TLI_DeviceInfo, as filled in by the device manager.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C, packed)]
pub struct DeviceInfo {
    pub type_id: u32,
    pub description: [c_char; 65],
    pub serial_no: [c_char; 16],
    pub pid: u32,
    pub is_known_type: bool,
    pub motor_type: i32,
    pub is_piezo_device: bool,
    pub is_laser: bool,
    pub is_custom_type: bool,
    pub is_rack: bool,
    pub max_channels: i16,
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self {
            type_id: 0,
            description: [0; 65],
            serial_no: [0; 16],
            pid: 0,
            is_known_type: false,
            motor_type: 0,
            is_piezo_device: false,
            is_laser: false,
            is_custom_type: false,
            is_rack: false,
            max_channels: 0,
        }
    }
}

impl DeviceInfo {
    pub fn description(&self) -> String {
        fixed_string(&self.description)
    }

    pub fn serial_no(&self) -> String {
        fixed_string(&self.serial_no)
    }

    pub fn device_type(&self) -> Option<DeviceType> {
        i32::try_from(self.type_id)
            .ok()
            .and_then(DeviceType::from_repr)
    }

    pub fn motor_type(&self) -> Option<MotorType> {
        MotorType::from_repr(self.motor_type)
    }
}

/// TLI_HardwareInformation
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C, packed)]
pub struct HardwareInformation {
    pub serial_number: u32,
    pub model_number: [c_char; 8],
    pub device_type: u16,
    pub firmware_version: u32,
    pub notes: [c_char; 48],
    pub device_dependant_data: [u8; 12],
    pub hardware_version: u16,
    pub modification_state: u16,
    pub num_channels: i16,
}

impl Default for HardwareInformation {
    fn default() -> Self {
        Self {
            serial_number: 0,
            model_number: [0; 8],
            device_type: 0,
            firmware_version: 0,
            notes: [0; 48],
            device_dependant_data: [0; 12],
            hardware_version: 0,
            modification_state: 0,
            num_channels: 0,
        }
    }
}

impl HardwareInformation {
    pub fn model_number(&self) -> String {
        fixed_string(&self.model_number)
    }

    pub fn notes(&self) -> String {
        fixed_string(&self.notes)
    }

    /// Firmware versions are packed as `major.minor.revision` in the low three bytes.
    pub fn firmware_version(&self) -> String {
        format_version(self.firmware_version)
    }
}

/// Formats a packed `major.minor.revision` version word, as returned by the
/// `GetFirmwareVersion` / `GetSoftwareVersion` calls.
pub fn format_version(version: u32) -> String {
    format!(
        "{}.{}.{}",
        (version >> 16) & 0xFF,
        (version >> 8) & 0xFF,
        version & 0xFF
    )
}
