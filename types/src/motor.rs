//! Motor parameter blocks and enumerations (`MOT_*` and `KMOT_*` in the vendor headers).

#[cfg(feature = "clap")]
use clap::ValueEnum;
use enumset::{EnumSet, EnumSetType};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ffi::c_char;
use strum::{Display, EnumCount, EnumIter, FromRepr};

use crate::{fixed_string, write_fixed_string};

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i32)]
pub enum TravelMode {
    Undefined = 0,
    Linear = 1,
    Rotational = 2,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum TravelDirection {
    Undefined = 0,
    Forwards = 1,
    Reverse = 2,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum HomeLimitSwitchDirection {
    Undefined = 0,
    ReverseLimitSwitch = 1,
    ForwardLimitSwitch = 4,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum DirectionSense {
    Normal = 0,
    Reverse = 1,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum JogMode {
    Undefined = 0,
    Continuous = 1,
    SingleStep = 2,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum StopMode {
    Undefined = 0,
    Immediate = 1,
    Profiled = 2,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum LimitsSoftwareApproachPolicy {
    DisallowIllegalMoves = 0,
    AllowPartialMoves = 1,
    AllowAllMoves = 2,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i32)]
pub enum MovementMode {
    LinearRange = 0,
    RotationalUnlimited = 1,
    RotationalWrapping = 2,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i32)]
pub enum MovementDirection {
    Quickest = 0,
    Forwards = 1,
    Reverse = 2,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u16)]
pub enum VelocityProfileMode {
    Trapezoidal = 0,
    SCurve = 2,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum WheelMode {
    Velocity = 1,
    Jog = 2,
    MoveAbsolute = 3,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum WheelDirectionSense {
    Positive = 1,
    Negative = 2,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum TriggerPortMode {
    Disabled = 0x00,
    GeneralPurposeInput = 0x01,
    RelativeMoveInput = 0x02,
    AbsoluteMoveInput = 0x03,
    HomeInput = 0x04,
    StopInput = 0x05,
    GeneralPurposeOutput = 0x0A,
    InMotionOutput = 0x0B,
    AtMaxVelocityOutput = 0x0C,
    PositionStepsForwardOutput = 0x0D,
    PositionStepsReverseOutput = 0x0E,
    PositionStepsBothOutput = 0x0F,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum TriggerPortPolarity {
    High = 1,
    Low = 2,
}

/// The motor status word, one variant per bit.
#[derive(Debug, Display, EnumIter, EnumSetType)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[enumset(repr = "u32")]
pub enum MotorStatus {
    ForwardHardwareLimit = 0,
    ReverseHardwareLimit = 1,
    ForwardSoftwareLimit = 2,
    ReverseSoftwareLimit = 3,
    MovingForward = 4,
    MovingReverse = 5,
    JoggingForward = 6,
    JoggingReverse = 7,
    MotorConnected = 8,
    Homing = 9,
    Homed = 10,
    Tracking = 12,
    Settled = 13,
    MotionError = 14,
    InstrumentError = 15,
    Interlock = 16,
    OverTemperature = 17,
    BusVoltageFault = 18,
    CommutationError = 19,
    Active = 29,
    Enabled = 31,
}

impl MotorStatus {
    /// Bits without a variant are dropped.
    pub fn decode(bits: u32) -> EnumSet<MotorStatus> {
        EnumSet::from_u32_truncated(bits)
    }

    pub fn is_moving(status: EnumSet<MotorStatus>) -> bool {
        !status.is_disjoint(
            MotorStatus::MovingForward
                | MotorStatus::MovingReverse
                | MotorStatus::JoggingForward
                | MotorStatus::JoggingReverse
                | MotorStatus::Homing,
        )
    }
}

/// MOT_VelocityParameters
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, packed)]
pub struct VelocityParameters {
    pub min_velocity: i32,
    pub acceleration: i32,
    pub max_velocity: i32,
}

/// MOT_JogParameters
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, packed)]
pub struct JogParameters {
    pub mode: i16,
    pub step_size: u32,
    pub vel_params: VelocityParameters,
    pub stop_mode: i16,
}

impl JogParameters {
    enum_accessors! {
        mode, set_mode => mode: JogMode;
        stop_mode, set_stop_mode => stop_mode: StopMode;
    }
}

/// MOT_HomingParameters
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, packed)]
pub struct HomingParameters {
    pub direction: i16,
    pub limit_switch: i16,
    pub velocity: u32,
    pub offset_distance: u32,
}

impl HomingParameters {
    enum_accessors! {
        direction, set_direction => direction: TravelDirection;
        limit_switch, set_limit_switch => limit_switch: HomeLimitSwitchDirection;
    }
}

/// MOT_StageAxisParameters
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, packed)]
pub struct StageAxisParameters {
    pub stage_id: u16,
    pub axis_id: u16,
    pub part_number: [c_char; 16],
    pub serial_number: u32,
    pub counts_per_unit: u32,
    pub min_position: i32,
    pub max_position: i32,
    pub max_acceleration: i32,
    pub max_deceleration: i32,
    pub max_velocity: i32,
    pub reserved_words: [u16; 4],
    pub reserved_dwords: [u32; 4],
}

impl StageAxisParameters {
    pub fn part_number(&self) -> String {
        fixed_string(&self.part_number)
    }

    pub fn set_part_number(&mut self, part_number: &str) {
        write_fixed_string(&mut self.part_number, part_number);
    }
}

/// MOT_VelocityProfileParameters
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, packed)]
pub struct VelocityProfileParameters {
    pub mode: u16,
    pub jerk: u32,
    pub not_used: u16,
    pub last_not_used: u16,
}

impl VelocityProfileParameters {
    enum_accessors! {
        mode, set_mode => mode: VelocityProfileMode;
    }
}

/// MOT_BrushlessPositionLoopParameters
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, packed)]
pub struct BrushlessPositionLoopParameters {
    pub proportional_gain: u16,
    pub integral_gain: u16,
    pub integral_limit: u32,
    pub differential_gain: u16,
    pub derivative_recalculation_time: u16,
    pub factor_for_output: u16,
    pub velocity_feed_forward: u16,
    pub acceleration_feed_forward: u16,
    pub position_error_limit: u32,
    pub not_used: u16,
    pub last_not_used: u16,
}

/// MOT_BrushlessCurrentLoopParameters
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, packed)]
pub struct BrushlessCurrentLoopParameters {
    pub phase: u16,
    pub proportional_gain: u16,
    pub integral_gain: u16,
    pub integral_limit: u16,
    pub dead_error_band: u16,
    pub feed_forward: u16,
    pub not_used: u16,
    pub last_not_used: u16,
}

/// MOT_BrushlessElectricOutputParameters
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, packed)]
pub struct BrushlessElectricOutputParameters {
    pub continuous_current_limit: u16,
    pub excess_energy_limit: u16,
    pub motor_signal_limit: i16,
    pub motor_signal_bias: i16,
    pub not_used: u16,
    pub last_not_used: u16,
}

/// MOT_BrushlessTrackSettleParameters
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, packed)]
pub struct BrushlessTrackSettleParameters {
    pub time: u16,
    pub settled_window: u16,
    pub tracking_window: u16,
    pub not_used: u16,
    pub last_not_used: u16,
}

/// KMOT_MMIParams, the front panel wheel and display settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, packed)]
pub struct MmiParams {
    pub wheel_mode: i16,
    pub wheel_max_velocity: i32,
    pub wheel_acceleration: i32,
    pub wheel_direction_sense: i16,
    pub preset_pos1: i32,
    pub preset_pos2: i32,
    pub display_intensity: i16,
    pub display_timeout: i16,
    pub display_dim_intensity: i16,
    pub reserved: [i16; 4],
}

impl MmiParams {
    enum_accessors! {
        wheel_mode, set_wheel_mode => wheel_mode: WheelMode;
        wheel_direction_sense, set_wheel_direction_sense =>
            wheel_direction_sense: WheelDirectionSense;
    }
}

/// KMOT_TriggerConfig
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, packed)]
pub struct TriggerConfig {
    pub trigger1_mode: i16,
    pub trigger1_polarity: i16,
    pub trigger2_mode: i16,
    pub trigger2_polarity: i16,
}

impl TriggerConfig {
    enum_accessors! {
        trigger1_mode, set_trigger1_mode => trigger1_mode: TriggerPortMode;
        trigger1_polarity, set_trigger1_polarity => trigger1_polarity: TriggerPortPolarity;
        trigger2_mode, set_trigger2_mode => trigger2_mode: TriggerPortMode;
        trigger2_polarity, set_trigger2_polarity => trigger2_polarity: TriggerPortPolarity;
    }
}

/// KMOT_TriggerParams
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, packed)]
pub struct TriggerParams {
    pub trigger_start_position_fwd: i32,
    pub trigger_interval_fwd: i32,
    pub trigger_pulse_count_fwd: i32,
    pub trigger_start_position_rev: i32,
    pub trigger_interval_rev: i32,
    pub trigger_pulse_count_rev: i32,
    pub trigger_pulse_width: i32,
    pub cycle_count: i32,
    pub reserved: [i32; 6],
}
