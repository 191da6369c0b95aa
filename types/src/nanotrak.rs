//! NanoTrak parameter blocks and enumerations (`NT_*` in the vendor headers).

#[cfg(feature = "clap")]
use clap::ValueEnum;
use enumset::{EnumSet, EnumSetType};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, FromRepr};

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum ControlMode {
    OpenLoop = 1,
    ClosedLoop = 2,
    OpenLoopSmoothed = 3,
    ClosedLoopSmoothed = 4,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum FeedbackSource {
    Undefined = 0,
    Tia = 1,
    Bnc1V = 2,
    Bnc2V = 3,
    Bnc5V = 4,
    Bnc10V = 5,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum NanoTrakMode {
    Undefined = 0,
    Piezo = 1,
    Latch = 2,
    Tracking = 3,
    HorizontalTracking = 4,
    VerticalTracking = 5,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum SignalState {
    BadSignal = 0,
    GoodSignal = 1,
}

/// Trans-impedance amplifier ranges, named by full scale current.
#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum TiaRange {
    #[strum(to_string = "3nA")]
    Range3nA = 3,
    #[strum(to_string = "10nA")]
    Range10nA = 4,
    #[strum(to_string = "30nA")]
    Range30nA = 5,
    #[strum(to_string = "100nA")]
    Range100nA = 6,
    #[strum(to_string = "300nA")]
    Range300nA = 7,
    #[strum(to_string = "1uA")]
    Range1uA = 8,
    #[strum(to_string = "3uA")]
    Range3uA = 9,
    #[strum(to_string = "10uA")]
    Range10uA = 10,
    #[strum(to_string = "30uA")]
    Range30uA = 11,
    #[strum(to_string = "100uA")]
    Range100uA = 12,
    #[strum(to_string = "300uA")]
    Range300uA = 13,
    #[strum(to_string = "1mA")]
    Range1mA = 14,
    #[strum(to_string = "3mA")]
    Range3mA = 15,
    #[strum(to_string = "10mA")]
    Range10mA = 16,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum TiaRangeMode {
    AutoRange = 1,
    ManualRange = 2,
    ManualRangeAtParameter = 3,
    AutoRangeAtParameter = 4,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum OddOrEven {
    OddAndEven = 1,
    Odd = 2,
    Even = 3,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum UnderOrOverRead {
    UnderRead = 1,
    OverRead = 2,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum CircleDiameterMode {
    Parameter = 1,
    AbsolutePower = 2,
    LookupTable = 3,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum CircleAdjustment {
    Linear = 1,
    Logarithmic = 2,
    Square = 3,
    Cube = 4,
}

#[derive(Copy, Clone, Debug, Display, EnumIter, EnumCount, FromRepr, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum LowPassFrequency {
    #[strum(to_string = "1Hz")]
    Hz1 = 1,
    #[strum(to_string = "3Hz")]
    Hz3 = 2,
    #[strum(to_string = "10Hz")]
    Hz10 = 3,
    #[strum(to_string = "30Hz")]
    Hz30 = 4,
    #[strum(to_string = "100Hz")]
    Hz100 = 5,
}

/// The NanoTrak status word, one variant per bit.
#[derive(Debug, Display, EnumIter, EnumSetType)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[enumset(repr = "u32")]
pub enum NanoTrakStatus {
    Tracking = 0,
    TrackingWithSignal = 1,
    TrackingChannelA = 2,
    TrackingChannelB = 3,
    AutoRanging = 4,
    UnderRead = 5,
    OverRead = 6,
    ChannelAConnected = 16,
    ChannelBConnected = 17,
    ChannelAEnabled = 18,
    ChannelBEnabled = 19,
    ChannelAClosedLoop = 20,
    ChannelBClosedLoop = 21,
}

impl NanoTrakStatus {
    pub fn decode(bits: u32) -> EnumSet<NanoTrakStatus> {
        EnumSet::from_u32_truncated(bits)
    }
}

/// NT_HVComponent, a horizontal / vertical pair in NanoTrak units.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, packed)]
pub struct HvComponent {
    pub horizontal_component: u16,
    pub vertical_component: u16,
}

/// NT_CircleParameters
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, packed)]
pub struct CircleParameters {
    pub mode: i16,
    pub diameter: u16,
    pub samples_per_revolution: u16,
    pub min_diameter: u16,
    pub max_diameter: u16,
    pub algorithm_adjustment: i16,
}

impl CircleParameters {
    enum_accessors! {
        mode, set_mode => mode: CircleDiameterMode;
        algorithm_adjustment, set_algorithm_adjustment => algorithm_adjustment: CircleAdjustment;
    }
}

/// NT_CircleDiameterLUT
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, packed)]
pub struct CircleDiameterLut {
    pub lut_diameter: [u16; 16],
}

/// NT_TIARangeParameters
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, packed)]
pub struct TiaRangeParameters {
    pub mode: i16,
    pub up_limit: u16,
    pub down_limit: u16,
    pub settle_samples: i16,
    pub change_to_odd_or_even: i16,
    pub new_range: i16,
}

impl TiaRangeParameters {
    enum_accessors! {
        mode, set_mode => mode: TiaRangeMode;
        change_to_odd_or_even, set_change_to_odd_or_even => change_to_odd_or_even: OddOrEven;
        new_range, set_new_range => new_range: TiaRange;
    }
}

/// NT_LowPassFilterParameters
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(C, packed)]
pub struct LowPassFilterParameters {
    pub param1: i16,
    pub param2: i16,
    pub param3: i16,
    pub param4: i16,
    pub param5: i16,
}

impl LowPassFilterParameters {
    enum_accessors! {
        param1, set_param1 => param1: LowPassFrequency;
        param2, set_param2 => param2: LowPassFrequency;
        param3, set_param3 => param3: LowPassFrequency;
        param4, set_param4 => param4: LowPassFrequency;
        param5, set_param5 => param5: LowPassFrequency;
    }
}

/// NT_TIAReading
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C, packed)]
pub struct TiaReading {
    pub absolute_reading: f32,
    pub relative_reading: u16,
    pub selected_range: i16,
    pub under_or_over_read: i16,
}

impl TiaReading {
    enum_accessors! {
        selected_range, set_selected_range => selected_range: TiaRange;
        under_or_over_read, set_under_or_over_read => under_or_over_read: UnderOrOverRead;
    }
}
