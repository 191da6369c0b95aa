//! The KCube brushless motor controller, `BMC_*` exports.
//!
//! Every method takes the serial number of the device and, for axis level calls, the channel
//! (1 based). Methods which read a parameter block return the block as the library filled it,
//! methods which write one copy it before the call so the caller's value is left untouched.

use crate::binding::{typed, MessageCallback, SerialNo};
use crate::device_manager::DeviceManager;
use crate::error::Result;
use crate::library::{
    load_libraries, DynamicLoader, LibraryLoader, LibrarySettings, LoadedLibraries, NativeLibrary,
};
use enumset::EnumSet;
use kinesis_types::motor::{
    BrushlessCurrentLoopParameters, BrushlessElectricOutputParameters,
    BrushlessPositionLoopParameters, BrushlessTrackSettleParameters, HomingParameters, JogMode,
    JogParameters, LimitsSoftwareApproachPolicy, MmiParams, MotorStatus, MovementDirection,
    MovementMode, StageAxisParameters, StopMode, TravelDirection, TravelMode, TriggerConfig,
    TriggerParams, VelocityParameters, VelocityProfileParameters,
};
use kinesis_types::{DeviceMessage, HardwareInformation, UnitType};
use log::debug;
use std::ffi::{c_char, c_double, c_int, c_long, c_short, c_uint};

native_api! {
    pub struct BrushlessMotorApi {
        value fn BMC_CanDeviceLockFrontPanel(serial_no: *const c_char) -> bool;
        value fn BMC_CanHome(serial_no: *const c_char, channel: c_short) -> bool;
        value fn BMC_CanMoveWithoutHomingFirst(serial_no: *const c_char, channel: c_short) -> bool;
        value fn BMC_CheckConnection(serial_no: *const c_char) -> bool;
        status fn BMC_ClearMessageQueue(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_Close(serial_no: *const c_char) -> c_short;
        status fn BMC_DisableChannel(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_EnableChannel(serial_no: *const c_char, channel: c_short) -> c_short;
        void fn BMC_EnableLastMsgTimer(
            serial_no: *const c_char,
            channel: c_short,
            enable: bool,
            last_msg_timeout: i32,
        ) -> ();
        value fn BMC_GetBacklash(serial_no: *const c_char, channel: c_short) -> c_long;
        status fn BMC_GetCurrentLoopParams(
            serial_no: *const c_char,
            channel: c_short,
            current_loop_params: *mut BrushlessCurrentLoopParameters,
        ) -> c_short;
        status fn BMC_GetDeviceUnitFromRealValue(
            serial_no: *const c_char,
            channel: c_short,
            real_value: c_double,
            device_value: *mut c_int,
            unit_type: c_int,
        ) -> c_short;
        value fn BMC_GetDigitalOutputs(serial_no: *const c_char, channel: c_short) -> u8;
        status fn BMC_GetElectricOutputParams(
            serial_no: *const c_char,
            channel: c_short,
            electric_output_params: *mut BrushlessElectricOutputParameters,
        ) -> c_short;
        value fn BMC_GetEncoderCounter(serial_no: *const c_char, channel: c_short) -> c_long;
        value fn BMC_GetFirmwareVersion(serial_no: *const c_char, channel: c_short) -> u32;
        value fn BMC_GetFrontPanelLocked(serial_no: *const c_char) -> bool;
        status fn BMC_GetHardwareInfo(
            serial_no: *const c_char,
            channel: c_short,
            model_no: *mut c_char,
            size_of_model_no: u32,
            device_type: *mut u16,
            num_channels: *mut u16,
            notes: *mut c_char,
            size_of_notes: u32,
            firmware_version: *mut u32,
            hardware_version: *mut u16,
            modification_state: *mut u16,
        ) -> c_short;
        status fn BMC_GetHardwareInfoBlock(
            serial_no: *const c_char,
            channel: c_short,
            hardware_info: *mut HardwareInformation,
        ) -> c_short;
        status fn BMC_GetHomingParamsBlock(
            serial_no: *const c_char,
            channel: c_short,
            homing_params: *mut HomingParameters,
        ) -> c_short;
        value fn BMC_GetHomingVelocity(serial_no: *const c_char, channel: c_short) -> c_uint;
        status fn BMC_GetJogMode(
            serial_no: *const c_char,
            channel: c_short,
            mode: *mut c_short,
            stop_mode: *mut c_short,
        ) -> c_short;
        status fn BMC_GetJogParamsBlock(
            serial_no: *const c_char,
            channel: c_short,
            jog_params: *mut JogParameters,
        ) -> c_short;
        value fn BMC_GetJogStepSize(serial_no: *const c_char, channel: c_short) -> c_uint;
        status fn BMC_GetJogVelParams(
            serial_no: *const c_char,
            channel: c_short,
            acceleration: *mut c_int,
            max_velocity: *mut c_int,
        ) -> c_short;
        status fn BMC_GetMMIParams(
            serial_no: *const c_char,
            wheel_mode: *mut i16,
            wheel_max_velocity: *mut i32,
            wheel_acceleration: *mut i32,
            direction_sense: *mut i16,
            preset_position1: *mut i32,
            preset_position2: *mut i32,
            display_intensity: *mut i16,
        ) -> c_short;
        status fn BMC_GetMMIParamsBlock(serial_no: *const c_char, mmi_params: *mut MmiParams) -> c_short;
        status fn BMC_GetMMIParamsExt(
            serial_no: *const c_char,
            wheel_mode: *mut i16,
            wheel_max_velocity: *mut i32,
            wheel_acceleration: *mut i32,
            direction_sense: *mut i16,
            preset_position1: *mut i32,
            preset_position2: *mut i32,
            display_intensity: *mut i16,
            display_timeout: *mut i16,
            display_dim_intensity: *mut i16,
        ) -> c_short;
        status fn BMC_GetMotorParams(
            serial_no: *const c_char,
            channel: c_short,
            counts_per_unit: *mut c_long,
        ) -> c_short;
        status fn BMC_GetMotorParamsExt(
            serial_no: *const c_char,
            channel: c_short,
            counts_per_unit: *mut c_double,
        ) -> c_short;
        status fn BMC_GetMotorTravelLimits(
            serial_no: *const c_char,
            channel: c_short,
            min_position: *mut c_double,
            max_position: *mut c_double,
        ) -> c_short;
        value fn BMC_GetMotorTravelMode(serial_no: *const c_char, channel: c_short) -> c_int;
        status fn BMC_GetMotorVelocityLimits(
            serial_no: *const c_char,
            channel: c_short,
            max_velocity: *mut c_double,
            max_acceleration: *mut c_double,
        ) -> c_short;
        value fn BMC_GetMoveAbsolutePosition(serial_no: *const c_char, channel: c_short) -> c_int;
        value fn BMC_GetMoveRelativeDistance(serial_no: *const c_char, channel: c_short) -> c_int;
        value fn BMC_GetNextMessage(
            serial_no: *const c_char,
            channel: c_short,
            message_type: *mut u16,
            message_id: *mut u16,
            message_data: *mut u32,
        ) -> bool;
        value fn BMC_GetNumberPositions(serial_no: *const c_char, channel: c_short) -> c_int;
        status fn BMC_GetPosLoopParams(
            serial_no: *const c_char,
            channel: c_short,
            position_loop_params: *mut BrushlessPositionLoopParameters,
        ) -> c_short;
        value fn BMC_GetPosition(serial_no: *const c_char, channel: c_short) -> c_int;
        value fn BMC_GetPositionCounter(serial_no: *const c_char, channel: c_short) -> c_long;
        status fn BMC_GetRealValueFromDeviceUnit(
            serial_no: *const c_char,
            channel: c_short,
            device_value: c_int,
            real_value: *mut c_double,
            unit_type: c_int,
        ) -> c_short;
        value fn BMC_GetSoftLimitMode(serial_no: *const c_char, channel: c_short) -> c_short;
        value fn BMC_GetSoftwareVersion(serial_no: *const c_char) -> u32;
        value fn BMC_GetStageAxisMaxPos(serial_no: *const c_char, channel: c_short) -> c_int;
        value fn BMC_GetStageAxisMinPos(serial_no: *const c_char, channel: c_short) -> c_int;
        status fn BMC_GetStageAxisParams(
            serial_no: *const c_char,
            channel: c_short,
            stage_id: *mut c_long,
            axis_id: *mut c_long,
            part_number: *mut c_char,
            size: u32,
            serial_number: *mut u32,
            counts_per_unit: *mut u32,
            min_position: *mut c_int,
            max_position: *mut c_int,
            max_acceleration: *mut c_int,
            max_deceleration: *mut c_int,
            max_velocity: *mut c_int,
        ) -> c_short;
        status fn BMC_GetStageAxisParamsBlock(
            serial_no: *const c_char,
            channel: c_short,
            stage_axis_params: *mut StageAxisParameters,
        ) -> c_short;
        value fn BMC_GetStatusBits(serial_no: *const c_char, channel: c_short) -> u32;
        status fn BMC_GetTrackSettleParams(
            serial_no: *const c_char,
            channel: c_short,
            settle_params: *mut BrushlessTrackSettleParameters,
        ) -> c_short;
        status fn BMC_GetTriggerConfigParams(
            serial_no: *const c_char,
            trigger1_mode: *mut i16,
            trigger1_polarity: *mut i16,
            trigger2_mode: *mut i16,
            trigger2_polarity: *mut i16,
        ) -> c_short;
        status fn BMC_GetTriggerConfigParamsBlock(
            serial_no: *const c_char,
            trigger_config_params: *mut TriggerConfig,
        ) -> c_short;
        status fn BMC_GetTriggerParamsParams(
            serial_no: *const c_char,
            trigger_start_position_fwd: *mut i32,
            trigger_interval_fwd: *mut i32,
            trigger_pulse_count_fwd: *mut i32,
            trigger_start_position_rev: *mut i32,
            trigger_interval_rev: *mut i32,
            trigger_pulse_count_rev: *mut i32,
            trigger_pulse_width: *mut i32,
            cycle_count: *mut i32,
        ) -> c_short;
        status fn BMC_GetTriggerParamsParamsBlock(
            serial_no: *const c_char,
            trigger_params_params: *mut TriggerParams,
        ) -> c_short;
        value fn BMC_GetTriggerSwitches(serial_no: *const c_char, channel: c_short) -> u8;
        status fn BMC_GetVelParams(
            serial_no: *const c_char,
            channel: c_short,
            acceleration: *mut c_int,
            max_velocity: *mut c_int,
        ) -> c_short;
        status fn BMC_GetVelParamsBlock(
            serial_no: *const c_char,
            channel: c_short,
            velocity_params: *mut VelocityParameters,
        ) -> c_short;
        status fn BMC_GetVelocityProfileParams(
            serial_no: *const c_char,
            channel: c_short,
            velocity_profile_params: *mut VelocityProfileParameters,
        ) -> c_short;
        value fn BMC_HasLastMsgTimerOverrun(serial_no: *const c_char, channel: c_short) -> bool;
        status fn BMC_Home(serial_no: *const c_char, channel: c_short) -> c_short;
        void fn BMC_Identify(serial_no: *const c_char) -> ();
        value fn BMC_LoadNamedSettings(
            serial_no: *const c_char,
            channel: c_short,
            settings_name: *const c_char,
        ) -> bool;
        value fn BMC_LoadSettings(serial_no: *const c_char, channel: c_short) -> bool;
        value fn BMC_MessageQueueSize(serial_no: *const c_char, channel: c_short) -> c_int;
        status fn BMC_MoveAbsolute(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_MoveAtVelocity(
            serial_no: *const c_char,
            channel: c_short,
            direction: c_short,
        ) -> c_short;
        status fn BMC_MoveJog(serial_no: *const c_char, channel: c_short, jog_direction: c_short) -> c_short;
        status fn BMC_MoveRelative(serial_no: *const c_char, channel: c_short, displacement: c_int) -> c_short;
        status fn BMC_MoveRelativeDistance(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_MoveToPosition(serial_no: *const c_char, channel: c_short, index: c_int) -> c_short;
        value fn BMC_NeedsHoming(serial_no: *const c_char, channel: c_short) -> bool;
        status fn BMC_Open(serial_no: *const c_char) -> c_short;
        status fn BMC_OverrideHomeRequirement(serial_no: *const c_char, channel: c_short) -> c_short;
        value fn BMC_PersistSettings(serial_no: *const c_char, channel: c_short) -> bool;
        value fn BMC_PollingDuration(serial_no: *const c_char, channel: c_short) -> c_long;
        status fn BMC_RegisterMessageCallback(
            serial_no: *const c_char,
            channel: c_short,
            function_pointer: Option<MessageCallback>,
        ) -> c_short;
        status fn BMC_RequestBacklash(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_RequestCurrentLoopParams(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_RequestDigitalOutputs(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_RequestElectricOutputParams(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_RequestEncoderCounter(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_RequestFrontPanelLocked(serial_no: *const c_char) -> c_short;
        status fn BMC_RequestHomingParams(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_RequestJogParams(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_RequestMMIparams(serial_no: *const c_char) -> c_short;
        status fn BMC_RequestMoveAbsolutePosition(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_RequestMoveRelativeDistance(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_RequestPosLoopParams(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_RequestPosTriggerParams(serial_no: *const c_char) -> c_short;
        status fn BMC_RequestPosition(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_RequestSettings(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_RequestStageAxisParams(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_RequestStatusBits(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_RequestTrackSettleParams(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_RequestTriggerConfigParams(serial_no: *const c_char) -> c_short;
        status fn BMC_RequestTriggerSwitches(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_RequestVelParams(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_RequestVelocityProfileParams(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_ResetRotationModes(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_ResetStageToDefaults(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_ResumeMoveMessages(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_SetBacklash(serial_no: *const c_char, channel: c_short, distance: c_long) -> c_short;
        status fn BMC_SetCurrentLoopParams(
            serial_no: *const c_char,
            channel: c_short,
            current_loop_params: *mut BrushlessCurrentLoopParameters,
        ) -> c_short;
        status fn BMC_SetDigitalOutputs(serial_no: *const c_char, channel: c_short, outputs_bits: u8) -> c_short;
        status fn BMC_SetDirection(serial_no: *const c_char, channel: c_short, reverse: bool) -> c_short;
        status fn BMC_SetElectricOutputParams(
            serial_no: *const c_char,
            channel: c_short,
            electric_output_params: *mut BrushlessElectricOutputParameters,
        ) -> c_short;
        status fn BMC_SetEncoderCounter(serial_no: *const c_char, channel: c_short, count: c_long) -> c_short;
        status fn BMC_SetFrontPanelLock(serial_no: *const c_char, locked: bool) -> c_short;
        status fn BMC_SetHomingParamsBlock(
            serial_no: *const c_char,
            channel: c_short,
            homing_params: *mut HomingParameters,
        ) -> c_short;
        status fn BMC_SetHomingVelocity(serial_no: *const c_char, channel: c_short, velocity: c_uint) -> c_short;
        status fn BMC_SetJogMode(
            serial_no: *const c_char,
            channel: c_short,
            mode: c_short,
            stop_mode: c_short,
        ) -> c_short;
        status fn BMC_SetJogParamsBlock(
            serial_no: *const c_char,
            channel: c_short,
            jog_params: *mut JogParameters,
        ) -> c_short;
        status fn BMC_SetJogStepSize(serial_no: *const c_char, channel: c_short, step_size: c_uint) -> c_short;
        status fn BMC_SetJogVelParams(
            serial_no: *const c_char,
            channel: c_short,
            acceleration: c_int,
            max_velocity: c_int,
        ) -> c_short;
        void fn BMC_SetLimitsSoftwareApproachPolicy(
            serial_no: *const c_char,
            channel: c_short,
            limits_software_approach_policy: c_short,
        ) -> ();
        status fn BMC_SetMMIParams(
            serial_no: *const c_char,
            wheel_mode: i16,
            wheel_max_velocity: i32,
            wheel_acceleration: i32,
            direction_sense: i16,
            preset_position1: i32,
            preset_position2: i32,
            display_intensity: i16,
        ) -> c_short;
        status fn BMC_SetMMIParamsBlock(serial_no: *const c_char, mmi_params: *mut MmiParams) -> c_short;
        status fn BMC_SetMMIParamsExt(
            serial_no: *const c_char,
            wheel_mode: i16,
            wheel_max_velocity: i32,
            wheel_acceleration: i32,
            direction_sense: i16,
            preset_position1: i32,
            preset_position2: i32,
            display_intensity: i16,
            display_timeout: i16,
            display_dim_intensity: i16,
        ) -> c_short;
        status fn BMC_SetMotorParams(serial_no: *const c_char, channel: c_short, counts_per_unit: c_long) -> c_short;
        status fn BMC_SetMotorParamsExt(
            serial_no: *const c_char,
            channel: c_short,
            counts_per_unit: c_double,
        ) -> c_short;
        status fn BMC_SetMotorTravelLimits(
            serial_no: *const c_char,
            channel: c_short,
            min_position: c_double,
            max_position: c_double,
        ) -> c_short;
        status fn BMC_SetMotorTravelMode(serial_no: *const c_char, channel: c_short, travel_mode: c_int) -> c_short;
        status fn BMC_SetMotorVelocityLimits(
            serial_no: *const c_char,
            channel: c_short,
            max_velocity: c_double,
            max_acceleration: c_double,
        ) -> c_short;
        status fn BMC_SetMoveAbsolutePosition(
            serial_no: *const c_char,
            channel: c_short,
            position: c_int,
        ) -> c_short;
        status fn BMC_SetMoveRelativeDistance(
            serial_no: *const c_char,
            channel: c_short,
            distance: c_int,
        ) -> c_short;
        status fn BMC_SetPosLoopParams(
            serial_no: *const c_char,
            channel: c_short,
            position_loop_params: *mut BrushlessPositionLoopParameters,
        ) -> c_short;
        status fn BMC_SetPositionCounter(serial_no: *const c_char, channel: c_short, count: c_long) -> c_short;
        status fn BMC_SetRotationModes(
            serial_no: *const c_char,
            channel: c_short,
            mode: c_int,
            direction: c_int,
        ) -> c_short;
        status fn BMC_SetStageAxisLimits(
            serial_no: *const c_char,
            channel: c_short,
            min_position: c_int,
            max_position: c_int,
        ) -> c_short;
        status fn BMC_SetTrackSettleParams(
            serial_no: *const c_char,
            channel: c_short,
            settle_params: *mut BrushlessTrackSettleParameters,
        ) -> c_short;
        status fn BMC_SetTriggerConfigParams(
            serial_no: *const c_char,
            trigger1_mode: i16,
            trigger1_polarity: i16,
            trigger2_mode: i16,
            trigger2_polarity: i16,
        ) -> c_short;
        status fn BMC_SetTriggerConfigParamsBlock(
            serial_no: *const c_char,
            trigger_config_params: *mut TriggerConfig,
        ) -> c_short;
        status fn BMC_SetTriggerParamsParams(
            serial_no: *const c_char,
            trigger_start_position_fwd: i32,
            trigger_interval_fwd: i32,
            trigger_pulse_count_fwd: i32,
            trigger_start_position_rev: i32,
            trigger_interval_rev: i32,
            trigger_pulse_count_rev: i32,
            trigger_pulse_width: i32,
            cycle_count: i32,
        ) -> c_short;
        status fn BMC_SetTriggerParamsParamsBlock(
            serial_no: *const c_char,
            trigger_params_params: *mut TriggerParams,
        ) -> c_short;
        status fn BMC_SetTriggerSwitches(serial_no: *const c_char, channel: c_short, indicator_bits: u8) -> c_short;
        status fn BMC_SetVelParams(
            serial_no: *const c_char,
            channel: c_short,
            acceleration: c_int,
            max_velocity: c_int,
        ) -> c_short;
        status fn BMC_SetVelParamsBlock(
            serial_no: *const c_char,
            channel: c_short,
            velocity_params: *mut VelocityParameters,
        ) -> c_short;
        status fn BMC_SetVelocityProfileParams(
            serial_no: *const c_char,
            channel: c_short,
            velocity_profile_params: *mut VelocityProfileParameters,
        ) -> c_short;
        value fn BMC_StartPolling(serial_no: *const c_char, channel: c_short, milliseconds: c_int) -> bool;
        status fn BMC_StopImmediate(serial_no: *const c_char, channel: c_short) -> c_short;
        void fn BMC_StopPolling(serial_no: *const c_char, channel: c_short) -> ();
        status fn BMC_StopProfiled(serial_no: *const c_char, channel: c_short) -> c_short;
        status fn BMC_SuspendMoveMessages(serial_no: *const c_char, channel: c_short) -> c_short;
        value fn BMC_TimeSinceLastMsgReceived(
            serial_no: *const c_char,
            channel: c_short,
            last_update_time_ms: *mut i64,
        ) -> bool;
        value fn BMC_WaitForMessage(
            serial_no: *const c_char,
            channel: c_short,
            message_type: *mut u16,
            message_id: *mut u16,
            message_data: *mut u32,
        ) -> bool;
    }
}

/// A KCube brushless motor controller library, together with the device manager it needs.
pub struct BrushlessMotor {
    api: BrushlessMotorApi,
    library: Box<dyn NativeLibrary>,
    device_manager: DeviceManager,
}

impl BrushlessMotor {
    pub fn load(settings: &LibrarySettings) -> Result<Self> {
        Self::load_with(&mut DynamicLoader, settings)
    }

    pub fn load_with(loader: &mut dyn LibraryLoader, settings: &LibrarySettings) -> Result<Self> {
        let libraries = load_libraries(
            loader,
            &settings.brushless_motor_path(),
            &settings.device_manager_path(),
        )?;
        Ok(Self::new(libraries))
    }

    pub fn new(libraries: LoadedLibraries) -> Self {
        let LoadedLibraries {
            device,
            device_manager,
        } = libraries;

        let device_manager = DeviceManager::new(device_manager);
        debug!("Resolving brushless motor symbols from {}", device.name());
        let api = BrushlessMotorApi::resolve(device.as_ref());

        Self {
            api,
            library: device,
            device_manager,
        }
    }

    pub fn api(&self) -> &BrushlessMotorApi {
        &self.api
    }

    pub fn library_name(&self) -> &str {
        self.library.name()
    }

    pub fn device_manager(&self) -> &DeviceManager {
        &self.device_manager
    }

    // Connection

    pub fn open_device(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_Open(serial_no.as_ptr()) }
    }

    pub fn close_device(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_Close(serial_no.as_ptr()) }
    }

    pub fn check_connection(&self, serial_no: &str) -> Result<bool> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_CheckConnection(serial_no.as_ptr()) }
    }

    pub fn identify(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_Identify(serial_no.as_ptr()) }
    }

    /// The field by field form of [`Self::get_hardware_info_block`]. This call doesn't report the
    /// serial number or the device dependent data, both are left zeroed.
    pub fn get_hardware_info(&self, serial_no: &str, channel: i16) -> Result<HardwareInformation> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut info = HardwareInformation::default();
        let (mut device_type, mut num_channels) = (0, 0);
        let (mut hardware_version, mut modification_state) = (0, 0);
        let mut firmware_version = 0;
        let model_len = info.model_number.len() as u32;
        let notes_len = info.notes.len() as u32;

        unsafe {
            self.api.BMC_GetHardwareInfo(
                serial_no.as_ptr(),
                channel,
                info.model_number.as_mut_ptr(),
                model_len,
                &mut device_type,
                &mut num_channels,
                info.notes.as_mut_ptr(),
                notes_len,
                &mut firmware_version,
                &mut hardware_version,
                &mut modification_state,
            )
        }?;

        info.device_type = device_type;
        info.num_channels = num_channels as i16;
        info.firmware_version = firmware_version;
        info.hardware_version = hardware_version;
        info.modification_state = modification_state;
        Ok(info)
    }

    pub fn get_hardware_info_block(
        &self,
        serial_no: &str,
        channel: i16,
    ) -> Result<HardwareInformation> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut info = HardwareInformation::default();
        unsafe { self.api.BMC_GetHardwareInfoBlock(serial_no.as_ptr(), channel, &mut info) }?;
        Ok(info)
    }

    pub fn get_firmware_version(&self, serial_no: &str, channel: i16) -> Result<u32> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_GetFirmwareVersion(serial_no.as_ptr(), channel) }
    }

    pub fn get_software_version(&self, serial_no: &str) -> Result<u32> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_GetSoftwareVersion(serial_no.as_ptr()) }
    }

    // Front panel

    pub fn can_device_lock_front_panel(&self, serial_no: &str) -> Result<bool> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_CanDeviceLockFrontPanel(serial_no.as_ptr()) }
    }

    pub fn get_front_panel_locked(&self, serial_no: &str) -> Result<bool> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_GetFrontPanelLocked(serial_no.as_ptr()) }
    }

    pub fn request_front_panel_locked(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestFrontPanelLocked(serial_no.as_ptr()) }
    }

    pub fn set_front_panel_lock(&self, serial_no: &str, locked: bool) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_SetFrontPanelLock(serial_no.as_ptr(), locked) }
    }

    /// Wheel and display settings without the display timeout and dim level, which stay zero.
    pub fn get_mmi_params(&self, serial_no: &str) -> Result<MmiParams> {
        let serial_no = SerialNo::new(serial_no)?;
        let (mut wheel_mode, mut direction_sense, mut display_intensity) = (0, 0, 0);
        let (mut wheel_max_velocity, mut wheel_acceleration) = (0, 0);
        let (mut preset_pos1, mut preset_pos2) = (0, 0);
        unsafe {
            self.api.BMC_GetMMIParams(
                serial_no.as_ptr(),
                &mut wheel_mode,
                &mut wheel_max_velocity,
                &mut wheel_acceleration,
                &mut direction_sense,
                &mut preset_pos1,
                &mut preset_pos2,
                &mut display_intensity,
            )
        }?;

        Ok(MmiParams {
            wheel_mode,
            wheel_max_velocity,
            wheel_acceleration,
            wheel_direction_sense: direction_sense,
            preset_pos1,
            preset_pos2,
            display_intensity,
            ..Default::default()
        })
    }

    pub fn set_mmi_params(&self, serial_no: &str, params: &MmiParams) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api.BMC_SetMMIParams(
                serial_no.as_ptr(),
                params.wheel_mode,
                params.wheel_max_velocity,
                params.wheel_acceleration,
                params.wheel_direction_sense,
                params.preset_pos1,
                params.preset_pos2,
                params.display_intensity,
            )
        }
    }

    pub fn get_mmi_params_ext(&self, serial_no: &str) -> Result<MmiParams> {
        let serial_no = SerialNo::new(serial_no)?;
        let (mut wheel_mode, mut direction_sense) = (0, 0);
        let (mut display_intensity, mut display_timeout, mut display_dim_intensity) = (0, 0, 0);
        let (mut wheel_max_velocity, mut wheel_acceleration) = (0, 0);
        let (mut preset_pos1, mut preset_pos2) = (0, 0);
        unsafe {
            self.api.BMC_GetMMIParamsExt(
                serial_no.as_ptr(),
                &mut wheel_mode,
                &mut wheel_max_velocity,
                &mut wheel_acceleration,
                &mut direction_sense,
                &mut preset_pos1,
                &mut preset_pos2,
                &mut display_intensity,
                &mut display_timeout,
                &mut display_dim_intensity,
            )
        }?;

        Ok(MmiParams {
            wheel_mode,
            wheel_max_velocity,
            wheel_acceleration,
            wheel_direction_sense: direction_sense,
            preset_pos1,
            preset_pos2,
            display_intensity,
            display_timeout,
            display_dim_intensity,
            reserved: [0; 4],
        })
    }

    pub fn set_mmi_params_ext(&self, serial_no: &str, params: &MmiParams) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api.BMC_SetMMIParamsExt(
                serial_no.as_ptr(),
                params.wheel_mode,
                params.wheel_max_velocity,
                params.wheel_acceleration,
                params.wheel_direction_sense,
                params.preset_pos1,
                params.preset_pos2,
                params.display_intensity,
                params.display_timeout,
                params.display_dim_intensity,
            )
        }
    }

    pub fn get_mmi_params_block(&self, serial_no: &str) -> Result<MmiParams> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = MmiParams::default();
        unsafe { self.api.BMC_GetMMIParamsBlock(serial_no.as_ptr(), &mut params) }?;
        Ok(params)
    }

    pub fn set_mmi_params_block(&self, serial_no: &str, params: &MmiParams) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = *params;
        unsafe { self.api.BMC_SetMMIParamsBlock(serial_no.as_ptr(), &mut params) }
    }

    pub fn request_mmi_params(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestMMIparams(serial_no.as_ptr()) }
    }

    // Channel state

    pub fn enable_channel(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_EnableChannel(serial_no.as_ptr(), channel) }
    }

    pub fn disable_channel(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_DisableChannel(serial_no.as_ptr(), channel) }
    }

    pub fn get_status_bits(&self, serial_no: &str, channel: i16) -> Result<u32> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_GetStatusBits(serial_no.as_ptr(), channel) }
    }

    pub fn request_status_bits(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestStatusBits(serial_no.as_ptr(), channel) }
    }

    /// The last polled status word, decoded.
    pub fn status(&self, serial_no: &str, channel: i16) -> Result<EnumSet<MotorStatus>> {
        Ok(MotorStatus::decode(self.get_status_bits(serial_no, channel)?))
    }

    pub fn request_settings(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestSettings(serial_no.as_ptr(), channel) }
    }

    pub fn load_settings(&self, serial_no: &str, channel: i16) -> Result<bool> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_LoadSettings(serial_no.as_ptr(), channel) }
    }

    pub fn load_named_settings(
        &self,
        serial_no: &str,
        channel: i16,
        settings_name: &str,
    ) -> Result<bool> {
        let serial_no = SerialNo::new(serial_no)?;
        let settings_name = SerialNo::new(settings_name)?;
        unsafe {
            self.api
                .BMC_LoadNamedSettings(serial_no.as_ptr(), channel, settings_name.as_ptr())
        }
    }

    pub fn persist_settings(&self, serial_no: &str, channel: i16) -> Result<bool> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_PersistSettings(serial_no.as_ptr(), channel) }
    }

    pub fn reset_stage_to_defaults(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_ResetStageToDefaults(serial_no.as_ptr(), channel) }
    }

    // Polling and messages

    /// Starts the library's polling loop, returns whether it was started.
    pub fn start_polling(&self, serial_no: &str, channel: i16, milliseconds: i32) -> Result<bool> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_StartPolling(serial_no.as_ptr(), channel, milliseconds) }
    }

    pub fn stop_polling(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_StopPolling(serial_no.as_ptr(), channel) }
    }

    pub fn polling_duration(&self, serial_no: &str, channel: i16) -> Result<c_long> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_PollingDuration(serial_no.as_ptr(), channel) }
    }

    pub fn enable_last_msg_timer(
        &self,
        serial_no: &str,
        channel: i16,
        enable: bool,
        last_msg_timeout: i32,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api
                .BMC_EnableLastMsgTimer(serial_no.as_ptr(), channel, enable, last_msg_timeout)
        }
    }

    pub fn has_last_msg_timer_overrun(&self, serial_no: &str, channel: i16) -> Result<bool> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_HasLastMsgTimerOverrun(serial_no.as_ptr(), channel) }
    }

    /// Milliseconds since the last message from the device, `None` while the timer isn't running.
    pub fn time_since_last_msg_received(
        &self,
        serial_no: &str,
        channel: i16,
    ) -> Result<Option<i64>> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut last_update = 0;
        let running = unsafe {
            self.api
                .BMC_TimeSinceLastMsgReceived(serial_no.as_ptr(), channel, &mut last_update)
        }?;
        Ok(running.then_some(last_update))
    }

    pub fn register_message_callback(
        &self,
        serial_no: &str,
        channel: i16,
        callback: Option<MessageCallback>,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RegisterMessageCallback(serial_no.as_ptr(), channel, callback) }
    }

    pub fn message_queue_size(&self, serial_no: &str, channel: i16) -> Result<i32> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_MessageQueueSize(serial_no.as_ptr(), channel) }
    }

    pub fn clear_message_queue(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_ClearMessageQueue(serial_no.as_ptr(), channel) }
    }

    /// Pops the next queued message, `None` if the queue is empty.
    pub fn get_next_message(&self, serial_no: &str, channel: i16) -> Result<Option<DeviceMessage>> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut message = DeviceMessage::default();
        let received = unsafe {
            self.api.BMC_GetNextMessage(
                serial_no.as_ptr(),
                channel,
                &mut message.message_type,
                &mut message.message_id,
                &mut message.message_data,
            )
        }?;
        Ok(received.then_some(message))
    }

    /// Blocks until the device posts a message.
    pub fn wait_for_message(&self, serial_no: &str, channel: i16) -> Result<Option<DeviceMessage>> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut message = DeviceMessage::default();
        let received = unsafe {
            self.api.BMC_WaitForMessage(
                serial_no.as_ptr(),
                channel,
                &mut message.message_type,
                &mut message.message_id,
                &mut message.message_data,
            )
        }?;
        Ok(received.then_some(message))
    }

    pub fn suspend_move_messages(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_SuspendMoveMessages(serial_no.as_ptr(), channel) }
    }

    pub fn resume_move_messages(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_ResumeMoveMessages(serial_no.as_ptr(), channel) }
    }

    // Homing

    pub fn can_home(&self, serial_no: &str, channel: i16) -> Result<bool> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_CanHome(serial_no.as_ptr(), channel) }
    }

    pub fn needs_homing(&self, serial_no: &str, channel: i16) -> Result<bool> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_NeedsHoming(serial_no.as_ptr(), channel) }
    }

    pub fn can_move_without_homing_first(&self, serial_no: &str, channel: i16) -> Result<bool> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_CanMoveWithoutHomingFirst(serial_no.as_ptr(), channel) }
    }

    pub fn override_home_requirement(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_OverrideHomeRequirement(serial_no.as_ptr(), channel) }
    }

    pub fn home(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_Home(serial_no.as_ptr(), channel) }
    }

    pub fn get_homing_velocity(&self, serial_no: &str, channel: i16) -> Result<u32> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_GetHomingVelocity(serial_no.as_ptr(), channel) }
    }

    pub fn set_homing_velocity(&self, serial_no: &str, channel: i16, velocity: u32) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_SetHomingVelocity(serial_no.as_ptr(), channel, velocity) }
    }

    pub fn get_homing_params_block(
        &self,
        serial_no: &str,
        channel: i16,
    ) -> Result<HomingParameters> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = HomingParameters::default();
        unsafe { self.api.BMC_GetHomingParamsBlock(serial_no.as_ptr(), channel, &mut params) }?;
        Ok(params)
    }

    pub fn set_homing_params_block(
        &self,
        serial_no: &str,
        channel: i16,
        params: &HomingParameters,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = *params;
        unsafe { self.api.BMC_SetHomingParamsBlock(serial_no.as_ptr(), channel, &mut params) }
    }

    pub fn request_homing_params(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestHomingParams(serial_no.as_ptr(), channel) }
    }

    // Position

    pub fn get_position(&self, serial_no: &str, channel: i16) -> Result<i32> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_GetPosition(serial_no.as_ptr(), channel) }
    }

    pub fn request_position(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestPosition(serial_no.as_ptr(), channel) }
    }

    pub fn get_position_counter(&self, serial_no: &str, channel: i16) -> Result<c_long> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_GetPositionCounter(serial_no.as_ptr(), channel) }
    }

    pub fn set_position_counter(&self, serial_no: &str, channel: i16, count: c_long) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_SetPositionCounter(serial_no.as_ptr(), channel, count) }
    }

    pub fn get_encoder_counter(&self, serial_no: &str, channel: i16) -> Result<c_long> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_GetEncoderCounter(serial_no.as_ptr(), channel) }
    }

    pub fn set_encoder_counter(&self, serial_no: &str, channel: i16, count: c_long) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_SetEncoderCounter(serial_no.as_ptr(), channel, count) }
    }

    pub fn request_encoder_counter(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestEncoderCounter(serial_no.as_ptr(), channel) }
    }

    pub fn get_number_positions(&self, serial_no: &str, channel: i16) -> Result<i32> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_GetNumberPositions(serial_no.as_ptr(), channel) }
    }

    pub fn get_backlash(&self, serial_no: &str, channel: i16) -> Result<c_long> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_GetBacklash(serial_no.as_ptr(), channel) }
    }

    pub fn set_backlash(&self, serial_no: &str, channel: i16, distance: c_long) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_SetBacklash(serial_no.as_ptr(), channel, distance) }
    }

    pub fn request_backlash(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestBacklash(serial_no.as_ptr(), channel) }
    }

    // Moves

    pub fn move_to_position(&self, serial_no: &str, channel: i16, index: i32) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_MoveToPosition(serial_no.as_ptr(), channel, index) }
    }

    pub fn move_relative(&self, serial_no: &str, channel: i16, displacement: i32) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_MoveRelative(serial_no.as_ptr(), channel, displacement) }
    }

    /// Moves to the previously set absolute move position.
    pub fn move_absolute(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_MoveAbsolute(serial_no.as_ptr(), channel) }
    }

    /// Moves by the previously set relative move distance.
    pub fn move_relative_distance(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_MoveRelativeDistance(serial_no.as_ptr(), channel) }
    }

    pub fn move_at_velocity(
        &self,
        serial_no: &str,
        channel: i16,
        direction: TravelDirection,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api
                .BMC_MoveAtVelocity(serial_no.as_ptr(), channel, direction as c_short)
        }
    }

    pub fn move_jog(
        &self,
        serial_no: &str,
        channel: i16,
        jog_direction: TravelDirection,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api
                .BMC_MoveJog(serial_no.as_ptr(), channel, jog_direction as c_short)
        }
    }

    pub fn get_move_absolute_position(&self, serial_no: &str, channel: i16) -> Result<i32> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_GetMoveAbsolutePosition(serial_no.as_ptr(), channel) }
    }

    pub fn set_move_absolute_position(
        &self,
        serial_no: &str,
        channel: i16,
        position: i32,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api
                .BMC_SetMoveAbsolutePosition(serial_no.as_ptr(), channel, position)
        }
    }

    pub fn request_move_absolute_position(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestMoveAbsolutePosition(serial_no.as_ptr(), channel) }
    }

    pub fn get_move_relative_distance(&self, serial_no: &str, channel: i16) -> Result<i32> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_GetMoveRelativeDistance(serial_no.as_ptr(), channel) }
    }

    pub fn set_move_relative_distance(
        &self,
        serial_no: &str,
        channel: i16,
        distance: i32,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api
                .BMC_SetMoveRelativeDistance(serial_no.as_ptr(), channel, distance)
        }
    }

    pub fn request_move_relative_distance(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestMoveRelativeDistance(serial_no.as_ptr(), channel) }
    }

    pub fn stop_immediate(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_StopImmediate(serial_no.as_ptr(), channel) }
    }

    pub fn stop_profiled(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_StopProfiled(serial_no.as_ptr(), channel) }
    }

    pub fn set_direction(&self, serial_no: &str, channel: i16, reverse: bool) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_SetDirection(serial_no.as_ptr(), channel, reverse) }
    }

    // Jogging

    pub fn get_jog_mode(&self, serial_no: &str, channel: i16) -> Result<(JogMode, StopMode)> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut mode: c_short = 0;
        let mut stop_mode: c_short = 0;
        unsafe {
            self.api
                .BMC_GetJogMode(serial_no.as_ptr(), channel, &mut mode, &mut stop_mode)
        }?;

        Ok((
            typed("BMC_GetJogMode", mode, JogMode::from_repr(mode))?,
            typed("BMC_GetJogMode", stop_mode, StopMode::from_repr(stop_mode))?,
        ))
    }

    pub fn set_jog_mode(
        &self,
        serial_no: &str,
        channel: i16,
        mode: JogMode,
        stop_mode: StopMode,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api.BMC_SetJogMode(
                serial_no.as_ptr(),
                channel,
                mode as c_short,
                stop_mode as c_short,
            )
        }
    }

    pub fn get_jog_step_size(&self, serial_no: &str, channel: i16) -> Result<u32> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_GetJogStepSize(serial_no.as_ptr(), channel) }
    }

    pub fn set_jog_step_size(&self, serial_no: &str, channel: i16, step_size: u32) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_SetJogStepSize(serial_no.as_ptr(), channel, step_size) }
    }

    /// Returns the jog `(acceleration, max_velocity)` in device units.
    pub fn get_jog_vel_params(&self, serial_no: &str, channel: i16) -> Result<(i32, i32)> {
        let serial_no = SerialNo::new(serial_no)?;
        let (mut acceleration, mut max_velocity) = (0, 0);
        unsafe {
            self.api.BMC_GetJogVelParams(
                serial_no.as_ptr(),
                channel,
                &mut acceleration,
                &mut max_velocity,
            )
        }?;
        Ok((acceleration, max_velocity))
    }

    pub fn set_jog_vel_params(
        &self,
        serial_no: &str,
        channel: i16,
        acceleration: i32,
        max_velocity: i32,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api
                .BMC_SetJogVelParams(serial_no.as_ptr(), channel, acceleration, max_velocity)
        }
    }

    pub fn get_jog_params_block(&self, serial_no: &str, channel: i16) -> Result<JogParameters> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = JogParameters::default();
        unsafe { self.api.BMC_GetJogParamsBlock(serial_no.as_ptr(), channel, &mut params) }?;
        Ok(params)
    }

    pub fn set_jog_params_block(
        &self,
        serial_no: &str,
        channel: i16,
        params: &JogParameters,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = *params;
        unsafe { self.api.BMC_SetJogParamsBlock(serial_no.as_ptr(), channel, &mut params) }
    }

    pub fn request_jog_params(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestJogParams(serial_no.as_ptr(), channel) }
    }

    // Velocity

    /// Returns the move `(acceleration, max_velocity)` in device units.
    pub fn get_vel_params(&self, serial_no: &str, channel: i16) -> Result<(i32, i32)> {
        let serial_no = SerialNo::new(serial_no)?;
        let (mut acceleration, mut max_velocity) = (0, 0);
        unsafe {
            self.api.BMC_GetVelParams(
                serial_no.as_ptr(),
                channel,
                &mut acceleration,
                &mut max_velocity,
            )
        }?;
        Ok((acceleration, max_velocity))
    }

    pub fn set_vel_params(
        &self,
        serial_no: &str,
        channel: i16,
        acceleration: i32,
        max_velocity: i32,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api
                .BMC_SetVelParams(serial_no.as_ptr(), channel, acceleration, max_velocity)
        }
    }

    pub fn get_vel_params_block(
        &self,
        serial_no: &str,
        channel: i16,
    ) -> Result<VelocityParameters> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = VelocityParameters::default();
        unsafe { self.api.BMC_GetVelParamsBlock(serial_no.as_ptr(), channel, &mut params) }?;
        Ok(params)
    }

    pub fn set_vel_params_block(
        &self,
        serial_no: &str,
        channel: i16,
        params: &VelocityParameters,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = *params;
        unsafe { self.api.BMC_SetVelParamsBlock(serial_no.as_ptr(), channel, &mut params) }
    }

    pub fn request_vel_params(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestVelParams(serial_no.as_ptr(), channel) }
    }

    pub fn get_velocity_profile_params(
        &self,
        serial_no: &str,
        channel: i16,
    ) -> Result<VelocityProfileParameters> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = VelocityProfileParameters::default();
        unsafe {
            self.api
                .BMC_GetVelocityProfileParams(serial_no.as_ptr(), channel, &mut params)
        }?;
        Ok(params)
    }

    pub fn set_velocity_profile_params(
        &self,
        serial_no: &str,
        channel: i16,
        params: &VelocityProfileParameters,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = *params;
        unsafe {
            self.api
                .BMC_SetVelocityProfileParams(serial_no.as_ptr(), channel, &mut params)
        }
    }

    pub fn request_velocity_profile_params(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestVelocityProfileParams(serial_no.as_ptr(), channel) }
    }

    // Motor and stage

    pub fn get_motor_params(&self, serial_no: &str, channel: i16) -> Result<c_long> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut counts_per_unit: c_long = 0;
        unsafe {
            self.api
                .BMC_GetMotorParams(serial_no.as_ptr(), channel, &mut counts_per_unit)
        }?;
        Ok(counts_per_unit)
    }

    pub fn set_motor_params(
        &self,
        serial_no: &str,
        channel: i16,
        counts_per_unit: c_long,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api
                .BMC_SetMotorParams(serial_no.as_ptr(), channel, counts_per_unit)
        }
    }

    pub fn get_motor_params_ext(&self, serial_no: &str, channel: i16) -> Result<f64> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut counts_per_unit = 0.0;
        unsafe {
            self.api
                .BMC_GetMotorParamsExt(serial_no.as_ptr(), channel, &mut counts_per_unit)
        }?;
        Ok(counts_per_unit)
    }

    pub fn set_motor_params_ext(
        &self,
        serial_no: &str,
        channel: i16,
        counts_per_unit: f64,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api
                .BMC_SetMotorParamsExt(serial_no.as_ptr(), channel, counts_per_unit)
        }
    }

    /// Returns `(min_position, max_position)` in real units.
    pub fn get_motor_travel_limits(&self, serial_no: &str, channel: i16) -> Result<(f64, f64)> {
        let serial_no = SerialNo::new(serial_no)?;
        let (mut min_position, mut max_position) = (0.0, 0.0);
        unsafe {
            self.api.BMC_GetMotorTravelLimits(
                serial_no.as_ptr(),
                channel,
                &mut min_position,
                &mut max_position,
            )
        }?;
        Ok((min_position, max_position))
    }

    pub fn set_motor_travel_limits(
        &self,
        serial_no: &str,
        channel: i16,
        min_position: f64,
        max_position: f64,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api.BMC_SetMotorTravelLimits(
                serial_no.as_ptr(),
                channel,
                min_position,
                max_position,
            )
        }
    }

    /// Returns `(max_velocity, max_acceleration)` in real units.
    pub fn get_motor_velocity_limits(&self, serial_no: &str, channel: i16) -> Result<(f64, f64)> {
        let serial_no = SerialNo::new(serial_no)?;
        let (mut max_velocity, mut max_acceleration) = (0.0, 0.0);
        unsafe {
            self.api.BMC_GetMotorVelocityLimits(
                serial_no.as_ptr(),
                channel,
                &mut max_velocity,
                &mut max_acceleration,
            )
        }?;
        Ok((max_velocity, max_acceleration))
    }

    pub fn set_motor_velocity_limits(
        &self,
        serial_no: &str,
        channel: i16,
        max_velocity: f64,
        max_acceleration: f64,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api.BMC_SetMotorVelocityLimits(
                serial_no.as_ptr(),
                channel,
                max_velocity,
                max_acceleration,
            )
        }
    }

    pub fn get_motor_travel_mode(&self, serial_no: &str, channel: i16) -> Result<TravelMode> {
        let serial_no = SerialNo::new(serial_no)?;
        let mode = unsafe { self.api.BMC_GetMotorTravelMode(serial_no.as_ptr(), channel) }?;
        typed("BMC_GetMotorTravelMode", mode, TravelMode::from_repr(mode))
    }

    pub fn set_motor_travel_mode(
        &self,
        serial_no: &str,
        channel: i16,
        travel_mode: TravelMode,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api
                .BMC_SetMotorTravelMode(serial_no.as_ptr(), channel, travel_mode as c_int)
        }
    }

    pub fn set_rotation_modes(
        &self,
        serial_no: &str,
        channel: i16,
        mode: MovementMode,
        direction: MovementDirection,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api.BMC_SetRotationModes(
                serial_no.as_ptr(),
                channel,
                mode as c_int,
                direction as c_int,
            )
        }
    }

    pub fn reset_rotation_modes(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_ResetRotationModes(serial_no.as_ptr(), channel) }
    }

    pub fn get_stage_axis_min_pos(&self, serial_no: &str, channel: i16) -> Result<i32> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_GetStageAxisMinPos(serial_no.as_ptr(), channel) }
    }

    pub fn get_stage_axis_max_pos(&self, serial_no: &str, channel: i16) -> Result<i32> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_GetStageAxisMaxPos(serial_no.as_ptr(), channel) }
    }

    pub fn set_stage_axis_limits(
        &self,
        serial_no: &str,
        channel: i16,
        min_position: i32,
        max_position: i32,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api.BMC_SetStageAxisLimits(
                serial_no.as_ptr(),
                channel,
                min_position,
                max_position,
            )
        }
    }

    /// The field by field form of [`Self::get_stage_axis_params_block`].
    pub fn get_stage_axis_params(
        &self,
        serial_no: &str,
        channel: i16,
    ) -> Result<StageAxisParameters> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = StageAxisParameters::default();
        let (mut stage_id, mut axis_id): (c_long, c_long) = (0, 0);
        let (mut serial_number, mut counts_per_unit) = (0, 0);
        let (mut min_position, mut max_position) = (0, 0);
        let (mut max_acceleration, mut max_deceleration, mut max_velocity) = (0, 0, 0);
        let part_number_len = params.part_number.len() as u32;

        unsafe {
            self.api.BMC_GetStageAxisParams(
                serial_no.as_ptr(),
                channel,
                &mut stage_id,
                &mut axis_id,
                params.part_number.as_mut_ptr(),
                part_number_len,
                &mut serial_number,
                &mut counts_per_unit,
                &mut min_position,
                &mut max_position,
                &mut max_acceleration,
                &mut max_deceleration,
                &mut max_velocity,
            )
        }?;

        // Both ids are WORDs on the device.
        params.stage_id = stage_id as u16;
        params.axis_id = axis_id as u16;
        params.serial_number = serial_number;
        params.counts_per_unit = counts_per_unit;
        params.min_position = min_position;
        params.max_position = max_position;
        params.max_acceleration = max_acceleration;
        params.max_deceleration = max_deceleration;
        params.max_velocity = max_velocity;
        Ok(params)
    }

    pub fn get_stage_axis_params_block(
        &self,
        serial_no: &str,
        channel: i16,
    ) -> Result<StageAxisParameters> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = StageAxisParameters::default();
        unsafe {
            self.api
                .BMC_GetStageAxisParamsBlock(serial_no.as_ptr(), channel, &mut params)
        }?;
        Ok(params)
    }

    pub fn request_stage_axis_params(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestStageAxisParams(serial_no.as_ptr(), channel) }
    }

    pub fn get_soft_limit_mode(
        &self,
        serial_no: &str,
        channel: i16,
    ) -> Result<LimitsSoftwareApproachPolicy> {
        let serial_no = SerialNo::new(serial_no)?;
        let mode = unsafe { self.api.BMC_GetSoftLimitMode(serial_no.as_ptr(), channel) }?;
        typed(
            "BMC_GetSoftLimitMode",
            mode,
            LimitsSoftwareApproachPolicy::from_repr(mode),
        )
    }

    pub fn set_limits_software_approach_policy(
        &self,
        serial_no: &str,
        channel: i16,
        policy: LimitsSoftwareApproachPolicy,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api.BMC_SetLimitsSoftwareApproachPolicy(
                serial_no.as_ptr(),
                channel,
                policy as c_short,
            )
        }
    }

    /// Converts a real world value (mm, mm/s, mm/s²) into device units.
    pub fn get_device_unit_from_real_value(
        &self,
        serial_no: &str,
        channel: i16,
        real_value: f64,
        unit_type: UnitType,
    ) -> Result<i32> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut device_value = 0;
        unsafe {
            self.api.BMC_GetDeviceUnitFromRealValue(
                serial_no.as_ptr(),
                channel,
                real_value,
                &mut device_value,
                unit_type as c_int,
            )
        }?;
        Ok(device_value)
    }

    pub fn get_real_value_from_device_unit(
        &self,
        serial_no: &str,
        channel: i16,
        device_value: i32,
        unit_type: UnitType,
    ) -> Result<f64> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut real_value = 0.0;
        unsafe {
            self.api.BMC_GetRealValueFromDeviceUnit(
                serial_no.as_ptr(),
                channel,
                device_value,
                &mut real_value,
                unit_type as c_int,
            )
        }?;
        Ok(real_value)
    }

    // Servo loops

    pub fn get_pos_loop_params(
        &self,
        serial_no: &str,
        channel: i16,
    ) -> Result<BrushlessPositionLoopParameters> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = BrushlessPositionLoopParameters::default();
        unsafe { self.api.BMC_GetPosLoopParams(serial_no.as_ptr(), channel, &mut params) }?;
        Ok(params)
    }

    pub fn set_pos_loop_params(
        &self,
        serial_no: &str,
        channel: i16,
        params: &BrushlessPositionLoopParameters,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = *params;
        unsafe { self.api.BMC_SetPosLoopParams(serial_no.as_ptr(), channel, &mut params) }
    }

    pub fn request_pos_loop_params(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestPosLoopParams(serial_no.as_ptr(), channel) }
    }

    pub fn get_current_loop_params(
        &self,
        serial_no: &str,
        channel: i16,
    ) -> Result<BrushlessCurrentLoopParameters> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = BrushlessCurrentLoopParameters::default();
        unsafe {
            self.api
                .BMC_GetCurrentLoopParams(serial_no.as_ptr(), channel, &mut params)
        }?;
        Ok(params)
    }

    pub fn set_current_loop_params(
        &self,
        serial_no: &str,
        channel: i16,
        params: &BrushlessCurrentLoopParameters,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = *params;
        unsafe {
            self.api
                .BMC_SetCurrentLoopParams(serial_no.as_ptr(), channel, &mut params)
        }
    }

    pub fn request_current_loop_params(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestCurrentLoopParams(serial_no.as_ptr(), channel) }
    }

    pub fn get_electric_output_params(
        &self,
        serial_no: &str,
        channel: i16,
    ) -> Result<BrushlessElectricOutputParameters> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = BrushlessElectricOutputParameters::default();
        unsafe {
            self.api
                .BMC_GetElectricOutputParams(serial_no.as_ptr(), channel, &mut params)
        }?;
        Ok(params)
    }

    pub fn set_electric_output_params(
        &self,
        serial_no: &str,
        channel: i16,
        params: &BrushlessElectricOutputParameters,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = *params;
        unsafe {
            self.api
                .BMC_SetElectricOutputParams(serial_no.as_ptr(), channel, &mut params)
        }
    }

    pub fn request_electric_output_params(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestElectricOutputParams(serial_no.as_ptr(), channel) }
    }

    pub fn get_track_settle_params(
        &self,
        serial_no: &str,
        channel: i16,
    ) -> Result<BrushlessTrackSettleParameters> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = BrushlessTrackSettleParameters::default();
        unsafe {
            self.api
                .BMC_GetTrackSettleParams(serial_no.as_ptr(), channel, &mut params)
        }?;
        Ok(params)
    }

    pub fn set_track_settle_params(
        &self,
        serial_no: &str,
        channel: i16,
        params: &BrushlessTrackSettleParameters,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = *params;
        unsafe {
            self.api
                .BMC_SetTrackSettleParams(serial_no.as_ptr(), channel, &mut params)
        }
    }

    pub fn request_track_settle_params(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestTrackSettleParams(serial_no.as_ptr(), channel) }
    }

    // Digital I/O and triggers

    pub fn get_digital_outputs(&self, serial_no: &str, channel: i16) -> Result<u8> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_GetDigitalOutputs(serial_no.as_ptr(), channel) }
    }

    pub fn set_digital_outputs(
        &self,
        serial_no: &str,
        channel: i16,
        outputs_bits: u8,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_SetDigitalOutputs(serial_no.as_ptr(), channel, outputs_bits) }
    }

    pub fn request_digital_outputs(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestDigitalOutputs(serial_no.as_ptr(), channel) }
    }

    pub fn get_trigger_switches(&self, serial_no: &str, channel: i16) -> Result<u8> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_GetTriggerSwitches(serial_no.as_ptr(), channel) }
    }

    pub fn set_trigger_switches(
        &self,
        serial_no: &str,
        channel: i16,
        indicator_bits: u8,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api
                .BMC_SetTriggerSwitches(serial_no.as_ptr(), channel, indicator_bits)
        }
    }

    pub fn request_trigger_switches(&self, serial_no: &str, channel: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestTriggerSwitches(serial_no.as_ptr(), channel) }
    }

    pub fn get_trigger_config_params(&self, serial_no: &str) -> Result<TriggerConfig> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut config = TriggerConfig::default();
        let (mut trigger1_mode, mut trigger1_polarity) = (0, 0);
        let (mut trigger2_mode, mut trigger2_polarity) = (0, 0);
        unsafe {
            self.api.BMC_GetTriggerConfigParams(
                serial_no.as_ptr(),
                &mut trigger1_mode,
                &mut trigger1_polarity,
                &mut trigger2_mode,
                &mut trigger2_polarity,
            )
        }?;

        config.trigger1_mode = trigger1_mode;
        config.trigger1_polarity = trigger1_polarity;
        config.trigger2_mode = trigger2_mode;
        config.trigger2_polarity = trigger2_polarity;
        Ok(config)
    }

    pub fn set_trigger_config_params(&self, serial_no: &str, config: &TriggerConfig) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api.BMC_SetTriggerConfigParams(
                serial_no.as_ptr(),
                config.trigger1_mode,
                config.trigger1_polarity,
                config.trigger2_mode,
                config.trigger2_polarity,
            )
        }
    }

    pub fn get_trigger_config_params_block(&self, serial_no: &str) -> Result<TriggerConfig> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = TriggerConfig::default();
        unsafe {
            self.api
                .BMC_GetTriggerConfigParamsBlock(serial_no.as_ptr(), &mut params)
        }?;
        Ok(params)
    }

    pub fn set_trigger_config_params_block(
        &self,
        serial_no: &str,
        params: &TriggerConfig,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = *params;
        unsafe {
            self.api
                .BMC_SetTriggerConfigParamsBlock(serial_no.as_ptr(), &mut params)
        }
    }

    pub fn request_trigger_config_params(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestTriggerConfigParams(serial_no.as_ptr()) }
    }

    pub fn get_trigger_params_params(&self, serial_no: &str) -> Result<TriggerParams> {
        let serial_no = SerialNo::new(serial_no)?;
        let (mut start_fwd, mut interval_fwd, mut pulse_count_fwd) = (0, 0, 0);
        let (mut start_rev, mut interval_rev, mut pulse_count_rev) = (0, 0, 0);
        let (mut pulse_width, mut cycle_count) = (0, 0);
        unsafe {
            self.api.BMC_GetTriggerParamsParams(
                serial_no.as_ptr(),
                &mut start_fwd,
                &mut interval_fwd,
                &mut pulse_count_fwd,
                &mut start_rev,
                &mut interval_rev,
                &mut pulse_count_rev,
                &mut pulse_width,
                &mut cycle_count,
            )
        }?;

        Ok(TriggerParams {
            trigger_start_position_fwd: start_fwd,
            trigger_interval_fwd: interval_fwd,
            trigger_pulse_count_fwd: pulse_count_fwd,
            trigger_start_position_rev: start_rev,
            trigger_interval_rev: interval_rev,
            trigger_pulse_count_rev: pulse_count_rev,
            trigger_pulse_width: pulse_width,
            cycle_count,
            reserved: [0; 6],
        })
    }

    pub fn set_trigger_params_params(&self, serial_no: &str, params: &TriggerParams) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api.BMC_SetTriggerParamsParams(
                serial_no.as_ptr(),
                params.trigger_start_position_fwd,
                params.trigger_interval_fwd,
                params.trigger_pulse_count_fwd,
                params.trigger_start_position_rev,
                params.trigger_interval_rev,
                params.trigger_pulse_count_rev,
                params.trigger_pulse_width,
                params.cycle_count,
            )
        }
    }

    pub fn get_trigger_params_params_block(&self, serial_no: &str) -> Result<TriggerParams> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = TriggerParams::default();
        unsafe {
            self.api
                .BMC_GetTriggerParamsParamsBlock(serial_no.as_ptr(), &mut params)
        }?;
        Ok(params)
    }

    pub fn set_trigger_params_params_block(
        &self,
        serial_no: &str,
        params: &TriggerParams,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = *params;
        unsafe {
            self.api
                .BMC_SetTriggerParamsParamsBlock(serial_no.as_ptr(), &mut params)
        }
    }

    pub fn request_pos_trigger_params(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.BMC_RequestPosTriggerParams(serial_no.as_ptr()) }
    }
}
