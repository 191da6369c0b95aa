//! The modular rack NanoTrak controller, `NT_*` exports.

use crate::binding::{typed, MessageCallback, SerialNo};
use crate::device_manager::DeviceManager;
use crate::error::Result;
use crate::library::{
    load_libraries, DynamicLoader, LibraryLoader, LibrarySettings, LoadedLibraries, NativeLibrary,
};
use enumset::EnumSet;
use kinesis_types::nanotrak::{
    CircleDiameterLut, CircleParameters, ControlMode, FeedbackSource, HvComponent,
    LowPassFilterParameters, NanoTrakMode, NanoTrakStatus, OddOrEven, SignalState, TiaRange,
    TiaRangeMode, TiaRangeParameters, TiaReading,
};
use kinesis_types::{DeviceMessage, HardwareInformation};
use log::debug;
use std::ffi::{c_char, c_double, c_int, c_long, c_short};

native_api! {
    pub struct NanoTrakApi {
        status fn NT_ChannelEnable(serial_no: *const c_char, channel: c_long, enable: bool) -> c_short;
        value fn NT_CheckConnection(serial_no: *const c_char) -> bool;
        void fn NT_ClearMessageQueue(serial_no: *const c_char) -> ();
        void fn NT_Close(serial_no: *const c_char) -> ();
        status fn NT_Disconnect(serial_no: *const c_char) -> c_short;
        void fn NT_EnableLastMsgTimer(serial_no: *const c_char, enable: bool, last_msg_timeout: i32) -> ();
        value fn NT_GetCircleDiameter(serial_no: *const c_char) -> c_long;
        status fn NT_GetCircleDiameterLUT(serial_no: *const c_char, lut: *mut CircleDiameterLut) -> c_short;
        status fn NT_GetCircleHomePosition(serial_no: *const c_char, position: *mut HvComponent) -> c_short;
        status fn NT_GetCircleParams(serial_no: *const c_char, params: *mut CircleParameters) -> c_short;
        status fn NT_GetCirclePosition(serial_no: *const c_char, position: *mut HvComponent) -> c_short;
        value fn NT_GetControlMode(serial_no: *const c_char, channel: c_long) -> c_short;
        value fn NT_GetFeedbackSource(serial_no: *const c_char) -> c_short;
        value fn NT_GetFirmwareVersion(serial_no: *const c_char) -> u32;
        value fn NT_GetGain(serial_no: *const c_char) -> c_short;
        status fn NT_GetHardwareInfo(
            serial_no: *const c_char,
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
        status fn NT_GetHardwareInfoBlock(
            serial_no: *const c_char,
            hardware_info: *mut HardwareInformation,
        ) -> c_short;
        status fn NT_GetMaxTravel(
            serial_no: *const c_char,
            max_travel_horizontal: *mut c_double,
            max_travel_vertical: *mut c_double,
        ) -> c_short;
        value fn NT_GetMode(serial_no: *const c_char) -> c_short;
        status fn NT_GetNTChannels(
            serial_no: *const c_char,
            horizontal_channel: *mut c_short,
            vertical_channel: *mut c_short,
        ) -> c_short;
        value fn NT_GetNextMessage(
            serial_no: *const c_char,
            message_type: *mut u16,
            message_id: *mut u16,
            message_data: *mut u32,
        ) -> bool;
        status fn NT_GetPhaseCompensationParams(serial_no: *const c_char, params: *mut HvComponent) -> c_short;
        status fn NT_GetRangeMode(
            serial_no: *const c_char,
            mode: *mut c_short,
            odd_or_even: *mut c_short,
        ) -> c_short;
        status fn NT_GetReading(serial_no: *const c_char, reading: *mut TiaReading) -> c_short;
        value fn NT_GetSignalState(serial_no: *const c_char) -> c_short;
        value fn NT_GetSoftwareVersion(serial_no: *const c_char) -> u32;
        value fn NT_GetStatusBits(serial_no: *const c_char) -> u32;
        status fn NT_GetTIALPFilterParams(
            serial_no: *const c_char,
            params: *mut LowPassFilterParameters,
        ) -> c_short;
        value fn NT_GetTIARange(serial_no: *const c_char) -> c_short;
        status fn NT_GetTIArangeParams(serial_no: *const c_char, params: *mut TiaRangeParameters) -> c_short;
        value fn NT_GetTrackingThresholdSignal(serial_no: *const c_char) -> f32;
        value fn NT_HasLastMsgTimerOverrun(serial_no: *const c_char) -> bool;
        status fn NT_HomeCircle(serial_no: *const c_char) -> c_short;
        void fn NT_Identify(serial_no: *const c_char) -> ();
        value fn NT_IsChannelEnabled(serial_no: *const c_char, channel: c_long) -> bool;
        value fn NT_LoadNamedSettings(serial_no: *const c_char, settings_name: *const c_char) -> bool;
        value fn NT_LoadSettings(serial_no: *const c_char) -> bool;
        value fn NT_MessageQueueSize(serial_no: *const c_char) -> c_int;
        status fn NT_Open(serial_no: *const c_char) -> c_short;
        value fn NT_PollingDuration(serial_no: *const c_char) -> c_long;
        void fn NT_RegisterMessageCallback(
            serial_no: *const c_char,
            function_pointer: Option<MessageCallback>,
        ) -> ();
        status fn NT_RequestChannelStates(serial_no: *const c_char) -> c_short;
        status fn NT_RequestCircleDiameterLUT(serial_no: *const c_char) -> c_short;
        status fn NT_RequestCircleHomePosition(serial_no: *const c_char) -> c_short;
        status fn NT_RequestCircleParams(serial_no: *const c_char) -> c_short;
        status fn NT_RequestCirclePosition(serial_no: *const c_char) -> c_short;
        status fn NT_RequestControlMode(serial_no: *const c_char) -> c_short;
        status fn NT_RequestFeedbackSource(serial_no: *const c_char) -> c_short;
        status fn NT_RequestGain(serial_no: *const c_char) -> c_short;
        status fn NT_RequestMaxTravel(serial_no: *const c_char) -> c_short;
        status fn NT_RequestMode(serial_no: *const c_char) -> c_short;
        status fn NT_RequestNTChannels(serial_no: *const c_char) -> c_short;
        status fn NT_RequestPhaseCompensationParams(serial_no: *const c_char) -> c_short;
        status fn NT_RequestReading(serial_no: *const c_char) -> c_short;
        status fn NT_RequestSettings(serial_no: *const c_char) -> c_short;
        status fn NT_RequestSignalState(serial_no: *const c_char) -> c_short;
        status fn NT_RequestStatus(serial_no: *const c_char) -> c_short;
        status fn NT_RequestStatusBits(serial_no: *const c_char) -> c_short;
        status fn NT_RequestTIALPFilterParams(serial_no: *const c_char) -> c_short;
        status fn NT_RequestTIArangeParams(serial_no: *const c_char) -> c_short;
        status fn NT_RequestTrackingThresholdSignal(serial_no: *const c_char) -> c_short;
        status fn NT_SetCircleDiameter(serial_no: *const c_char, diameter: c_long) -> c_short;
        status fn NT_SetCircleDiameterLUT(serial_no: *const c_char, lut: *mut CircleDiameterLut) -> c_short;
        status fn NT_SetCircleHomePosition(serial_no: *const c_char, position: *mut HvComponent) -> c_short;
        status fn NT_SetCircleParams(serial_no: *const c_char, params: *mut CircleParameters) -> c_short;
        status fn NT_SetControlMode(serial_no: *const c_char, channel: c_long, mode: c_short) -> c_short;
        status fn NT_SetFeedbackSource(serial_no: *const c_char, input: c_short) -> c_short;
        status fn NT_SetGain(serial_no: *const c_char, gain: c_short) -> c_short;
        status fn NT_SetMode(serial_no: *const c_char, mode: c_short) -> c_short;
        status fn NT_SetNTChannels(
            serial_no: *const c_char,
            horizontal_channel: c_short,
            vertical_channel: c_short,
        ) -> c_short;
        status fn NT_SetPhaseCompensationParams(serial_no: *const c_char, params: *mut HvComponent) -> c_short;
        status fn NT_SetRangeMode(serial_no: *const c_char, mode: c_short, odd_or_even: c_short) -> c_short;
        status fn NT_SetTIALPFilterParams(
            serial_no: *const c_char,
            params: *mut LowPassFilterParameters,
        ) -> c_short;
        status fn NT_SetTIARange(serial_no: *const c_char, range: c_short) -> c_short;
        status fn NT_SetTIArangeParams(serial_no: *const c_char, params: *mut TiaRangeParameters) -> c_short;
        status fn NT_SetTrackingThresholdSignal(serial_no: *const c_char, threshold: f32) -> c_short;
        value fn NT_StartPolling(serial_no: *const c_char, milliseconds: c_int) -> bool;
        void fn NT_StopPolling(serial_no: *const c_char) -> ();
        value fn NT_TimeSinceLastMsgReceived(serial_no: *const c_char, last_update_time_ms: *mut i64) -> bool;
    }
}

/// A NanoTrak controller library, together with the device manager it needs.
pub struct NanoTrak {
    api: NanoTrakApi,
    library: Box<dyn NativeLibrary>,
    device_manager: DeviceManager,
}

impl NanoTrak {
    pub fn load(settings: &LibrarySettings) -> Result<Self> {
        Self::load_with(&mut DynamicLoader, settings)
    }

    pub fn load_with(loader: &mut dyn LibraryLoader, settings: &LibrarySettings) -> Result<Self> {
        let libraries = load_libraries(
            loader,
            &settings.nanotrak_path(),
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
        debug!("Resolving NanoTrak symbols from {}", device.name());
        let api = NanoTrakApi::resolve(device.as_ref());

        Self {
            api,
            library: device,
            device_manager,
        }
    }

    pub fn api(&self) -> &NanoTrakApi {
        &self.api
    }

    pub fn library_name(&self) -> &str {
        self.library.name()
    }

    pub fn device_manager(&self) -> &DeviceManager {
        &self.device_manager
    }

    pub fn open_device(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_Open(serial_no.as_ptr()) }
    }

    pub fn close_device(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_Close(serial_no.as_ptr()) }
    }

    /// Tells the controller to drop its USB connection.
    pub fn disconnect(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_Disconnect(serial_no.as_ptr()) }
    }

    pub fn check_connection(&self, serial_no: &str) -> Result<bool> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_CheckConnection(serial_no.as_ptr()) }
    }

    pub fn identify(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_Identify(serial_no.as_ptr()) }
    }

    /// Serial number and device dependent data aren't part of this call and stay zeroed.
    pub fn get_hardware_info(&self, serial_no: &str) -> Result<HardwareInformation> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut info = HardwareInformation::default();
        let (mut device_type, mut num_channels) = (0, 0);
        let (mut hardware_version, mut modification_state) = (0, 0);
        let mut firmware_version = 0;
        let model_len = info.model_number.len() as u32;
        let notes_len = info.notes.len() as u32;

        unsafe {
            self.api.NT_GetHardwareInfo(
                serial_no.as_ptr(),
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

    pub fn get_hardware_info_block(&self, serial_no: &str) -> Result<HardwareInformation> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut info = HardwareInformation::default();
        unsafe { self.api.NT_GetHardwareInfoBlock(serial_no.as_ptr(), &mut info) }?;
        Ok(info)
    }

    pub fn get_firmware_version(&self, serial_no: &str) -> Result<u32> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_GetFirmwareVersion(serial_no.as_ptr()) }
    }

    pub fn get_software_version(&self, serial_no: &str) -> Result<u32> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_GetSoftwareVersion(serial_no.as_ptr()) }
    }

    pub fn load_settings(&self, serial_no: &str) -> Result<bool> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_LoadSettings(serial_no.as_ptr()) }
    }

    pub fn load_named_settings(&self, serial_no: &str, settings_name: &str) -> Result<bool> {
        let serial_no = SerialNo::new(serial_no)?;
        let settings_name = SerialNo::new(settings_name)?;
        unsafe {
            self.api
                .NT_LoadNamedSettings(serial_no.as_ptr(), settings_name.as_ptr())
        }
    }

    pub fn request_settings(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RequestSettings(serial_no.as_ptr()) }
    }

    // Channels

    pub fn channel_enable(&self, serial_no: &str, channel: c_long, enable: bool) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_ChannelEnable(serial_no.as_ptr(), channel, enable) }
    }

    pub fn is_channel_enabled(&self, serial_no: &str, channel: c_long) -> Result<bool> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_IsChannelEnabled(serial_no.as_ptr(), channel) }
    }

    pub fn request_channel_states(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RequestChannelStates(serial_no.as_ptr()) }
    }

    /// Returns the `(horizontal, vertical)` output channel assignment.
    pub fn get_nt_channels(&self, serial_no: &str) -> Result<(i16, i16)> {
        let serial_no = SerialNo::new(serial_no)?;
        let (mut horizontal, mut vertical) = (0, 0);
        unsafe {
            self.api
                .NT_GetNTChannels(serial_no.as_ptr(), &mut horizontal, &mut vertical)
        }?;
        Ok((horizontal, vertical))
    }

    pub fn set_nt_channels(&self, serial_no: &str, horizontal: i16, vertical: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_SetNTChannels(serial_no.as_ptr(), horizontal, vertical) }
    }

    pub fn request_nt_channels(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RequestNTChannels(serial_no.as_ptr()) }
    }

    pub fn get_control_mode(&self, serial_no: &str, channel: c_long) -> Result<ControlMode> {
        let serial_no = SerialNo::new(serial_no)?;
        let mode = unsafe { self.api.NT_GetControlMode(serial_no.as_ptr(), channel) }?;
        typed("NT_GetControlMode", mode, ControlMode::from_repr(mode))
    }

    pub fn set_control_mode(
        &self,
        serial_no: &str,
        channel: c_long,
        mode: ControlMode,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api
                .NT_SetControlMode(serial_no.as_ptr(), channel, mode as c_short)
        }
    }

    pub fn request_control_mode(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RequestControlMode(serial_no.as_ptr()) }
    }

    /// Returns the `(horizontal, vertical)` maximum travel.
    pub fn get_max_travel(&self, serial_no: &str) -> Result<(f64, f64)> {
        let serial_no = SerialNo::new(serial_no)?;
        let (mut horizontal, mut vertical) = (0.0, 0.0);
        unsafe {
            self.api
                .NT_GetMaxTravel(serial_no.as_ptr(), &mut horizontal, &mut vertical)
        }?;
        Ok((horizontal, vertical))
    }

    pub fn request_max_travel(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RequestMaxTravel(serial_no.as_ptr()) }
    }

    // Operating mode

    pub fn get_mode(&self, serial_no: &str) -> Result<NanoTrakMode> {
        let serial_no = SerialNo::new(serial_no)?;
        let mode = unsafe { self.api.NT_GetMode(serial_no.as_ptr()) }?;
        typed("NT_GetMode", mode, NanoTrakMode::from_repr(mode))
    }

    pub fn set_mode(&self, serial_no: &str, mode: NanoTrakMode) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_SetMode(serial_no.as_ptr(), mode as c_short) }
    }

    pub fn request_mode(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RequestMode(serial_no.as_ptr()) }
    }

    pub fn get_feedback_source(&self, serial_no: &str) -> Result<FeedbackSource> {
        let serial_no = SerialNo::new(serial_no)?;
        let source = unsafe { self.api.NT_GetFeedbackSource(serial_no.as_ptr()) }?;
        typed("NT_GetFeedbackSource", source, FeedbackSource::from_repr(source))
    }

    pub fn set_feedback_source(&self, serial_no: &str, input: FeedbackSource) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_SetFeedbackSource(serial_no.as_ptr(), input as c_short) }
    }

    pub fn request_feedback_source(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RequestFeedbackSource(serial_no.as_ptr()) }
    }

    pub fn get_gain(&self, serial_no: &str) -> Result<i16> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_GetGain(serial_no.as_ptr()) }
    }

    pub fn set_gain(&self, serial_no: &str, gain: i16) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_SetGain(serial_no.as_ptr(), gain) }
    }

    pub fn request_gain(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RequestGain(serial_no.as_ptr()) }
    }

    pub fn get_tracking_threshold_signal(&self, serial_no: &str) -> Result<f32> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_GetTrackingThresholdSignal(serial_no.as_ptr()) }
    }

    pub fn set_tracking_threshold_signal(&self, serial_no: &str, threshold: f32) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api
                .NT_SetTrackingThresholdSignal(serial_no.as_ptr(), threshold)
        }
    }

    pub fn request_tracking_threshold_signal(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RequestTrackingThresholdSignal(serial_no.as_ptr()) }
    }

    pub fn get_phase_compensation_params(&self, serial_no: &str) -> Result<HvComponent> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = HvComponent::default();
        unsafe {
            self.api
                .NT_GetPhaseCompensationParams(serial_no.as_ptr(), &mut params)
        }?;
        Ok(params)
    }

    pub fn set_phase_compensation_params(
        &self,
        serial_no: &str,
        params: &HvComponent,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = *params;
        unsafe {
            self.api
                .NT_SetPhaseCompensationParams(serial_no.as_ptr(), &mut params)
        }
    }

    pub fn request_phase_compensation_params(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RequestPhaseCompensationParams(serial_no.as_ptr()) }
    }

    // Circle scan

    pub fn get_circle_params(&self, serial_no: &str) -> Result<CircleParameters> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = CircleParameters::default();
        unsafe { self.api.NT_GetCircleParams(serial_no.as_ptr(), &mut params) }?;
        Ok(params)
    }

    pub fn set_circle_params(&self, serial_no: &str, params: &CircleParameters) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = *params;
        unsafe { self.api.NT_SetCircleParams(serial_no.as_ptr(), &mut params) }
    }

    pub fn request_circle_params(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RequestCircleParams(serial_no.as_ptr()) }
    }

    pub fn get_circle_diameter(&self, serial_no: &str) -> Result<c_long> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_GetCircleDiameter(serial_no.as_ptr()) }
    }

    pub fn set_circle_diameter(&self, serial_no: &str, diameter: c_long) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_SetCircleDiameter(serial_no.as_ptr(), diameter) }
    }

    pub fn get_circle_diameter_lut(&self, serial_no: &str) -> Result<CircleDiameterLut> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut lut = CircleDiameterLut::default();
        unsafe { self.api.NT_GetCircleDiameterLUT(serial_no.as_ptr(), &mut lut) }?;
        Ok(lut)
    }

    pub fn set_circle_diameter_lut(&self, serial_no: &str, lut: &CircleDiameterLut) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut lut = *lut;
        unsafe { self.api.NT_SetCircleDiameterLUT(serial_no.as_ptr(), &mut lut) }
    }

    pub fn request_circle_diameter_lut(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RequestCircleDiameterLUT(serial_no.as_ptr()) }
    }

    pub fn get_circle_position(&self, serial_no: &str) -> Result<HvComponent> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut position = HvComponent::default();
        unsafe { self.api.NT_GetCirclePosition(serial_no.as_ptr(), &mut position) }?;
        Ok(position)
    }

    pub fn request_circle_position(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RequestCirclePosition(serial_no.as_ptr()) }
    }

    pub fn get_circle_home_position(&self, serial_no: &str) -> Result<HvComponent> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut position = HvComponent::default();
        unsafe {
            self.api
                .NT_GetCircleHomePosition(serial_no.as_ptr(), &mut position)
        }?;
        Ok(position)
    }

    pub fn set_circle_home_position(&self, serial_no: &str, position: &HvComponent) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut position = *position;
        unsafe {
            self.api
                .NT_SetCircleHomePosition(serial_no.as_ptr(), &mut position)
        }
    }

    pub fn request_circle_home_position(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RequestCircleHomePosition(serial_no.as_ptr()) }
    }

    /// Moves the scan circle back to its home position.
    pub fn home_circle(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_HomeCircle(serial_no.as_ptr()) }
    }

    // Signal and TIA

    pub fn get_reading(&self, serial_no: &str) -> Result<TiaReading> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut reading = TiaReading::default();
        unsafe { self.api.NT_GetReading(serial_no.as_ptr(), &mut reading) }?;
        Ok(reading)
    }

    pub fn request_reading(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RequestReading(serial_no.as_ptr()) }
    }

    pub fn get_signal_state(&self, serial_no: &str) -> Result<SignalState> {
        let serial_no = SerialNo::new(serial_no)?;
        let state = unsafe { self.api.NT_GetSignalState(serial_no.as_ptr()) }?;
        typed("NT_GetSignalState", state, SignalState::from_repr(state))
    }

    pub fn request_signal_state(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RequestSignalState(serial_no.as_ptr()) }
    }

    pub fn get_tia_range(&self, serial_no: &str) -> Result<TiaRange> {
        let serial_no = SerialNo::new(serial_no)?;
        let range = unsafe { self.api.NT_GetTIARange(serial_no.as_ptr()) }?;
        typed("NT_GetTIARange", range, TiaRange::from_repr(range))
    }

    pub fn set_tia_range(&self, serial_no: &str, range: TiaRange) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_SetTIARange(serial_no.as_ptr(), range as c_short) }
    }

    pub fn get_range_mode(&self, serial_no: &str) -> Result<(TiaRangeMode, OddOrEven)> {
        let serial_no = SerialNo::new(serial_no)?;
        let (mut mode, mut odd_or_even): (c_short, c_short) = (0, 0);
        unsafe {
            self.api
                .NT_GetRangeMode(serial_no.as_ptr(), &mut mode, &mut odd_or_even)
        }?;

        Ok((
            typed("NT_GetRangeMode", mode, TiaRangeMode::from_repr(mode))?,
            typed("NT_GetRangeMode", odd_or_even, OddOrEven::from_repr(odd_or_even))?,
        ))
    }

    pub fn set_range_mode(
        &self,
        serial_no: &str,
        mode: TiaRangeMode,
        odd_or_even: OddOrEven,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api.NT_SetRangeMode(
                serial_no.as_ptr(),
                mode as c_short,
                odd_or_even as c_short,
            )
        }
    }

    pub fn get_tia_range_params(&self, serial_no: &str) -> Result<TiaRangeParameters> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = TiaRangeParameters::default();
        unsafe { self.api.NT_GetTIArangeParams(serial_no.as_ptr(), &mut params) }?;
        Ok(params)
    }

    pub fn set_tia_range_params(&self, serial_no: &str, params: &TiaRangeParameters) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = *params;
        unsafe { self.api.NT_SetTIArangeParams(serial_no.as_ptr(), &mut params) }
    }

    pub fn request_tia_range_params(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RequestTIArangeParams(serial_no.as_ptr()) }
    }

    pub fn get_tia_lp_filter_params(&self, serial_no: &str) -> Result<LowPassFilterParameters> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = LowPassFilterParameters::default();
        unsafe { self.api.NT_GetTIALPFilterParams(serial_no.as_ptr(), &mut params) }?;
        Ok(params)
    }

    pub fn set_tia_lp_filter_params(
        &self,
        serial_no: &str,
        params: &LowPassFilterParameters,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut params = *params;
        unsafe { self.api.NT_SetTIALPFilterParams(serial_no.as_ptr(), &mut params) }
    }

    pub fn request_tia_lp_filter_params(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RequestTIALPFilterParams(serial_no.as_ptr()) }
    }

    // Status, polling and messages

    pub fn get_status_bits(&self, serial_no: &str) -> Result<u32> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_GetStatusBits(serial_no.as_ptr()) }
    }

    pub fn request_status_bits(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RequestStatusBits(serial_no.as_ptr()) }
    }

    pub fn status(&self, serial_no: &str) -> Result<EnumSet<NanoTrakStatus>> {
        Ok(NanoTrakStatus::decode(self.get_status_bits(serial_no)?))
    }

    pub fn request_status(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RequestStatus(serial_no.as_ptr()) }
    }

    pub fn start_polling(&self, serial_no: &str, milliseconds: i32) -> Result<bool> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_StartPolling(serial_no.as_ptr(), milliseconds) }
    }

    pub fn stop_polling(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_StopPolling(serial_no.as_ptr()) }
    }

    pub fn polling_duration(&self, serial_no: &str) -> Result<c_long> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_PollingDuration(serial_no.as_ptr()) }
    }

    pub fn enable_last_msg_timer(
        &self,
        serial_no: &str,
        enable: bool,
        last_msg_timeout: i32,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe {
            self.api
                .NT_EnableLastMsgTimer(serial_no.as_ptr(), enable, last_msg_timeout)
        }
    }

    pub fn has_last_msg_timer_overrun(&self, serial_no: &str) -> Result<bool> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_HasLastMsgTimerOverrun(serial_no.as_ptr()) }
    }

    pub fn time_since_last_msg_received(&self, serial_no: &str) -> Result<Option<i64>> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut last_update = 0;
        let running = unsafe {
            self.api
                .NT_TimeSinceLastMsgReceived(serial_no.as_ptr(), &mut last_update)
        }?;
        Ok(running.then_some(last_update))
    }

    pub fn register_message_callback(
        &self,
        serial_no: &str,
        callback: Option<MessageCallback>,
    ) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_RegisterMessageCallback(serial_no.as_ptr(), callback) }
    }

    pub fn message_queue_size(&self, serial_no: &str) -> Result<i32> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_MessageQueueSize(serial_no.as_ptr()) }
    }

    pub fn clear_message_queue(&self, serial_no: &str) -> Result<()> {
        let serial_no = SerialNo::new(serial_no)?;
        unsafe { self.api.NT_ClearMessageQueue(serial_no.as_ptr()) }
    }

    pub fn get_next_message(&self, serial_no: &str) -> Result<Option<DeviceMessage>> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut message = DeviceMessage::default();
        let received = unsafe {
            self.api.NT_GetNextMessage(
                serial_no.as_ptr(),
                &mut message.message_type,
                &mut message.message_id,
                &mut message.message_data,
            )
        }?;
        Ok(received.then_some(message))
    }
}
