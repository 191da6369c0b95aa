use crate::binding::SerialNo;
use crate::error::Result;
use crate::library::{DynamicLoader, LibraryLoader, LibrarySettings, NativeLibrary};
use kinesis_types::{DeviceInfo, DeviceType};
use log::debug;
use std::ffi::{c_char, c_int, c_short, CStr};

// Room for a few hundred comma separated serial numbers.
const DEVICE_LIST_BUFFER: usize = 4096;

native_api! {
    /// `TLI_*` exports of the device manager library.
    pub struct DeviceManagerApi {
        status fn TLI_BuildDeviceList() -> c_short;
        value fn TLI_GetDeviceListSize() -> c_short;
        value fn TLI_GetDeviceInfo(serial_no: *const c_char, info: *mut DeviceInfo) -> c_short;
        status fn TLI_GetDeviceListExt(receive_buffer: *mut c_char, size_of_buffer: u32) -> c_short;
        status fn TLI_GetDeviceListByTypeExt(
            receive_buffer: *mut c_char,
            size_of_buffer: u32,
            type_id: c_int,
        ) -> c_short;
        status fn TLI_GetDeviceListByTypesExt(
            receive_buffer: *mut c_char,
            size_of_buffer: u32,
            type_ids: *mut c_int,
            length: c_int,
        ) -> c_short;
        void fn TLI_InitializeSimulations() -> ();
        void fn TLI_UninitializeSimulations() -> ();
    }
}

/// The shared device manager. Builds and reports the list of attached devices.
pub struct DeviceManager {
    api: DeviceManagerApi,
    library: Box<dyn NativeLibrary>,
}

impl DeviceManager {
    pub fn load(settings: &LibrarySettings) -> Result<Self> {
        Self::load_with(&mut DynamicLoader, settings)
    }

    pub fn load_with(loader: &mut dyn LibraryLoader, settings: &LibrarySettings) -> Result<Self> {
        let library = loader.load(&settings.device_manager_path())?;
        Ok(Self::new(library))
    }

    pub fn new(library: Box<dyn NativeLibrary>) -> Self {
        debug!("Resolving device manager symbols from {}", library.name());
        let api = DeviceManagerApi::resolve(library.as_ref());
        Self { api, library }
    }

    pub fn api(&self) -> &DeviceManagerApi {
        &self.api
    }

    pub fn library_name(&self) -> &str {
        self.library.name()
    }

    /// Scans the USB bus and rebuilds the native device list.
    pub fn build_device_list(&self) -> Result<()> {
        unsafe { self.api.TLI_BuildDeviceList() }
    }

    pub fn get_device_list_size(&self) -> Result<i16> {
        unsafe { self.api.TLI_GetDeviceListSize() }
    }

    /// Details of a device in the list, `None` if the manager doesn't know the serial number.
    pub fn get_device_info(&self, serial_no: &str) -> Result<Option<DeviceInfo>> {
        let serial_no = SerialNo::new(serial_no)?;
        let mut info = DeviceInfo::default();

        let found = unsafe { self.api.TLI_GetDeviceInfo(serial_no.as_ptr(), &mut info) }?;
        Ok((found != 0).then_some(info))
    }

    pub fn get_device_list(&self) -> Result<Vec<String>> {
        self.read_list(|buffer, size| unsafe { self.api.TLI_GetDeviceListExt(buffer, size) })
    }

    pub fn get_device_list_by_type(&self, device_type: DeviceType) -> Result<Vec<String>> {
        self.read_list(|buffer, size| unsafe {
            self.api
                .TLI_GetDeviceListByTypeExt(buffer, size, device_type.type_id())
        })
    }

    pub fn get_device_list_by_types(&self, device_types: &[DeviceType]) -> Result<Vec<String>> {
        let mut type_ids: Vec<c_int> = device_types.iter().map(|t| t.type_id()).collect();
        let length = type_ids.len() as c_int;

        self.read_list(|buffer, size| unsafe {
            self.api
                .TLI_GetDeviceListByTypesExt(buffer, size, type_ids.as_mut_ptr(), length)
        })
    }

    /// Connects to the Kinesis simulation manager, which must already be running. Simulated
    /// devices show up in the device list after the next [`Self::build_device_list`].
    pub fn initialize_simulations(&self) -> Result<()> {
        unsafe { self.api.TLI_InitializeSimulations() }
    }

    pub fn uninitialize_simulations(&self) -> Result<()> {
        unsafe { self.api.TLI_UninitializeSimulations() }
    }

    fn read_list<F>(&self, fill: F) -> Result<Vec<String>>
    where
        F: FnOnce(*mut c_char, u32) -> Result<()>,
    {
        let mut buffer = vec![0 as c_char; DEVICE_LIST_BUFFER];
        let size = (buffer.len() - 1) as u32;
        fill(buffer.as_mut_ptr(), size)?;

        let list = unsafe { CStr::from_ptr(buffer.as_ptr()) };
        Ok(parse_serial_list(&list.to_string_lossy()))
    }
}

/// Splits the comma separated list the `*Ext` calls write into their buffer.
pub fn parse_serial_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|serial| !serial.is_empty())
        .map(String::from)
        .collect()
}
