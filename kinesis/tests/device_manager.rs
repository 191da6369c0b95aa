mod common;

use common::*;
use kinesis::types::{DeviceInfo, DeviceType};
use kinesis::{DeviceManager, KinesisError};
use std::ffi::{c_char, c_int, c_short, c_void};

const DEVICES: &[u8] = b"28250123,52000001,57000002,\0";

extern "C" fn build_device_list() -> c_short {
    record("build".to_string());
    status()
}

extern "C" fn device_list_size() -> c_short {
    value() as c_short
}

fn fill(buffer: *mut c_char, size: u32) {
    let length = DEVICES.len().min(size as usize);
    unsafe { std::ptr::copy_nonoverlapping(DEVICES.as_ptr() as *const c_char, buffer, length) };
}

extern "C" fn device_list(buffer: *mut c_char, size: u32) -> c_short {
    record(format!("list {size}"));
    fill(buffer, size);
    status()
}

extern "C" fn device_list_by_type(buffer: *mut c_char, size: u32, type_id: c_int) -> c_short {
    record(format!("type {type_id}"));
    fill(buffer, size);
    status()
}

extern "C" fn device_list_by_types(
    buffer: *mut c_char,
    size: u32,
    type_ids: *mut c_int,
    length: c_int,
) -> c_short {
    let type_ids = unsafe { std::slice::from_raw_parts(type_ids, length as usize) };
    record(format!("types {type_ids:?}"));
    fill(buffer, size);
    status()
}

extern "C" fn device_info(serial_no: *const c_char, info: *mut DeviceInfo) -> c_short {
    if serial(serial_no) != "28250123" {
        return 0;
    }

    let mut filled = DeviceInfo {
        type_id: 28,
        motor_type: 3,
        max_channels: 1,
        ..Default::default()
    };
    for (target, source) in filled.serial_no.iter_mut().zip(b"28250123") {
        *target = *source as c_char;
    }
    for (target, source) in filled.description.iter_mut().zip(b"Brushless Motor Controller") {
        *target = *source as c_char;
    }

    unsafe { *info = filled };
    1
}

extern "C" fn initialize_simulations() {
    record("initialize".to_string());
}

extern "C" fn uninitialize_simulations() {
    record("uninitialize".to_string());
}

fn device_manager(library: FakeLibrary) -> DeviceManager {
    DeviceManager::new(Box::new(library))
}

#[test]
fn build_and_count() {
    let manager = device_manager(
        FakeLibrary::new("device manager")
            .with("TLI_BuildDeviceList", build_device_list as *const c_void)
            .with("TLI_GetDeviceListSize", device_list_size as *const c_void),
    );

    set_status(0);
    manager.build_device_list().unwrap();

    set_status(2);
    assert_eq!(manager.build_device_list().unwrap_err().code(), Some(2));
    assert_eq!(take_calls(), vec!["build", "build"]);

    // The size is a count, not a status code.
    set_value(3);
    assert_eq!(manager.get_device_list_size().unwrap(), 3);
}

#[test]
fn device_lists_are_split() {
    let manager = device_manager(
        FakeLibrary::new("device manager")
            .with("TLI_GetDeviceListExt", device_list as *const c_void)
            .with("TLI_GetDeviceListByTypeExt", device_list_by_type as *const c_void)
            .with("TLI_GetDeviceListByTypesExt", device_list_by_types as *const c_void),
    );
    set_status(0);

    let expected = vec!["28250123", "52000001", "57000002"];
    assert_eq!(manager.get_device_list().unwrap(), expected);
    assert_eq!(
        manager
            .get_device_list_by_type(DeviceType::KCubeBrushlessMotor)
            .unwrap(),
        expected
    );
    assert_eq!(
        manager
            .get_device_list_by_types(&[DeviceType::ModularNanoTrak, DeviceType::KCubeNanoTrak])
            .unwrap(),
        expected
    );

    assert_eq!(
        take_calls(),
        vec!["list 4095", "type 28", "types [52, 57]"]
    );
}

#[test]
fn failed_list_is_an_error() {
    let manager = device_manager(
        FakeLibrary::new("device manager")
            .with("TLI_GetDeviceListExt", device_list as *const c_void),
    );

    set_status(-1);
    match manager.get_device_list() {
        Err(KinesisError::Native { symbol, code }) => {
            assert_eq!(symbol, "TLI_GetDeviceListExt");
            assert_eq!(code, -1);
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn device_info_for_known_and_unknown_devices() {
    let manager = device_manager(
        FakeLibrary::new("device manager").with("TLI_GetDeviceInfo", device_info as *const c_void),
    );

    let info = manager.get_device_info("28250123").unwrap().unwrap();
    assert_eq!(info.serial_no(), "28250123");
    assert_eq!(info.description(), "Brushless Motor Controller");
    assert_eq!(info.device_type(), Some(DeviceType::KCubeBrushlessMotor));
    assert_eq!({ info.max_channels }, 1);

    assert!(manager.get_device_info("99999999").unwrap().is_none());
}

#[test]
fn missing_device_manager_exports() {
    let manager = device_manager(FakeLibrary::new("device manager"));

    assert_eq!(manager.library_name(), "device manager");
    assert_eq!(manager.api().missing().len(), 8);
    assert!(matches!(
        manager.build_device_list(),
        Err(KinesisError::MissingSymbol("TLI_BuildDeviceList"))
    ));
}

#[test]
fn simulations_are_switched_on_and_off() {
    let manager = device_manager(
        FakeLibrary::new("device manager")
            .with("TLI_InitializeSimulations", initialize_simulations as *const c_void)
            .with("TLI_UninitializeSimulations", uninitialize_simulations as *const c_void),
    );

    // Void exports have no status to report, whatever the library would return.
    set_status(42);
    manager.initialize_simulations().unwrap();
    manager.uninitialize_simulations().unwrap();
    assert_eq!(take_calls(), vec!["initialize", "uninitialize"]);

    let manager = device_manager(FakeLibrary::new("device manager"));
    assert!(matches!(
        manager.initialize_simulations(),
        Err(KinesisError::MissingSymbol("TLI_InitializeSimulations"))
    ));
}
