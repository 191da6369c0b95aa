//! Just enough of a vendor library to drive a command without hardware attached.

use kinesis::library::{LoadedLibraries, NativeLibrary};
use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::{c_short, c_void};

thread_local! {
    static CALLS: RefCell<Vec<&'static str>> = RefCell::new(Vec::new());
}

pub fn record(call: &'static str) {
    CALLS.with(|calls| calls.borrow_mut().push(call));
}

pub fn take_calls() -> Vec<&'static str> {
    CALLS.with(|calls| calls.take())
}

pub struct FakeLibrary {
    name: &'static str,
    symbols: HashMap<&'static str, usize>,
}

impl FakeLibrary {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            symbols: HashMap::new(),
        }
    }

    pub fn with(mut self, symbol: &'static str, address: *const c_void) -> Self {
        self.symbols.insert(symbol, address as usize);
        self
    }
}

impl NativeLibrary for FakeLibrary {
    fn name(&self) -> &str {
        self.name
    }

    fn address(&self, symbol: &str) -> Option<*const c_void> {
        self.symbols
            .get(symbol)
            .map(|&address| address as *const c_void)
    }
}

extern "C" fn build_device_list() -> c_short {
    0
}

pub fn libraries(device: FakeLibrary) -> LoadedLibraries {
    let device_manager = FakeLibrary::new("device manager")
        .with("TLI_BuildDeviceList", build_device_list as *const c_void);

    LoadedLibraries {
        device: Box::new(device),
        device_manager: Box::new(device_manager),
    }
}
