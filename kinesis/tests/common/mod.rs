#![allow(dead_code)]

//! A stand in for the vendor libraries. Fake exports are plain `extern "C"` functions served by
//! symbol name; what they return and what they were called with goes through thread locals so
//! tests running in parallel don't see each other.

use kinesis::binding::{ReturnPolicy, Signature};
use kinesis::library::{LibraryLoader, LoadedLibraries, NativeLibrary};
use kinesis::{KinesisError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::ffi::{c_char, c_short, c_void, CStr};
use std::path::{Path, PathBuf};

thread_local! {
    static STATUS: Cell<c_short> = const { Cell::new(0) };
    static VALUE: Cell<i64> = const { Cell::new(0) };
    static CALLS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// The status code every fake `status` export returns from now on.
pub fn set_status(code: c_short) {
    STATUS.with(|status| status.set(code));
}

pub fn status() -> c_short {
    STATUS.with(|status| status.get())
}

/// The reading every fake `value` export returns from now on, truncated to its return type.
pub fn set_value(value: i64) {
    VALUE.with(|cell| cell.set(value));
}

pub fn value() -> i64 {
    VALUE.with(|cell| cell.get())
}

pub fn record(call: String) {
    CALLS.with(|calls| calls.borrow_mut().push(call));
}

pub fn take_calls() -> Vec<String> {
    CALLS.with(|calls| calls.take())
}

pub fn serial(serial_no: *const c_char) -> String {
    unsafe { CStr::from_ptr(serial_no) }
        .to_string_lossy()
        .into_owned()
}

#[derive(Default)]
pub struct FakeLibrary {
    name: String,
    symbols: HashMap<String, usize>,
}

impl FakeLibrary {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            symbols: HashMap::new(),
        }
    }

    pub fn with(mut self, symbol: &str, address: *const c_void) -> Self {
        self.symbols.insert(symbol.to_string(), address as usize);
        self
    }

    /// Serves the same function for every symbol in `symbols`.
    pub fn with_all(mut self, symbols: &[&str], address: *const c_void) -> Self {
        for symbol in symbols {
            self.symbols.insert(symbol.to_string(), address as usize);
        }
        self
    }
}

impl NativeLibrary for FakeLibrary {
    fn name(&self) -> &str {
        &self.name
    }

    fn address(&self, symbol: &str) -> Option<*const c_void> {
        self.symbols
            .get(symbol)
            .map(|&address| address as *const c_void)
    }
}

pub fn libraries(device: FakeLibrary) -> LoadedLibraries {
    LoadedLibraries {
        device: Box::new(device),
        device_manager: Box::new(FakeLibrary::new("device manager")),
    }
}

/// Hands out empty fake libraries, remembering which paths were asked for.
#[derive(Default)]
pub struct RecordingLoader {
    pub loaded: Vec<PathBuf>,
}

impl LibraryLoader for RecordingLoader {
    fn load(&mut self, path: &Path) -> Result<Box<dyn NativeLibrary>> {
        self.loaded.push(path.to_path_buf());
        Ok(Box::new(FakeLibrary::new(&path.display().to_string())))
    }
}

fn normalise(native_type: &str) -> String {
    native_type.split_whitespace().collect()
}

/// Every symbol in a table with the given policy, native parameter types and return type.
pub fn symbols_shaped(
    signatures: &[Signature],
    policy: ReturnPolicy,
    parameters: &[&str],
    returns: &str,
) -> Vec<&'static str> {
    signatures
        .iter()
        .filter(|signature| signature.policy == policy)
        .filter(|signature| normalise(signature.returns) == normalise(returns))
        .filter(|signature| {
            signature.parameters.len() == parameters.len()
                && signature
                    .parameters
                    .iter()
                    .zip(parameters)
                    .all(|(parameter, expected)| {
                        normalise(parameter.native_type) == normalise(expected)
                    })
        })
        .map(|signature| signature.symbol)
        .collect()
}

pub fn sorted(mut symbols: Vec<&'static str>) -> Vec<&'static str> {
    symbols.sort_unstable();
    symbols
}

/// Like [`symbols_shaped`], but the native parameter types (whitespace removed) go through a
/// predicate instead of an exact match.
pub fn symbols_where(
    signatures: &[Signature],
    policy: ReturnPolicy,
    shape: impl Fn(&[String]) -> bool,
) -> Vec<&'static str> {
    signatures
        .iter()
        .filter(|signature| signature.policy == policy)
        .filter(|signature| {
            let types: Vec<String> = signature
                .parameters
                .iter()
                .map(|parameter| normalise(parameter.native_type))
                .collect();
            shape(&types)
        })
        .map(|signature| signature.symbol)
        .collect()
}

pub fn is_pointer(native_type: &str) -> bool {
    native_type.starts_with('*')
}

/// A plain by-value argument, not a pointer or a callback.
pub fn is_value(native_type: &str) -> bool {
    !is_pointer(native_type) && !native_type.starts_with("Option")
}

/// Writes `text` into a native `char` buffer of `size` bytes, NUL terminated.
pub fn write_c_string(buffer: *mut c_char, size: u32, text: &str) {
    let limit = (size as usize).saturating_sub(1).min(text.len());
    unsafe {
        std::ptr::copy_nonoverlapping(text.as_ptr() as *const c_char, buffer, limit);
        *buffer.add(limit) = 0;
    }
}

/// A safe wrapper call, the export it has to reach and what that export has to be called with.
pub struct Forwarded<D> {
    pub symbol: &'static str,
    pub recorded: &'static str,
    pub call: fn(&D) -> Result<()>,
}

impl<D> Forwarded<D> {
    pub fn new(symbol: &'static str, recorded: &'static str, call: fn(&D) -> Result<()>) -> Self {
        Self {
            symbol,
            recorded,
            call,
        }
    }
}

pub fn symbols_of<D>(calls: &[Forwarded<D>]) -> Vec<&'static str> {
    calls.iter().map(|forwarded| forwarded.symbol).collect()
}

pub const STATUS_CODES: [c_short; 5] = [0, 42, -1, 1, c_short::MAX];

/// Runs every call once per status code. Status 0 has to succeed, anything else has to come back
/// as exactly that code from exactly that export, and each call has to reach the library once
/// with the recorded arguments.
pub fn sweep<D>(device: &D, calls: &[Forwarded<D>]) {
    for code in STATUS_CODES {
        set_status(code);
        for forwarded in calls {
            let result = (forwarded.call)(device);
            match (code, result) {
                (0, result) => assert!(result.is_ok(), "{} failed: {:?}", forwarded.symbol, result),
                (code, Err(KinesisError::Native { symbol, code: returned })) => {
                    assert_eq!(symbol, forwarded.symbol);
                    assert_eq!(returned, code, "{}", forwarded.symbol);
                }
                (code, other) => {
                    panic!("{} returned {:?} for status {}", forwarded.symbol, other, code)
                }
            }
            assert_eq!(take_calls(), vec![forwarded.recorded], "{}", forwarded.symbol);
        }
    }
}
