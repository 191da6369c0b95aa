//! The table driven binding layer.
//!
//! Every exported symbol is declared once inside a `native_api!` block together with its native
//! parameter list and a return policy. From that single declaration the macro produces the
//! function pointer table, the signature registry used by the contract tests, symbol resolution
//! and a raw calling method which applies the policy.
//!
//! Policies:
//! * `status`: the function returns a `short` status code, 0 is success, anything else is
//!   reported as [`KinesisError::Native`].
//! * `value`: the return value is a reading (bool, counter, position, enum code) and is handed
//!   back untouched.
//! * `void`: nothing comes back.

use crate::error::{KinesisError, Result};
use crate::library::NativeLibrary;
use log::{debug, warn};
use std::ffi::{c_char, c_short, CString};
use std::fmt::{Display, Formatter};

/// Called by the native library whenever a device posts a message to its queue.
pub type MessageCallback = unsafe extern "C" fn();

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReturnPolicy {
    Status,
    Passthrough,
    Void,
}

impl Display for ReturnPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReturnPolicy::Status => write!(f, "status"),
            ReturnPolicy::Passthrough => write!(f, "value"),
            ReturnPolicy::Void => write!(f, "void"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    pub name: &'static str,
    pub native_type: &'static str,
}

/// A single entry of a binding table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub symbol: &'static str,
    pub parameters: &'static [Parameter],
    pub returns: &'static str,
    pub policy: ReturnPolicy,
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let parameters: Vec<String> = self
            .parameters
            .iter()
            .map(|parameter| format!("{}: {}", parameter.name, parameter.native_type))
            .collect();

        write!(
            f,
            "{}({}) -> {} [{}]",
            self.symbol,
            parameters.join(", "),
            self.returns,
            self.policy
        )
    }
}

/// The one place a native status code is turned into a result.
pub fn check_status(symbol: &'static str, code: c_short) -> Result<()> {
    match code {
        0 => Ok(()),
        code => Err(KinesisError::Native { symbol, code }),
    }
}

/// Maps a raw enum code coming back from the library onto its typed value.
pub(crate) fn typed<E>(symbol: &'static str, raw: impl Into<i64>, value: Option<E>) -> Result<E> {
    value.ok_or_else(|| KinesisError::UnexpectedValue {
        symbol,
        value: raw.into(),
    })
}

pub(crate) fn report_missing(library: &dyn NativeLibrary, missing: &[&'static str]) {
    if missing.is_empty() {
        debug!("All symbols resolved in {}", library.name());
        return;
    }

    warn!(
        "{} does not export {} symbol(s), calls to them will fail",
        library.name(),
        missing.len()
    );
    for symbol in missing {
        warn!("Missing: {}", symbol);
    }
}

/// A serial number ready to be handed to the native side.
#[derive(Debug, Clone)]
pub struct SerialNo(CString);

impl SerialNo {
    pub fn new(serial_no: &str) -> Result<Self> {
        CString::new(serial_no)
            .map(Self)
            .map_err(|_| KinesisError::InvalidSerialNumber(serial_no.to_string()))
    }

    pub fn as_ptr(&self) -> *const c_char {
        self.0.as_ptr()
    }
}

macro_rules! native_api {
    (@policy status) => { $crate::binding::ReturnPolicy::Status };
    (@policy value) => { $crate::binding::ReturnPolicy::Passthrough };
    (@policy void) => { $crate::binding::ReturnPolicy::Void };

    (@output status $ret:ty) => { $crate::error::Result<()> };
    (@output value $ret:ty) => { $crate::error::Result<$ret> };
    (@output void $ret:ty) => { $crate::error::Result<()> };

    (@call status $symbol:ident $call:expr) => {
        $crate::binding::check_status(stringify!($symbol), $call)
    };
    (@call value $symbol:ident $call:expr) => {
        Ok($call)
    };
    (@call void $symbol:ident $call:expr) => {{
        $call;
        Ok(())
    }};

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $policy:ident fn $symbol:ident($($arg:ident: $arg_ty:ty),* $(,)?) -> $ret:ty;
            )*
        }
    ) => {
        $(#[$meta])*
        #[allow(non_snake_case)]
        $vis struct $name {
            $($symbol: Option<unsafe extern "C" fn($($arg_ty),*) -> $ret>,)*
        }

        #[allow(non_snake_case, clippy::too_many_arguments, clippy::missing_safety_doc)]
        impl $name {
            pub const SIGNATURES: &'static [$crate::binding::Signature] = &[
                $(
                    $crate::binding::Signature {
                        symbol: stringify!($symbol),
                        parameters: &[
                            $(
                                $crate::binding::Parameter {
                                    name: stringify!($arg),
                                    native_type: stringify!($arg_ty),
                                },
                            )*
                        ],
                        returns: stringify!($ret),
                        policy: native_api!(@policy $policy),
                    },
                )*
            ];

            /// Looks up every symbol of the table, a symbol which isn't exported is left empty.
            pub fn resolve(library: &dyn $crate::library::NativeLibrary) -> Self {
                let table = Self {
                    $(
                        $symbol: library.address(stringify!($symbol)).map(|address| unsafe {
                            std::mem::transmute::<
                                *const std::ffi::c_void,
                                unsafe extern "C" fn($($arg_ty),*) -> $ret,
                            >(address)
                        }),
                    )*
                };
                $crate::binding::report_missing(library, &table.missing());
                table
            }

            pub fn missing(&self) -> Vec<&'static str> {
                let mut missing = Vec::new();
                $(
                    if self.$symbol.is_none() {
                        missing.push(stringify!($symbol));
                    }
                )*
                missing
            }

            $(
                pub unsafe fn $symbol(
                    &self,
                    $($arg: $arg_ty),*
                ) -> native_api!(@output $policy $ret) {
                    let function = self
                        .$symbol
                        .ok_or($crate::error::KinesisError::MissingSymbol(stringify!($symbol)))?;
                    log::trace!("Calling {}", stringify!($symbol));
                    native_api!(@call $policy $symbol function($($arg),*))
                }
            )*
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert!(check_status("BMC_Home", 0).is_ok());

        let error = check_status("BMC_Home", 42).unwrap_err();
        assert_eq!(error.code(), Some(42));
        assert_eq!(error.to_string(), "BMC_Home failed with status code 42");
    }

    #[test]
    fn serial_numbers_reject_nul() {
        assert!(SerialNo::new("28250123").is_ok());
        assert!(matches!(
            SerialNo::new("2825\00123"),
            Err(KinesisError::InvalidSerialNumber(_))
        ));
    }

    #[test]
    fn unknown_enum_codes_are_reported() {
        let error = typed::<u8>("NT_GetMode", 9i16, None).unwrap_err();
        assert!(matches!(
            error,
            KinesisError::UnexpectedValue {
                symbol: "NT_GetMode",
                value: 9
            }
        ));
        assert_eq!(typed("NT_GetMode", 1i16, Some(1u8)).unwrap(), 1);
    }

    #[test]
    fn signature_display() {
        const PARAMETERS: &[Parameter] = &[
            Parameter {
                name: "serial_no",
                native_type: "*const c_char",
            },
            Parameter {
                name: "channel",
                native_type: "c_short",
            },
        ];
        let signature = Signature {
            symbol: "BMC_Home",
            parameters: PARAMETERS,
            returns: "c_short",
            policy: ReturnPolicy::Status,
        };
        assert_eq!(
            signature.to_string(),
            "BMC_Home(serial_no: *const c_char, channel: c_short) -> c_short [status]"
        );
    }
}
