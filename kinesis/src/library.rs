use crate::error::{KinesisError, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::ffi::c_void;
use std::path::{Path, PathBuf};

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        const DEFAULT_INSTALL_DIR: &str = "C:/Program Files/Thorlabs/Kinesis/";
    } else {
        // The vendor only ships Windows binaries, this is where a compatible build is expected.
        const DEFAULT_INSTALL_DIR: &str = "/opt/thorlabs/kinesis/";
    }
}

/// Where the native libraries live, and what they're called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    pub install_dir: PathBuf,
    pub device_manager: String,
    pub brushless_motor: String,
    pub nanotrak: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            install_dir: PathBuf::from(DEFAULT_INSTALL_DIR),
            device_manager: "Thorlabs.MotionControl.DeviceManager.dll".to_string(),
            brushless_motor: "Thorlabs.MotionControl.KCube.BrushlessMotor.dll".to_string(),
            nanotrak: "Thorlabs.MotionControl.ModularRack.NanoTrak.dll".to_string(),
        }
    }
}

impl LibrarySettings {
    pub fn device_manager_path(&self) -> PathBuf {
        self.install_dir.join(&self.device_manager)
    }

    pub fn brushless_motor_path(&self) -> PathBuf {
        self.install_dir.join(&self.brushless_motor)
    }

    pub fn nanotrak_path(&self) -> PathBuf {
        self.install_dir.join(&self.nanotrak)
    }
}

/// A loaded native library which can be asked for symbol addresses.
pub trait NativeLibrary: Send + Sync {
    fn name(&self) -> &str;

    /// The address of an exported symbol, or `None` if this build doesn't export it.
    fn address(&self, symbol: &str) -> Option<*const c_void>;
}

pub trait LibraryLoader {
    fn load(&mut self, path: &Path) -> Result<Box<dyn NativeLibrary>>;
}

/// Loads libraries from disk through the platform loader.
#[derive(Debug, Default)]
pub struct DynamicLoader;

impl LibraryLoader for DynamicLoader {
    fn load(&mut self, path: &Path) -> Result<Box<dyn NativeLibrary>> {
        debug!("Loading {}", path.display());

        let library = unsafe { libloading::Library::new(path) }.map_err(|source| {
            KinesisError::LibraryLoad {
                path: path.to_path_buf(),
                source,
            }
        })?;

        info!("Loaded {}", path.display());
        Ok(Box::new(DynamicLibrary {
            name: path.display().to_string(),
            library,
        }))
    }
}

pub struct DynamicLibrary {
    name: String,
    library: libloading::Library,
}

impl NativeLibrary for DynamicLibrary {
    fn name(&self) -> &str {
        &self.name
    }

    fn address(&self, symbol: &str) -> Option<*const c_void> {
        let symbol = unsafe { self.library.get::<*const c_void>(symbol.as_bytes()) }.ok()?;
        Some(*symbol)
    }
}

/// A device library together with the device manager it depends on.
///
/// Fields drop in declaration order, so the device library is released before the manager.
pub struct LoadedLibraries {
    pub device: Box<dyn NativeLibrary>,
    pub device_manager: Box<dyn NativeLibrary>,
}

/// Loads the device manager and then the device library, once each.
pub fn load_libraries(
    loader: &mut dyn LibraryLoader,
    device: &Path,
    device_manager: &Path,
) -> Result<LoadedLibraries> {
    let device_manager = loader.load(device_manager)?;
    let device = loader.load(device)?;

    Ok(LoadedLibraries {
        device,
        device_manager,
    })
}
