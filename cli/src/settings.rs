use anyhow::{Context, Result};
use kinesis::LibrarySettings;
use log::error;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub libraries: LibrarySettings,

    /// How often the libraries poll a device for status while a command runs.
    pub polling_interval_ms: u32,

    /// How long `--wait` waits for a move to finish.
    pub settle_timeout_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            libraries: LibrarySettings::default(),
            polling_interval_ms: 200,
            settle_timeout_ms: 60_000,
        }
    }
}

impl Settings {
    /// Reads the settings and writes them straight back, so a fresh install gets a file to edit.
    pub fn load(path: &Path) -> Result<Settings> {
        let settings = Settings::read(path)?;
        if let Err(e) = settings.write(path) {
            error!("Couldn't save settings to {}: {:#}", path.to_string_lossy(), e);
        }
        Ok(settings)
    }

    /// The polling interval in the form the libraries take it.
    pub fn polling_interval(&self) -> Result<i32> {
        i32::try_from(self.polling_interval_ms).with_context(|| {
            format!("polling_interval_ms of {} is too large", self.polling_interval_ms)
        })
    }

    pub fn read(path: &Path) -> Result<Settings> {
        match File::open(path) {
            Ok(reader) => serde_json::from_reader(reader).context(format!(
                "Could not parse settings file at {}",
                path.to_string_lossy()
            )),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(Settings::default()),
            Err(error) => Err(error).context(format!(
                "Could not open settings file for reading at {}",
                path.to_string_lossy()
            )),
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if let Err(e) = create_dir_all(parent) {
                if e.kind() != ErrorKind::AlreadyExists {
                    return Err(e).context(format!(
                        "Could not create settings directory at {}",
                        parent.to_string_lossy()
                    ));
                }
            }
        }
        let writer = File::create(path).context(format!(
            "Could not open settings file for writing at {}",
            path.to_string_lossy()
        ))?;
        serde_json::to_writer_pretty(writer, self).context(format!(
            "Could not write to settings file at {}",
            path.to_string_lossy()
        ))?;
        Ok(())
    }
}
