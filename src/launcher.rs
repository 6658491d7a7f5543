use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("can't start emulator {program}: {source}")]
    Spawn {
        program: PathBuf,
        source: io::Error,
    },
}

/// starts a game in the external emulator and waits for it to finish
pub trait Launcher {
    /// run the emulator on `rom_path`, blocking until it exits. any exit
    /// status is handed back to the caller; only a failed spawn is an
    /// error
    fn launch(&mut self, rom_path: &Path) -> Result<ExitStatus, LaunchError>;
}

/// shells out to the emulator binary with the ROM as its only argument
pub struct EmulatorLauncher {
    program: PathBuf,
}

impl EmulatorLauncher {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        EmulatorLauncher {
            program: program.into(),
        }
    }
}

impl Launcher for EmulatorLauncher {
    fn launch(&mut self, rom_path: &Path) -> Result<ExitStatus, LaunchError> {
        tracing::info!(rom = %rom_path.display(), "launching emulator");
        Command::new(&self.program)
            .arg(rom_path)
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: self.program.clone(),
                source,
            })
    }
}

/// dummy Launcher implementation for testing; records what would have
/// been launched instead of spawning anything
pub struct DummyLauncher {
    pub launched: Vec<PathBuf>,
    fail: bool,
}

impl DummyLauncher {
    pub fn new() -> Self {
        DummyLauncher {
            launched: Vec::new(),
            fail: false,
        }
    }

    /// a launcher whose emulator binary is never found
    pub fn failing() -> Self {
        DummyLauncher {
            launched: Vec::new(),
            fail: true,
        }
    }
}

impl Launcher for DummyLauncher {
    fn launch(&mut self, rom_path: &Path) -> Result<ExitStatus, LaunchError> {
        use std::os::unix::process::ExitStatusExt;

        if self.fail {
            return Err(LaunchError::Spawn {
                program: PathBuf::from("missing-emulator"),
                source: io::Error::new(io::ErrorKind::NotFound, "scripted failure"),
            });
        }
        self.launched.push(rom_path.to_path_buf());
        Ok(ExitStatus::from_raw(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_missing_binary_fails() {
        let mut launcher = EmulatorLauncher::new("/nonexistent/emulator");
        let result = launcher.launch(Path::new("game.smc"));
        assert!(matches!(result, Err(LaunchError::Spawn { .. })));
    }

    #[test]
    fn test_launch_reports_exit_status() {
        let mut launcher = EmulatorLauncher::new("true");
        let status = launcher.launch(Path::new("game.smc")).unwrap();
        assert!(status.success());
    }

    #[test]
    fn test_nonzero_exit_is_not_a_launch_error() {
        let mut launcher = EmulatorLauncher::new("false");
        let status = launcher.launch(Path::new("game.smc")).unwrap();
        assert!(!status.success());
    }
}
