//! Fire-and-forget process spawning for `Spawn` commands and the startup-once hook.
//!
//! The spawning side never waits on a child or reports its exit status: a missing binary or a
//! failing script is logged at the point of spawning and otherwise invisible. Each child is
//! handed to a detached reaper thread so it does not linger as a zombie.
use crate::errors::Result;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use xdg::BaseDirectories;

pub type ChildID = u32;

#[derive(Default)]
pub struct Nanny {}

impl Nanny {
    /// Retrieve the path to the config directory. Tries to create it if it does not exist.
    ///
    /// # Errors
    ///
    /// Will error if unable to open or create the config directory.
    /// Could be caused by inadequate permissions.
    pub fn get_config_dir() -> Result<PathBuf> {
        BaseDirectories::with_prefix("tilecfg")?
            .create_config_directory("")
            .map_err(Into::into)
    }

    /// Runs a script directly, without a shell in between.
    ///
    /// # Errors
    ///
    /// Errors if the script does not exist or is not executable.
    pub fn run_script(path: &Path) -> Result<Child> {
        Command::new(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(Into::into)
    }
}

/// Waits for `child` on a detached thread so its exit status is collected.
fn reap(mut child: Child) -> ChildID {
    let pid = child.id();
    let spawned = thread::Builder::new()
        .name(format!("reap-{pid}"))
        .spawn(move || {
            if let Err(err) = child.wait() {
                tracing::warn!("Could not reap child {}: {}", pid, err);
            }
        });
    if let Err(err) = spawned {
        tracing::warn!("Could not start reaper for child {}: {}", pid, err);
    }
    pid
}

/// Sends command to shell for execution.
/// Assumes STDIN/STDERR/STDOUT unwanted. The caller gets the pid, the child is reaped in the
/// background.
pub fn exec_shell(command: &str) -> Option<ChildID> {
    let child = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| tracing::error!("Unable to spawn `{}`: {}", command, err))
        .ok()?;
    let pid = reap(child);
    tracing::debug!("Spawned `{}` as pid {}", command, pid);
    Some(pid)
}

/// Runs a script the first time [`StartupOnce::fire`] is called and never again.
#[derive(Debug)]
pub struct StartupOnce {
    script: PathBuf,
    fired: AtomicBool,
}

impl StartupOnce {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
            fired: AtomicBool::new(false),
        }
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// Returns the pid of the spawned script, `None` when the hook already fired or the
    /// script could not be started.
    pub fn fire(&self) -> Option<ChildID> {
        if self.fired.swap(true, Ordering::SeqCst) {
            return None;
        }
        match Nanny::run_script(&self.script) {
            Ok(child) => Some(reap(child)),
            Err(err) => {
                tracing::error!("Unable to run script {:?}, error: {}", self.script, err);
                None
            }
        }
    }
}
