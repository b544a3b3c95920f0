//! Process spawning for file manager command lines

use std::io;
use std::process::{Command, Stdio};

/// Boundary to the OS process launcher
pub trait ProcessSpawner: Send + Sync {
    /// Start `command_line` without waiting for it to finish
    fn spawn(&self, command_line: &str) -> io::Result<()>;
}

/// Split a command line into program and arguments on whitespace
///
/// There is no quoting: a path containing spaces becomes several arguments,
/// so `nautilus /home/u/My Documents` passes `/home/u/My` and `Documents`.
pub fn tokenize(command_line: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = command_line.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Spawns real processes through `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl ProcessSpawner for SystemSpawner {
    fn spawn(&self, command_line: &str) -> io::Result<()> {
        let (program, args) = tokenize(command_line).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "empty command line")
        })?;

        // The child is detached: its handle is dropped without waiting
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
    }
}

impl<T: ProcessSpawner + ?Sized> ProcessSpawner for std::sync::Arc<T> {
    fn spawn(&self, command_line: &str) -> io::Result<()> {
        (**self).spawn(command_line)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Spawner that records command lines instead of running them
    #[derive(Default)]
    pub struct RecordingSpawner {
        pub commands: Mutex<Vec<String>>,
        pub fail: bool,
    }

    impl RecordingSpawner {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn commands(&self) -> Vec<String> {
            self.commands.lock().unwrap().clone()
        }
    }

    impl ProcessSpawner for RecordingSpawner {
        fn spawn(&self, command_line: &str) -> io::Result<()> {
            self.commands.lock().unwrap().push(command_line.to_string());
            if self.fail {
                Err(io::Error::new(io::ErrorKind::NotFound, "program not found"))
            } else {
                Ok(())
            }
        }
    }
}
