//! Shell process attached to a pseudo-terminal.
//!
//! The handle owns the PTY master, its writer and a reader thread that
//! forwards output over a channel. Dropping the handle closes the master; the
//! child is never killed or waited on here.

#[cfg(feature = "terminal")]
use std::io::{Read, Write};
#[cfg(feature = "terminal")]
use std::sync::mpsc::{self, Receiver, TryRecvError};

#[cfg(feature = "terminal")]
const READ_CHUNK: usize = 4096;

/// Platform default shell, spawned without arguments.
pub fn default_shell() -> &'static str {
    if cfg!(windows) {
        "cmd.exe"
    } else if cfg!(unix) {
        "/bin/bash"
    } else {
        "/bin/sh"
    }
}

#[derive(Debug)]
pub enum ShellError {
    Unsupported,
    Pty(String),
    Spawn(String),
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Unsupported => write!(f, "terminal support is disabled"),
            ShellError::Pty(e) => write!(f, "failed to open pty: {}", e),
            ShellError::Spawn(e) => write!(f, "failed to spawn shell: {}", e),
        }
    }
}

impl std::error::Error for ShellError {}

/// Output collected from the reader thread since the last drain.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ShellOutput {
    pub bytes: Vec<u8>,
    /// The reader thread hung up: the shell exited or the pty closed.
    pub closed: bool,
}

pub struct ShellProcess {
    #[cfg(feature = "terminal")]
    master: Box<dyn portable_pty::MasterPty + Send>,
    #[cfg(feature = "terminal")]
    writer: Box<dyn Write + Send>,
    #[cfg(feature = "terminal")]
    output_rx: Receiver<Vec<u8>>,
    /// Never killed or waited on. Closing the master hangs the shell up; the
    /// exited child stays a zombie until jotpad itself exits.
    #[cfg(feature = "terminal")]
    _child: Box<dyn portable_pty::Child + Send + Sync>,
    program: &'static str,
}

impl ShellProcess {
    pub fn spawn(cols: u16, rows: u16) -> Result<Self, ShellError> {
        Self::spawn_program(default_shell(), cols, rows)
    }

    #[cfg(feature = "terminal")]
    pub fn spawn_program(program: &'static str, cols: u16, rows: u16) -> Result<Self, ShellError> {
        use portable_pty::{CommandBuilder, NativePtySystem, PtySystem};

        let pty_system = NativePtySystem::default();
        let pair = pty_system
            .openpty(pty_size(cols, rows))
            .map_err(|e| ShellError::Pty(e.to_string()))?;

        let mut cmd = CommandBuilder::new(program);
        if let Ok(cwd) = std::env::current_dir() {
            cmd.cwd(cwd);
        }

        let child = pair
            .slave
            .spawn_command(cmd)
            .map_err(|e| ShellError::Spawn(e.to_string()))?;
        drop(pair.slave);

        let mut reader = pair
            .master
            .try_clone_reader()
            .map_err(|e| ShellError::Pty(e.to_string()))?;
        let writer = pair
            .master
            .take_writer()
            .map_err(|e| ShellError::Pty(e.to_string()))?;

        let (tx, output_rx) = mpsc::channel();
        std::thread::Builder::new()
            .name("jotpad-pty-reader".to_string())
            .spawn(move || {
                let mut buf = [0u8; READ_CHUNK];
                loop {
                    match reader.read(&mut buf) {
                        Ok(n) if n > 0 => {
                            if tx.send(buf[..n].to_vec()).is_err() {
                                break;
                            }
                        }
                        _ => break,
                    }
                }
            })
            .map_err(|e| ShellError::Spawn(e.to_string()))?;

        tracing::debug!(program, cols, rows, "shell spawned");

        Ok(Self {
            master: pair.master,
            writer,
            output_rx,
            _child: child,
            program,
        })
    }

    #[cfg(not(feature = "terminal"))]
    pub fn spawn_program(program: &'static str, cols: u16, rows: u16) -> Result<Self, ShellError> {
        let _ = (program, cols, rows);
        Err(ShellError::Unsupported)
    }

    pub fn program(&self) -> &'static str {
        self.program
    }

    pub fn write(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        #[cfg(feature = "terminal")]
        {
            self.writer.write_all(bytes)?;
            self.writer.flush()
        }

        #[cfg(not(feature = "terminal"))]
        {
            let _ = bytes;
            Ok(())
        }
    }

    pub fn resize(&self, cols: u16, rows: u16) -> Result<(), ShellError> {
        #[cfg(feature = "terminal")]
        {
            self.master
                .resize(pty_size(cols, rows))
                .map_err(|e| ShellError::Pty(e.to_string()))
        }

        #[cfg(not(feature = "terminal"))]
        {
            let _ = (cols, rows);
            Ok(())
        }
    }

    /// Collect at most `max_chunks` pending output chunks without blocking.
    pub fn drain_output(&self, max_chunks: usize) -> ShellOutput {
        let mut out = ShellOutput::default();

        #[cfg(feature = "terminal")]
        for _ in 0..max_chunks {
            match self.output_rx.try_recv() {
                Ok(chunk) => out.bytes.extend_from_slice(&chunk),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    out.closed = true;
                    break;
                }
            }
        }

        #[cfg(not(feature = "terminal"))]
        {
            let _ = max_chunks;
            out.closed = true;
        }

        out
    }
}

impl std::fmt::Debug for ShellProcess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellProcess")
            .field("program", &self.program)
            .finish()
    }
}

#[cfg(feature = "terminal")]
fn pty_size(cols: u16, rows: u16) -> portable_pty::PtySize {
    portable_pty::PtySize {
        rows: rows.max(1),
        cols: cols.max(1),
        pixel_width: 0,
        pixel_height: 0,
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/pty.rs"]
mod tests;
