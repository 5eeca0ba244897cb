use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crossterm::execute;
use crossterm::terminal::SetTitle;

use crate::error::{AppError, AppResult};

/// Side-effect-only calls into whatever hosts the deck. Failures are
/// reported to the caller, which logs them and carries on.
pub trait HostApi {
    fn request_fullscreen(&mut self) -> AppResult<()>;
    fn exit_fullscreen(&mut self) -> AppResult<()>;
    /// Emits the printable layout and returns where it went.
    fn print(&mut self, document: &str) -> AppResult<PathBuf>;
    fn set_title(&mut self, title: &str) -> AppResult<()>;
}

/// xterm-compatible terminal host.
pub struct TerminalHost {
    print_path: PathBuf,
}

impl TerminalHost {
    pub fn new(print_path: impl Into<PathBuf>) -> Self {
        Self {
            print_path: print_path.into(),
        }
    }

    /// `<dir>/<deck-stem>.print.txt`, with `dir` defaulting to the deck's
    /// own directory.
    pub fn print_path_for(deck_path: &Path, output_dir: Option<&Path>) -> PathBuf {
        let stem = deck_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "deck".to_string());
        let dir = output_dir
            .map(Path::to_path_buf)
            .or_else(|| deck_path.parent().map(Path::to_path_buf))
            .unwrap_or_default();
        dir.join(format!("{stem}.print.txt"))
    }

    fn write_window_op(&mut self, op: &'static str, sequence: &[u8]) -> AppResult<()> {
        let mut stdout = io::stdout();
        stdout
            .write_all(sequence)
            .and_then(|()| stdout.flush())
            .map_err(|err| AppError::host(op, err.to_string()))
    }
}

impl HostApi for TerminalHost {
    fn request_fullscreen(&mut self) -> AppResult<()> {
        self.write_window_op("request-fullscreen", b"\x1b[10;1t")
    }

    fn exit_fullscreen(&mut self) -> AppResult<()> {
        self.write_window_op("exit-fullscreen", b"\x1b[10;0t")
    }

    fn print(&mut self, document: &str) -> AppResult<PathBuf> {
        std::fs::write(&self.print_path, document).map_err(|source| {
            AppError::io_with_context(
                source,
                format!("failed to write {}", self.print_path.display()),
            )
        })?;
        Ok(self.print_path.clone())
    }

    fn set_title(&mut self, title: &str) -> AppResult<()> {
        let mut stdout = io::stdout();
        execute!(stdout, SetTitle(title))
            .map_err(|err| AppError::host("set-title", err.to_string()))
    }
}
