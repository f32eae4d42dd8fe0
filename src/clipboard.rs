use crate::error::{Encod3rError, Result};
use log::{debug, info};
use std::io::Write;
use std::process::{Command, Stdio};

/// Default clipboard command (X11 clipboard selection)
pub const DEFAULT_CLIPBOARD_COMMAND: [&str; 3] = ["xclip", "-selection", "clipboard"];

/// Something that can take over a byte sequence as the clipboard contents
pub trait Clipboard {
    fn set_contents(&mut self, data: &[u8]) -> Result<()>;
}

/// Clipboard backed by an external command fed on its standard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from an argv list; the first element is the program
    pub fn from_argv(argv: &[String]) -> Result<Self> {
        match argv.split_first() {
            Some((program, args)) if !program.is_empty() => {
                Ok(Self::new(program.clone(), args.to_vec()))
            }
            _ => Err(Encod3rError::Clipboard(
                "clipboard command must not be empty".into(),
            )),
        }
    }
}

impl Default for CommandClipboard {
    fn default() -> Self {
        let [program, args @ ..] = DEFAULT_CLIPBOARD_COMMAND;
        Self::new(program, args.iter().map(|s| s.to_string()).collect())
    }
}

impl Clipboard for CommandClipboard {
    fn set_contents(&mut self, data: &[u8]) -> Result<()> {
        debug!("spawning clipboard command {} {:?}", self.program, self.args);
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|e| {
                Encod3rError::Clipboard(format!("failed to run `{}`: {}", self.program, e))
            })?;

        // Dropping stdin closes the pipe so the command sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(data),
            None => Ok(()),
        };

        // Always reap the child; a command that exits early breaks the pipe,
        // and its exit status is the more useful error.
        let status = child.wait()?;
        if !status.success() {
            return Err(Encod3rError::ClipboardExit {
                program: self.program.clone(),
                status,
            });
        }
        written?;
        info!("copied {} bytes to clipboard via {}", data.len(), self.program);
        Ok(())
    }
}
