//! hwctl - Main entry point
//!
//! Puts the controlling terminal into raw mode and pumps stdin bytes
//! through the console state machine, one at a time. All rendering goes
//! through a small LF-to-CRLF translating writer; log output is kept on
//! stderr so it cannot corrupt the prompt.

use std::fmt;
use std::io::{self, Read, Write};
use std::os::fd::{AsRawFd, BorrowedFd, RawFd};

use anyhow::Result;
use log::debug;
use nix::sys::termios;

use hwctl::console::{Console, ConsoleEvent, HISTORY_CAPACITY};

/// RAII guard that restores terminal settings on drop.
struct RawModeGuard {
    fd: RawFd,
    original: termios::Termios,
}

impl RawModeGuard {
    fn enter(fd: RawFd) -> io::Result<Self> {
        let borrowed = unsafe { BorrowedFd::borrow_raw(fd) };
        let original = termios::tcgetattr(borrowed).map_err(io::Error::other)?;
        let mut raw = original.clone();
        termios::cfmakeraw(&mut raw);
        termios::tcsetattr(borrowed, termios::SetArg::TCSANOW, &raw).map_err(io::Error::other)?;
        Ok(Self { fd, original })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let borrowed = unsafe { BorrowedFd::borrow_raw(self.fd) };
        let _ = termios::tcsetattr(borrowed, termios::SetArg::TCSANOW, &self.original);
    }
}

/// `fmt::Write` adapter over stdout that maps LF to CRLF for raw mode.
struct TermWriter {
    stdout: io::Stdout,
}

impl TermWriter {
    fn new() -> Self {
        Self { stdout: io::stdout() }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.lock().flush()
    }
}

impl fmt::Write for TermWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let translated = s.replace('\n', "\r\n");
        self.stdout
            .lock()
            .write_all(translated.as_bytes())
            .map_err(|_| fmt::Error)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let stdin = io::stdin();

    // Raw mode fails when stdin is not a tty (e.g. piped input); the
    // console still works line-buffered in that case.
    let guard = RawModeGuard::enter(stdin.as_raw_fd());
    if guard.is_err() {
        debug!("stdin is not a tty, running without raw mode");
    }

    let mut console = Console::new(HISTORY_CAPACITY);
    let mut writer = TermWriter::new();
    console.print_banner(&mut writer);
    writer.flush()?;

    let mut handle = stdin.lock();
    let mut byte = [0u8; 1];
    loop {
        if handle.read(&mut byte)? == 0 {
            break; // EOF
        }

        let event = console.process_byte(byte[0], &mut writer);
        writer.flush()?;

        match event {
            Some(ConsoleEvent::Exit) => break,
            Some(ConsoleEvent::Executed(result)) => {
                debug!("command result: {:?}", result);
            }
            None => {}
        }
    }

    Ok(())
}
