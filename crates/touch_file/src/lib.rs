// crates/touch_file/src/lib.rs

//! Mutate-then-restore write sequence on a single file.
//!
//! The file is read, a marker line is appended, the caller-supplied pause
//! runs, and the original bytes are written back. No handle is held across
//! the pause.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Suspends the caller between appending the marker and restoring the file.
pub trait Pause {
    fn pause(&self, duration: Duration);
}

/// Blocks the current thread for the full duration.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleep;

impl Pause for ThreadSleep {
    fn pause(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

impl<F> Pause for F
where
    F: Fn(Duration),
{
    fn pause(&self, duration: Duration) {
        self(duration)
    }
}

/// Appends `marker_line` to `path`, pauses for `delay`, then restores the
/// file's original bytes.
///
/// The content is kept as raw bytes, so files that are not valid UTF-8 come
/// back byte-for-byte identical. The restore never creates the file: if it
/// was removed during the pause, the restore fails with `NotFound`.
///
/// # Errors
///
/// Returns the first I/O error, prefixed with the step that failed.
pub fn touch_file<P: Pause + ?Sized>(
    path: &Path,
    marker_line: &str,
    delay: Duration,
    pause: &P,
) -> io::Result<()> {
    let original = fs::read(path).map_err(|e| step_error("failed to read file", e))?;
    log::debug!(
        "Read {} byte(s) ({} line(s)) from {}",
        original.len(),
        String::from_utf8_lossy(&original).lines().count(),
        path.display()
    );

    append_marker(path, marker_line).map_err(|e| step_error("failed to append marker", e))?;
    log::debug!("Appended '{}' to {}", marker_line, path.display());

    pause.pause(delay);

    restore(path, &original).map_err(|e| step_error("failed to restore original content", e))?;
    log::debug!("Restored {}", path.display());
    Ok(())
}

fn append_marker(path: &Path, marker_line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().append(true).open(path)?;
    file.write_all(format!("\n{}\n", marker_line).as_bytes())?;
    file.flush()
}

fn restore(path: &Path, original: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).truncate(true).open(path)?;
    file.write_all(original)?;
    file.flush()
}

fn step_error(step: &str, err: io::Error) -> io::Error {
    io::Error::new(err.kind(), format!("{}: {}", step, err))
}
