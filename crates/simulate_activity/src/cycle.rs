// crates/simulate_activity/src/cycle.rs

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, RecvTimeoutError};

use activity_marker::marker_line;
use find_candidate_files::find_candidate_files;
use rand::seq::SliceRandom;
use rand::Rng;
use touch_file::{touch_file, Pause};

use crate::config::ActivityConfig;

/// What a single scan/select/mutate pass ended with.
#[derive(Debug)]
pub enum CycleOutcome {
    Modified(PathBuf),
    NoCandidates,
    Failed { path: PathBuf, error: io::Error },
}

impl fmt::Display for CycleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleOutcome::Modified(path) => write!(f, "Modified: {}", path.display()),
            CycleOutcome::NoCandidates => write!(f, "No suitable files found to touch."),
            CycleOutcome::Failed { path, error } => {
                write!(f, "Could not modify {}: {}", path.display(), error)
            }
        }
    }
}

/// Runs one cycle without the trailing wait: scan `root`, pick one candidate
/// uniformly at random and touch it.
///
/// Never fails; I/O errors on the chosen file come back as
/// [`CycleOutcome::Failed`].
pub fn run_cycle<R, P>(
    root: &Path,
    config: &ActivityConfig,
    rng: &mut R,
    pause: &P,
) -> CycleOutcome
where
    R: Rng + ?Sized,
    P: Pause + ?Sized,
{
    let candidates = find_candidate_files(root, &config.filter);
    let chosen = match candidates.choose(rng) {
        Some(path) => path.clone(),
        None => return CycleOutcome::NoCandidates,
    };
    log::debug!(
        "Chose {} out of {} candidate(s)",
        chosen.display(),
        candidates.len()
    );

    let marker = marker_line(&config.marker_tag, rng);
    match touch_file(&chosen, &marker, config.restore_delay, pause) {
        Ok(()) => CycleOutcome::Modified(chosen),
        Err(error) => CycleOutcome::Failed { path: chosen, error },
    }
}

/// The endless scan → select → mutate → wait loop.
pub struct ActivityLoop<R, P> {
    root: PathBuf,
    config: ActivityConfig,
    rng: R,
    pause: P,
}

impl<R: Rng, P: Pause> ActivityLoop<R, P> {
    pub fn new(root: impl Into<PathBuf>, config: ActivityConfig, rng: R, pause: P) -> Self {
        Self {
            root: root.into(),
            config,
            rng,
            pause,
        }
    }

    /// Runs cycles until a message arrives on `stop` or its sender is
    /// dropped, printing each cycle's outcome. The stop is only checked
    /// during the wait, so a cycle in progress always finishes and restores
    /// its file first.
    ///
    /// Returns the number of cycles run.
    pub fn run(&mut self, stop: &Receiver<()>) -> usize {
        let mut cycles = 0;
        loop {
            let outcome = run_cycle(&self.root, &self.config, &mut self.rng, &self.pause);
            println!("{}", outcome);
            cycles += 1;

            match stop.recv_timeout(self.config.interval) {
                Err(RecvTimeoutError::Timeout) => continue,
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        log::debug!("Activity loop stopped after {} cycle(s)", cycles);
        cycles
    }
}
