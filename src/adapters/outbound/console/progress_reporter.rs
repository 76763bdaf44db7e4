use crate::analysis::domain::ArtifactCoordinate;
use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "   {spinner:.green} {pos} dependencies - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with JSON on stdout.
/// A spinner runs while dependencies are materialized; each dependency is
/// listed above it.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn get_or_create_spinner(&self) -> ProgressBar {
        let mut spinner = self.spinner.borrow_mut();
        if let Some(pb) = spinner.as_ref() {
            return pb.clone();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template(SPINNER_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        *spinner = Some(pb.clone());
        pb
    }

    fn finish_spinner(&self) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        match self.spinner.borrow().as_ref() {
            Some(pb) => pb.suspend(|| eprintln!("{}", message)),
            None => eprintln!("{}", message),
        }
    }

    fn report_dependency(
        &self,
        sequence: usize,
        coordinate: &ArtifactCoordinate,
        scope: &str,
        has_digest: bool,
    ) {
        let pb = self.get_or_create_spinner();
        let marker = if has_digest {
            "✓".green().to_string()
        } else {
            "[no SHA1]".yellow().to_string()
        };
        pb.suspend(|| {
            eprintln!(
                "  [{:>3}] {} ({}) {}",
                sequence,
                coordinate,
                scope.dimmed(),
                marker
            )
        });
        pb.set_position(sequence as u64);
        pb.set_message(coordinate.artifact_id().to_string());
    }

    fn report_error(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message.red());
    }

    fn report_completion(&self, message: &str) {
        self.finish_spinner();
        eprintln!();
        eprintln!("{}", message);
    }
}

/// SilentProgressReporter adapter used with `--quiet`
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn report(&self, _message: &str) {}

    fn report_dependency(
        &self,
        _sequence: usize,
        _coordinate: &ArtifactCoordinate,
        _scope: &str,
        _has_digest: bool,
    ) {
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_completion(&self, _message: &str) {}
}
