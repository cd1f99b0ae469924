use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Numbered step reporter on stderr. Every method is a no-op when not interactive.
pub struct Progress {
    interactive: bool,
    total_steps: u8,
    step: u8,
    started: Instant,
    step_started: Instant,
    spinner: Option<ProgressBar>,
}

impl Progress {
    pub fn new(interactive: bool, total_steps: u8) -> Self {
        let now = Instant::now();
        Self {
            interactive,
            total_steps,
            step: 0,
            started: now,
            step_started: now,
            spinner: None,
        }
    }

    pub fn step(&mut self, description: &str) {
        if !self.interactive {
            return;
        }
        self.clear_spinner();

        self.step += 1;
        self.step_started = Instant::now();

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {msg}") {
            spinner.set_style(style.tick_chars(TICK_CHARS));
        }
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner.set_message(format!(
            "[{}/{}] {description}...",
            self.step, self.total_steps
        ));
        self.spinner = Some(spinner);
    }

    pub fn complete_step(&mut self, description: &str, details: &[&str]) {
        if !self.interactive {
            return;
        }
        self.clear_spinner();

        let secs = self.step_started.elapsed().as_secs_f64();
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "  \x1b[32m✓\x1b[0m {description:<44} {secs:>5.2}s");
        for detail in details {
            let _ = writeln!(stderr, "      \x1b[2m·\x1b[0m {detail}");
        }
    }

    pub fn finish(mut self) {
        if !self.interactive {
            return;
        }
        self.clear_spinner();

        let total = format!("Total: {:.2}s", self.started.elapsed().as_secs_f64());
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr);
        let _ = writeln!(stderr, "  \x1b[2m{}\x1b[0m", "━".repeat(56));
        let _ = writeln!(stderr, "  \x1b[32m✓\x1b[0m Done {total:>50}");
        let _ = writeln!(stderr);
    }

    fn clear_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_progress_never_spins() {
        let mut progress = Progress::new(false, 2);
        progress.step("Reading structure");
        assert!(progress.spinner.is_none());
        assert_eq!(progress.step, 0);
        progress.complete_step("Reading structure", &["3 atoms"]);
        progress.finish();
    }
}
