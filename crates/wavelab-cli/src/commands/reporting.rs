//! Colored console output shared by the commands.

use std::fmt::Display;
use std::time::Duration;

use colored::Colorize;
use wavelab_audio::{pcm_hash, Sound};
use wavelab_spec::{ValidationResult, ValidationWarning};

/// Prints status lines unless quiet. Errors always go to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    /// Creates a reporter.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Prints a cyan action line, e.g. `Reading: in.wav`.
    pub fn action(&self, label: &str, subject: impl Display) {
        if !self.quiet {
            println!("{} {}", format!("{}:", label).cyan().bold(), subject);
        }
    }

    /// Prints an indented, dimmed detail line.
    pub fn detail(&self, label: &str, value: impl Display) {
        if !self.quiet {
            println!("  {} {}", format!("{}:", label).dimmed(), value);
        }
    }

    /// Prints rate, channel count, length and duration of a sound.
    pub fn sound(&self, sound: &Sound) {
        self.detail("Rate", format!("{} Hz", sound.rate()));
        self.detail(
            "Channels",
            if sound.is_stereo() { "2 (stereo)" } else { "1 (mono)" },
        );
        self.detail("Samples", sound.len());
        self.detail("Duration", format!("{:.3}s", sound.duration_seconds()));
    }

    /// Prints the result of one chain step.
    pub fn step(&self, index: usize, name: &str, sound: &Sound) {
        if !self.quiet {
            let layout = if sound.is_stereo() { "stereo" } else { "mono" };
            println!(
                "  {} {} {}",
                format!("[{}]", index + 1).dimmed(),
                name,
                format!("-> {} samples, {}", sound.len(), layout).dimmed()
            );
        }
    }

    /// Prints the PCM hash of a sound.
    pub fn hash(&self, sound: &Sound) {
        if !self.quiet {
            self.detail("PCM hash", &pcm_hash(sound)[..16]);
        }
    }

    /// Prints one warning.
    pub fn warning(&self, warning: &ValidationWarning) {
        if !self.quiet {
            println!("  {} {}", "!".yellow(), warning);
        }
    }

    /// Prints every finding of a validation run. Errors go to stderr.
    pub fn validation(&self, result: &ValidationResult) {
        for error in &result.errors {
            eprintln!("  {} {}", "x".red(), error);
        }
        for warning in &result.warnings {
            self.warning(warning);
        }
    }

    /// Prints the closing success line with elapsed time.
    pub fn success(&self, message: impl Display, elapsed: Duration) {
        if !self.quiet {
            println!(
                "\n{} {} ({}ms)",
                "SUCCESS".green().bold(),
                message,
                elapsed.as_millis()
            );
        }
    }

    /// Prints the closing failure line. Shown even when quiet.
    pub fn failure(&self, message: impl Display) {
        eprintln!("\n{} {}", "FAILED".red().bold(), message);
    }
}
