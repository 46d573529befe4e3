//! wavelab CLI - Command-line interface for audio effects
//!
//! This binary reads 16-bit WAV files, applies effects (reverse, mix, pan,
//! vocal removal, convolution, bass boost, echo) and writes the result.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use wavelab_cli::commands;
use wavelab_spec::Step;

/// wavelab - Audio effects over 16-bit WAV files
#[derive(Parser)]
#[command(name = "wavelab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the format, length and PCM hash of a WAV file
    Info {
        /// Path to the WAV file
        input: String,
    },

    /// Play a sound backwards
    Reverse {
        /// Input WAV file
        #[arg(short, long)]
        input: String,

        /// Output WAV file
        #[arg(short, long)]
        output: String,

        /// Process both channels instead of downmixing to mono
        #[arg(long)]
        stereo: bool,
    },

    /// Cross-fade two sounds (input weighted by p, partner by 1 - p)
    Mix {
        /// Input WAV file
        #[arg(short, long)]
        input: String,

        /// Partner WAV file
        #[arg(short, long)]
        with: String,

        /// Output WAV file
        #[arg(short, long)]
        output: String,

        /// Mixing proportion in [0, 1]
        #[arg(short, long, default_value_t = 0.5)]
        p: f64,

        /// Process both channels instead of downmixing to mono
        #[arg(long)]
        stereo: bool,
    },

    /// Sweep a stereo sound from the left speaker to the right
    Pan {
        /// Input WAV file
        #[arg(short, long)]
        input: String,

        /// Output WAV file
        #[arg(short, long)]
        output: String,
    },

    /// Cancel center-panned material, producing a mono sound
    RemoveVocals {
        /// Input WAV file
        #[arg(short, long)]
        input: String,

        /// Output WAV file
        #[arg(short, long)]
        output: String,
    },

    /// Filter a sound through a FIR kernel
    Convolve {
        /// Input WAV file
        #[arg(short, long)]
        input: String,

        /// Output WAV file
        #[arg(short, long)]
        output: String,

        /// Kernel taps, comma separated (e.g. 0.25,0.5,0.25)
        #[arg(short, long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        kernel: Vec<f64>,

        /// Process both channels instead of downmixing to mono
        #[arg(long)]
        stereo: bool,
    },

    /// Boost low frequencies
    BassBoost {
        /// Input WAV file
        #[arg(short, long)]
        input: String,

        /// Output WAV file
        #[arg(short, long)]
        output: String,

        /// Self-convolutions of the smoothing kernel (kernel length 2n + 3)
        #[arg(short = 'n', long, default_value_t = 1000)]
        iterations: usize,

        /// Gain of the low-pass part
        #[arg(short, long, default_value_t = 1.5, allow_hyphen_values = true)]
        scale: f64,

        /// Process both channels instead of downmixing to mono
        #[arg(long)]
        stereo: bool,
    },

    /// Add decaying, delayed copies of a sound to itself
    Echo {
        /// Input WAV file
        #[arg(short, long)]
        input: String,

        /// Output WAV file
        #[arg(short, long)]
        output: String,

        /// Number of echoes
        #[arg(short, long, default_value_t = 5)]
        count: usize,

        /// Seconds between echoes
        #[arg(short, long, default_value_t = 0.3)]
        delay: f64,

        /// Attenuation applied once per echo
        #[arg(long, default_value_t = 0.6, allow_hyphen_values = true)]
        decay: f64,

        /// Process both channels instead of downmixing to mono
        #[arg(long)]
        stereo: bool,
    },

    /// Check an effect chain file
    Validate {
        /// Path to the chain JSON file
        #[arg(short, long)]
        chain: String,
    },

    /// Run an effect chain file
    Apply {
        /// Path to the chain JSON file
        #[arg(short, long)]
        chain: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    let result = match cli.command {
        Commands::Info { input } => commands::info::run(&input, quiet),
        Commands::Reverse {
            input,
            output,
            stereo,
        } => commands::effect::run(&input, &output, stereo, Step::Reverse {}, quiet),
        Commands::Mix {
            input,
            with,
            output,
            p,
            stereo,
        } => commands::effect::run(&input, &output, stereo, Step::Mix { with, p }, quiet),
        Commands::Pan { input, output } => {
            commands::effect::run(&input, &output, true, Step::Pan {}, quiet)
        }
        Commands::RemoveVocals { input, output } => {
            commands::effect::run(&input, &output, true, Step::RemoveVocals {}, quiet)
        }
        Commands::Convolve {
            input,
            output,
            kernel,
            stereo,
        } => commands::effect::run(&input, &output, stereo, Step::Convolve { kernel }, quiet),
        Commands::BassBoost {
            input,
            output,
            iterations,
            scale,
            stereo,
        } => commands::effect::run(
            &input,
            &output,
            stereo,
            Step::BassBoost { iterations, scale },
            quiet,
        ),
        Commands::Echo {
            input,
            output,
            count,
            delay,
            decay,
            stereo,
        } => commands::effect::run(
            &input,
            &output,
            stereo,
            Step::Echo {
                count,
                delay_seconds: delay,
                decay,
            },
            quiet,
        ),
        Commands::Validate { chain } => commands::validate::run(&chain, quiet),
        Commands::Apply { chain } => commands::apply::run(&chain, quiet),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_parses_info() {
        let cli = Cli::try_parse_from(["wavelab", "info", "a.wav"]).unwrap();
        match cli.command {
            Commands::Info { input } => assert_eq!(input, "a.wav"),
            _ => panic!("expected info command"),
        }
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_parses_echo_defaults() {
        let cli = Cli::try_parse_from(["wavelab", "echo", "-i", "in.wav", "-o", "out.wav"]).unwrap();
        match cli.command {
            Commands::Echo {
                count,
                delay,
                decay,
                stereo,
                ..
            } => {
                assert_eq!(count, 5);
                assert_eq!(delay, 0.3);
                assert_eq!(decay, 0.6);
                assert!(!stereo);
            }
            _ => panic!("expected echo command"),
        }
    }

    #[test]
    fn test_cli_parses_bass_boost() {
        let cli = Cli::try_parse_from([
            "wavelab",
            "bass-boost",
            "--input",
            "in.wav",
            "--output",
            "out.wav",
            "-n",
            "20",
            "--scale",
            "-0.5",
            "--stereo",
        ])
        .unwrap();
        match cli.command {
            Commands::BassBoost {
                iterations,
                scale,
                stereo,
                ..
            } => {
                assert_eq!(iterations, 20);
                assert_eq!(scale, -0.5);
                assert!(stereo);
            }
            _ => panic!("expected bass-boost command"),
        }
    }

    #[test]
    fn test_cli_parses_kernel_list() {
        let cli = Cli::try_parse_from([
            "wavelab",
            "convolve",
            "-i",
            "in.wav",
            "-o",
            "out.wav",
            "--kernel",
            "0.25,-0.5,0.25",
        ])
        .unwrap();
        match cli.command {
            Commands::Convolve { kernel, .. } => assert_eq!(kernel, vec![0.25, -0.5, 0.25]),
            _ => panic!("expected convolve command"),
        }
    }

    #[test]
    fn test_cli_requires_kernel() {
        let err = Cli::try_parse_from(["wavelab", "convolve", "-i", "in.wav", "-o", "out.wav"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("--kernel"));
    }

    #[test]
    fn test_cli_parses_mix() {
        let cli = Cli::try_parse_from([
            "wavelab", "mix", "-i", "a.wav", "-w", "b.wav", "-o", "c.wav", "-p", "0.25",
        ])
        .unwrap();
        match cli.command {
            Commands::Mix { with, p, .. } => {
                assert_eq!(with, "b.wav");
                assert_eq!(p, 0.25);
            }
            _ => panic!("expected mix command"),
        }
    }

    #[test]
    fn test_cli_quiet_is_global() {
        let cli = Cli::try_parse_from(["wavelab", "apply", "--chain", "c.json", "--quiet"]).unwrap();
        assert!(cli.quiet);
        match cli.command {
            Commands::Apply { chain } => assert_eq!(chain, "c.json"),
            _ => panic!("expected apply command"),
        }
    }

    #[test]
    fn test_cli_parses_remove_vocals() {
        let cli =
            Cli::try_parse_from(["wavelab", "remove-vocals", "-i", "a.wav", "-o", "b.wav"]).unwrap();
        assert!(matches!(cli.command, Commands::RemoveVocals { .. }));
    }
}
