//! Info command implementation
//!
//! Prints the header fields of a WAV file and, for files wavelab can decode,
//! level statistics and the PCM hash.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use wavelab_audio::{probe_wav, read_wav, ChannelLayout, Sound};

use super::reporting::Reporter;

/// Peak absolute sample value over all channels.
pub fn peak(sound: &Sound) -> f64 {
    let fold = |acc: f64, v: &f64| acc.max(v.abs());
    match sound {
        Sound::Mono(mono) => mono.samples().iter().fold(0.0, fold),
        Sound::Stereo(stereo) => stereo
            .left()
            .iter()
            .chain(stereo.right())
            .fold(0.0, fold),
    }
}

/// Run the info command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `quiet` - Suppress status output
///
/// # Returns
/// Exit code: 0 if the file is decodable, 1 if its format is unsupported
pub fn run(input: &str, quiet: bool) -> Result<ExitCode> {
    let reporter = Reporter::new(quiet);
    reporter.action("File", input);

    let info = probe_wav(input).with_context(|| format!("Failed to read WAV header: {}", input))?;
    reporter.detail("Channels", info.channels);
    reporter.detail("Rate", format!("{} Hz", info.sample_rate));
    reporter.detail(
        "Format",
        format!(
            "{}-bit {}",
            info.bits_per_sample,
            if info.is_float { "float" } else { "integer" }
        ),
    );
    reporter.detail("Frames", info.frames);
    reporter.detail("Duration", format!("{:.3}s", info.duration_seconds()));

    if !info.is_supported() {
        eprintln!(
            "\n{} only 16-bit integer mono or stereo files can be processed",
            "UNSUPPORTED".yellow().bold()
        );
        return Ok(ExitCode::from(1));
    }

    let layout = ChannelLayout::from_stereo_flag(info.channels == 2);
    let sound = read_wav(input, layout).with_context(|| format!("Failed to decode: {}", input))?;
    reporter.detail("Peak", format!("{:.4}", peak(&sound)));
    reporter.hash(&sound);

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavelab_audio::{write_wav, MonoSignal, StereoSignal};

    #[test]
    fn peak_covers_both_channels() {
        let sound = Sound::Stereo(StereoSignal::new(8, vec![0.1, -0.2], vec![0.0, -0.7]).unwrap());
        assert_eq!(peak(&sound), 0.7);
        let silent = Sound::Mono(MonoSignal::new(8, vec![]).unwrap());
        assert_eq!(peak(&silent), 0.0);
    }

    #[test]
    fn info_on_written_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a.wav");
        write_wav(&Sound::Mono(MonoSignal::new(8, vec![0.5; 8]).unwrap()), &path).unwrap();

        let code = run(path.to_str().unwrap(), false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn info_quiet_still_reports_unsupported_format() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("float.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        writer.write_sample(0.5f32).unwrap();
        writer.finalize().unwrap();

        assert_eq!(run(path.to_str().unwrap(), true).unwrap(), ExitCode::from(1));
        let mono = tmp.path().join("a.wav");
        write_wav(&Sound::Mono(MonoSignal::new(8, vec![0.5; 4]).unwrap()), &mono).unwrap();
        assert_eq!(run(mono.to_str().unwrap(), true).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn info_missing_file_is_an_error() {
        assert!(run("/nonexistent/a.wav", true).is_err());
    }
}
