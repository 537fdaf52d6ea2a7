use anyhow::{Context, Result};
use std::io::Read;
use tracing::{info, warn};

use voicepcm::cli::{parse_args, print_help, Command};
use voicepcm::config::Config;
use voicepcm::pcm::{self, format_duration, SignalStats};
use voicepcm::wav::{load_wav, save_wav};

/// Read transport text from a file, or stdin for "-"
fn read_transport_text(input: &str) -> Result<String> {
    let mut text = String::new();
    if input == "-" {
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read transport text from stdin")?;
    } else {
        text = std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read transport text: {}", input))?;
    }
    Ok(text.trim().to_string())
}

fn run_encode(input: &str, config: &Config) -> Result<()> {
    let (samples, format) = load_wav(input)?;
    info!(
        "Loaded {} samples ({}) from {}",
        samples.len(),
        format_duration(format.samples_to_duration_ms(samples.len())),
        input
    );

    if format != config.audio_format() {
        warn!(
            "Input is {} Hz/{} ch; receivers expect {} Hz/{} ch (format is not carried in the encoding)",
            format.sample_rate, format.channels, config.sample_rate, config.channels
        );
    }

    if !pcm::validate(&samples) {
        warn!("Input has empty, non-finite or out-of-range samples; out-of-range values will be clamped");
    }

    let encoded = pcm::encode(&samples).context("Failed to encode samples")?;
    println!("{}", encoded);
    Ok(())
}

fn run_decode(input: &str, output: &str, config: &Config) -> Result<()> {
    let text = read_transport_text(input)?;
    let samples = pcm::decode_f32(&text).context("Failed to decode transport text")?;

    let format = config.audio_format();
    info!(
        "Decoded {} samples ({})",
        samples.len(),
        format_duration(format.samples_to_duration_ms(samples.len()))
    );

    save_wav(&samples, format, output)
}

fn run_stats(input: &str, json: bool, config: &Config) -> Result<()> {
    let (samples, format) = load_wav(input)?;
    let stats = SignalStats::analyze(&samples, config.silence_threshold);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("File:      {}", input);
        println!("Format:    {} Hz, {} ch", format.sample_rate, format.channels);
        println!(
            "Duration:  {}",
            format_duration(format.samples_to_duration_ms(stats.samples))
        );
        println!("Samples:   {}", stats.samples);
        println!("RMS:       {:.6}", stats.rms);
        println!("Peak:      {:.6}", stats.peak);
        println!(
            "Silent:    {} (threshold {})",
            stats.silent, config.silence_threshold
        );
        println!("Valid:     {}", stats.valid);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = parse_args();

    let command = match args.command {
        Some(command) if !args.help => command,
        _ => {
            print_help();
            return Ok(());
        }
    };

    // Initialize logging (stderr, so encoded output on stdout stays clean)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("voicepcm=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    match command {
        Command::Encode { input } => run_encode(&input, &config),
        Command::Decode { input, output } => run_decode(&input, &output, &config),
        Command::Stats { input, json } => run_stats(&input, json, &config),
    }
}
