//! Command-line argument parsing for the voicepcm diagnostic tool

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// WAV file -> base64 transport text on stdout
    Encode { input: String },
    /// Transport text file -> WAV file
    Decode { input: String, output: String },
    /// Loudness/validity report for a WAV file
    Stats { input: String, json: bool },
}

/// Parse command line arguments
#[derive(Debug, Default)]
pub struct Args {
    pub command: Option<Command>,
    pub help: bool,
}

pub fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    parse_args_from(&args)
}

/// Parse an argv-style slice (first element is the program name).
///
/// A command with missing operands leaves `command` unset, which the binary
/// reports with the usage text. Unknown flags are ignored.
pub fn parse_args_from(args: &[String]) -> Args {
    let mut result = Args::default();
    let mut positional: Vec<&str> = Vec::new();
    let mut json = false;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => result.help = true,
            "--json" => json = true,
            s if s.starts_with('-') && s.len() > 1 => {}
            s => positional.push(s),
        }
    }

    result.command = match positional.as_slice() {
        ["encode", input, ..] => Some(Command::Encode {
            input: input.to_string(),
        }),
        ["decode", input, output, ..] => Some(Command::Decode {
            input: input.to_string(),
            output: output.to_string(),
        }),
        ["stats", input, ..] => Some(Command::Stats {
            input: input.to_string(),
            json,
        }),
        _ => None,
    };

    result
}

pub fn print_help() {
    println!("voicepcm - 16-bit PCM / base64 transport codec tool\n");
    println!("USAGE:");
    println!("    voicepcm <COMMAND> [OPTIONS]\n");
    println!("COMMANDS:");
    println!("    encode <input.wav>              Print base64 transport text for a WAV file");
    println!("    decode <input.txt|-> <out.wav>  Decode transport text ('-' for stdin) to a WAV file");
    println!("    stats <input.wav> [--json]      Report RMS, peak, silence and validity\n");
    println!("OPTIONS:");
    println!("    --json                  Emit the stats report as JSON");
    println!("    --help, -h              Show this help message\n");
    println!("ENVIRONMENT:");
    println!("    VOICEPCM_SAMPLE_RATE        Sample rate for decoded WAV output (default: 16000)");
    println!("    VOICEPCM_CHANNELS           Channel count for decoded WAV output (default: 1)");
    println!("    VOICEPCM_SILENCE_THRESHOLD  RMS silence threshold (default: 0.01)");
    println!("    RUST_LOG                    Log filter (logs go to stderr)");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("voicepcm")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args_default() {
        let result = parse_args_from(&argv(&[]));
        assert!(result.command.is_none());
        assert!(!result.help);
    }

    #[test]
    fn test_parse_args_help() {
        assert!(parse_args_from(&argv(&["--help"])).help);
        assert!(parse_args_from(&argv(&["-h"])).help);
    }

    #[test]
    fn test_parse_encode() {
        let result = parse_args_from(&argv(&["encode", "in.wav"]));
        assert_eq!(
            result.command,
            Some(Command::Encode {
                input: "in.wav".to_string()
            })
        );
    }

    #[test]
    fn test_parse_decode() {
        let result = parse_args_from(&argv(&["decode", "in.txt", "out.wav"]));
        assert_eq!(
            result.command,
            Some(Command::Decode {
                input: "in.txt".to_string(),
                output: "out.wav".to_string()
            })
        );
    }

    #[test]
    fn test_parse_decode_missing_output() {
        let result = parse_args_from(&argv(&["decode", "in.txt"]));
        assert!(result.command.is_none());
    }

    #[test]
    fn test_parse_stats_json_anywhere() {
        for args in [["stats", "a.wav", "--json"], ["--json", "stats", "a.wav"]] {
            let result = parse_args_from(&argv(&args));
            assert_eq!(
                result.command,
                Some(Command::Stats {
                    input: "a.wav".to_string(),
                    json: true
                })
            );
        }
    }

    #[test]
    fn test_parse_ignores_unknown_flags() {
        let result = parse_args_from(&argv(&["--verbose", "stats", "a.wav"]));
        assert_eq!(
            result.command,
            Some(Command::Stats {
                input: "a.wav".to_string(),
                json: false
            })
        );
    }

    #[test]
    fn test_parse_dash_is_positional() {
        // "-" reads transport text from stdin
        let result = parse_args_from(&argv(&["decode", "-", "out.wav"]));
        assert_eq!(
            result.command,
            Some(Command::Decode {
                input: "-".to_string(),
                output: "out.wav".to_string()
            })
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(parse_args_from(&argv(&["transcode", "a.wav"])).command.is_none());
    }
}
