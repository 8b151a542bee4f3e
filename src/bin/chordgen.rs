// chordgen — print a chord diagram from finger markings.
//
// Usage:
//   chordgen [OPTIONS] [MARKINGS]...
//
// Each marking is string[.fret[.finger]]; a bare string number mutes it.
// Example (G major on guitar):
//   chordgen -n "G" 1.3.2 2.2.1 6.3.3

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use chordlib::config::split_list;
use chordlib::{diagram_to_json, render_chord, ChordConfig, ChordError, OptionValue};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "A braille chord generator", long_about = None)]
struct Cli {
    /// The name of the chord
    #[arg(short, long)]
    name: Option<String>,

    /// The length of the neck (0 or less sizes it from the markings)
    #[arg(short, long, allow_negative_numbers = true)]
    length: Option<i64>,

    /// Hide the brief chord display
    #[arg(short = 'b', long)]
    hide_brief: bool,

    /// Show finger names as well as fret numbers in the brief chord display
    #[arg(short = 'X', long)]
    extended_brief: bool,

    /// The character to put between the fret number and the finger name in the brief display
    #[arg(short = 'D', long)]
    delimiter: Option<String>,

    /// The sign to precede any numbers
    #[arg(long, value_name = "CHARACTER")]
    number_sign: Option<String>,

    /// A list of number characters to be used as numbers
    #[arg(long)]
    numbers: Option<String>,

    /// The character which should separate strings in the brief display
    #[arg(short = 'S', long)]
    separator: Option<String>,

    /// A comma-separated list of finger names
    #[arg(long)]
    fingers: Option<String>,

    /// The text to be printed when no finger is provided in a marking
    #[arg(long, value_name = "STRING")]
    any_finger: Option<String>,

    /// String names
    #[arg(short, long)]
    strings: Option<String>,

    /// The character to print before the fret numbers
    #[arg(short, long, value_name = "CHARACTER")]
    pad_fret_numbers: Option<String>,

    /// The text to print for an empty fret
    #[arg(long, value_name = "STRING")]
    empty: Option<String>,

    /// The text to print after a nonempty fret
    #[arg(long, value_name = "STRING")]
    fingered: Option<String>,

    /// The text to print after an empty fret
    #[arg(long, value_name = "STRING")]
    normal: Option<String>,

    /// The text to print before a finger marking
    #[arg(long, value_name = "STRING")]
    pre_fingered: Option<String>,

    /// The text to print at the beginning of a string with no finger markings
    #[arg(long, value_name = "STRING")]
    empty_string: Option<String>,

    /// The text to print before a string which should not be played
    #[arg(long, value_name = "STRING")]
    muted_string: Option<String>,

    /// JSON configuration file; command-line options override it
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the diagram as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// The finger markings to be printed in the form string[.fret.finger].
    /// If fret and finger are omitted the string will be muted.
    markings: Vec<String>,
}

impl Cli {
    fn build_config(&self) -> Result<ChordConfig, String> {
        let base = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read config '{}': {e}", path.display()))?;
                ChordConfig::from_json(&json).map_err(|e| e.to_string())?
            }
            None => ChordConfig::default(),
        };
        self.apply_overrides(base).map_err(|e| e.to_string())
    }

    /// Layer the command-line options over a base configuration.
    fn apply_overrides(&self, mut config: ChordConfig) -> Result<ChordConfig, ChordError> {
        let text_overrides = [
            (&self.name, &mut config.name),
            (&self.delimiter, &mut config.delimiter),
            (&self.number_sign, &mut config.number_sign),
            (&self.numbers, &mut config.numbers),
            (&self.separator, &mut config.separator),
            (&self.any_finger, &mut config.any_finger),
            (&self.pad_fret_numbers, &mut config.pad_fret_numbers),
            (&self.empty, &mut config.empty),
            (&self.fingered, &mut config.fingered),
            (&self.normal, &mut config.normal),
            (&self.pre_fingered, &mut config.pre_fingered),
            (&self.empty_string, &mut config.empty_string),
            (&self.muted_string, &mut config.muted_string),
        ];
        for (flag, slot) in text_overrides {
            if let Some(value) = flag {
                *slot = value.clone();
            }
        }

        if let Some(length) = self.length {
            config.set("length", OptionValue::Integer(length))?;
        }
        if let Some(fingers) = &self.fingers {
            config.fingers = split_list(fingers);
        }
        if let Some(strings) = &self.strings {
            config.strings = split_list(strings);
        }
        config.hide_brief |= self.hide_brief;
        config.extended_brief |= self.extended_brief;
        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn run(cli: &Cli) -> Result<String, String> {
    let config = cli.build_config()?;
    debug!(markings = cli.markings.len(), length = config.length, "rendering chord");

    let diagram = render_chord(&config, &cli.markings).map_err(|e: ChordError| e.to_string())?;
    if cli.json {
        diagram_to_json(&diagram).map_err(|e| e.to_string())
    } else {
        Ok(diagram.to_string())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(text) => {
            print!("{text}");
            if cli.json {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("chordgen").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn flags_override_config_file_values() {
        let base = ChordConfig::from_json(
            r#"{"name": "from file", "separator": "/", "strings": ["G", "C", "E", "A"], "length": 4}"#,
        )
        .unwrap();
        let config = cli(&["-n", "C", "-s", "E,A,D", "-X", "1.2"])
            .apply_overrides(base)
            .unwrap();
        assert_eq!(config.name, "C");
        assert_eq!(config.strings, vec!["E", "A", "D"]);
        assert!(config.extended_brief);
        // Untouched options keep the file's values.
        assert_eq!(config.separator, "/");
        assert_eq!(config.length, 4);
    }

    #[test]
    fn negative_length_means_auto_size() {
        let parsed = cli(&["-l", "-1", "1.3"]);
        assert_eq!(parsed.markings, vec!["1.3"]);
        let config = parsed.apply_overrides(ChordConfig::default()).unwrap();
        assert_eq!(config.length, 0);

        let diagram = render_chord(&config, &parsed.markings).unwrap();
        assert_eq!(diagram.tab[0], "   #a #b #c ");
    }

    #[test]
    fn run_reports_marking_errors() {
        assert_eq!(run(&cli(&["9.1.1"])), Err("Invalid string number: \"9\".".to_string()));
    }

    #[test]
    fn run_prints_json_when_asked() {
        let out = run(&cli(&["--json", "-b", "1.3.2"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["brief"], "");
        assert_eq!(value["tab"].as_array().unwrap().len(), 7);
    }
}
