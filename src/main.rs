use std::env;
use std::path::Path;
use std::process;

use fretshape::{
    alternate_shapes, chord_shape_with_config, parse_chord_symbol, ChordDiagramShape, EngineConfig,
};
use serde::Serialize;

const USAGE: &str = "Usage: fretshape [--json] [--config <file.yaml>] [--alternates <N>] <CHORD>...";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChordOutput {
    chord: String,
    shape: ChordDiagramShape,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    alternates: Vec<ChordDiagramShape>,
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    let mut json = false;
    let mut config_path: Option<&String> = None;
    let mut alternate_count = 0usize;
    let mut symbols: Vec<&String> = Vec::new();

    // Parse flags
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--config" => {
                config_path = Some(
                    iter.next()
                        .unwrap_or_else(|| usage_error("--config needs a file path")),
                );
            }
            "--alternates" => {
                let value = iter
                    .next()
                    .unwrap_or_else(|| usage_error("--alternates needs a number"));
                alternate_count = value
                    .parse()
                    .unwrap_or_else(|_| usage_error(&format!("Invalid alternates count '{}'", value)));
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                return;
            }
            _ => symbols.push(arg),
        }
    }

    if symbols.is_empty() {
        usage_error("No chords given");
    }

    let config = match config_path {
        Some(path) => match EngineConfig::load(Path::new(path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    let mut outputs = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        let chord = match parse_chord_symbol(symbol) {
            Ok(chord) => chord,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        };
        let shape = chord_shape_with_config(&chord, &config);
        let alternates = alternate_shapes(&chord, alternate_count, &config);
        outputs.push(ChordOutput {
            chord: chord.name,
            shape,
            alternates,
        });
    }

    // Output
    if json {
        match serde_json::to_string_pretty(&outputs) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else {
        for output in &outputs {
            println!("{:<6} {}", output.chord, output.shape);
            for alternate in &output.alternates {
                println!("{:<6} {}", "", alternate);
            }
        }
    }
}
