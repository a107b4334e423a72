/**
 * vue2react - Vue single-file component to React converter
 *
 * Batch entry point: converts every .vue file under the input root into a
 * React component directory under the output root.
 */
use clap::{Arg, ArgAction, Command};
use std::process;

use vue_compiler::CompilerConfig;
use vue_compiler_cli::{perform_convert, ConvertOptions};

fn main() {
    let matches = Command::new("vue2react")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Vue single-file component to React converter")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("DIR")
                .required(true)
                .help("Input root containing .vue components"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .required(true)
                .help("Output root for generated components"),
        )
        .arg(
            Arg::new("profile")
                .long("profile")
                .value_name("PROFILE")
                .value_parser(["closures", "computed-state"])
                .default_value("closures")
                .help("Generator output profile"),
        )
        .arg(
            Arg::new("sequential")
                .long("sequential")
                .action(ArgAction::SetTrue)
                .help("Convert files one at a time instead of in parallel"),
        )
        .arg(
            Arg::new("report")
                .long("report-json")
                .value_name("FILE")
                .help("Write a JSON conversion report"),
        )
        .get_matches();

    let config = match matches.get_one::<String>("profile").map(String::as_str) {
        Some("computed-state") => CompilerConfig::computed_state(),
        _ => CompilerConfig::closures(),
    };

    let options = ConvertOptions {
        input_root: matches.get_one::<String>("input").unwrap().into(),
        output_root: matches.get_one::<String>("output").unwrap().into(),
        config,
        sequential: matches.get_flag("sequential"),
    };

    let result = match perform_convert(&options) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    };

    if let Some(report_path) = matches.get_one::<String>("report") {
        let report = serde_json::to_string_pretty(&result.outcomes)
            .expect("conversion outcomes serialize");
        if let Err(error) = std::fs::write(report_path, report) {
            eprintln!("Error: failed to write report {}: {}", report_path, error);
            process::exit(1);
        }
    }

    let failures = result.failure_count();
    if failures > 0 {
        eprintln!(
            "{} of {} files failed to convert",
            failures,
            result.outcomes.len()
        );
        process::exit(1);
    }
}
