//! Perform Convert
//!
//! Batch conversion entry point: discovery, per-file conversion, and
//! parallel fan-out. Each file is independent; failures are collected as
//! per-file outcomes and never abort the batch.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use rayon::prelude::*;
use serde::Serialize;

use vue_compiler::{convert_sections, parse_sfc, CompilerConfig};

use crate::output_paths::{ensure_output_dir, output_target};

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    pub config: CompilerConfig,
    pub sequential: bool,
}

/// Result of converting one input file.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct ConvertResult {
    pub outcomes: Vec<FileOutcome>,
}

impl ConvertResult {
    pub fn failure_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.error.is_some()).count()
    }
}

/// Discover and convert every component under the input root.
pub fn perform_convert(options: &ConvertOptions) -> Result<ConvertResult> {
    let pattern = options
        .input_root
        .join("**")
        .join("*.vue")
        .to_string_lossy()
        .to_string();
    let mut files: Vec<PathBuf> = glob::glob(&pattern)
        .context("invalid input glob pattern")?
        .filter_map(|entry| entry.ok())
        .collect();
    files.sort();

    println!("Converting {} component files...", files.len());

    let convert_one = |file: &PathBuf| -> FileOutcome {
        match convert_file(options, file) {
            Ok(output) => FileOutcome {
                input: file.clone(),
                output: Some(output),
                error: None,
            },
            Err(error) => FileOutcome {
                input: file.clone(),
                output: None,
                error: Some(format!("{:#}", error)),
            },
        }
    };

    let outcomes: Vec<FileOutcome> = if options.sequential {
        files.iter().map(convert_one).collect()
    } else {
        files.par_iter().map(convert_one).collect()
    };

    for outcome in &outcomes {
        match (&outcome.output, &outcome.error) {
            (Some(output), _) => {
                println!("Converted {} -> {}", outcome.input.display(), output.display());
            }
            (None, Some(error)) => {
                eprintln!("Error: {}: {}", outcome.input.display(), error);
            }
            _ => {}
        }
    }

    Ok(ConvertResult { outcomes })
}

fn convert_file(options: &ConvertOptions, file: &PathBuf) -> Result<PathBuf> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let target = output_target(&options.input_root, &options.output_root, file);
    ensure_output_dir(&target)
        .with_context(|| format!("failed to create {}", target.dir.display()))?;

    let sections = parse_sfc(&source);

    // The stylesheet is written before script resolution; a failing
    // script leaves at most the stylesheet behind.
    fs::write(&target.style_file, sections.style.as_deref().unwrap_or(""))
        .with_context(|| format!("failed to write {}", target.style_file.display()))?;

    let component = convert_sections(&sections, &target.name, &options.config)
        .map_err(|error| anyhow!("{}", error))?;
    fs::write(&target.component_file, component)
        .with_context(|| format!("failed to write {}", target.component_file.display()))?;

    Ok(target.component_file)
}
