//! Page-structure inspection tool.
//!
//! Reads a JSON document of recognized lines per page, runs the full
//! analysis, and prints the resulting blocks and per-page statistics as
//! JSON for inspection and threshold tuning.
//!
//! Usage:
//!   cargo run --bin analyze_pages -- input.json
//!   cargo run --bin analyze_pages -- input.json --output report.json
//!
//! Input format:
//!   {
//!     "config": { "h1_threshold": 1.8, ... },     // optional, defaults apply
//!     "pages": [
//!       { "width": 2480.0,
//!         "lines": [ { "bbox": [{"x":..,"y":..}, ...], "text": "...", "conf": 0.97 } ] }
//!     ]
//!   }

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use serde::Deserialize;

use ocr_layout::layout::Line;
use ocr_layout::{LayoutConfig, Result, analyze_pages};

#[derive(Debug, Deserialize)]
struct PageInput {
    width: f32,
    #[serde(default)]
    lines: Vec<Line>,
}

#[derive(Debug, Deserialize)]
struct DocumentInput {
    #[serde(default)]
    config: LayoutConfig,
    pages: Vec<PageInput>,
}

struct ToolArgs {
    input: PathBuf,
    output: Option<PathBuf>,
}

impl ToolArgs {
    fn from_args() -> Option<Self> {
        let mut input = None;
        let mut output = None;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--output" => output = args.next().map(PathBuf::from),
                "--help" | "-h" => return None,
                _ => input = Some(PathBuf::from(arg)),
            }
        }

        input.map(|input| Self { input, output })
    }
}

fn run(args: &ToolArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.input)?;
    let document: DocumentInput = serde_json::from_str(&raw)?;
    document.config.validate()?;

    let pages: Vec<(Vec<Line>, f32)> = document
        .pages
        .into_iter()
        .map(|page| (page.lines, page.width))
        .collect();
    let analyses = analyze_pages(pages, &document.config)?;

    let report = serde_json::to_string_pretty(&analyses)?;
    match &args.output {
        Some(path) => fs::write(path, report)?,
        None => println!("{}", report),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(args) = ToolArgs::from_args() else {
        eprintln!("usage: analyze_pages <input.json> [--output report.json]");
        return ExitCode::FAILURE;
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}
