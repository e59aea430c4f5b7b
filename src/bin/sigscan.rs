//! Signature and PDF/A scanner
//!
//! Prints one JSON report per input file.
//!
//! Usage:
//!   sigscan signed.pdf other.pdf
//!   sigscan --pretty signed.pdf
//!   RUST_LOG=debug sigscan signed.pdf

use pdf_sigscan::{AnalyzerConfig, FileSampler, SignatureAnalyzer, SignatureReport};
use std::path::{Path, PathBuf};

struct ScanConfig {
    files: Vec<PathBuf>,
    pretty: bool,
}

impl ScanConfig {
    fn from_args() -> Self {
        Self::parse(std::env::args().skip(1))
    }

    /// Parse arguments without the program name.
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut files = Vec::new();
        let mut pretty = false;

        for arg in args {
            match arg.as_str() {
                "--pretty" | "-p" => {
                    pretty = true;
                },
                _ => {
                    files.push(PathBuf::from(&arg));
                },
            }
        }

        Self { files, pretty }
    }
}

fn scan_file(
    path: &Path,
    sampler: &FileSampler,
    analyzer: &SignatureAnalyzer,
    pretty: bool,
) -> pdf_sigscan::Result<String> {
    let buffer = sampler.sample_path(path)?;
    let report = SignatureReport::from_analysis(&analyzer.analyze(&buffer));

    if pretty {
        report.to_json_pretty()
    } else {
        report.to_json()
    }
}

fn main() {
    env_logger::init();

    let config = ScanConfig::from_args();
    if config.files.is_empty() {
        eprintln!("Usage: sigscan [--pretty] FILE...");
        std::process::exit(2);
    }

    let analyzer_config = AnalyzerConfig::default();
    let sampler = FileSampler::new(analyzer_config.sampling);
    let analyzer = SignatureAnalyzer::new(analyzer_config);

    let mut failed = 0;
    for path in &config.files {
        match scan_file(path, &sampler, &analyzer, config.pretty) {
            Ok(json) if config.pretty => {
                println!("{}:\n{}", path.display(), json);
            },
            Ok(json) => {
                println!("{}\t{}", path.display(), json);
            },
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                failed += 1;
            },
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }
}
