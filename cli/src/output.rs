pub mod csv;
pub mod text;

use std::io::{self, Write};
use std::path::PathBuf;

use asnmap_common::lookup::LookupResult;
use tracing::info;

/// Where the finished batch goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human readable blocks on stdout.
    Text,
    /// A CSV file at the given path.
    Csv(PathBuf),
}

impl From<Option<PathBuf>> for OutputFormat {
    fn from(csv_path: Option<PathBuf>) -> Self {
        match csv_path {
            Some(path) => Self::Csv(path),
            None => Self::Text,
        }
    }
}

impl OutputFormat {
    pub fn present(&self, results: &[LookupResult]) -> anyhow::Result<()> {
        match self {
            Self::Text => {
                let mut stdout = io::stdout().lock();
                text::write_text(&mut stdout, results)?;
                stdout.flush()?;
            }
            Self::Csv(path) => {
                csv::write_csv_file(path, results)?;
                info!("Results written to {}", path.display());
            }
        }
        Ok(())
    }
}
