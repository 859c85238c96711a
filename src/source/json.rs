//! JSON file transaction source
//!
//! Reads `{ "transactions": [...] }` from disk on every fetch, so each
//! report sees the file as it is at request time.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{select, SourceFilter, TransactionSource};
use crate::error::{ReportError, ReportResult};
use crate::models::{ReportPeriod, Transaction, TransactionKind};

/// Serializable transaction file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionData {
    pub transactions: Vec<Transaction>,
}

/// A source reading a JSON transaction file
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every record in the file
    pub fn load(&self) -> ReportResult<Vec<Transaction>> {
        let path = &self.path;

        if !path.exists() {
            return Err(ReportError::Upstream(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let file = File::open(path).map_err(|e| {
            ReportError::Upstream(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let reader = BufReader::new(file);
        let data: TransactionData = serde_json::from_reader(reader).map_err(|e| {
            ReportError::Upstream(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        debug!(
            path = %path.display(),
            count = data.transactions.len(),
            "loaded transaction file"
        );
        Ok(data.transactions)
    }
}

impl TransactionSource for JsonFileSource {
    fn fetch(
        &self,
        kind: TransactionKind,
        period: ReportPeriod,
        filter: &SourceFilter,
    ) -> ReportResult<Vec<Transaction>> {
        let records = self.load()?;
        Ok(select(&records, kind, period, filter))
    }
}
