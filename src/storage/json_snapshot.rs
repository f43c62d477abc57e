use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use crate::core::refresh::SnapshotSource;
use crate::core::services::ServiceResult;
use crate::domain::budget::BudgetRecord;
use crate::domain::{Budget, Snapshot, Transaction};
use crate::errors::DataError;

pub const TRANSACTIONS_FILE: &str = "transactions.json";
pub const BUDGETS_FILE: &str = "budgets.json";
pub const RECEIPTS_FILE: &str = "receipts.json";

/// Budgets arrive either as a list or keyed by category id.
#[derive(Deserialize)]
#[serde(untagged)]
enum BudgetPayload {
    List(Vec<BudgetRecord>),
    Map(BTreeMap<String, BudgetRecord>),
}

/// Either `{"count": n}` or the receipt list itself.
#[derive(Deserialize)]
#[serde(untagged)]
enum ReceiptsPayload {
    Count { count: i64 },
    List(Vec<serde_json::Value>),
}

#[derive(Serialize)]
struct ReceiptsCount {
    count: i64,
}

pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>, DataError> {
    read_json(path)
}

pub fn load_budgets(path: &Path) -> Result<Vec<Budget>, DataError> {
    match read_json::<BudgetPayload>(path)? {
        BudgetPayload::List(records) => records
            .into_iter()
            .map(|record| record.into_budget(None))
            .collect::<Result<Vec<_>, _>>()
            .map_err(DataError::Malformed),
        BudgetPayload::Map(records) => records
            .into_iter()
            .map(|(key, record)| record.into_budget(Some(&key)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(DataError::Malformed),
    }
}

pub fn load_receipts_count(path: &Path) -> Result<i64, DataError> {
    match read_json::<ReceiptsPayload>(path)? {
        ReceiptsPayload::Count { count } => Ok(count),
        ReceiptsPayload::List(receipts) => i64::try_from(receipts.len())
            .map_err(|_| DataError::Malformed("receipt list is too long".into())),
    }
}

/// Writes a snapshot into `dir` using the same file layout the loader reads.
pub fn save_snapshot(dir: &Path, snapshot: &Snapshot) -> Result<(), DataError> {
    fs::create_dir_all(dir)?;
    write_json(&dir.join(TRANSACTIONS_FILE), &snapshot.transactions)?;
    write_json(&dir.join(BUDGETS_FILE), &snapshot.budgets)?;
    write_json(
        &dir.join(RECEIPTS_FILE),
        &ReceiptsCount {
            count: snapshot.receipts_count,
        },
    )?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Stages to a temporary file and renames so readers never see half a file.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), DataError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(value)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Reads the three payload files from a directory. Missing files are treated
/// as empty; malformed files are errors.
#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    dir: PathBuf,
}

impl JsonSnapshotSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn load(&self) -> Result<Snapshot, DataError> {
        let transactions = self.load_optional(TRANSACTIONS_FILE, load_transactions)?;
        let budgets = self.load_optional(BUDGETS_FILE, load_budgets)?;
        let receipts_count = self.load_optional(RECEIPTS_FILE, load_receipts_count)?;
        Ok(Snapshot {
            transactions,
            budgets,
            receipts_count,
        })
    }

    fn load_optional<T: Default>(
        &self,
        file: &str,
        loader: fn(&Path) -> Result<T, DataError>,
    ) -> Result<T, DataError> {
        let path = self.dir.join(file);
        if path.exists() {
            loader(&path)
        } else {
            debug!(path = %path.display(), "snapshot file missing; using empty default");
            Ok(T::default())
        }
    }
}

impl SnapshotSource for JsonSnapshotSource {
    fn fetch(&self) -> ServiceResult<Snapshot> {
        Ok(self.load()?)
    }
}
