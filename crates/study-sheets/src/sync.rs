//! Persist an edited sheet as CSV plus records
//!
//! An edited sheet arrives from the spreadsheet editor as JSON. It is
//! converted to records first, so a bad header or row leaves the data
//! directory untouched. Both files are then staged next to their targets
//! and renamed into place, records first, so a failed write never leaves a
//! new `<Name>.csv` beside stale `<name>.json` records.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::{AnyRecordSet, CsvWriteOptions, CsvWriter, Sheet, SheetExt};

/// Files written by [`sync_sheet`] and the new fingerprint
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    /// Path of the rewritten CSV source
    pub csv_path: PathBuf,
    /// Path of the rewritten records JSON
    pub json_path: PathBuf,
    /// Change fingerprint of the records
    pub hash: String,
    /// Converted records
    pub records: AnyRecordSet,
}

/// Convert `sheet` and write `<dir>/<Name>.csv` and `<dir>/<name>.json`
pub fn sync_sheet(sheet: &Sheet, dir: &Path, options: &CsvWriteOptions) -> Result<SyncOutcome> {
    sheet.ensure_filled()?;
    let records = sheet.to_records()?;

    let csv_path = dir.join(format!("{}.csv", sheet.name()));
    let json_path = dir.join(format!("{}.json", sheet.name().to_lowercase()));

    let json = records.to_json()?;
    let mut csv = Vec::new();
    CsvWriter::write(sheet, &mut csv, options)?;

    let json_tmp = stage(&json_path, json.as_bytes())?;
    let csv_tmp = match stage(&csv_path, &csv) {
        Ok(tmp) => tmp,
        Err(e) => {
            let _ = fs::remove_file(&json_tmp);
            return Err(e.into());
        }
    };

    if let Err(e) = fs::rename(&json_tmp, &json_path) {
        let _ = fs::remove_file(&json_tmp);
        let _ = fs::remove_file(&csv_tmp);
        return Err(e.into());
    }
    fs::rename(&csv_tmp, &csv_path)?;

    info!(
        sheet = sheet.name(),
        records = records.len(),
        hash = records.hash(),
        "sheet synced"
    );

    Ok(SyncOutcome {
        csv_path,
        json_path,
        hash: records.hash().to_string(),
        records,
    })
}

/// Write `bytes` to a temp file beside `path` and return the temp path
fn stage(path: &Path, bytes: &[u8]) -> io::Result<PathBuf> {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    let tmp = path.with_file_name(name);

    let mut file = File::create(&tmp)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    debug!(path = %tmp.display(), "staged");
    Ok(tmp)
}
