// src/workbook.rs
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum WorkbookError {
    #[error("failed to open workbook: {0}")]
    Open(#[source] calamine::Error),
    #[error("failed to read sheet '{name}': {source}")]
    Sheet {
        name: String,
        #[source]
        source: calamine::Error,
    },
}

/// Reads every row's first-column cell as text, across all sheets of the
/// workbook, in sheet order then row order. Rows whose first cell is empty
/// are skipped. The on-disk format (`.xls`, `.xlsx`, `.ods`, including
/// legacy codepage translation) is calamine's concern.
pub fn read_first_column(path: &Path) -> Result<Vec<String>, WorkbookError> {
    let mut workbook = open_workbook_auto(path).map_err(WorkbookError::Open)?;

    let mut cells = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&name).map_err(|source| WorkbookError::Sheet {
            name: name.clone(),
            source,
        })?;
        debug!("Sheet '{}': {} rows", name, range.height());

        for row in range.rows() {
            match row.first() {
                None | Some(Data::Empty) => continue,
                Some(cell) => cells.push(cell.to_string()),
            }
        }
    }
    Ok(cells)
}
