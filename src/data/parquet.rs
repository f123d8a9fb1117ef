//! Parquet project tables
//!
//! Every column is cast to UTF-8 and handed to the same column
//! classification as the CSV loader, so both formats yield identical
//! project tables.

use std::fs::File;
use std::path::Path;

use arrow::array::{Array, AsArray};
use arrow::compute::cast;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::RawTable;
use crate::{Error, Result};

/// Read a Parquet file into an untyped table
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a column cannot be
/// rendered as text
pub fn read_raw_table(path: impl AsRef<Path>) -> Result<RawTable> {
    let file = File::open(path.as_ref())?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .map_err(|e| Error::Data(format!("Failed to create reader builder: {e}")))?;
    let headers = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder
        .build()
        .map_err(|e| Error::Data(format!("Failed to build reader: {e}")))?;

    let mut rows = Vec::new();
    for batch_result in reader {
        let batch = batch_result.map_err(|e| Error::Data(format!("Failed to read batch: {e}")))?;
        rows.extend(batch_to_rows(&batch)?);
    }

    Ok(RawTable { headers, rows })
}

fn batch_to_rows(batch: &RecordBatch) -> Result<Vec<Vec<String>>> {
    let mut rows = vec![Vec::with_capacity(batch.num_columns()); batch.num_rows()];

    for (i, column) in batch.columns().iter().enumerate() {
        let text = cast(column, &DataType::Utf8).map_err(|e| {
            Error::Data(format!(
                "Column '{}' cannot be read as text: {e}",
                batch.schema().field(i).name()
            ))
        })?;
        let strings = text.as_string::<i32>();
        for (r, row) in rows.iter_mut().enumerate() {
            let cell = if strings.is_null(r) {
                String::new()
            } else {
                strings.value(r).to_string()
            };
            row.push(cell);
        }
    }

    Ok(rows)
}
