use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::{Attribute, Dataset, Record};
use crate::error::{ChartError, ChartResult};

const STATE_COLUMN: &str = "state";
const ABBR_COLUMN: &str = "abbr";

/// Column positions of every field a `Record` needs.
struct ColumnIndex {
    state: usize,
    abbr: usize,
    numeric: [usize; 6],
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> ChartResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim() == name)
                .ok_or_else(|| {
                    ChartError::InvalidData(format!("dataset is missing required column `{name}`"))
                })
        };

        let mut numeric = [0; 6];
        for (slot, attribute) in numeric.iter_mut().zip(Attribute::ALL) {
            *slot = find(attribute.key())?;
        }

        Ok(Self {
            state: find(STATE_COLUMN)?,
            abbr: find(ABBR_COLUMN)?,
            numeric,
        })
    }
}

/// Converts a numeric cell; empty or unparsable text becomes NaN.
#[must_use]
pub fn coerce_numeric(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Reads a headed CSV table into a dataset.
///
/// The six numeric columns are coerced per [`coerce_numeric`]; name columns are
/// kept verbatim and any extra column is ignored. Missing required columns,
/// ragged rows and empty tables are rejected.
pub fn load_dataset_from_reader<R: Read>(reader: R) -> ChartResult<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    read_dataset(&mut reader)
}

/// Reads the dataset from a CSV file on disk.
pub fn load_dataset_from_path(path: impl AsRef<Path>) -> ChartResult<Dataset> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| ChartError::DataLoad {
            path: path.to_path_buf(),
            source,
        })?;
    let dataset = read_dataset(&mut reader)?;
    debug!(path = %path.display(), records = dataset.len(), "loaded dataset");
    Ok(dataset)
}

fn read_dataset<R: Read>(reader: &mut csv::Reader<R>) -> ChartResult<Dataset> {
    let columns = ColumnIndex::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    let mut coerced_nan = 0usize;
    for row in reader.records() {
        let row = row?;
        let text = |index: usize| row.get(index).unwrap_or_default();

        let mut values = [0.0; 6];
        for (value, index) in values.iter_mut().zip(columns.numeric) {
            *value = coerce_numeric(text(index));
            if value.is_nan() {
                coerced_nan += 1;
            }
        }
        let [poverty, age, income, healthcare, smokes, obesity] = values;

        records.push(Record {
            state: text(columns.state).to_owned(),
            abbr: text(columns.abbr).to_owned(),
            poverty,
            age,
            income,
            healthcare,
            smokes,
            obesity,
        });
    }

    if coerced_nan > 0 {
        warn!(
            fields = coerced_nan,
            "dataset contains non-numeric values; affected markers cannot be placed"
        );
    }
    debug!(records = records.len(), "parsed dataset rows");
    Dataset::new(records)
}
