use crate::domain::model::RecordStore;
use crate::domain::ports::RecordSource;
use crate::utils::error::{Field, Result, SearchError, SerialFieldError};
use csv::{ByteRecord, ReaderBuilder};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::num::IntErrorKind;
use std::path::PathBuf;

/// Tab-separated data file on local disk.
#[derive(Debug, Clone)]
pub struct TsvFileSource {
    path: PathBuf,
}

impl TsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for TsvFileSource {
    fn load(&self, required: usize) -> Result<RecordStore> {
        let file = File::open(&self.path).map_err(|source| SearchError::FileOpenError {
            path: self.path.display().to_string(),
            source,
        })?;

        let store = load_from_reader(file, required)?;
        tracing::info!("Loaded {} records from {}", store.len(), self.describe());
        Ok(store)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Reads exactly `required` lines of `<time>\t<name>\t<serial>` from `reader`.
///
/// Lines past `required` are never read. Any malformed line aborts the whole
/// load. Time and name are decoded lossily; the serial field must be UTF-8.
pub fn load_from_reader<R: Read>(reader: R, required: usize) -> Result<RecordStore> {
    // Names like "Lopez, Anthony" carry commas and quotes verbatim.
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .buffer_capacity(1024);

    let mut input = BufReader::new(reader);
    let mut store = RecordStore::with_capacity(required.min(64 * 1024));
    let mut buf = Vec::new();
    let mut row = ByteRecord::new();

    // Lines are numbered here, not by csv: csv silently drops blank lines.
    while store.len() < required {
        let line = store.len() + 1;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .map_err(|e| reject(SearchError::IoError(e)))?;
        if read == 0 {
            break;
        }
        let text = trim_line_ending(&buf);

        let mut rdr = builder.from_reader(text);
        let has_fields = !text.is_empty()
            && rdr
                .read_byte_record(&mut row)
                .map_err(|e| reject(SearchError::CsvError(e)))?;
        if !has_fields {
            return Err(reject(SearchError::LineFormatError {
                line,
                missing: Field::Time,
            }));
        }

        let (time, name, serial) = split_fields(&row, line)?;
        let serial_number = std::str::from_utf8(serial)
            .map_err(|_| SerialFieldError::NotAnInteger)
            .and_then(parse_serial)
            .map_err(|reason| {
                reject(SearchError::SerialNumberFormatError {
                    line,
                    value: String::from_utf8_lossy(serial).into_owned(),
                    reason,
                })
            })?;

        store.push(
            String::from_utf8_lossy(time),
            String::from_utf8_lossy(name),
            serial_number,
        );
    }

    if store.len() < required {
        return Err(reject(SearchError::InsufficientLinesError {
            available: store.len(),
            required,
        }));
    }

    Ok(store)
}

fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

fn split_fields(row: &ByteRecord, line: usize) -> Result<(&[u8], &[u8], &[u8])> {
    match (row.get(0), row.get(1), row.get(2)) {
        _ if row.len() > 3 => Err(reject(SearchError::ExtraFieldError {
            line,
            found: row.len(),
        })),
        (Some(time), Some(name), Some(serial)) => Ok((time, name, serial)),
        (None, _, _) => Err(reject(SearchError::LineFormatError {
            line,
            missing: Field::Time,
        })),
        (Some(_), None, _) => Err(reject(SearchError::LineFormatError {
            line,
            missing: Field::Name,
        })),
        (Some(_), Some(_), None) => Err(reject(SearchError::LineFormatError {
            line,
            missing: Field::SerialNumber,
        })),
    }
}

/// Parses a serial number field. Surrounding whitespace is ignored.
pub fn parse_serial(text: &str) -> std::result::Result<i32, SerialFieldError> {
    text.trim().parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => SerialFieldError::OutOfRange,
        _ => SerialFieldError::NotAnInteger,
    })
}

fn reject(err: SearchError) -> SearchError {
    tracing::debug!("Rejecting data file: {}", err);
    err
}
