use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::error::{LoadError, RowError};
use crate::format::parse_hex;
use crate::schema::ColumnMap;
use crate::types::{ColorRecord, Rgb};

/// Result of a load: the usable records plus every row that was dropped.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub records: Vec<ColorRecord>,
    pub skipped: Vec<RowError>,
    pub columns: ColumnMap,
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<ColorRecord>, LoadError> {
    Ok(load_report(path)?.records)
}

pub fn load_report<P: AsRef<Path>>(path: P) -> Result<Loaded, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io(e),
    })?;
    let loaded = load_report_from_reader(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        records = loaded.records.len(),
        skipped = loaded.skipped.len(),
        columns = ?loaded.columns,
        "loaded color dataset"
    );
    Ok(loaded)
}

pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<ColorRecord>, LoadError> {
    Ok(load_report_from_reader(reader)?.records)
}

/// Reads a header row followed by data rows. Fails only when the header
/// cannot be read or resolved; bad rows are skipped and reported.
pub fn load_report_from_reader<R: Read>(reader: R) -> Result<Loaded, LoadError> {
    let mut csv = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let columns = ColumnMap::resolve(csv.headers()?.iter());
    columns.validate()?;

    let mut records = Vec::new();
    let mut skipped = Vec::new();
    for result in csv.records() {
        let parsed = match result {
            Ok(row) => {
                let line = row.position().map_or(0, |p| p.line());
                parse_row(&row, &columns).map_err(|reason| RowError { line, reason })
            }
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => Err(RowError {
                line: e.position().map_or(0, |p| p.line()),
                reason: e.to_string(),
            }),
        };
        match parsed {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!(%err, "skipping malformed color row");
                skipped.push(err);
            }
        }
    }
    Ok(Loaded {
        records,
        skipped,
        columns,
    })
}

// RGB columns are authoritative; hex is only consulted when they fail to parse.
fn parse_row(row: &StringRecord, columns: &ColumnMap) -> Result<ColorRecord, String> {
    let field = |idx: Option<usize>| idx.and_then(|i| row.get(i)).unwrap_or("");

    let from_channels = columns.rgb().and_then(|(r, g, b)| {
        Some(Rgb::new(
            parse_channel(field(Some(r)))?,
            parse_channel(field(Some(g)))?,
            parse_channel(field(Some(b)))?,
        ))
    });
    let rgb = match (from_channels, columns.hex) {
        (Some(rgb), _) => rgb,
        (None, Some(hex)) => parse_hex(field(Some(hex)))
            .ok_or_else(|| format!("no valid RGB or hex value (hex {:?})", field(Some(hex))))?,
        (None, None) => {
            let (r, g, b) = columns.rgb().unwrap_or_default();
            return Err(format!(
                "invalid RGB value ({:?}, {:?}, {:?})",
                field(Some(r)),
                field(Some(g)),
                field(Some(b))
            ));
        }
    };
    Ok(ColorRecord::new(field(columns.name), rgb))
}

/// Parses a channel cell as an integer in `0..=255`. Float strings such as
/// `"255.0"` are accepted and truncated toward zero.
pub fn parse_channel(cell: &str) -> Option<u8> {
    let cell = cell.trim();
    if let Ok(v) = cell.parse::<i64>() {
        return u8::try_from(v).ok();
    }
    let v = cell.parse::<f64>().ok()?.trunc();
    if v.is_finite() && (0.0..=255.0).contains(&v) {
        Some(v as u8)
    } else {
        None
    }
}
