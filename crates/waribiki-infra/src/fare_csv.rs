//! CSV loader for route fares (運賃表)
//!
//! Accepts UTF-8 or CP932 (Shift-JIS), the latter being what spreadsheets on
//! Japanese Windows export by default.
//!
//! Expected header (English or Japanese names):
//! from,to,base,express  /  発駅,着駅,運賃,特急料金

use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use encoding_rs::SHIFT_JIS;
use waribiki_domain::model::{FareTable, RouteFare};
use waribiki_types::Yen;

use crate::error::TableError;
use crate::fare_loader::push_route;

const FROM_COLUMNS: [&str; 3] = ["from", "発駅", "出発駅"];
const TO_COLUMNS: [&str; 3] = ["to", "着駅", "到着駅"];
const BASE_COLUMNS: [&str; 2] = ["base", "運賃"];
const EXPRESS_COLUMNS: [&str; 2] = ["express", "特急料金"];

/// Load a fare table from a CSV file
pub fn load_fares_from_csv<P: AsRef<Path>>(path: P) -> Result<FareTable, TableError> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    let table = load_fares_from_csv_bytes(&bytes)?;
    tracing::debug!(path = %path.display(), routes = table.len(), "loaded route fares from CSV");
    Ok(table)
}

/// Load a fare table from raw CSV bytes
pub fn load_fares_from_csv_bytes(bytes: &[u8]) -> Result<FareTable, TableError> {
    let decoded = decode(bytes);
    let text = decoded.strip_prefix('\u{feff}').unwrap_or(decoded.as_ref());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let from_idx = find_column(&headers, &FROM_COLUMNS)?;
    let to_idx = find_column(&headers, &TO_COLUMNS)?;
    let base_idx = find_column(&headers, &BASE_COLUMNS)?;
    let express_idx = find_column(&headers, &EXPRESS_COLUMNS)?;

    let mut table = FareTable::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 2; // header is row 1

        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let route = RouteFare {
            from: record.get(from_idx).unwrap_or("").to_string(),
            to: record.get(to_idx).unwrap_or("").to_string(),
            base: parse_fare(record.get(base_idx).unwrap_or(""), row_num, "base")?,
            express: parse_fare(record.get(express_idx).unwrap_or(""), row_num, "express")?,
        };
        push_route(&mut table, row_num, route)?;
    }

    Ok(table)
}

fn decode(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }
    let (decoded, _, had_errors) = SHIFT_JIS.decode(bytes);
    if had_errors {
        // Continue anyway; broken station names surface as unknown routes
        tracing::warn!("some characters could not be decoded from CP932");
    }
    decoded
}

fn find_column(headers: &csv::StringRecord, names: &[&str]) -> Result<usize, TableError> {
    headers
        .iter()
        .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
        .ok_or_else(|| TableError::MissingColumn(names[0].to_string()))
}

/// Parse "6380", "6,380" or "6,380円"
fn parse_fare(value: &str, row: usize, column: &str) -> Result<Yen, TableError> {
    let cleaned: String = value
        .trim_end_matches('円')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    cleaned.trim().parse().map_err(|_| TableError::InvalidFare {
        row,
        column: column.to_string(),
        value: value.to_string(),
    })
}
