//! Column-mapping spreadsheet import for platforms.
//!
//! Takes an uploaded CSV or Excel file, heuristically binds its headers to
//! canonical platform fields via a static alias table, coerces cell values
//! (dates, booleans, URLs), and produces rows ready for bulk insert. Row
//! level problems degrade to per-row skips; only an unreadable file or an
//! unmappable header row rejects the whole import.

use chrono::NaiveDate;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// File extensions the importer accepts.
pub const ALLOWED_EXTENSIONS: &[&str] = &["csv", "xlsx", "xls"];

/// Maximum number of skip reasons surfaced to the caller.
pub const MAX_SKIP_REASONS: usize = 5;

/// Trimmed, lower-cased values coerced to boolean `true`.
const TRUTHY_VALUES: &[&str] = &["yes", "true", "1", "y", "confirmed"];

/// Canonical field name -> accepted lower-cased header aliases.
///
/// For each field the first header (left to right) matching any alias is
/// bound; unmatched fields stay unbound and yield `None` for every row.
const FIELD_ALIASES: &[(&str, &[&str])] = &[
    (
        "name",
        &["name", "platform", "platform name", "site", "site name", "website", "blog name"],
    ),
    (
        "url",
        &["url", "website url", "link", "domain", "site url", "platform url", "web address"],
    ),
    ("tier", &["tier", "priority tier", "level"]),
    (
        "submission_type",
        &["submission type", "type", "submission", "submission method"],
    ),
    (
        "topic_to_submit",
        &["topic to submit", "topic", "article topic", "content topic"],
    ),
    ("difficulty", &["difficulty", "effort"]),
    (
        "contact_email",
        &["contact email", "email", "e-mail", "contact e-mail"],
    ),
    (
        "contact_name",
        &["contact name", "contact", "contact person", "editor"],
    ),
    (
        "pitch_sent_date",
        &["pitch sent date", "pitch sent", "pitch date", "pitched"],
    ),
    (
        "article_sent_date",
        &["article sent date", "article sent", "article date"],
    ),
    (
        "follow_up_1",
        &["follow up 1", "follow-up 1", "followup 1", "first follow up"],
    ),
    (
        "follow_up_2",
        &["follow up 2", "follow-up 2", "followup 2", "second follow up"],
    ),
    ("response_date", &["response date", "response", "replied"]),
    ("status", &["status", "state", "stage"]),
    (
        "publication_date",
        &["publication date", "published", "publish date", "live date"],
    ),
    (
        "live_url",
        &["live url", "live link", "published url", "article url"],
    ),
    (
        "backlink_confirmed",
        &["backlink confirmed", "backlink", "link confirmed", "confirmed"],
    ),
    ("notes", &["notes", "comments", "remarks"]),
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Whole-import failures. Per-row problems are not errors; they become skip
/// entries in the [`ParsedImport`].
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The file extension is not csv/xlsx/xls.
    #[error("Unsupported file type '.{0}'. Upload a .csv, .xlsx or .xls file")]
    UnsupportedExtension(String),

    /// The file could not be decoded or parsed at all.
    #[error("Could not read file: {0}")]
    Decode(String),

    /// Neither a name nor a url column could be bound from the header row.
    #[error("Could not find a name or URL column. Headers found: {}", .headers.join(", "))]
    NoUsableColumns { headers: Vec<String> },
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// One platform parsed from an accepted row. Field names mirror the
/// `platforms` table; `None` means the column was unbound or the cell blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedPlatform {
    pub name: String,
    pub url: String,
    pub tier: Option<String>,
    pub submission_type: Option<String>,
    pub topic_to_submit: Option<String>,
    pub difficulty: Option<String>,
    pub contact_email: Option<String>,
    pub contact_name: Option<String>,
    pub pitch_sent_date: Option<NaiveDate>,
    pub article_sent_date: Option<NaiveDate>,
    pub follow_up_1: Option<NaiveDate>,
    pub follow_up_2: Option<NaiveDate>,
    pub response_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub publication_date: Option<NaiveDate>,
    pub live_url: Option<String>,
    pub backlink_confirmed: bool,
    pub notes: Option<String>,
}

/// Result of parsing an upload: rows to insert plus skip accounting.
///
/// Entirely blank rows are dropped before counting and appear in neither
/// `platforms` nor `skipped`.
#[derive(Debug, Serialize)]
pub struct ParsedImport {
    pub platforms: Vec<ParsedPlatform>,
    pub skipped: usize,
    /// At most [`MAX_SKIP_REASONS`] human-readable reasons.
    pub skip_reasons: Vec<String>,
}

/// Header-to-column binding resolved once per import.
struct ColumnMap {
    bindings: Vec<(&'static str, usize)>,
}

impl ColumnMap {
    /// Bind canonical fields to header positions. Fails only when neither
    /// `name` nor `url` can be bound.
    fn resolve(headers: &[String]) -> Result<Self, ImportError> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        let mut bindings = Vec::new();
        for (field, aliases) in FIELD_ALIASES {
            if let Some(idx) = normalized
                .iter()
                .position(|h| aliases.contains(&h.as_str()))
            {
                bindings.push((*field, idx));
            }
        }

        let map = Self { bindings };
        if map.index_of("name").is_none() && map.index_of("url").is_none() {
            return Err(ImportError::NoUsableColumns {
                headers: headers.iter().map(|h| h.trim().to_string()).collect(),
            });
        }
        Ok(map)
    }

    fn index_of(&self, field: &str) -> Option<usize> {
        self.bindings
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, idx)| *idx)
    }

    /// Extract the trimmed cell for `field`, or `None` if the field is
    /// unbound or the cell is blank.
    fn text<'a>(&self, row: &'a [String], field: &str) -> Option<&'a str> {
        let idx = self.index_of(field)?;
        let value = row.get(idx)?.trim();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    fn owned(&self, row: &[String], field: &str) -> Option<String> {
        self.text(row, field).map(str::to_string)
    }

    fn date(&self, row: &[String], field: &str) -> Option<NaiveDate> {
        self.text(row, field).and_then(parse_date)
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Parse an uploaded file into platform rows.
///
/// `extension` is matched case-insensitively against [`ALLOWED_EXTENSIONS`].
pub fn parse_upload(data: &[u8], extension: &str) -> Result<ParsedImport, ImportError> {
    let ext = extension.trim_start_matches('.').to_lowercase();
    let raw_rows = match ext.as_str() {
        "csv" => parse_csv(data)?,
        "xlsx" | "xls" => parse_workbook(data)?,
        _ => return Err(ImportError::UnsupportedExtension(ext)),
    };

    // Entirely blank rows are dropped before header detection.
    let mut rows = raw_rows
        .into_iter()
        .filter(|row| !row.iter().all(|cell| cell.trim().is_empty()));

    let headers = rows.next().ok_or_else(|| {
        ImportError::Decode("File contains no rows".to_string())
    })?;
    let columns = ColumnMap::resolve(&headers)?;

    let mut platforms = Vec::new();
    let mut skipped = 0;
    let mut skip_reasons = Vec::new();

    for (data_idx, mut row) in rows.enumerate() {
        // Pad short rows to the header width.
        if row.len() < headers.len() {
            row.resize(headers.len(), String::new());
        }

        let name = columns.text(&row, "name").unwrap_or("");
        let url = columns.text(&row, "url").unwrap_or("");

        // Both empty: treat as blank, silently dropped.
        if name.is_empty() && url.is_empty() {
            continue;
        }

        // A name without a URL is a skip, not an abort.
        if url.is_empty() {
            skipped += 1;
            if skip_reasons.len() < MAX_SKIP_REASONS {
                skip_reasons.push(format!("Row {}: missing URL ('{name}')", data_idx + 2));
            }
            continue;
        }

        // A URL without a name borrows the URL as its name.
        let name = if name.is_empty() { url } else { name };

        platforms.push(ParsedPlatform {
            name: name.to_string(),
            url: normalize_url(url),
            tier: columns.owned(&row, "tier"),
            submission_type: columns.owned(&row, "submission_type"),
            topic_to_submit: columns.owned(&row, "topic_to_submit"),
            difficulty: columns.owned(&row, "difficulty"),
            contact_email: columns.owned(&row, "contact_email"),
            contact_name: columns.owned(&row, "contact_name"),
            pitch_sent_date: columns.date(&row, "pitch_sent_date"),
            article_sent_date: columns.date(&row, "article_sent_date"),
            follow_up_1: columns.date(&row, "follow_up_1"),
            follow_up_2: columns.date(&row, "follow_up_2"),
            response_date: columns.date(&row, "response_date"),
            status: columns.owned(&row, "status"),
            publication_date: columns.date(&row, "publication_date"),
            live_url: columns
                .text(&row, "live_url")
                .map(normalize_url),
            backlink_confirmed: columns
                .text(&row, "backlink_confirmed")
                .map(coerce_bool)
                .unwrap_or(false),
            notes: columns.owned(&row, "notes"),
        });
    }

    Ok(ParsedImport {
        platforms,
        skipped,
        skip_reasons,
    })
}

// ---------------------------------------------------------------------------
// File decoding
// ---------------------------------------------------------------------------

/// Parse raw CSV bytes into rows of cells.
///
/// Tolerates a UTF-8 byte-order marker and handles quoted fields with
/// doubled-quote escapes.
fn parse_csv(data: &[u8]) -> Result<Vec<Vec<String>>, ImportError> {
    let text = std::str::from_utf8(data)
        .map_err(|e| ImportError::Decode(format!("Invalid UTF-8: {e}")))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    Ok(text.lines().map(parse_csv_line).collect())
}

/// Parse a single CSV line, handling quoted fields.
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped quote.
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == ',' {
            result.push(current.clone());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    result.push(current);
    result
}

/// Read the first worksheet of an Excel file, coercing every cell to text.
fn parse_workbook(data: &[u8]) -> Result<Vec<Vec<String>>, ImportError> {
    use calamine::{open_workbook_auto_from_rs, Data, Reader};

    let cursor = std::io::Cursor::new(data);
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| ImportError::Decode(format!("Could not open workbook: {e}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ImportError::Decode("Workbook has no sheets".to_string()))?
        .map_err(|e| ImportError::Decode(format!("Could not read sheet: {e}")))?;

    let rows = range
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Data::Empty => String::new(),
                    Data::String(s) => s.clone(),
                    // Whole floats render without the trailing ".0" so tier
                    // and similar numeric columns match their aliases' text.
                    Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
                    other => other.to_string(),
                })
                .collect()
        })
        .collect();

    Ok(rows)
}

// ---------------------------------------------------------------------------
// Cell coercion
// ---------------------------------------------------------------------------

/// Prefix a scheme-less URL with `https://`.
pub fn normalize_url(value: &str) -> String {
    let v = value.trim();
    if v.starts_with("http://") || v.starts_with("https://") {
        v.to_string()
    } else {
        format!("https://{v}")
    }
}

/// True exactly when the trimmed, lower-cased value is a known truthy token.
pub fn coerce_bool(value: &str) -> bool {
    TRUTHY_VALUES.contains(&value.trim().to_lowercase().as_str())
}

/// Best-effort natural-language date parsing; anything unparseable is `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }
    // Anchor date-only inputs to UTC midnight so the stored date never
    // shifts with the server's local timezone.
    dateparser::parse_with_timezone(v, &chrono::Utc)
        .ok()
        .map(|dt| dt.date_naive())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
