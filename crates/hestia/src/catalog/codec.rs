//! Record codec: converts between the delimited device file format and
//! in-memory devices.
//!
//! The wire format is one header line followed by comma-separated records
//! of nine positional fields:
//!
//! ```text
//! DeviceID, DeviceType, DeviceName, Brightness, Colour, CameraResolution, CurrentTemperature, TargetTemperature, SpeakerVolume
//! ```
//!
//! There is no quoting or escaping; fields are not trimmed. Empty numeric
//! columns read as zero. Extra fields beyond the ninth are ignored, which
//! keeps rows with a trailing comma loadable.

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use super::catalog::Catalog;
use super::device::Device;
use super::device::DeviceKind;
use super::device::DeviceTag;

/// Header line, written verbatim on save and discarded on load.
pub const HEADER: &str = "DeviceID, DeviceType, DeviceName, Brightness, Colour, CameraResolution, CurrentTemperature, TargetTemperature, SpeakerVolume";

const FIELD_COUNT: usize = 9;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("failed to read device file {0}: {1}")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to write device file {0}: {1}")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: RecordError,
    },
}

/// Failure to coerce a single record line.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("expected 9 fields, found {found}")]
    FieldCount { found: usize },

    #[error("invalid integer in {field}: {source}")]
    InvalidInt {
        field: &'static str,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid number in {field}: {source}")]
    InvalidFloat {
        field: &'static str,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Outcome of parsing one record line.
///
/// Unknown type tags are a value, not an error, so the caller decides
/// whether to log, count, or abort.
#[derive(Debug)]
pub enum ParsedRecord {
    Device(Device),
    /// The DeviceType field did not name a known kind; the row produces
    /// nothing.
    UnknownKind(String),
}

/// Result of a catalog load: devices in file order plus how many rows were
/// skipped for carrying an unrecognized type tag.
#[derive(Debug)]
pub struct LoadSummary {
    pub catalog: Catalog,
    pub skipped: usize,
}

fn or_zero(field: &str) -> &str {
    if field.is_empty() {
        "0"
    } else {
        field
    }
}

fn parse_int(field: &'static str, value: &str) -> Result<i32, RecordError> {
    value
        .parse()
        .map_err(|source| RecordError::InvalidInt { field, source })
}

fn parse_float(field: &'static str, value: &str) -> Result<f64, RecordError> {
    value
        .parse()
        .map_err(|source| RecordError::InvalidFloat { field, source })
}

/// Parse one record line.
///
/// Every numeric column is coerced before the type tag is inspected, so a
/// malformed number anywhere in the row fails the parse even when the field
/// is irrelevant to the row's kind (or the kind is unknown). Empty numeric
/// columns substitute zero first.
pub fn parse_record(line: &str) -> Result<ParsedRecord, RecordError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < FIELD_COUNT {
        return Err(RecordError::FieldCount {
            found: fields.len(),
        });
    }

    let id = parse_int("DeviceID", fields[0])?;
    let name = fields[2].to_string();
    let brightness = parse_float("Brightness", or_zero(fields[3]))?;
    let colour = fields[4];
    let resolution = fields[5];
    let current_temperature = parse_float("CurrentTemperature", or_zero(fields[6]))?;
    let target_temperature = parse_float("TargetTemperature", or_zero(fields[7]))?;
    let volume = parse_int("SpeakerVolume", or_zero(fields[8]))?;

    let tag = match DeviceTag::from_str(fields[1]) {
        Ok(tag) => tag,
        Err(_) => return Ok(ParsedRecord::UnknownKind(fields[1].to_string())),
    };

    let kind = match tag {
        DeviceTag::Light => DeviceKind::Light {
            brightness,
            colour: colour.to_string(),
        },
        DeviceTag::SecurityCamera => DeviceKind::SecurityCamera {
            resolution: resolution.to_string(),
        },
        DeviceTag::Thermostat => DeviceKind::Thermostat {
            current_temperature,
            target_temperature,
        },
        DeviceTag::Speaker => DeviceKind::Speaker { volume },
    };

    Ok(ParsedRecord::Device(Device::new(id, name, kind)))
}

/// Load a device file into a fresh catalog.
///
/// The first line is a header and is discarded. A malformed record aborts
/// the whole load with the offending line number; no partial catalog
/// survives. Rows with an unrecognized type tag are skipped with a warning
/// and counted in the summary.
pub fn load(path: impl AsRef<Path>) -> Result<LoadSummary, CodecError> {
    let path = path.as_ref();
    let contents =
        fs::read_to_string(path).map_err(|e| CodecError::Read(path.to_path_buf(), e))?;

    let mut catalog = Catalog::new();
    let mut skipped = 0;

    for (idx, line) in contents.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        let record = parse_record(line).map_err(|source| CodecError::Record {
            line: line_no,
            source,
        })?;

        match record {
            ParsedRecord::Device(device) => {
                if catalog.contains_id(device.id) {
                    warn!("line {}: duplicate device id {}, keeping both", line_no, device.id);
                }
                catalog.add(device);
            }
            ParsedRecord::UnknownKind(tag) => {
                warn!("line {}: unrecognized device type '{}', skipping row", line_no, tag);
                skipped += 1;
            }
        }
    }

    Ok(LoadSummary { catalog, skipped })
}

/// Render one device as a nine-field record row.
///
/// Every variant fills its own columns and leaves the rest empty, so each
/// row re-parses to the same device.
pub fn format_record(device: &Device) -> String {
    let id = device.id;
    let tag = device.kind.tag();
    let name = &device.name;

    match &device.kind {
        DeviceKind::Light { brightness, colour } => {
            format!("{},{},{},{},{},,,,", id, tag, name, brightness, colour)
        }
        DeviceKind::SecurityCamera { resolution } => {
            format!("{},{},{},,,{},,,", id, tag, name, resolution)
        }
        DeviceKind::Thermostat {
            current_temperature,
            target_temperature,
        } => format!(
            "{},{},{},,,,{},{},",
            id, tag, name, current_temperature, target_temperature
        ),
        DeviceKind::Speaker { volume } => {
            format!("{},{},{},,,,,,{}", id, tag, name, volume)
        }
    }
}

/// Write the full catalog to a device file: header first, one row per
/// device, assembled in memory and written exactly once.
pub fn save(path: impl AsRef<Path>, catalog: &Catalog) -> Result<(), CodecError> {
    let path = path.as_ref();

    let mut out = String::from(HEADER);
    out.push('\n');
    for device in catalog.all() {
        out.push_str(&format_record(device));
        out.push('\n');
    }

    fs::write(path, out).map_err(|e| CodecError::Write(path.to_path_buf(), e))
}
