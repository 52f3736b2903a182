//! Positional parser for parameter files.
//!
//! Follows the tracker's loading convention: lines starting with `;` are
//! skipped, and each remaining line fills the next value position in
//! [`LAYOUT`] order.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::ParamFileError;
use crate::types::{MhtParameters, Slot};
use crate::writer::{Entry, LAYOUT};

pub fn read(path: impl AsRef<Path>) -> Result<MhtParameters, ParamFileError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| ParamFileError::io(path, e))?;
    parse(&text)
}

/// The frozen gate lines must hold their fixed values.
pub fn parse(text: &str) -> Result<MhtParameters, ParamFileError> {
    let mut values = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.starts_with(';'))
        .map(|(i, line)| (i + 1, line.trim()));

    let mut params = MhtParameters::default();
    let mut slots = params.fields_mut().into_iter();

    for line in LAYOUT.iter() {
        match line.entry {
            Entry::Literal { label, value, .. } => {
                let (lineno, text) = values
                    .next()
                    .ok_or(ParamFileError::MissingValue { field: label })?;
                let found = parse_float(label, lineno, text)?;
                if found != value {
                    return Err(ParamFileError::LiteralMismatch {
                        label,
                        expected: value,
                        found,
                    });
                }
            }
            Entry::Field => {
                let Some((field, slot)) = slots.next() else {
                    break;
                };
                let (lineno, text) = values
                    .next()
                    .ok_or(ParamFileError::MissingValue { field })?;
                match slot {
                    Slot::Float(v) => *v = parse_float(field, lineno, text)?,
                    Slot::Int(v) => *v = parse_int(field, lineno, text)?,
                }
            }
        }
    }
    drop(slots);

    debug!("parsed {} value lines", LAYOUT.len());
    Ok(params)
}

fn parse_float(field: &'static str, line: usize, text: &str) -> Result<f64, ParamFileError> {
    text.parse().map_err(|_| ParamFileError::InvalidValue {
        field,
        line,
        text: text.to_string(),
    })
}

fn parse_int(field: &'static str, line: usize, text: &str) -> Result<i64, ParamFileError> {
    text.parse().map_err(|_| ParamFileError::InvalidValue {
        field,
        line,
        text: text.to_string(),
    })
}
