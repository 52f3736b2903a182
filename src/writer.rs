use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::ParamFileError;
use crate::types::{MhtParameters, Value, MODEL1_MAX_DIST, MODEL3_MAX_DIST};

/// What occupies a value position in the file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry {
    /// The next tunable field from [`MhtParameters::fields`].
    Field,
    /// A constant the tracker reads positionally but nobody tunes.
    Literal {
        label: &'static str,
        value: f64,
        text: &'static str,
    },
}

/// One value line and the comment lines written above it.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub comments: &'static [&'static str],
    pub entry: Entry,
}

const fn field(comments: &'static [&'static str]) -> Line {
    Line {
        comments,
        entry: Entry::Field,
    }
}

/// The tracker parses by position, so neither order nor count may change.
pub const LAYOUT: [Line; 21] = [
    field(&["; position varianceX"]),
    field(&[";", "; position varianceY"]),
    field(&[";", "; gradient variance"]),
    field(&[";", "; intensity Variance"]),
    field(&[";", "; process variance"]),
    field(&[";", "; probability of detection"]),
    field(&[";", ";Lamda_x"]),
    field(&[";", "; mean new tracks per scan"]),
    field(&[";", "; mean false alarms per scan"]),
    field(&[";", "; maximum number of global hypotheses per group"]),
    field(&[";", "; maximum depth of track trees"]),
    field(&[
        ";",
        "; minimum ratio between likelihoods of worst and best",
        ";   global hypotheses",
    ]),
    field(&[";", "; Intensity Threshold"]),
    Line {
        comments: &[
            ";",
            ";",
            "; maximum mahalanobis distance for validationi MODEL 1",
        ],
        entry: Entry::Literal {
            label: "MODEL 1",
            value: MODEL1_MAX_DIST,
            text: "5.9",
        },
    },
    field(&[
        ";",
        "; maximum mahalanobis distance for validationi MODEL 2 (CONSTANTVEL with z=2)",
    ]),
    Line {
        comments: &[";", "; maximum mahalanobis distance for validationi MODEL 3"],
        entry: Entry::Literal {
            label: "MODEL 3",
            value: MODEL3_MAX_DIST,
            text: "12.9",
        },
    },
    field(&[";", ";Initial state Variance(Velocity component)"]),
    field(&[";", "; number of scans to make"]),
    field(&[";", "; scan at which to start diagnostic A"]),
    field(&[";", "; scan at which to start diagnostic B"]),
    field(&[";", "; scan at which to start diagnostic C"]),
];

/// `%f` formatting: six decimals, C spellings for non-finite values.
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        "nan".to_string()
    } else if x.is_infinite() {
        if x > 0.0 { "inf" } else { "-inf" }.to_string()
    } else {
        format!("{:.6}", x)
    }
}

/// Renders the full parameter file, trailing newline included.
pub fn render(params: &MhtParameters) -> String {
    let mut fields = params.fields().into_iter();
    let mut out = String::with_capacity(1024);

    for line in LAYOUT.iter() {
        for comment in line.comments {
            out.push_str(comment);
            out.push('\n');
        }
        match line.entry {
            Entry::Literal { text, .. } => out.push_str(text),
            Entry::Field => match fields.next() {
                Some((_, Value::Float(v))) => out.push_str(&format_float(v)),
                Some((_, Value::Int(v))) => out.push_str(&v.to_string()),
                None => {}
            },
        }
        out.push('\n');
    }

    out
}

/// Creates or truncates `path` and writes the rendered parameters to it.
///
/// A failure part-way through may leave a truncated file behind.
pub fn write(path: impl AsRef<Path>, params: &MhtParameters) -> Result<(), ParamFileError> {
    let path = path.as_ref();
    let text = render(params);

    let file = File::create(path).map_err(|e| ParamFileError::io(path, e))?;
    let mut out = BufWriter::new(file);
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| ParamFileError::io(path, e))?;

    debug!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
