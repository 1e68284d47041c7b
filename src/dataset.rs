//! Reading pattern files and writing classification results.
//!
//! A pattern file starts with the number of records, followed by one record
//! per line:
//!
//! ```text
//! 3
//! 1.0,2.5;setosa
//! 0.5,1.5;versicolor
//! 2.0,0.1;setosa
//! ```
//!
//! Vector components are separated by `,` and the label follows `;`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DatasetError, Result};
use crate::knn::pattern::{Pattern, PatternKind};

const LABEL_SEPARATOR: char = ';';
const VECTOR_SEPARATOR: char = ',';

/// Loads a training or testing set from `path`.
///
/// Training records must carry a label. For testing records the label is
/// optional and becomes the pattern's correct label, never its assigned one.
pub fn load_patterns(path: impl AsRef<Path>, kind: PatternKind) -> Result<Vec<Pattern>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let patterns = parse_patterns(&content, path, kind)?;
    debug!(path = %path.display(), ?kind, count = patterns.len(), "loaded patterns");
    Ok(patterns)
}

/// Parses the contents of a pattern file. `path` is used for error context only.
pub fn parse_patterns(content: &str, path: &Path, kind: PatternKind) -> Result<Vec<Pattern>> {
    let mut lines = content.lines().enumerate();

    let count_line = lines
        .next()
        .map(|(_, line)| line.trim())
        .filter(|line| !line.is_empty())
        .ok_or_else(|| DatasetError::MissingCount {
            path: path.to_path_buf(),
        })?;
    let expected: usize = count_line
        .parse()
        .map_err(|_| DatasetError::MalformedCount {
            path: path.to_path_buf(),
            value: count_line.to_string(),
        })?;

    let mut patterns = Vec::with_capacity(expected);
    for (index, line) in lines {
        let line_no = index + 1;
        if patterns.len() == expected {
            if line.trim().is_empty() {
                continue;
            }
            let extra = content.lines().skip(line_no).filter(|l| !l.trim().is_empty()).count();
            return Err(DatasetError::RecordCountMismatch {
                path: path.to_path_buf(),
                expected,
                actual: expected + 1 + extra,
            }
            .into());
        }
        patterns.push(parse_record(line, line_no, path, kind)?);
    }

    if patterns.len() != expected {
        return Err(DatasetError::RecordCountMismatch {
            path: path.to_path_buf(),
            expected,
            actual: patterns.len(),
        }
        .into());
    }
    Ok(patterns)
}

fn parse_record(line: &str, line_no: usize, path: &Path, kind: PatternKind) -> Result<Pattern> {
    // Fields past the label, such as the correct label of a result line, are ignored.
    let mut fields = line.split(LABEL_SEPARATOR);
    let vector_part = fields.next().unwrap_or_default();
    let label = fields.next().map(str::trim).filter(|l| !l.is_empty());

    if vector_part.trim().is_empty() {
        return Err(DatasetError::EmptyVector {
            path: path.to_path_buf(),
            line: line_no,
        }
        .into());
    }

    let vector = vector_part
        .split(VECTOR_SEPARATOR)
        .map(|field| {
            let field = field.trim();
            field.parse::<f64>().map_err(|_| DatasetError::MalformedNumber {
                path: path.to_path_buf(),
                line: line_no,
                field: field.to_string(),
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    match kind {
        PatternKind::Training => {
            let label = label.ok_or_else(|| DatasetError::MissingLabel {
                path: path.to_path_buf(),
                line: line_no,
            })?;
            Ok(Pattern::training(vector, label))
        }
        PatternKind::Testing => Ok(Pattern::testing(vector, label.map(str::to_string))),
    }
}

/// Fraction of the testing set whose assigned label matches the correct
/// label. A pattern without a correct label counts as a miss.
///
/// `None` for an empty testing set.
pub fn accuracy(patterns: &[Pattern]) -> Option<f64> {
    let correct = patterns
        .iter()
        .filter(|p| p.is_correct() == Some(true))
        .count();
    (!patterns.is_empty()).then(|| correct as f64 / patterns.len() as f64)
}

/// Writes one `vector;assigned;correct` line per pattern followed by the
/// accuracy summary.
pub fn write_results<W: Write>(mut writer: W, patterns: &[Pattern]) -> Result<()> {
    for pattern in patterns {
        writeln!(
            writer,
            "{:?}{sep}{}{sep}{}",
            pattern.vector(),
            pattern.label().unwrap_or_default(),
            pattern.correct_label().unwrap_or_default(),
            sep = LABEL_SEPARATOR,
        )?;
    }
    match accuracy(patterns) {
        Some(acc) => writeln!(writer, "Accuracy result: {:.2}%", acc * 100.0)?,
        None => writeln!(writer, "Accuracy result: n/a")?,
    }
    writer.flush()?;
    Ok(())
}

/// Output location for a testing file: the same path with `.result` appended.
pub fn result_path(testing: &Path) -> PathBuf {
    let mut path = testing.as_os_str().to_owned();
    path.push(".result");
    PathBuf::from(path)
}
