use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde_json::Value;

use crate::error::{AnalyzeError, Result};
use crate::models::{Dataset, Message};
use crate::parsers::recode::{TargetEncoding, recode};
use crate::utils::validate_file_size;

/// Suffix identifying export documents in the input directory
pub const EXPORT_FILE_SUFFIX: &str = ".json";

const MESSAGES_FIELD: &str = "messages";

/// A parsed export file, before merging.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub value: Value,
}

/// Load every export document in `dir` into one [`Dataset`].
///
/// Files are merged in file-name order: the first document supplies the envelope
/// (participants, title, ...) and every document contributes its `messages` once.
/// The merged structure is recoded under `encoding` before it is typed.
///
/// # Errors
///
/// - [`AnalyzeError::NotFound`] when no `.json` file exists in `dir`
/// - [`AnalyzeError::Io`] when the directory or a file cannot be read
/// - [`AnalyzeError::Parse`] / [`AnalyzeError::InvalidDocument`] naming the offending file
/// - [`AnalyzeError::Encoding`] when a string cannot be repaired
pub fn load_dataset(dir: &Path, encoding: TargetEncoding) -> Result<Dataset> {
    let files = discover_json_files(dir)?;
    info!("Found {} export file(s) in {}", files.len(), dir.display());

    let documents = files
        .iter()
        .map(|path| -> Result<SourceDocument> {
            let value = parse_json_file(path)?;
            Ok(SourceDocument { path: path.clone(), value })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut documents = documents.into_iter();
    let Some(first) = documents.next() else {
        return Err(AnalyzeError::NotFound { dir: dir.to_path_buf() });
    };
    let first_path = first.path.clone();

    let merged = merge_documents(first, documents)?;
    let recoded = recode(merged, encoding)?;
    let dataset = into_dataset(recoded, &first_path, files)?;

    info!(
        "Loaded {} messages from {} file(s) ({} decoding)",
        dataset.message_count(),
        dataset.sources.len(),
        encoding.name()
    );
    Ok(dataset)
}

/// List regular files in `dir` whose name ends in `.json`, in natural file name
/// order (`message_2.json` before `message_10.json`).
pub fn discover_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_error = |source| AnalyzeError::Io { path: dir.to_path_buf(), source };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();

        if !path.is_file() {
            continue;
        }

        let is_export = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(EXPORT_FILE_SUFFIX));
        if is_export {
            files.push(path);
        } else {
            debug!("Skipping non-export file {}", path.display());
        }
    }

    if files.is_empty() {
        return Err(AnalyzeError::NotFound { dir: dir.to_path_buf() });
    }

    // Directory listing order is platform dependent
    files.sort_by_cached_key(|path| natural_key(path));
    Ok(files)
}

/// Sort key splitting a file stem into its text prefix and numeric suffix.
///
/// The full name breaks ties, so `message_01.json` and `message_1.json` still
/// order deterministically.
fn natural_key(path: &Path) -> (String, Option<u64>, String) {
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    let stem = name.strip_suffix(EXPORT_FILE_SUFFIX).unwrap_or(&name);
    let prefix = stem.trim_end_matches(|c: char| c.is_ascii_digit());
    let number = stem[prefix.len()..].parse().ok();
    (prefix.to_string(), number, name)
}

/// Read and parse one export file in full.
pub fn parse_json_file(path: &Path) -> Result<Value> {
    let io_error = |source| AnalyzeError::Io { path: path.to_path_buf(), source };

    let mut file = File::open(path).map_err(io_error)?;
    validate_file_size(&file, path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(io_error)?;

    let value = serde_json::from_str(&contents)
        .map_err(|source| AnalyzeError::Parse { path: path.to_path_buf(), source })?;
    debug!("Parsed {}", path.display());
    Ok(value)
}

/// Append the `messages` of every document in `rest` onto those of `first`.
///
/// Every document must be an object holding a `messages` array of objects.
pub fn merge_documents(
    first: SourceDocument,
    rest: impl IntoIterator<Item = SourceDocument>,
) -> Result<Value> {
    let SourceDocument { path: first_path, value: mut merged } = first;
    messages_mut(&mut merged, &first_path)?;

    for mut document in rest {
        let incoming = std::mem::take(messages_mut(&mut document.value, &document.path)?);
        debug!("Merging {} messages from {}", incoming.len(), document.path.display());
        messages_mut(&mut merged, &first_path)?.extend(incoming);
    }

    Ok(merged)
}

fn messages_mut<'a>(document: &'a mut Value, path: &Path) -> Result<&'a mut Vec<Value>> {
    let invalid =
        |reason: String| AnalyzeError::InvalidDocument { path: path.to_path_buf(), reason };

    let object = document
        .as_object_mut()
        .ok_or_else(|| invalid("top-level value is not an object".to_string()))?;

    let messages = match object.get_mut(MESSAGES_FIELD) {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(invalid(format!("`{MESSAGES_FIELD}` is not an array"))),
        None => return Err(invalid(format!("missing `{MESSAGES_FIELD}` array"))),
    };

    if let Some(index) = messages.iter().position(|m| !m.is_object()) {
        return Err(invalid(format!("{MESSAGES_FIELD}[{index}] is not an object")));
    }

    Ok(messages)
}

fn into_dataset(value: Value, first_path: &Path, sources: Vec<PathBuf>) -> Result<Dataset> {
    let invalid =
        |reason: String| AnalyzeError::InvalidDocument { path: first_path.to_path_buf(), reason };

    let Value::Object(mut envelope) = value else {
        return Err(invalid("top-level value is not an object".to_string()));
    };
    let messages = envelope.remove(MESSAGES_FIELD).unwrap_or(Value::Array(Vec::new()));
    let messages: Vec<Message> =
        serde_json::from_value(messages).map_err(|e| invalid(e.to_string()))?;

    Ok(Dataset { envelope, messages, sources })
}
