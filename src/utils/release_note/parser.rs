// release note parser

use super::types::ReleaseNoteField;
use crate::error::{Error, Result};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// extract the note field from a yaml document
///
/// returns `Ok(None)` when the document is not a mapping, lacks the field,
/// or the field has a shape other than a string or a mapping with a string
/// `text` key
pub fn parse_note_from_yaml(
    content: &str,
    field_name: &str,
) -> std::result::Result<Option<ReleaseNoteField>, serde_yaml::Error> {
    let document: Value = serde_yaml::from_str(content)?;

    let Some(mapping) = document.as_mapping() else {
        return Ok(None);
    };

    let Some(value) = mapping.get(field_name) else {
        return Ok(None);
    };

    match serde_yaml::from_value::<ReleaseNoteField>(value.clone()) {
        Ok(field) => Ok(Some(field)),
        Err(e) => {
            log::debug!("ignoring '{}' field with unsupported shape: {}", field_name, e);
            Ok(None)
        }
    }
}

/// read a yaml file and extract the note field
pub fn read_note<P: AsRef<Path>>(path: P, field_name: &str) -> Result<Option<ReleaseNoteField>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_note_from_yaml(&content, field_name).map_err(|e| Error::YamlParseError {
        path: path.to_path_buf(),
        source: e,
    })
}
