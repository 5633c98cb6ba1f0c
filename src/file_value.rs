//! File reference values.
//!
//! A [`FileValue`] references externally stored content: the content bytes are
//! never copied into the value object and are only resolved through a
//! [`SaveContext`]/[`LoadContext`](crate::save_context::LoadContext) when the
//! value crosses the wire. The API form is a JSON object so that arbitrary
//! file names survive array serialization unambiguously.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::array_codec;
use crate::array_values::{ArrayValue, FileArrayValue};
use crate::error::{Error, Result};
use crate::save_context::{LoadContext, SaveContext};

/// MIME type used for binary content when none is known.
pub const BINARY_MIMETYPE: &str = "application/octet-stream";
/// MIME type used for plain text content.
pub const TEXT_MIMETYPE: &str = "text/plain";

/// Extension reported when the original file name is unknown.
const DEFAULT_EXTENSION: &str = ".tmp";

/// A value referencing externally stored file content.
///
/// Constructed immutable. Equality compares the descriptive fields and the
/// content identifier, not the content bytes.
///
/// # Examples
///
/// ```rust
/// use variable_interop::{FileValue, TEXT_MIMETYPE};
///
/// let value = FileValue::from_local_file("notes.txt", TEXT_MIMETYPE, Some("utf-8"));
/// assert!(value.has_content());
/// assert_eq!(value.extension(), ".txt");
///
/// let empty = FileValue::empty();
/// assert!(!empty.has_content());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FileValue {
    original_file_name: Option<PathBuf>,
    mime_type: String,
    file_encoding: Option<String>,
    file_size: Option<u64>,
    id: Uuid,
    content_path: Option<PathBuf>,
}

impl FileValue {
    /// Creates a file value whose content already exists on the local disk.
    ///
    /// The path doubles as the original file name; a fresh content identifier
    /// is assigned.
    pub fn from_local_file(
        path: impl Into<PathBuf>,
        mime_type: impl Into<String>,
        file_encoding: Option<&str>,
    ) -> FileValue {
        let path = path.into();
        FileValue {
            original_file_name: Some(path.clone()),
            mime_type: mime_type.into(),
            file_encoding: file_encoding.map(str::to_string),
            file_size: None,
            id: Uuid::new_v4(),
            content_path: Some(path),
        }
    }

    /// The empty file value: no content, no name, the nil identifier.
    #[must_use]
    pub fn empty() -> FileValue {
        FileValue {
            original_file_name: None,
            mime_type: String::new(),
            file_encoding: None,
            file_size: None,
            id: Uuid::nil(),
            content_path: None,
        }
    }

    /// The name the file had on the system it came from, if known.
    #[must_use]
    pub fn original_file_name(&self) -> Option<&Path> {
        self.original_file_name.as_deref()
    }

    /// The MIME type of the content, or empty when unknown.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The text encoding of the content, if the content is known to be text.
    #[must_use]
    pub fn file_encoding(&self) -> Option<&str> {
        self.file_encoding.as_deref()
    }

    /// The size of the content in bytes, if known.
    #[must_use]
    pub fn file_size(&self) -> Option<u64> {
        self.file_size
    }

    /// The identifier used to correlate this value's content with a
    /// save/load context.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The local path of the content, when it is already resident.
    #[must_use]
    pub fn content_path(&self) -> Option<&Path> {
        self.content_path.as_deref()
    }

    /// Returns `true` when this value actually references content.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.content_path.is_some()
    }

    /// The extension of the original file name, including the period, or
    /// `.tmp` when unknown.
    #[must_use]
    pub fn extension(&self) -> String {
        self.original_file_name
            .as_deref()
            .and_then(Path::extension)
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
    }

    /// Returns `true` when the MIME type indicates text content
    /// (a `text/` prefix or `application/json`).
    #[must_use]
    pub fn is_text_based(&self) -> bool {
        self.mime_type.starts_with("text/") || self.mime_type.starts_with("application/json")
    }

    /// Converts this value to its API object, pushing the content through the
    /// save context.
    ///
    /// # Errors
    ///
    /// Propagates save-context failures.
    pub fn to_api_object(&self, context: &mut dyn SaveContext) -> Result<FileApiObject> {
        let contents = match &self.content_path {
            Some(path) => Some(context.save_file(path, Some(&self.id.to_string()))?),
            None => None,
        };
        Ok(FileApiObject {
            contents,
            original_filename: self
                .original_file_name
                .as_ref()
                .map(|name| name.display().to_string()),
            mime_type: if self.mime_type.is_empty() {
                None
            } else {
                Some(self.mime_type.clone())
            },
            encoding: self.file_encoding.clone(),
            size: self.file_size.map(|size| size.to_string()),
        })
    }

    /// Converts this value to an API string (a JSON object) using a save
    /// context.
    pub fn to_api_string(&self, context: &mut dyn SaveContext) -> Result<String> {
        let api_object = self.to_api_object(context)?;
        serde_json::to_string(&api_object).map_err(Error::io)
    }

    /// Reconstructs a file value from its API object, pulling the content
    /// back through the load context.
    pub fn from_api_object(
        api_object: FileApiObject,
        context: &mut dyn LoadContext,
    ) -> Result<FileValue> {
        let content_path = match &api_object.contents {
            Some(content_id) => context.load_file(content_id)?,
            None => None,
        };
        Ok(FileValue {
            original_file_name: api_object.original_filename.map(PathBuf::from),
            mime_type: api_object.mime_type.unwrap_or_default(),
            file_encoding: api_object.encoding,
            file_size: match api_object.size {
                Some(text) => Some(
                    text.parse::<u64>()
                        .map_err(|_| Error::format(format!("{:?} is not a file size", text)))?,
                ),
                None => None,
            },
            id: Uuid::new_v4(),
            content_path,
        })
    }

    /// Parses an API string (a JSON object) into a file value using a load
    /// context.
    pub fn from_api_string(value: &str, context: &mut dyn LoadContext) -> Result<FileValue> {
        let api_object: FileApiObject = serde_json::from_str(value)
            .map_err(|err| Error::format(format!("not a file API object: {}", err)))?;
        FileValue::from_api_object(api_object, context)
    }

    /// The display form of a file value: its original name when known.
    ///
    /// File contents never participate in display formatting, so this does
    /// not consult the locale.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        if self.has_content() {
            match &self.original_file_name {
                Some(name) => name.display().to_string(),
                None => "<file read from unknown location>".to_string(),
            }
        } else {
            "<empty file>".to_string()
        }
    }
}

impl Default for FileValue {
    fn default() -> Self {
        FileValue::empty()
    }
}

/// The JSON shape of a serialized file value.
///
/// Absent fields are omitted on the wire. The `contents` field holds the
/// content identifier issued by the save context, not the content itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FileApiObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
    #[serde(
        default,
        rename = "originalFilename",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_filename: Option<String>,
    #[serde(default, rename = "mimeType", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl ArrayValue<FileValue> {
    /// Serializes to the canonical API string: a JSON array (nested by
    /// dimension) of file API objects.
    pub fn to_api_string(&self, context: &mut dyn SaveContext) -> Result<String> {
        let mut objects = Vec::with_capacity(self.len());
        for element in self.values() {
            objects.push(serde_json::to_value(element.to_api_object(context)?).map_err(Error::io)?);
        }
        let nested = nest_json(self.shape(), &mut objects.into_iter());
        serde_json::to_string(&nested).map_err(Error::io)
    }

    /// Parses the canonical API string form of a file array, reproducing its
    /// shape from the JSON nesting.
    pub fn from_api_string(value: &str, context: &mut dyn LoadContext) -> Result<FileArrayValue> {
        let json: serde_json::Value = serde_json::from_str(value)
            .map_err(|err| Error::format(format!("not a file array: {}", err)))?;
        let mut shape = Vec::new();
        let mut flat = Vec::new();
        collect_file_elements(&json, 0, &mut shape, &mut flat, context)?;
        ArrayValue::new(shape, flat)
    }

    /// The display form of a file array: element display names through the
    /// shared array grammar.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        array_codec::value_to_string(self, FileValue::to_display_string)
    }
}

/// Rebuilds the nested JSON lists for an array shape from a flat element
/// iterator.
fn nest_json(
    shape: &[usize],
    flat: &mut impl Iterator<Item = serde_json::Value>,
) -> serde_json::Value {
    match shape.split_first() {
        None => flat.next().unwrap_or(serde_json::Value::Null),
        Some((&first, rest)) => serde_json::Value::Array(
            (0..first).map(|_| nest_json(rest, flat)).collect(),
        ),
    }
}

/// Walks nested JSON lists, recording the shape and parsing leaf objects.
/// Ragged nesting fails the whole parse.
fn collect_file_elements(
    json: &serde_json::Value,
    depth: usize,
    shape: &mut Vec<usize>,
    flat: &mut Vec<FileValue>,
    context: &mut dyn LoadContext,
) -> Result<()> {
    match json {
        serde_json::Value::Array(items) => {
            if shape.len() == depth {
                shape.push(items.len());
            } else if shape[depth] != items.len() {
                return Err(Error::format("file array nesting is ragged"));
            }
            for item in items {
                collect_file_elements(item, depth + 1, shape, flat, context)?;
            }
            Ok(())
        }
        serde_json::Value::Object(_) => {
            if shape.len() != depth {
                return Err(Error::format("file array nesting is ragged"));
            }
            let api_object: FileApiObject = serde_json::from_value(json.clone())
                .map_err(|err| Error::format(format!("not a file API object: {}", err)))?;
            flat.push(FileValue::from_api_object(api_object, context)?);
            Ok(())
        }
        _ => Err(Error::format(
            "file array elements must be JSON file objects",
        )),
    }
}
