//! Save/load context interfaces for file content.
//!
//! The conversion core performs no file I/O of its own. When a
//! [`FileValue`](crate::FileValue) is serialized, its content is handed to a
//! [`SaveContext`] which returns an opaque content identifier; deserialization
//! hands identifiers to a [`LoadContext`] to be resolved back to local paths.
//! Both are scoped resources with explicit flush/close.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Destination for file content during serialization.
pub trait SaveContext {
    /// Saves a file to the context's backing store.
    ///
    /// When `content_id` is given it is used to correlate the content;
    /// otherwise the context chooses an identifier. Returns the identifier
    /// under which the content can later be loaded.
    fn save_file(&mut self, source: &Path, content_id: Option<&str>) -> Result<String>;

    /// Flushes any pending content to the backing store.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Closes the context. Further saves are an error.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Source of file content during deserialization.
pub trait LoadContext {
    /// Resolves a content identifier to a local path, or `None` when the
    /// identifier has no content.
    fn load_file(&mut self, content_id: &str) -> Result<Option<PathBuf>>;

    /// Flushes any pending reads.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Closes the context. Further loads are an error.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A save/load context that performs no content management at all.
///
/// Local file paths are used directly as content identifiers and nothing is
/// copied. This is suitable when serialized values never leave the machine
/// they were produced on; anything crossing a machine boundary needs a
/// context that actually moves the bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonManagingFileScope;

impl SaveContext for NonManagingFileScope {
    fn save_file(&mut self, source: &Path, _content_id: Option<&str>) -> Result<String> {
        Ok(source.display().to_string())
    }
}

impl LoadContext for NonManagingFileScope {
    fn load_file(&mut self, content_id: &str) -> Result<Option<PathBuf>> {
        if content_id.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(content_id)))
        }
    }
}
