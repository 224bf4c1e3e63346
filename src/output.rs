//! The artifact format.
//!
//! Every selected file becomes one block:
//!
//! ```text
//! --- path/to/file.md ---
//!
//! <content>
//!
//! ```
//!
//! When the file could not be read, the content is replaced by
//! `!!! Error reading file: <message> !!!`. Both variants end with one blank line.

use crate::types::FileContent;
use std::io::{self, Write};
use std::path::{Component, Path};

/// Writes the header and content of one file.
pub fn write_block<W: Write>(
    out: &mut W,
    normalized_path: &str,
    content: &FileContent,
) -> io::Result<()> {
    write!(out, "--- {} ---\n\n", normalized_path)?;
    match content {
        FileContent::Text(text) => {
            out.write_all(text.as_bytes())?;
            out.write_all(b"\n\n")
        }
        FileContent::Unreadable(message) => {
            write!(out, "!!! Error reading file: {} !!!\n\n", message)
        }
    }
}

/// Formats one block into a string.
pub fn format_block(normalized_path: &str, content: &FileContent) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_block(&mut buf, normalized_path, content);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Joins the components of a root-relative path with `/`, dropping `.` segments.
pub fn normalize_path(relative: &Path) -> String {
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => parts.push("..".to_string()),
            other => parts.push(other.as_os_str().to_string_lossy().into_owned()),
        }
    }
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_block_layout() {
        let block = format_block("a.md", &FileContent::Text("hello".into()));
        assert_eq!(block, "--- a.md ---\n\nhello\n\n");
    }

    #[test]
    fn unreadable_block_layout() {
        let block = format_block("x.txt", &FileContent::Unreadable("denied".into()));
        assert_eq!(block, "--- x.txt ---\n\n!!! Error reading file: denied !!!\n\n");
    }

    #[test]
    fn normalize_drops_current_dir() {
        let p = Path::new(".").join("src").join("lib.js");
        assert_eq!(normalize_path(&p), "src/lib.js");
    }
}
