//! Module `node`
//!
//! Defines the `VfsNode` struct, one entry of the virtual filesystem:
//! a file or directory keyed by its absolute slash-separated path.

use std::fmt;

/// A single entry in the virtual filesystem.
///
/// Directories never carry content; file content is raw bytes decoded
/// from the CSV snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VfsNode {
    path: String,
    is_directory: bool,
    content: Vec<u8>,
}

impl VfsNode {
    /// Creates a file node with the given content.
    pub fn file(path: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            is_directory: false,
            content,
        }
    }

    /// Creates a directory node. Directories carry no content.
    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_directory: true,
            content: Vec::new(),
        }
    }

    /// Returns the absolute path keying this node.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns whether this node is a directory.
    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    /// Returns the raw content bytes. Empty for directories.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Returns the final path segment. The root has an empty name.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or("")
    }
}

impl fmt::Display for VfsNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_directory {
            write!(f, "{}/", self.name())
        } else {
            write!(f, "{}", self.name())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_final_segment() {
        assert_eq!(VfsNode::file("/a/b/c.txt", vec![]).name(), "c.txt");
        assert_eq!(VfsNode::directory("/a").name(), "a");
        assert_eq!(VfsNode::directory("/").name(), "");
    }

    #[test]
    fn test_display_marks_directories() {
        assert_eq!(VfsNode::directory("/home").to_string(), "home/");
        assert_eq!(VfsNode::file("/home/readme", vec![]).to_string(), "readme");
    }

    #[test]
    fn test_directory_has_no_content() {
        assert!(VfsNode::directory("/d").content().is_empty());
    }
}
