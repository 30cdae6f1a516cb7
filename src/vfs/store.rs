//! VFS store
//!
//! The full path→node mapping behind the shell, populated from a CSV
//! snapshot and written back out on demand. Directory membership is not an
//! explicit parent/children relation; it is inferred at query time by
//! prefix-scanning the path keys, so a child row whose parent row is absent
//! loads fine and simply never shows up in a listing.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use log::info;

use crate::error::VfsError;
use crate::vfs::node::VfsNode;

const CSV_HEADER: &str = "path,content_base64,is_directory";

/// The in-memory virtual filesystem: absolute path → node.
#[derive(Debug, Default)]
pub struct VfsStore {
    nodes: HashMap<String, VfsNode>,
}

impl VfsStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the store from a CSV snapshot, replacing all current contents.
    ///
    /// Rows with fewer than three fields are skipped; a header row is
    /// recognized on the first line only. A missing file or undecodable
    /// base64 content aborts the whole load. Returns the node count.
    pub fn load(&mut self, csv_path: &Path) -> Result<usize, VfsError> {
        if !csv_path.exists() {
            return Err(VfsError::SnapshotNotFound(csv_path.display().to_string()));
        }

        let text = fs::read_to_string(csv_path)?;
        let mut nodes = HashMap::new();

        for (idx, line) in text.lines().enumerate() {
            if idx == 0 && line.starts_with("path,") {
                continue;
            }

            let parts: Vec<&str> = line.split(',').collect();
            if parts.len() < 3 {
                continue;
            }

            let path = parts[0].to_string();
            let is_directory = parts[2].eq_ignore_ascii_case("true");

            let node = if is_directory {
                VfsNode::directory(path.clone())
            } else {
                VfsNode::file(path.clone(), BASE64.decode(parts[1])?)
            };
            nodes.insert(path, node);
        }

        self.nodes = nodes;
        info!(
            "Loaded {} VFS nodes from {}",
            self.nodes.len(),
            csv_path.display()
        );
        Ok(self.nodes.len())
    }

    /// Writes the full mapping to a CSV snapshot, rows sorted ascending by
    /// path. Directories always write an empty content field.
    pub fn save(&self, output_path: &Path) -> Result<(), VfsError> {
        let mut paths: Vec<&String> = self.nodes.keys().collect();
        paths.sort();

        let mut out = String::from(CSV_HEADER);
        out.push('\n');
        for path in paths {
            let node = &self.nodes[path];
            let content_b64 = if node.is_directory() {
                String::new()
            } else {
                BASE64.encode(node.content())
            };
            let is_directory = if node.is_directory() { "true" } else { "false" };
            out.push_str(&format!("{},{},{}\n", path, content_b64, is_directory));
        }

        fs::write(output_path, out)?;
        info!("VFS saved to {}", output_path.display());
        Ok(())
    }

    /// Inserts a node, overwriting any node already at its path.
    pub fn insert(&mut self, node: VfsNode) {
        self.nodes.insert(node.path().to_string(), node);
    }

    /// Looks up a node by its absolute path.
    pub fn get(&self, path: &str) -> Option<&VfsNode> {
        self.nodes.get(path)
    }

    /// Returns whether the path resolves to an existing directory node.
    pub fn is_directory(&self, path: &str) -> bool {
        self.get(path).is_some_and(|n| n.is_directory())
    }

    /// Returns the number of nodes in the store.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Lists the immediate children of a directory, ordered by name with
    /// files before directories on a name tie.
    ///
    /// Children are found by prefix scan: strip the target prefix from every
    /// key, keep entries with no further `/`, requalify each name and look
    /// it back up. A name whose requalified path is missing from the store
    /// is silently dropped.
    pub fn list_children(&self, target: &str) -> Result<Vec<&VfsNode>, VfsError> {
        if !self.is_directory(target) {
            return Err(VfsError::DirectoryNotFound(target.to_string()));
        }

        let prefix = if target == "/" {
            "/".to_string()
        } else {
            format!("{}/", target)
        };

        let mut children: Vec<&VfsNode> = self
            .nodes
            .keys()
            .filter(|key| key.as_str() != "/" && key.starts_with(&prefix))
            .map(|key| &key[prefix.len()..])
            .filter(|rest| !rest.contains('/'))
            .map(|name| {
                if target == "/" {
                    format!("/{}", name)
                } else {
                    format!("{}/{}", target, name)
                }
            })
            .filter_map(|path| self.nodes.get(&path))
            .collect();

        children.sort_by(|a, b| child_order(*a, *b));
        Ok(children)
    }
}

/// Listing order: ascending by name, files before directories on equal names.
fn child_order(a: &VfsNode, b: &VfsNode) -> Ordering {
    a.name()
        .cmp(b.name())
        .then(a.is_directory().cmp(&b.is_directory()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    fn sample_store() -> VfsStore {
        let mut store = VfsStore::new();
        store.insert(VfsNode::directory("/"));
        store.insert(VfsNode::directory("/home"));
        store.insert(VfsNode::file("/home/notes.txt", b"hello".to_vec()));
        store.insert(VfsNode::directory("/home/projects"));
        store.insert(VfsNode::file("/readme.md", b"root file".to_vec()));
        store
    }

    #[test]
    fn test_list_children_of_root() {
        let store = sample_store();
        let names: Vec<String> = store
            .list_children("/")
            .unwrap()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, vec!["home/", "readme.md"]);
    }

    #[test]
    fn test_list_children_of_subdirectory() {
        let store = sample_store();
        let names: Vec<String> = store
            .list_children("/home")
            .unwrap()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, vec!["notes.txt", "projects/"]);
    }

    #[test]
    fn test_list_children_excludes_descendants() {
        let store = sample_store();
        let names: Vec<&str> = store
            .list_children("/")
            .unwrap()
            .iter()
            .map(|n| n.name())
            .collect();
        assert!(!names.contains(&"notes.txt"));
    }

    #[test]
    fn test_list_children_rejects_files_and_missing_paths() {
        let store = sample_store();
        assert!(matches!(
            store.list_children("/readme.md"),
            Err(VfsError::DirectoryNotFound(_))
        ));
        assert!(matches!(
            store.list_children("/nope"),
            Err(VfsError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_orphan_child_is_not_listed_through_missing_parent() {
        let mut store = VfsStore::new();
        store.insert(VfsNode::directory("/"));
        // No "/ghost" directory node exists for this child.
        store.insert(VfsNode::file("/ghost/file.txt", vec![]));

        let names: Vec<&str> = store
            .list_children("/")
            .unwrap()
            .iter()
            .map(|n| n.name())
            .collect();
        assert!(names.is_empty());
        assert!(matches!(
            store.list_children("/ghost"),
            Err(VfsError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_child_order_puts_file_before_directory_on_name_tie() {
        let file = VfsNode::file("/a/x", vec![]);
        let dir = VfsNode::directory("/b/x");
        assert_eq!(child_order(&file, &dir), Ordering::Less);
        assert_eq!(child_order(&dir, &file), Ordering::Greater);
    }

    #[test]
    fn test_load_counts_and_decodes() {
        let tmp = TempDir::new("vfs-store").unwrap();
        let csv = tmp.path().join("fs.csv");
        fs::write(
            &csv,
            "path,content_base64,is_directory\n/,,true\n/hello.txt,aGVsbG8=,false\n",
        )
        .unwrap();

        let mut store = VfsStore::new();
        let count = store.load(&csv).unwrap();
        assert_eq!(count, 2);
        assert_eq!(store.get("/hello.txt").unwrap().content(), b"hello");
        assert!(store.is_directory("/"));
    }

    #[test]
    fn test_load_skips_short_rows() {
        let tmp = TempDir::new("vfs-store").unwrap();
        let csv = tmp.path().join("fs.csv");
        fs::write(&csv, "/,,true\nbroken-row\n/a,,true\n").unwrap();

        let mut store = VfsStore::new();
        assert_eq!(store.load(&csv).unwrap(), 2);
    }

    #[test]
    fn test_load_without_header_keeps_first_row() {
        let tmp = TempDir::new("vfs-store").unwrap();
        let csv = tmp.path().join("fs.csv");
        fs::write(&csv, "/,,true\n/a,,true\n").unwrap();

        let mut store = VfsStore::new();
        assert_eq!(store.load(&csv).unwrap(), 2);
        assert!(store.is_directory("/"));
    }

    #[test]
    fn test_load_replaces_previous_contents() {
        let tmp = TempDir::new("vfs-store").unwrap();
        let csv = tmp.path().join("fs.csv");
        fs::write(&csv, "/,,true\n").unwrap();

        let mut store = sample_store();
        store.load(&csv).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get("/home").is_none());
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let mut store = VfsStore::new();
        assert!(matches!(
            store.load(Path::new("/no/such/snapshot.csv")),
            Err(VfsError::SnapshotNotFound(_))
        ));
    }

    #[test]
    fn test_load_bad_base64_is_fatal() {
        let tmp = TempDir::new("vfs-store").unwrap();
        let csv = tmp.path().join("fs.csv");
        fs::write(&csv, "/bad.bin,!!!not-base64!!!,false\n").unwrap();

        let mut store = VfsStore::new();
        assert!(matches!(
            store.load(&csv),
            Err(VfsError::InvalidContent(_))
        ));
    }

    #[test]
    fn test_save_writes_sorted_rows_with_header() {
        let tmp = TempDir::new("vfs-store").unwrap();
        let out = tmp.path().join("out.csv");

        let mut store = VfsStore::new();
        store.insert(VfsNode::file("/z.txt", b"z".to_vec()));
        store.insert(VfsNode::directory("/"));
        store.insert(VfsNode::directory("/a"));
        store.save(&out).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "path,content_base64,is_directory",
                "/,,true",
                "/a,,true",
                "/z.txt,eg==,false",
            ]
        );
    }

    #[test]
    fn test_round_trip_preserves_mapping() {
        let tmp = TempDir::new("vfs-store").unwrap();
        let first = tmp.path().join("first.csv");
        let second = tmp.path().join("second.csv");

        // Deliberately unsorted input.
        fs::write(
            &first,
            "/z,,true\n/,,true\n/a.bin,AQIDBA==,false\n/z/deep.txt,aGk=,false\n",
        )
        .unwrap();

        let mut store = VfsStore::new();
        store.load(&first).unwrap();
        store.save(&second).unwrap();

        let mut reloaded = VfsStore::new();
        reloaded.load(&second).unwrap();

        assert_eq!(reloaded.len(), store.len());
        assert_eq!(
            reloaded.get("/a.bin").unwrap().content(),
            &[1u8, 2, 3, 4][..]
        );
        assert_eq!(reloaded.get("/z/deep.txt").unwrap().content(), b"hi");
        assert!(reloaded.is_directory("/z"));

        // Saving again yields byte-identical output.
        let third = tmp.path().join("third.csv");
        reloaded.save(&third).unwrap();
        assert_eq!(
            fs::read_to_string(&second).unwrap(),
            fs::read_to_string(&third).unwrap()
        );
    }
}
