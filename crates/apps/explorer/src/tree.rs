//! Flat parent-linked file tree persisted as one JSON blob.

use serde::{Deserialize, Serialize};

/// Identifier of the top-level folder ("This PC").
pub const ROOT_ID: &str = "root";
/// Display name of the top-level folder.
pub const ROOT_NAME: &str = "This PC";
/// Base name for newly created folders.
pub const NEW_FOLDER_NAME: &str = "New Folder";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Entry kind.
pub enum EntryKind {
    /// Leaf entry with optional text content.
    File,
    /// Container entry.
    Folder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One file or folder.
pub struct FileEntry {
    /// Stable identifier.
    pub id: String,
    /// Display name, unique among siblings for folders created here.
    pub name: String,
    /// File or folder.
    pub kind: EntryKind,
    /// Identifier of the containing folder.
    pub parent: String,
    /// Size in bytes, when known.
    #[serde(default)]
    pub size: Option<u64>,
    /// Last modification time in unix milliseconds, when known.
    #[serde(default)]
    pub modified_ms: Option<u64>,
    /// Marks a cloud-synced folder.
    #[serde(default)]
    pub cloud: bool,
    /// Text content for files.
    #[serde(default)]
    pub content: Option<String>,
}

impl FileEntry {
    fn folder(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: EntryKind::Folder,
            parent: ROOT_ID.to_string(),
            size: None,
            modified_ms: None,
            cloud: false,
            content: None,
        }
    }

    /// Returns whether this entry is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// The whole explorer tree.
pub struct FileTree {
    /// Entries in creation order.
    pub entries: Vec<FileEntry>,
}

impl Default for FileTree {
    fn default() -> Self {
        let readme = "Welcome to Windows 11";
        Self {
            entries: vec![
                FileEntry::folder("docs", "Documents"),
                FileEntry::folder("downloads", "Downloads"),
                FileEntry::folder("pictures", "Pictures"),
                FileEntry {
                    cloud: true,
                    ..FileEntry::folder("cloud", "Google Drive")
                },
                FileEntry {
                    kind: EntryKind::File,
                    size: Some(readme.len() as u64),
                    content: Some(readme.to_string()),
                    ..FileEntry::folder("readme", "README.txt")
                },
            ],
        }
    }
}

impl FileTree {
    /// Looks up an entry.
    pub fn entry(&self, id: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entries directly inside `folder` whose name contains `query`, ignoring case.
    pub fn children(&self, folder: &str, query: &str) -> Vec<FileEntry> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.parent == folder)
            .filter(|entry| needle.is_empty() || entry.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Containing folder of `folder`; `None` at the root.
    pub fn parent_of(&self, folder: &str) -> Option<String> {
        if folder == ROOT_ID {
            return None;
        }
        Some(
            self.entry(folder)
                .map_or_else(|| ROOT_ID.to_string(), |entry| entry.parent.clone()),
        )
    }

    /// Path from the root to `folder` as `(id, name)` pairs.
    pub fn breadcrumbs(&self, folder: &str) -> Vec<(String, String)> {
        let mut trail = Vec::new();
        let mut cursor = folder.to_string();
        // Bounded walk so a corrupted blob with a parent cycle still terminates.
        for _ in 0..self.entries.len() {
            if cursor == ROOT_ID {
                break;
            }
            let Some(entry) = self.entry(&cursor) else {
                break;
            };
            trail.push((entry.id.clone(), entry.name.clone()));
            cursor = entry.parent.clone();
        }
        trail.push((ROOT_ID.to_string(), ROOT_NAME.to_string()));
        trail.reverse();
        trail
    }

    /// First free folder name in `parent`: `New Folder`, `New Folder (2)`, ...
    pub fn unique_folder_name(&self, parent: &str) -> String {
        let taken = |name: &str| {
            self.entries
                .iter()
                .any(|entry| entry.parent == parent && entry.name == name)
        };
        if !taken(NEW_FOLDER_NAME) {
            return NEW_FOLDER_NAME.to_string();
        }
        (2..)
            .map(|n| format!("{NEW_FOLDER_NAME} ({n})"))
            .find(|name| !taken(name))
            .unwrap_or_else(|| NEW_FOLDER_NAME.to_string())
    }

    /// Adds an empty folder to `parent` and returns its id.
    pub fn create_folder(&mut self, parent: &str, now_ms: u64) -> String {
        let id = format!("folder-{now_ms}");
        let name = self.unique_folder_name(parent);
        self.entries.push(FileEntry {
            id: id.clone(),
            name,
            kind: EntryKind::Folder,
            parent: parent.to_string(),
            size: None,
            modified_ms: Some(now_ms),
            cloud: false,
            content: None,
        });
        id
    }

    /// Removes an entry and everything below it. Returns the number of entries removed.
    pub fn delete(&mut self, id: &str) -> usize {
        let mut doomed = vec![id.to_string()];
        let mut cursor = 0;
        while cursor < doomed.len() {
            let current = doomed[cursor].clone();
            let children: Vec<String> = self
                .entries
                .iter()
                .filter(|entry| entry.parent == current && !doomed.contains(&entry.id))
                .map(|entry| entry.id.clone())
                .collect();
            doomed.extend(children);
            cursor += 1;
        }

        let before = self.entries.len();
        self.entries.retain(|entry| !doomed.contains(&entry.id));
        before - self.entries.len()
    }
}

/// Human-readable size with one decimal (`1.5 KB`). Zero renders as an empty string.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    if bytes == 0 {
        return String::new();
    }
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.1} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn names(entries: &[FileEntry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    #[test]
    fn default_tree_matches_first_run_layout() {
        let tree = FileTree::default();
        assert_eq!(
            names(&tree.children(ROOT_ID, "")),
            vec!["Documents", "Downloads", "Pictures", "Google Drive", "README.txt"]
        );
        let readme = tree.entry("readme").expect("readme");
        assert_eq!(readme.content.as_deref(), Some("Welcome to Windows 11"));
        assert!(tree.entry("cloud").expect("cloud").cloud);
    }

    #[test]
    fn search_ignores_case() {
        let tree = FileTree::default();
        assert_eq!(names(&tree.children(ROOT_ID, "DOWN")), vec!["Downloads"]);
        assert!(tree.children(ROOT_ID, "zzz").is_empty());
    }

    #[test]
    fn new_folders_get_unique_names() {
        let mut tree = FileTree::default();
        tree.create_folder("docs", 1);
        tree.create_folder("docs", 2);
        tree.create_folder("docs", 3);
        tree.create_folder(ROOT_ID, 4);

        assert_eq!(
            names(&tree.children("docs", "")),
            vec!["New Folder", "New Folder (2)", "New Folder (3)"]
        );
        assert_eq!(tree.entry("folder-4").expect("root folder").name, "New Folder");
    }

    #[test]
    fn delete_removes_descendants() {
        let mut tree = FileTree::default();
        let inner = tree.create_folder("docs", 10);
        tree.create_folder(&inner, 11);

        assert_eq!(tree.delete("docs"), 3);
        assert!(tree.entry("folder-11").is_none());
        assert_eq!(tree.delete("missing"), 0);
    }

    #[test]
    fn breadcrumbs_and_parent_walk_to_root() {
        let mut tree = FileTree::default();
        let inner = tree.create_folder("pictures", 20);

        assert_eq!(
            tree.breadcrumbs(&inner),
            vec![
                (ROOT_ID.to_string(), ROOT_NAME.to_string()),
                ("pictures".to_string(), "Pictures".to_string()),
                (inner.clone(), "New Folder".to_string()),
            ]
        );
        assert_eq!(tree.parent_of(&inner), Some("pictures".to_string()));
        assert_eq!(tree.parent_of("pictures"), Some(ROOT_ID.to_string()));
        assert_eq!(tree.parent_of(ROOT_ID), None);
    }

    #[test]
    fn breadcrumbs_survive_parent_cycles() {
        let mut tree = FileTree::default();
        tree.entries[0].parent = "downloads".to_string();
        tree.entries[1].parent = "docs".to_string();

        let trail = tree.breadcrumbs("docs");
        assert_eq!(trail.first().map(|(id, _)| id.as_str()), Some(ROOT_ID));
        assert!(trail.len() <= tree.entries.len() + 1);
    }

    #[test]
    fn file_sizes_use_binary_units() {
        assert_eq!(format_file_size(0), "");
        assert_eq!(format_file_size(512), "512.0 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.0 GB");
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048.0 GB");
    }
}
