//! Intranet file store: a flat parent-linked list seeded with a root folder.

use serde::{Deserialize, Serialize};

/// Identifier of the root folder.
pub const ROOT_ID: &str = "root";
/// Display name of the root folder.
pub const ROOT_NAME: &str = "Root";
/// MIME type of files created in the app.
pub const TEXT_MIME: &str = "text/plain";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Entry kind.
pub enum IntranetKind {
    /// File with text content.
    File,
    /// Folder.
    Folder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One stored file or folder.
pub struct IntranetEntry {
    /// Stable id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// File or folder.
    #[serde(rename = "type")]
    pub kind: IntranetKind,
    /// Id of the containing folder; empty for the root.
    pub parent: String,
    /// File content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Content size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Last change in unix milliseconds. Absent in older blobs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_ms: Option<u64>,
    /// MIME type of files.
    #[serde(default, rename = "mimeType", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl IntranetEntry {
    fn root() -> Self {
        Self {
            id: ROOT_ID.to_string(),
            name: ROOT_NAME.to_string(),
            kind: IntranetKind::Folder,
            parent: String::new(),
            content: None,
            size: None,
            modified_ms: None,
            mime_type: None,
        }
    }

    /// Returns whether this entry is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == IntranetKind::Folder
    }
}

/// Name for a new text file: trimmed, with `.txt` appended when missing. Blank yields `None`.
pub fn text_file_name(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(if name.ends_with(".txt") {
        name.to_string()
    } else {
        format!("{name}.txt")
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Persisted file list.
pub struct IntranetFiles {
    /// Entries in creation order.
    pub entries: Vec<IntranetEntry>,
}

impl Default for IntranetFiles {
    fn default() -> Self {
        Self {
            entries: vec![IntranetEntry::root()],
        }
    }
}

impl IntranetFiles {
    /// Restores the root folder when a stored list lost it.
    pub fn normalize(&mut self) {
        if self.entry(ROOT_ID).is_none() {
            self.entries.insert(0, IntranetEntry::root());
        }
    }

    /// Looks up an entry.
    pub fn entry(&self, id: &str) -> Option<&IntranetEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entries directly inside `folder` whose name contains `query`, ignoring case.
    pub fn children(&self, folder: &str, query: &str) -> Vec<IntranetEntry> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.parent == folder)
            .filter(|entry| needle.is_empty() || entry.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Path from the root to `folder` as `(id, name)` pairs.
    pub fn breadcrumbs(&self, folder: &str) -> Vec<(String, String)> {
        let mut trail = Vec::new();
        let mut cursor = self.entry(folder);
        // Bounded so a parent cycle in a stored list still terminates.
        while let Some(entry) = cursor {
            if trail.len() == self.entries.len() {
                break;
            }
            trail.push((entry.id.clone(), entry.name.clone()));
            cursor = self.entry(&entry.parent);
        }
        trail.reverse();
        trail
    }

    /// Creates a folder in `parent`. Blank names are ignored.
    pub fn create_folder(&mut self, parent: &str, name: &str, now_ms: u64) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = format!("folder-{now_ms}");
        self.entries.push(IntranetEntry {
            id: id.clone(),
            name: name.to_string(),
            kind: IntranetKind::Folder,
            parent: parent.to_string(),
            content: None,
            size: None,
            modified_ms: Some(now_ms),
            mime_type: None,
        });
        Some(id)
    }

    /// Creates an empty text file in `parent`. Blank names are ignored.
    pub fn create_text_file(&mut self, parent: &str, name: &str, now_ms: u64) -> Option<String> {
        let name = text_file_name(name)?;
        let id = format!("file-{now_ms}");
        self.entries.push(IntranetEntry {
            id: id.clone(),
            name,
            kind: IntranetKind::File,
            parent: parent.to_string(),
            content: Some(String::new()),
            size: Some(0),
            modified_ms: Some(now_ms),
            mime_type: Some(TEXT_MIME.to_string()),
        });
        Some(id)
    }

    /// Replaces a file's content. Returns `false` for folders and unknown ids.
    pub fn save_content(&mut self, id: &str, content: &str, now_ms: u64) -> bool {
        let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id && !entry.is_folder())
        else {
            return false;
        };
        entry.size = Some(content.len() as u64);
        entry.content = Some(content.to_string());
        entry.modified_ms = Some(now_ms);
        true
    }

    /// Removes an entry and everything below it. The root is kept. Returns the number removed.
    pub fn delete(&mut self, id: &str) -> usize {
        if id == ROOT_ID {
            return 0;
        }
        let mut doomed = vec![id.to_string()];
        let mut cursor = 0;
        while cursor < doomed.len() {
            let current = doomed[cursor].clone();
            let children: Vec<String> = self
                .entries
                .iter()
                .filter(|entry| {
                    entry.parent == current && entry.id != ROOT_ID && !doomed.contains(&entry.id)
                })
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

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn names(entries: &[IntranetEntry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    #[test]
    fn starts_with_an_empty_root() {
        let files = IntranetFiles::default();
        assert_eq!(files.entries.len(), 1);
        assert!(files.entry(ROOT_ID).is_some_and(IntranetEntry::is_folder));
        assert!(files.children(ROOT_ID, "").is_empty());
    }

    #[test]
    fn text_files_get_a_txt_suffix() {
        assert_eq!(text_file_name(" notes "), Some("notes.txt".to_string()));
        assert_eq!(text_file_name("notes.txt"), Some("notes.txt".to_string()));
        assert_eq!(text_file_name("  "), None);

        let mut files = IntranetFiles::default();
        let id = files.create_text_file(ROOT_ID, "plan", 3).expect("created");
        let file = files.entry(&id).expect("file");
        assert_eq!(file.name, "plan.txt");
        assert_eq!(file.content.as_deref(), Some(""));
        assert_eq!(file.mime_type.as_deref(), Some(TEXT_MIME));
    }

    #[test]
    fn blank_folder_names_are_ignored() {
        let mut files = IntranetFiles::default();
        assert_eq!(files.create_folder(ROOT_ID, " ", 1), None);
        assert_eq!(files.entries.len(), 1);
    }

    #[test]
    fn search_stays_within_the_folder() {
        let mut files = IntranetFiles::default();
        let docs = files.create_folder(ROOT_ID, "Docs", 1).expect("folder");
        files.create_text_file(ROOT_ID, "Budget", 2);
        files.create_text_file(&docs, "budget-old", 3);

        assert_eq!(names(&files.children(ROOT_ID, "BUDGET")), vec!["Budget.txt"]);
        assert_eq!(names(&files.children(&docs, "budget")), vec!["budget-old.txt"]);
    }

    #[test]
    fn saving_updates_size_and_time() {
        let mut files = IntranetFiles::default();
        let id = files.create_text_file(ROOT_ID, "a", 1).expect("file");
        assert!(files.save_content(&id, "héllo", 9));

        let file = files.entry(&id).expect("file");
        assert_eq!(file.content.as_deref(), Some("héllo"));
        assert_eq!(file.size, Some(6));
        assert_eq!(file.modified_ms, Some(9));

        assert!(!files.save_content(ROOT_ID, "x", 10));
        assert!(!files.save_content("missing", "x", 10));
    }

    #[test]
    fn delete_is_recursive_and_keeps_root() {
        let mut files = IntranetFiles::default();
        let outer = files.create_folder(ROOT_ID, "Outer", 1).expect("folder");
        let inner = files.create_folder(&outer, "Inner", 2).expect("folder");
        files.create_text_file(&inner, "deep", 3);
        files.create_text_file(ROOT_ID, "keep", 4);

        assert_eq!(files.delete(&outer), 3);
        assert_eq!(names(&files.children(ROOT_ID, "")), vec!["keep.txt"]);
        assert_eq!(files.delete(ROOT_ID), 0);
        assert_eq!(files.delete("missing"), 0);
    }

    #[test]
    fn delete_and_breadcrumbs_survive_parent_cycles() {
        let mut files = IntranetFiles::default();
        let a = files.create_folder(ROOT_ID, "A", 1).expect("folder");
        let b = files.create_folder(&a, "B", 2).expect("folder");
        files.entries[1].parent = b.clone();

        assert!(files.breadcrumbs(&b).len() <= files.entries.len());
        assert_eq!(files.delete(&a), 2);
        assert_eq!(files.entries.len(), 1);
    }

    #[test]
    fn breadcrumbs_run_from_root() {
        let mut files = IntranetFiles::default();
        let docs = files.create_folder(ROOT_ID, "Docs", 1).expect("folder");
        assert_eq!(
            files.breadcrumbs(&docs),
            vec![
                (ROOT_ID.to_string(), ROOT_NAME.to_string()),
                (docs.clone(), "Docs".to_string()),
            ]
        );
    }

    #[test]
    fn older_blobs_load_and_regain_a_root() {
        let mut files: IntranetFiles = serde_json::from_str(
            r#"[{"id":"file-1","name":"a.txt","type":"file","content":"hi","parent":"root",
                 "modified":"2024-01-01T00:00:00.000Z","mimeType":"text/plain"}]"#,
        )
        .expect("valid json");
        files.normalize();
        assert_eq!(names(&files.children(ROOT_ID, "")), vec!["a.txt"]);
        assert_eq!(files.entries[0].id, ROOT_ID);
        assert_eq!(files.entry("file-1").and_then(|f| f.modified_ms), None);
    }
}
