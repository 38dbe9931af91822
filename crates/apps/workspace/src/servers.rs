//! Kasm Workspaces server list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One saved Kasm server.
pub struct KasmServer {
    /// Stable id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Server URL, always ending in `/`.
    pub url: String,
    /// When the server was added, in unix milliseconds. Absent in older blobs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_ms: Option<u64>,
}

/// Trims `url` and appends a trailing `/`. Blank input yields `None`.
pub fn normalize_server_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    Some(if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Persisted server list, in the order added.
pub struct ServerList {
    /// Saved servers.
    pub servers: Vec<KasmServer>,
}

impl ServerList {
    /// Looks up a server.
    pub fn get(&self, id: &str) -> Option<&KasmServer> {
        self.servers.iter().find(|server| server.id == id)
    }

    /// Adds a server and returns its id. Blank names or URLs are ignored.
    pub fn add(&mut self, name: &str, url: &str, now_ms: u64) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let url = normalize_server_url(url)?;
        let id = now_ms.to_string();
        self.servers.push(KasmServer {
            id: id.clone(),
            name: name.to_string(),
            url,
            added_ms: Some(now_ms),
        });
        Some(id)
    }

    /// Removes a server. Returns `false` when the id is unknown.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.servers.len();
        self.servers.retain(|server| server.id != id);
        before != self.servers.len()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn urls_gain_a_single_trailing_slash() {
        assert_eq!(
            normalize_server_url(" https://kasm.local "),
            Some("https://kasm.local/".to_string())
        );
        assert_eq!(
            normalize_server_url("https://kasm.local/"),
            Some("https://kasm.local/".to_string())
        );
        assert_eq!(normalize_server_url("   "), None);
    }

    #[test]
    fn add_requires_name_and_url() {
        let mut list = ServerList::default();
        assert_eq!(list.add("", "https://a", 1), None);
        assert_eq!(list.add("Lab", " ", 1), None);
        assert!(list.servers.is_empty());

        assert_eq!(list.add(" Lab ", "https://a", 5).as_deref(), Some("5"));
        let server = list.get("5").expect("added");
        assert_eq!(server.name, "Lab");
        assert_eq!(server.url, "https://a/");
        assert_eq!(server.added_ms, Some(5));
    }

    #[test]
    fn duplicate_names_keep_distinct_ids() {
        let mut list = ServerList::default();
        list.add("Lab", "https://a", 1);
        list.add("Lab", "https://b", 2);
        let ids: Vec<&str> = list.servers.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        assert!(list.remove("1"));
        assert!(!list.remove("1"));
        assert_eq!(list.servers[0].url, "https://b/");
    }

    #[test]
    fn older_blobs_without_timestamps_still_load() {
        let list: ServerList = serde_json::from_str(
            r#"[{"id":"1","name":"Lab","url":"https://a/","added":"2024-01-01T00:00:00.000Z"}]"#,
        )
        .expect("valid json");
        assert_eq!(list.servers[0].added_ms, None);
        assert_eq!(list.servers[0].name, "Lab");
    }
}
