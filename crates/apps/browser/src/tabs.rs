//! Tab strip model shared by the Chrome and Firefox windows.

use serde::{Deserialize, Serialize};

/// Page every new tab opens on.
pub const DEFAULT_URL: &str = "https://web.archive.org/";
/// Title shown for a tab that has not navigated yet.
pub const NEW_TAB_TITLE: &str = "New Tab";
/// Prefix that routes an address through the Wayback Machine.
pub const WAYBACK_PREFIX: &str = "https://web.archive.org/web/";

const FIRST_TAB_ID: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One browser tab.
pub struct BrowserTab {
    /// Stable tab id.
    pub id: String,
    /// Tab title.
    pub title: String,
    /// URL loaded in the tab frame.
    pub url: String,
}

impl BrowserTab {
    fn blank(id: String) -> Self {
        Self {
            id,
            title: NEW_TAB_TITLE.to_string(),
            url: DEFAULT_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Ordered tabs plus the active tab id.
pub struct TabStrip {
    /// Tabs in strip order.
    pub tabs: Vec<BrowserTab>,
    /// Id of the active tab.
    pub active: String,
}

impl Default for TabStrip {
    fn default() -> Self {
        Self {
            tabs: vec![BrowserTab::blank(FIRST_TAB_ID.to_string())],
            active: FIRST_TAB_ID.to_string(),
        }
    }
}

impl TabStrip {
    /// The active tab. Always present after [`TabStrip::normalize`].
    pub fn active_tab(&self) -> Option<&BrowserTab> {
        self.tabs.iter().find(|tab| tab.id == self.active)
    }

    /// URL of the active tab, or the default page.
    pub fn active_url(&self) -> String {
        self.active_tab()
            .map_or_else(|| DEFAULT_URL.to_string(), |tab| tab.url.clone())
    }

    /// Opens a blank tab, activates it, and returns its id.
    pub fn add(&mut self, now_ms: u64) -> String {
        let id = format!("tab-{now_ms}");
        self.tabs.push(BrowserTab::blank(id.clone()));
        self.active = id.clone();
        id
    }

    /// Closes `id`. Closing the active tab activates the first remaining one; closing the last
    /// tab opens a fresh blank tab.
    pub fn close(&mut self, id: &str, now_ms: u64) {
        self.tabs.retain(|tab| tab.id != id);
        if self.tabs.is_empty() {
            self.add(now_ms);
            return;
        }
        self.normalize();
    }

    /// Activates `id` when it exists.
    pub fn activate(&mut self, id: &str) -> bool {
        if self.tabs.iter().any(|tab| tab.id == id) {
            self.active = id.to_string();
            true
        } else {
            false
        }
    }

    /// Points the active tab at the archived copy of `input`. Returns the loaded URL, or `None`
    /// for blank input.
    pub fn navigate(&mut self, input: &str) -> Option<String> {
        let address = normalize_address(input)?;
        let url = wayback_url(&address);
        let active = self.active.clone();
        let tab = self.tabs.iter_mut().find(|tab| tab.id == active)?;
        tab.url = url.clone();
        tab.title = address;
        Some(url)
    }

    /// Repairs restored state: at least one tab, and an active id that exists.
    pub fn normalize(&mut self) {
        if self.tabs.is_empty() {
            *self = Self::default();
            return;
        }
        if self.active_tab().is_none() {
            self.active = self.tabs[0].id.clone();
        }
    }
}

/// Trims `input` and adds `https://` when no scheme is given. `None` for blank input.
pub fn normalize_address(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{trimmed}"))
    }
}

/// Wayback Machine URL for `address`. Addresses already under the archive pass through.
pub fn wayback_url(address: &str) -> String {
    if address.starts_with(WAYBACK_PREFIX) {
        address.to_string()
    } else {
        format!("{WAYBACK_PREFIX}{address}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ids(strip: &TabStrip) -> Vec<&str> {
        strip.tabs.iter().map(|tab| tab.id.as_str()).collect()
    }

    #[test]
    fn default_strip_has_one_blank_tab() {
        let strip = TabStrip::default();
        let tab = strip.active_tab().expect("active tab");
        assert_eq!(tab.title, NEW_TAB_TITLE);
        assert_eq!(tab.url, DEFAULT_URL);
    }

    #[test]
    fn navigate_prefixes_scheme_and_wraps_in_wayback() {
        let mut strip = TabStrip::default();
        assert_eq!(
            strip.navigate("example.com").as_deref(),
            Some("https://web.archive.org/web/https://example.com")
        );
        assert_eq!(strip.active_tab().expect("active").title, "https://example.com");

        assert_eq!(
            strip.navigate("http://old.site/page").as_deref(),
            Some("https://web.archive.org/web/http://old.site/page")
        );
        assert_eq!(strip.navigate("   "), None);
    }

    #[test]
    fn archive_urls_are_not_wrapped_twice() {
        let mut strip = TabStrip::default();
        let url = strip.navigate("https://web.archive.org/web/https://rust-lang.org");
        assert_eq!(url.as_deref(), Some("https://web.archive.org/web/https://rust-lang.org"));
    }

    #[test]
    fn add_activates_the_new_tab() {
        let mut strip = TabStrip::default();
        let id = strip.add(42);
        assert_eq!(id, "tab-42");
        assert_eq!(strip.active, "tab-42");
        assert_eq!(ids(&strip), vec!["1", "tab-42"]);
    }

    #[test]
    fn closing_active_tab_activates_first_remaining() {
        let mut strip = TabStrip::default();
        strip.add(2);
        strip.add(3);
        strip.close("tab-3", 4);
        assert_eq!(strip.active, "1");
        assert_eq!(ids(&strip), vec!["1", "tab-2"]);

        assert!(strip.activate("tab-2"));
        strip.close("1", 5);
        assert_eq!(strip.active, "tab-2");
    }

    #[test]
    fn closing_last_tab_opens_a_fresh_one() {
        let mut strip = TabStrip::default();
        strip.navigate("example.com");
        strip.close("1", 9);
        assert_eq!(ids(&strip), vec!["tab-9"]);
        assert_eq!(strip.active_url(), DEFAULT_URL);
    }

    #[test]
    fn activate_ignores_unknown_ids() {
        let mut strip = TabStrip::default();
        assert!(!strip.activate("missing"));
        assert_eq!(strip.active, "1");
    }

    #[test]
    fn restored_strip_is_repaired() {
        let mut strip: TabStrip =
            serde_json::from_str(r#"{"tabs":[{"id":"a","title":"A","url":"https://a"}],"active":"zzz"}"#)
                .expect("valid json");
        strip.normalize();
        assert_eq!(strip.active, "a");

        let mut empty = TabStrip {
            tabs: Vec::new(),
            active: String::new(),
        };
        empty.normalize();
        assert_eq!(empty, TabStrip::default());
    }
}
