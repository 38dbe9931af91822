//! AI employee roster, persona prompts, per-employee chat logs and the backup file format.

use std::collections::{BTreeMap, HashSet};

use desktop_app_assistant::chat::{conversation, resolve_api_key};
use desktop_app_contract::StateService;
use platform_host::{
    AssistantError, AssistantProvider, ChatCompletionRequest, ChatCompletionService, ChatMessage,
    ChatRole,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Completion length cap for personalities and replies.
pub const EMPLOYEE_MAX_TOKENS: u32 = 200;
/// Avatar service; the employee id is appended as the seed.
pub const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";
/// Reply shown when a chat request fails after it was sent.
pub const FALLBACK_REPLY: &str = "I apologize, but I'm having trouble responding right now.";
/// File name offered for exported backups.
pub const BACKUP_FILE_NAME: &str = "ai_employees_backup.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One AI employee.
pub struct Employee {
    /// Stable id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Job title.
    pub role: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: String,
    /// Generated personality, absent when generation failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality: Option<String>,
}

impl Employee {
    /// System prompt used when chatting with this employee.
    pub fn persona(&self) -> String {
        format!(
            "You are {}, a {}. {} Respond in character to the user's message.",
            self.name,
            self.role,
            self.personality.as_deref().unwrap_or_default()
        )
    }
}

/// Trimmed `(name, role)` when both are filled in.
pub fn new_hire(name: &str, role: &str) -> Option<(String, String)> {
    let (name, role) = (name.trim(), role.trim());
    (!name.is_empty() && !role.is_empty()).then(|| (name.to_string(), role.to_string()))
}

/// Prompt asking the model to describe a new employee.
pub fn personality_prompt(name: &str, role: &str) -> String {
    format!(
        "Create a brief personality description for an AI employee named {name} who works as a \
         {role}. Include their key traits and work style."
    )
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Persisted roster, in hiring order.
pub struct Roster {
    /// Employees.
    pub employees: Vec<Employee>,
}

impl Roster {
    /// Builds a roster from imported rows, keeping the first row for each id.
    pub fn from_rows(rows: Vec<Employee>) -> Self {
        let mut seen = HashSet::new();
        Self {
            employees: rows
                .into_iter()
                .filter(|employee| seen.insert(employee.id.clone()))
                .collect(),
        }
    }

    /// Looks up an employee.
    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    /// Hires an employee and returns the new id. Blank names or roles are ignored.
    pub fn hire(
        &mut self,
        name: &str,
        role: &str,
        personality: Option<String>,
        now_ms: u64,
    ) -> Option<String> {
        let (name, role) = new_hire(name, role)?;
        let id = now_ms.to_string();
        self.employees.push(Employee {
            avatar: format!("{AVATAR_BASE_URL}{id}"),
            id: id.clone(),
            name,
            role,
            personality: personality.filter(|text| !text.trim().is_empty()),
        });
        Some(id)
    }

    /// Removes an employee. Returns `false` when the id is unknown.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.employees.len();
        self.employees.retain(|employee| employee.id != id);
        before != self.employees.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Chat lines per employee id, oldest first.
pub struct ChatLog {
    /// Lines keyed by employee id.
    pub lines: BTreeMap<String, Vec<String>>,
}

impl ChatLog {
    /// Lines exchanged with `id`.
    pub fn lines_for(&self, id: &str) -> Vec<String> {
        self.lines.get(id).cloned().unwrap_or_default()
    }

    /// Records a user message.
    pub fn push_user(&mut self, id: &str, text: &str) {
        self.push(id, format!("You: {text}"));
    }

    /// Records a reply from `speaker`.
    pub fn push_reply(&mut self, id: &str, speaker: &str, text: &str) {
        self.push(id, format!("{speaker}: {text}"));
    }

    /// Drops the log of a removed employee.
    pub fn forget(&mut self, id: &str) {
        self.lines.remove(id);
    }

    fn push(&mut self, id: &str, line: String) {
        self.lines.entry(id.to_string()).or_default().push(line);
    }
}

/// Returns whether a chat line was written by the user.
pub fn is_user_line(line: &str) -> bool {
    line.starts_with("You:")
}

/// Builds the personality request, failing before any I/O when the Groq key is missing.
pub fn personality_request(
    state: &StateService,
    name: &str,
    role: &str,
) -> Result<ChatCompletionRequest, AssistantError> {
    let api_key = resolve_api_key(state, AssistantProvider::Groq)?;
    Ok(ChatCompletionRequest::new(
        AssistantProvider::Groq,
        api_key,
        vec![ChatMessage::new(ChatRole::User, personality_prompt(name, role))],
    )
    .with_max_tokens(EMPLOYEE_MAX_TOKENS))
}

/// Builds an in-character chat request, failing before any I/O when the Groq key is missing.
pub fn chat_request(
    state: &StateService,
    employee: &Employee,
    input: &str,
) -> Result<ChatCompletionRequest, AssistantError> {
    let api_key = resolve_api_key(state, AssistantProvider::Groq)?;
    let persona = employee.persona();
    Ok(ChatCompletionRequest::new(
        AssistantProvider::Groq,
        api_key,
        conversation(Some(&persona), &[], input),
    )
    .with_max_tokens(EMPLOYEE_MAX_TOKENS))
}

/// Generates a personality for a new hire.
pub async fn generate_personality(
    state: &StateService,
    chat: &dyn ChatCompletionService,
    name: &str,
    role: &str,
) -> Result<String, AssistantError> {
    let request = personality_request(state, name, role)?;
    chat.complete(request).await
}

/// Sends one message to `employee` and resolves with the reply.
pub async fn ask(
    state: &StateService,
    chat: &dyn ChatCompletionService,
    employee: &Employee,
    input: &str,
) -> Result<String, AssistantError> {
    let request = chat_request(state, employee, input)?;
    chat.complete(request).await
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Export file contents.
pub struct Backup {
    /// Exported roster.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Exported chat logs keyed by employee id.
    #[serde(default, rename = "chatHistory")]
    pub chat_history: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Backup import/export failure.
pub enum BackupError {
    /// The file is not a roster backup.
    #[error("invalid backup file: {0}")]
    Malformed(String),
    /// The backup could not be encoded.
    #[error("could not encode backup: {0}")]
    Encode(String),
}

/// Pretty-printed backup of the roster and chat logs.
pub fn export_backup(roster: &Roster, log: &ChatLog) -> Result<String, BackupError> {
    let backup = Backup {
        employees: roster.employees.clone(),
        chat_history: log.lines.clone(),
    };
    serde_json::to_string_pretty(&backup).map_err(|e| BackupError::Encode(e.to_string()))
}

/// Parses a backup file into a roster and chat logs.
///
/// Logs of employees missing from the imported roster are dropped.
pub fn import_backup(text: &str) -> Result<(Roster, ChatLog), BackupError> {
    let backup: Backup =
        serde_json::from_str(text).map_err(|e| BackupError::Malformed(e.to_string()))?;
    let roster = Roster::from_rows(backup.employees);
    let lines = backup
        .chat_history
        .into_iter()
        .filter(|(id, _)| roster.get(id).is_some())
        .collect();
    Ok((roster, ChatLog { lines }))
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use platform_host::{keys, KeyValueStore, MemoryKeyValueStore, RecordingChatCompletionService};
    use pretty_assertions::assert_eq;

    use super::*;

    fn state_with_groq(key: Option<&str>) -> StateService {
        let store = MemoryKeyValueStore::default();
        if let Some(key) = key {
            store.set(keys::GROQ_KEY, key).expect("seed");
        }
        StateService::new(Rc::new(store))
    }

    fn analyst() -> Employee {
        Employee {
            id: "1".to_string(),
            name: "Ada".to_string(),
            role: "Data Analyst".to_string(),
            avatar: String::new(),
            personality: Some("Precise and calm.".to_string()),
        }
    }

    #[test]
    fn hiring_trims_and_requires_both_fields() {
        let mut roster = Roster::default();
        assert_eq!(roster.hire("  ", "Analyst", None, 1), None);
        assert_eq!(roster.hire("Ada", "", None, 1), None);

        let id = roster.hire(" Ada ", " Analyst ", Some("  ".to_string()), 42);
        assert_eq!(id.as_deref(), Some("42"));
        let hired = roster.get("42").expect("hired");
        assert_eq!(hired.name, "Ada");
        assert_eq!(hired.role, "Analyst");
        assert_eq!(hired.personality, None);
        assert_eq!(
            hired.avatar,
            "https://api.dicebear.com/7.x/avataaars/svg?seed=42"
        );
    }

    #[test]
    fn same_names_get_distinct_ids() {
        let mut roster = Roster::default();
        roster.hire("Ada", "Analyst", None, 1);
        roster.hire("Ada", "Analyst", None, 2);
        let ids: Vec<&str> = roster.employees.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn remove_reports_unknown_ids() {
        let mut roster = Roster::default();
        roster.hire("Ada", "Analyst", None, 1);
        assert!(!roster.remove("9"));
        assert!(roster.remove("1"));
        assert!(roster.employees.is_empty());
    }

    #[test]
    fn persona_embeds_identity_and_personality() {
        assert_eq!(
            analyst().persona(),
            "You are Ada, a Data Analyst. Precise and calm. Respond in character to the user's message."
        );
    }

    #[test]
    fn personality_generation_needs_a_groq_key() {
        let service = RecordingChatCompletionService::with_replies([Ok("unused".to_string())]);
        let result = block_on(generate_personality(
            &state_with_groq(None),
            &service,
            "Ada",
            "Analyst",
        ));
        assert_eq!(
            result,
            Err(AssistantError::missing_key(AssistantProvider::Groq))
        );
        assert!(service.calls().is_empty());
    }

    #[test]
    fn personality_request_uses_short_groq_completion() {
        let service =
            RecordingChatCompletionService::with_replies([Ok("Curious and kind.".to_string())]);
        let result = block_on(generate_personality(
            &state_with_groq(Some("gsk")),
            &service,
            "Ada",
            "Analyst",
        ));
        assert_eq!(result, Ok("Curious and kind.".to_string()));

        let calls = service.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].provider, AssistantProvider::Groq);
        assert_eq!(calls[0].max_tokens, EMPLOYEE_MAX_TOKENS);
        assert_eq!(
            calls[0].messages,
            vec![ChatMessage::new(
                ChatRole::User,
                personality_prompt("Ada", "Analyst")
            )]
        );
    }

    #[test]
    fn chat_sends_persona_then_message() {
        let service = RecordingChatCompletionService::with_replies([Ok("Hello.".to_string())]);
        let reply = block_on(ask(
            &state_with_groq(Some("gsk")),
            &service,
            &analyst(),
            "status?",
        ));
        assert_eq!(reply, Ok("Hello.".to_string()));

        let roles: Vec<ChatRole> = service.calls()[0].messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![ChatRole::System, ChatRole::User]);
    }

    #[test]
    fn chat_log_formats_speakers() {
        let mut log = ChatLog::default();
        log.push_user("1", "hi");
        log.push_reply("1", "Ada", FALLBACK_REPLY);
        let lines = log.lines_for("1");
        assert_eq!(
            lines,
            vec![
                "You: hi".to_string(),
                format!("Ada: {FALLBACK_REPLY}"),
            ]
        );
        assert!(is_user_line(&lines[0]));
        assert!(!is_user_line(&lines[1]));

        log.forget("1");
        assert!(log.lines_for("1").is_empty());
    }

    #[test]
    fn backup_uses_camel_case_history_and_restores() {
        let mut roster = Roster::default();
        roster.hire("Ada", "Analyst", None, 7);
        let mut log = ChatLog::default();
        log.push_user("7", "hi");

        let text = export_backup(&roster, &log).expect("export");
        assert!(text.contains("\"chatHistory\""));

        let (restored, restored_log) = import_backup(&text).expect("import");
        assert_eq!(restored, roster);
        assert_eq!(restored_log, log);
    }

    #[test]
    fn import_rejects_garbage_and_dedupes_ids() {
        assert!(matches!(
            import_backup("not json"),
            Err(BackupError::Malformed(_))
        ));

        let text = r#"{
            "employees": [
                {"id": "1", "name": "Ada", "role": "Analyst", "avatar": ""},
                {"id": "1", "name": "Copy", "role": "Analyst", "avatar": ""}
            ],
            "chatHistory": {"1": ["You: hi"], "ghost": ["You: boo"]}
        }"#;
        let (roster, log) = import_backup(text).expect("import");
        assert_eq!(roster.employees.len(), 1);
        assert_eq!(roster.employees[0].name, "Ada");
        assert_eq!(log.lines.len(), 1);

        let (empty, _) = import_backup("{}").expect("empty backup");
        assert!(empty.employees.is_empty());
    }
}
