//! Checkpoint type definitions
//!
//! A checkpoint moves through three shapes:
//! [`CheckpointState`] (captured from the agent) → [`NamedCheckpoint`]
//! (name and timestamp added by the service) → [`StoredCheckpoint`]
//! (id assigned by the provider). [`CheckpointListItem`] is the payload-free
//! view used for enumeration.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Unique identifier for a stored checkpoint
///
/// Issued by the storage provider and treated as opaque by the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckpointId(pub String);

impl CheckpointId {
    /// Create from a string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get short ID (first 8 characters)
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl std::fmt::Display for CheckpointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CheckpointId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CheckpointId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Role of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
    Tool,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
            Self::Tool => write!(f, "tool"),
        }
    }
}

/// One entry of the conversation history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    /// Create a message with an explicit role
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    pub fn tool(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Tool, content)
    }
}

/// Snapshot of an agent's mutable runtime state
///
/// Produced by the host agent. The service never inspects these fields; it
/// only carries them to the provider and back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckpointState {
    /// Agent that owns this state
    pub agent_id: String,

    /// Enabled tool identifiers
    #[serde(default)]
    pub enabled_tools: BTreeSet<String>,

    /// Enabled hook identifiers
    #[serde(default)]
    pub enabled_hooks: BTreeSet<String>,

    /// Free-form agent state
    #[serde(default)]
    pub custom_state: HashMap<String, serde_json::Value>,

    /// Conversation history, oldest first
    #[serde(default)]
    pub messages: Vec<ChatMessage>,

    /// Identifier of the last model response
    #[serde(default)]
    pub last_response_id: Option<String>,
}

impl CheckpointState {
    /// Create an empty state for an agent
    pub fn new(agent_id: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            ..Default::default()
        }
    }

    /// Set enabled tools
    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enabled_tools = tools.into_iter().map(Into::into).collect();
        self
    }

    /// Set enabled hooks
    pub fn with_hooks<I, S>(mut self, hooks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enabled_hooks = hooks.into_iter().map(Into::into).collect();
        self
    }

    /// Add a custom state entry
    pub fn with_custom_state(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.custom_state.insert(key.into(), value);
        self
    }

    /// Append a message
    pub fn with_message(mut self, message: ChatMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Set the last response pointer
    pub fn with_last_response_id(mut self, id: impl Into<String>) -> Self {
        self.last_response_id = Some(id.into());
        self
    }
}

/// A captured state with a name and creation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedCheckpoint {
    /// Human-readable name
    pub name: String,

    /// Creation time in milliseconds since the Unix epoch
    pub created_at: i64,

    #[serde(flatten)]
    pub state: CheckpointState,
}

impl NamedCheckpoint {
    /// Name a state, stamping it with the current time
    pub fn new(name: impl Into<String>, state: CheckpointState) -> Self {
        Self {
            name: name.into(),
            created_at: Utc::now().timestamp_millis(),
            state,
        }
    }

    /// Override the creation time
    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = created_at;
        self
    }

    /// Owning agent
    pub fn agent_id(&self) -> &str {
        &self.state.agent_id
    }

    /// Creation time as a UTC timestamp
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.created_at)
    }
}

/// A checkpoint as persisted by a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCheckpoint {
    pub id: CheckpointId,

    #[serde(flatten)]
    pub checkpoint: NamedCheckpoint,
}

impl StoredCheckpoint {
    /// Attach a provider-issued id to a named checkpoint
    pub fn new(id: CheckpointId, checkpoint: NamedCheckpoint) -> Self {
        Self { id, checkpoint }
    }

    pub fn name(&self) -> &str {
        &self.checkpoint.name
    }

    pub fn created_at(&self) -> i64 {
        self.checkpoint.created_at
    }

    pub fn agent_id(&self) -> &str {
        self.checkpoint.agent_id()
    }

    pub fn state(&self) -> &CheckpointState {
        &self.checkpoint.state
    }

    /// Payload-free view of this checkpoint
    pub fn to_list_item(&self) -> CheckpointListItem {
        CheckpointListItem::from(self)
    }
}

/// Summary of a checkpoint for listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointListItem {
    pub id: CheckpointId,
    pub name: String,
    pub agent_id: String,
    pub created_at: i64,
}

impl CheckpointListItem {
    /// Creation time as a UTC timestamp
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.created_at)
    }
}

impl From<&StoredCheckpoint> for CheckpointListItem {
    fn from(stored: &StoredCheckpoint) -> Self {
        Self {
            id: stored.id.clone(),
            name: stored.checkpoint.name.clone(),
            agent_id: stored.checkpoint.state.agent_id.clone(),
            created_at: stored.checkpoint.created_at,
        }
    }
}

fn millis_to_utc(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}
