//! Reasoning-engine provider abstraction.
//!
//! The engine's wire format is out of scope for this workspace: a
//! provider takes the full conversation plus the tool catalog and
//! returns an [`EngineReply`], decoded once at this boundary into a
//! tagged variant instead of being introspected ad hoc downstream.
//!
//! Concrete implementations (Anthropic, OpenAI, local models) live in
//! deployment crates. This crate ships a [`StubProvider`] placeholder;
//! tests use scripted implementations of [`LlmProvider`].

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from a reasoning-engine call. Fatal to the current run only:
/// the execution loop converts them into a structured failure result.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Required credential or client setup is missing.
    #[error("provider not configured: {0}")]
    NotConfigured(String),
    /// The engine's API returned an error.
    #[error("api error: {0}")]
    Api(String),
    /// The engine rate-limited the request.
    #[error("rate limited - retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },
    /// The request timed out.
    #[error("request timed out")]
    Timeout,
    /// Network, serialization, or other unexpected failures.
    #[error("{0}")]
    Other(String),
}

// ---------------------------------------------------------------------------
// Conversation types
// ---------------------------------------------------------------------------

/// Role of a conversation participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    System,
    User,
    Assistant,
    /// A tool-result turn, answering one requested invocation.
    Tool,
}

/// One turn in the conversation submitted to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Tool name, set on tool-result turns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Links a tool-result turn to the requesting [`ToolCall::id`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
            name: None,
            tool_call_id: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            name: None,
            tool_call_id: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            name: None,
            tool_call_id: None,
        }
    }

    /// A tool-result turn answering the call identified by `call_id`.
    pub fn tool_result(
        tool: impl Into<String>,
        call_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            role: Role::Tool,
            content: content.into(),
            name: Some(tool.into()),
            tool_call_id: Some(call_id.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tool catalog entry and requested invocation
// ---------------------------------------------------------------------------

/// A tool the engine may request, described by name, prose, and a JSON
/// Schema for its arguments. This schema is part of the contract the
/// engine relies on and must remain stable across versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    /// JSON Schema for the tool's arguments, with required markers.
    pub parameters: serde_json::Value,
}

/// One tool invocation requested by the engine, with arguments already
/// decoded to structured JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Engine-assigned id; echoed back on the matching result turn.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub arguments: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Engine reply
// ---------------------------------------------------------------------------

/// The engine's reply to one conversation submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineReply {
    /// Natural completion: the engine is done and has a final answer.
    Completed { text: String },
    /// The engine wants tools executed before it can continue. `text`
    /// carries any free-form commentary accompanying the requests.
    ToolRequests {
        text: Option<String>,
        calls: Vec<ToolCall>,
    },
}

impl EngineReply {
    /// Free text carried by the reply, regardless of variant.
    pub fn text(&self) -> &str {
        match self {
            EngineReply::Completed { text } => text,
            EngineReply::ToolRequests { text, .. } => text.as_deref().unwrap_or(""),
        }
    }
}

// ---------------------------------------------------------------------------
// LlmProvider trait
// ---------------------------------------------------------------------------

/// Async seam to the reasoning engine.
///
/// Implementations must be `Send + Sync`; the execution loop holds one
/// behind an `Arc` and awaits each round trip to completion before the
/// next.
#[async_trait::async_trait]
pub trait LlmProvider: Send + Sync {
    /// Submit the conversation and tool catalog, returning the engine's
    /// decoded reply.
    async fn submit(
        &self,
        messages: &[Message],
        tools: &[Tool],
    ) -> Result<EngineReply, ProviderError>;

    /// Human-readable provider name, for logging.
    fn name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// StubProvider - returns an error for every call.
// ---------------------------------------------------------------------------

/// Placeholder provider that always fails with `NotConfigured`. Real
/// engine clients are supplied by deployment crates.
#[derive(Debug, Clone)]
pub struct StubProvider {
    provider_name: String,
}

impl StubProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            provider_name: name.into(),
        }
    }
}

#[async_trait::async_trait]
impl LlmProvider for StubProvider {
    async fn submit(
        &self,
        _messages: &[Message],
        _tools: &[Tool],
    ) -> Result<EngineReply, ProviderError> {
        Err(ProviderError::NotConfigured(format!(
            "{} provider is not configured; install a concrete implementation",
            self.provider_name
        )))
    }

    fn name(&self) -> &str {
        &self.provider_name
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
