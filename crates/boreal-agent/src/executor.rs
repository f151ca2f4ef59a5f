//! The iterative tool-use execution loop.
//!
//! `TaskExecutor` runs one bounded conversation per task: submit the
//! conversation and tool catalog to the reasoning engine; if the engine
//! requests tools, execute them sequentially in emission order and feed
//! the results back; stop on natural completion, on a reply with
//! neither completion nor requests, or when the iteration budget is
//! exhausted. Tool failures are conversational feedback, never loop
//! failures; only an engine-call error aborts a run, and even that is
//! returned as a structured failure result rather than propagated.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use boreal_core::settings::Settings;
use boreal_core::tracker::{ChangeSummary, FileTracker};
use boreal_harness::provider::{EngineReply, LlmProvider, Message, ProviderError};
use boreal_harness::tools::{tool_catalog, truncate_chars, ToolDispatcher};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::prompt::build_system_prompt;

/// Chars of tool output kept in the execution log. The conversation
/// keeps the full text; the log keeps this bounded copy.
const TOOL_LOG_CAP: usize = 500;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ExecutorError {
    /// Refused at construction: no engine credential configured.
    #[error(transparent)]
    Settings(#[from] boreal_core::settings::SettingsError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

// ---------------------------------------------------------------------------
// Execution results
// ---------------------------------------------------------------------------

/// One tool invocation as recorded in the execution log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolUse {
    pub tool: String,
    pub input: Value,
    /// Result text, truncated to 500 chars for storage.
    pub result: String,
}

/// The outcome of one `execute_task` call.
///
/// On success every field is populated; on failure `error` is set and
/// `file_changes`, `duration_seconds`, and `final_message` are absent,
/// while `iterations` and `tool_uses` reflect progress up to the
/// failure point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub success: bool,
    pub task_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    pub iterations: u32,
    pub tool_uses: Vec<ToolUse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_changes: Option<ChangeSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    /// UTC start time of the run, ISO-8601.
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// TaskExecutor
// ---------------------------------------------------------------------------

/// Executes coding tasks through a reasoning engine with tool use.
///
/// One task occupies the executor at a time by convention; deployments
/// needing concurrency instantiate independent executors, each owning
/// its own tracker and history.
pub struct TaskExecutor {
    provider: Arc<dyn LlmProvider>,
    execution_history: Vec<ExecutionResult>,
}

impl TaskExecutor {
    /// Create an executor around an already-configured provider.
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            execution_history: Vec::new(),
        }
    }

    /// Create an executor for a deployment, refusing to start when the
    /// engine credential is missing from the settings.
    pub fn with_settings(
        provider: Arc<dyn LlmProvider>,
        settings: &Settings,
    ) -> Result<Self, ExecutorError> {
        settings.require_api_key()?;
        Ok(Self::new(provider))
    }

    /// History of all completed task executions, oldest first.
    /// In-memory only; lives as long as this executor instance.
    pub fn execution_history(&self) -> &[ExecutionResult] {
        &self.execution_history
    }

    /// Execute a coding task.
    ///
    /// Drives the conversation for at most `max_iterations` engine
    /// round trips, dispatching requested tools between turns, then
    /// reports the result together with a summary of file changes
    /// detected in `working_directory`.
    pub async fn execute_task(
        &mut self,
        task_description: &str,
        working_directory: &Path,
        context_files: &[String],
        max_iterations: u32,
    ) -> ExecutionResult {
        let started = Instant::now();
        let timestamp = Utc::now().to_rfc3339();

        let mut tracker = FileTracker::new(working_directory);
        let dispatcher = ToolDispatcher::new(working_directory);
        let catalog = tool_catalog();

        let mut messages = vec![
            Message::system(build_system_prompt(working_directory, context_files)),
            Message::user(task_description),
        ];

        let mut iterations: u32 = 0;
        let mut tool_uses: Vec<ToolUse> = Vec::new();
        let mut final_message = String::new();

        while iterations < max_iterations {
            iterations += 1;
            info!(iteration = iterations, max_iterations, "engine round trip");

            let reply = match self.provider.submit(&messages, &catalog).await {
                Ok(reply) => reply,
                Err(err) => {
                    error!(%err, "task execution failed");
                    return ExecutionResult {
                        success: false,
                        task_description: task_description.to_owned(),
                        working_directory: None,
                        iterations,
                        tool_uses,
                        file_changes: None,
                        duration_seconds: None,
                        timestamp,
                        final_message: None,
                        error: Some(err.to_string()),
                    };
                }
            };

            match reply {
                EngineReply::Completed { text } => {
                    info!("task completed");
                    messages.push(Message::assistant(text.clone()));
                    final_message = text;
                    break;
                }
                EngineReply::ToolRequests { text, calls } => {
                    let commentary = text.unwrap_or_default();
                    messages.push(Message::assistant(commentary.clone()));

                    if calls.is_empty() {
                        // Anomalous but non-fatal: the engine neither
                        // finished nor asked for anything.
                        warn!("engine reply had no completion and no tool requests");
                        final_message = commentary;
                        break;
                    }

                    // Strictly sequential, in emission order: later
                    // calls may depend on earlier side effects, and the
                    // engine expects one result per request in order.
                    for call in calls {
                        info!(tool = %call.name, "tool use");
                        let outcome = dispatcher
                            .dispatch(&mut tracker, &call.name, &call.arguments)
                            .await;
                        let result_text = outcome.into_text(&call.name);

                        tool_uses.push(ToolUse {
                            tool: call.name.clone(),
                            input: call.arguments.clone(),
                            result: truncate_chars(&result_text, TOOL_LOG_CAP),
                        });
                        messages.push(Message::tool_result(call.name, call.id, result_text));
                    }
                }
            }
        }

        tracker.check_changes();
        let summary = tracker.get_summary();

        let result = ExecutionResult {
            success: true,
            task_description: task_description.to_owned(),
            working_directory: Some(working_directory.display().to_string()),
            iterations,
            tool_uses,
            file_changes: Some(summary),
            duration_seconds: Some(started.elapsed().as_secs_f64()),
            timestamp,
            final_message: Some(final_message),
            error: None,
        };

        self.execution_history.push(result.clone());
        result
    }
}
