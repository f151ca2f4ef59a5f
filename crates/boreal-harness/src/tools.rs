//! Tool catalog and dispatch.
//!
//! Six built-in tools the reasoning engine can request: read_file,
//! write_file, edit_file, list_files, search_code, run_command. Each
//! dispatch returns a [`ToolOutcome`] rather than an error: failures
//! local to one invocation are rendered as descriptive text and fed
//! back into the conversation so the engine can self-correct. The
//! outer execution loop never fails because a tool did.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use boreal_core::tracker::FileTracker;
use glob::Pattern;
use serde_json::{json, Value};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::provider::Tool;

/// Cap on captured stdout/stderr from run_command, in chars.
const STREAM_CAP: usize = 2000;

/// Cap on search_code output, in chars.
const SEARCH_CAP: usize = 5000;

/// Maximum number of paths returned by list_files.
const LIST_CAP: usize = 100;

/// Default run_command timeout in seconds.
const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 30;

// ---------------------------------------------------------------------------
// Tool catalog
// ---------------------------------------------------------------------------

/// The complete tool catalog handed to the reasoning engine. Schema
/// shapes are part of the conversation contract; keep them stable.
pub fn tool_catalog() -> Vec<Tool> {
    vec![
        Tool {
            name: "read_file".to_string(),
            description:
                "Read the contents of a file. Use this before modifying files to understand current state."
                    .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "description": "Relative path to the file from working directory"
                    }
                },
                "required": ["path"]
            }),
        },
        Tool {
            name: "write_file".to_string(),
            description: "Write content to a file. Creates new file or overwrites existing."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "description": "Relative path to the file from working directory"
                    },
                    "content": {
                        "type": "string",
                        "description": "Full content to write to the file"
                    }
                },
                "required": ["path", "content"]
            }),
        },
        Tool {
            name: "edit_file".to_string(),
            description:
                "Edit a file by replacing specific content. More precise than rewriting the entire file."
                    .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "description": "Relative path to the file from working directory"
                    },
                    "old_content": {
                        "type": "string",
                        "description": "Exact content to find and replace"
                    },
                    "new_content": {
                        "type": "string",
                        "description": "New content to insert"
                    }
                },
                "required": ["path", "old_content", "new_content"]
            }),
        },
        Tool {
            name: "list_files".to_string(),
            description: "List files in a directory with optional glob pattern.".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "description": "Directory path (relative to working directory)"
                    },
                    "pattern": {
                        "type": "string",
                        "description": "Optional glob pattern (e.g. '*.py')"
                    },
                    "recursive": {
                        "type": "boolean",
                        "description": "Search recursively"
                    }
                },
                "required": ["path"]
            }),
        },
        Tool {
            name: "search_code".to_string(),
            description: "Search for text patterns in files (grep-like).".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "pattern": {
                        "type": "string",
                        "description": "Search pattern (supports regex)"
                    },
                    "path": {
                        "type": "string",
                        "description": "Directory to search in"
                    },
                    "file_pattern": {
                        "type": "string",
                        "description": "File pattern to filter (e.g. '*.py')"
                    },
                    "case_sensitive": {
                        "type": "boolean",
                        "description": "Case sensitive search"
                    }
                },
                "required": ["pattern"]
            }),
        },
        Tool {
            name: "run_command".to_string(),
            description:
                "Execute a shell command. Use for testing, building, installing dependencies."
                    .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "command": {
                        "type": "string",
                        "description": "Shell command to execute"
                    },
                    "timeout": {
                        "type": "integer",
                        "description": "Timeout in seconds (default: 30)"
                    }
                },
                "required": ["command"]
            }),
        },
    ]
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Discriminated result of one tool invocation. `Failed` never
/// propagates as an error; it renders as conversational feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    Success(String),
    Failed(String),
}

impl ToolOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, ToolOutcome::Failed(_))
    }

    /// Render the outcome as the text fed back to the engine.
    pub fn into_text(self, tool: &str) -> String {
        match self {
            ToolOutcome::Success(text) => text,
            ToolOutcome::Failed(reason) => format!("Error executing {tool}: {reason}"),
        }
    }
}

/// Truncate to at most `max` chars, respecting char boundaries.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Executes tool invocations against a working directory, recording
/// reads and write baselines in the caller's [`FileTracker`].
pub struct ToolDispatcher {
    working_directory: PathBuf,
}

impl ToolDispatcher {
    pub fn new(working_directory: impl Into<PathBuf>) -> Self {
        Self {
            working_directory: working_directory.into(),
        }
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    /// Execute one requested invocation. Never returns an error: every
    /// failure is folded into a `Failed` outcome.
    pub async fn dispatch(
        &self,
        tracker: &mut FileTracker,
        name: &str,
        input: &Value,
    ) -> ToolOutcome {
        let outcome = match name {
            "read_file" => self.read_file(tracker, input).await,
            "write_file" => self.write_file(tracker, input).await,
            "edit_file" => self.edit_file(tracker, input).await,
            "list_files" => self.list_files(input),
            "search_code" => self.search_code(input),
            "run_command" => self.run_command(input).await,
            other => Err(format!("Unknown tool: {other}")),
        };

        match outcome {
            Ok(text) => ToolOutcome::Success(text),
            Err(reason) => {
                warn!(tool = name, %reason, "tool invocation failed");
                ToolOutcome::Failed(reason)
            }
        }
    }

    async fn read_file(&self, tracker: &mut FileTracker, input: &Value) -> Result<String, String> {
        let path = required_str(input, "path")?;
        tracker.record_read(path);

        let full = self.working_directory.join(path);
        let content = tokio::fs::read_to_string(&full)
            .await
            .map_err(|err| format!("failed to read '{path}': {err}"))?;
        Ok(format!(
            "File content ({} chars):\n{content}",
            content.chars().count()
        ))
    }

    async fn write_file(&self, tracker: &mut FileTracker, input: &Value) -> Result<String, String> {
        let path = required_str(input, "path")?;
        let content = required_str(input, "content")?;

        // Baseline before the write: whatever existed, or nothing.
        tracker.track_file(path);

        let full = self.working_directory.join(path);
        if let Some(parent) = full.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| format!("failed to create parent directories: {err}"))?;
        }
        tokio::fs::write(&full, content)
            .await
            .map_err(|err| format!("failed to write '{path}': {err}"))?;

        info!(path, chars = content.chars().count(), "wrote file");
        Ok(format!(
            "Successfully wrote {} chars to {path}",
            content.chars().count()
        ))
    }

    async fn edit_file(&self, tracker: &mut FileTracker, input: &Value) -> Result<String, String> {
        let path = required_str(input, "path")?;
        let old_content = required_str(input, "old_content")?;
        let new_content = required_str(input, "new_content")?;

        tracker.track_file(path);

        let full = self.working_directory.join(path);
        let content = tokio::fs::read_to_string(&full)
            .await
            .map_err(|err| format!("failed to read '{path}': {err}"))?;

        // Exact literal match only; no fuzzy or normalized matching.
        if !content.contains(old_content) {
            return Err(format!("Old content not found in {path}"));
        }

        let updated = content.replace(old_content, new_content);
        tokio::fs::write(&full, updated)
            .await
            .map_err(|err| format!("failed to write '{path}': {err}"))?;

        info!(path, "edited file");
        Ok(format!("Successfully edited {path}"))
    }

    fn list_files(&self, input: &Value) -> Result<String, String> {
        let path = required_str(input, "path")?;
        let pattern = input
            .get("pattern")
            .and_then(Value::as_str)
            .unwrap_or("*");
        let recursive = input
            .get("recursive")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let pattern = Pattern::new(pattern)
            .map_err(|err| format!("invalid glob pattern '{pattern}': {err}"))?;
        let base = self.working_directory.join(path);

        let mut walker = WalkDir::new(&base);
        if !recursive {
            walker = walker.max_depth(1);
        }

        let mut files = Vec::new();
        for entry in walker.into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let matches = entry
                .path()
                .file_name()
                .map(|n| pattern.matches(&n.to_string_lossy()))
                .unwrap_or(false);
            if !matches {
                continue;
            }
            let rel = entry
                .path()
                .strip_prefix(&self.working_directory)
                .unwrap_or(entry.path());
            files.push(rel.to_string_lossy().into_owned());
        }
        files.sort();

        let listing = files
            .iter()
            .take(LIST_CAP)
            .cloned()
            .collect::<Vec<_>>()
            .join("\n");
        Ok(format!("Found {} files:\n{listing}", files.len()))
    }

    fn search_code(&self, input: &Value) -> Result<String, String> {
        let pattern = required_str(input, "pattern")?;
        let path = input.get("path").and_then(Value::as_str).unwrap_or(".");
        let file_pattern = input
            .get("file_pattern")
            .and_then(Value::as_str)
            .unwrap_or("*");
        let case_sensitive = input
            .get("case_sensitive")
            .and_then(Value::as_bool)
            .unwrap_or(true);

        let regex_source = if case_sensitive {
            pattern.to_string()
        } else {
            format!("(?i){pattern}")
        };
        let regex = regex::Regex::new(&regex_source)
            .map_err(|err| format!("invalid search pattern '{pattern}': {err}"))?;
        let file_glob = Pattern::new(file_pattern)
            .map_err(|err| format!("invalid file pattern '{file_pattern}': {err}"))?;

        let base = self.working_directory.join(path);
        let mut matches = String::new();

        'walk: for entry in WalkDir::new(&base).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let name_matches = entry
                .path()
                .file_name()
                .map(|n| file_glob.matches(&n.to_string_lossy()))
                .unwrap_or(false);
            if !name_matches {
                continue;
            }
            // Binary or unreadable files are skipped, not fatal.
            let Ok(content) = std::fs::read_to_string(entry.path()) else {
                continue;
            };
            let rel = entry
                .path()
                .strip_prefix(&self.working_directory)
                .unwrap_or(entry.path());
            for (line_no, line) in content.lines().enumerate() {
                if regex.is_match(line) {
                    matches.push_str(&format!("{}:{}:{line}\n", rel.display(), line_no + 1));
                    if matches.chars().count() >= SEARCH_CAP {
                        break 'walk;
                    }
                }
            }
        }

        if matches.is_empty() {
            Ok("No matches found".to_string())
        } else {
            Ok(format!(
                "Search results:\n{}",
                truncate_chars(&matches, SEARCH_CAP)
            ))
        }
    }

    async fn run_command(&self, input: &Value) -> Result<String, String> {
        let command = required_str(input, "command")?;
        let timeout_secs = input
            .get("timeout")
            .and_then(Value::as_u64)
            .unwrap_or(DEFAULT_COMMAND_TIMEOUT_SECS);

        info!(command, timeout_secs, "executing command");

        let child = tokio::process::Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(&self.working_directory)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|err| format!("failed to spawn command: {err}"))?;

        let output = tokio::time::timeout(
            Duration::from_secs(timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| format!("command timed out after {timeout_secs} seconds"))?
        .map_err(|err| format!("failed to collect command output: {err}"))?;

        let mut rendered = format!("Exit code: {}\n", output.status.code().unwrap_or(-1));
        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.is_empty() {
            rendered.push_str(&format!("STDOUT:\n{}\n", truncate_chars(&stdout, STREAM_CAP)));
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            rendered.push_str(&format!("STDERR:\n{}\n", truncate_chars(&stderr, STREAM_CAP)));
        }
        Ok(rendered)
    }
}

/// Extract a required string argument, with the standard error shape.
fn required_str<'a>(input: &'a Value, key: &str) -> Result<&'a str, String> {
    input
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| format!("missing required parameter: {key}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ToolDispatcher, FileTracker) {
        let dir = TempDir::new().unwrap();
        let dispatcher = ToolDispatcher::new(dir.path());
        let tracker = FileTracker::new(dir.path());
        (dir, dispatcher, tracker)
    }

    #[test]
    fn catalog_declares_six_tools_with_object_schemas() {
        let tools = tool_catalog();
        assert_eq!(tools.len(), 6);

        let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        for expected in [
            "read_file",
            "write_file",
            "edit_file",
            "list_files",
            "search_code",
            "run_command",
        ] {
            assert!(names.contains(&expected), "missing tool {expected}");
        }

        for tool in &tools {
            assert_eq!(tool.parameters["type"], "object", "{}", tool.name);
            assert!(
                tool.parameters["required"].is_array(),
                "{} must mark required params",
                tool.name
            );
        }
    }

    #[test]
    fn catalog_schemas_serialize_roundtrip() {
        for tool in tool_catalog() {
            let json = serde_json::to_string(&tool).unwrap();
            let parsed: Tool = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed.name, tool.name);
        }
    }

    #[tokio::test]
    async fn write_then_read_roundtrip() {
        let (_dir, dispatcher, mut tracker) = setup();

        let outcome = dispatcher
            .dispatch(
                &mut tracker,
                "write_file",
                &serde_json::json!({"path": "hello.txt", "content": "hi there"}),
            )
            .await;
        assert!(!outcome.is_failed());
        assert!(outcome
            .into_text("write_file")
            .contains("Successfully wrote 8 chars"));

        let outcome = dispatcher
            .dispatch(
                &mut tracker,
                "read_file",
                &serde_json::json!({"path": "hello.txt"}),
            )
            .await;
        let text = outcome.into_text("read_file");
        assert!(text.starts_with("File content (8 chars):"));
        assert!(text.contains("hi there"));
    }

    #[tokio::test]
    async fn write_file_creates_parent_directories() {
        let (dir, dispatcher, mut tracker) = setup();

        let outcome = dispatcher
            .dispatch(
                &mut tracker,
                "write_file",
                &serde_json::json!({"path": "nested/deep/file.txt", "content": "x"}),
            )
            .await;
        assert!(!outcome.is_failed());
        assert_eq!(
            fs::read_to_string(dir.path().join("nested/deep/file.txt")).unwrap(),
            "x"
        );
    }

    #[tokio::test]
    async fn read_file_missing_reports_error_text() {
        let (_dir, dispatcher, mut tracker) = setup();

        let outcome = dispatcher
            .dispatch(
                &mut tracker,
                "read_file",
                &serde_json::json!({"path": "ghost.txt"}),
            )
            .await;
        assert!(outcome.is_failed());
        let text = outcome.into_text("read_file");
        assert!(text.starts_with("Error executing read_file:"));
    }

    #[tokio::test]
    async fn edit_file_replaces_every_occurrence() {
        let (dir, dispatcher, mut tracker) = setup();
        fs::write(dir.path().join("code.py"), "foo()\nbar()\nfoo()\n").unwrap();

        let outcome = dispatcher
            .dispatch(
                &mut tracker,
                "edit_file",
                &serde_json::json!({
                    "path": "code.py",
                    "old_content": "foo()",
                    "new_content": "baz()"
                }),
            )
            .await;
        assert!(!outcome.is_failed());
        assert_eq!(
            fs::read_to_string(dir.path().join("code.py")).unwrap(),
            "baz()\nbar()\nbaz()\n"
        );
    }

    #[tokio::test]
    async fn edit_file_not_found_leaves_file_untouched() {
        let (dir, dispatcher, mut tracker) = setup();
        fs::write(dir.path().join("code.py"), "original content").unwrap();

        let outcome = dispatcher
            .dispatch(
                &mut tracker,
                "edit_file",
                &serde_json::json!({
                    "path": "code.py",
                    "old_content": "does not appear",
                    "new_content": "irrelevant"
                }),
            )
            .await;
        assert!(outcome.is_failed());
        let text = outcome.into_text("edit_file");
        assert!(text.contains("not found"), "got: {text}");
        assert_eq!(
            fs::read_to_string(dir.path().join("code.py")).unwrap(),
            "original content"
        );
    }

    #[tokio::test]
    async fn list_files_filters_by_pattern() {
        let (dir, dispatcher, mut tracker) = setup();
        fs::write(dir.path().join("a.py"), "").unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();

        let outcome = dispatcher
            .dispatch(
                &mut tracker,
                "list_files",
                &serde_json::json!({"path": ".", "pattern": "*.py"}),
            )
            .await;
        let text = outcome.into_text("list_files");
        assert!(text.starts_with("Found 1 files:"), "got: {text}");
        assert!(text.contains("a.py"));
        assert!(!text.contains("b.txt"));
    }

    #[tokio::test]
    async fn list_files_recursive_descends_subdirectories() {
        let (dir, dispatcher, mut tracker) = setup();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("top.rs"), "").unwrap();
        fs::write(dir.path().join("sub/inner.rs"), "").unwrap();

        let flat = dispatcher
            .dispatch(
                &mut tracker,
                "list_files",
                &serde_json::json!({"path": ".", "pattern": "*.rs"}),
            )
            .await
            .into_text("list_files");
        assert!(flat.starts_with("Found 1 files:"), "got: {flat}");

        let deep = dispatcher
            .dispatch(
                &mut tracker,
                "list_files",
                &serde_json::json!({"path": ".", "pattern": "*.rs", "recursive": true}),
            )
            .await
            .into_text("list_files");
        assert!(deep.starts_with("Found 2 files:"), "got: {deep}");
        assert!(deep.contains("sub/inner.rs") || deep.contains("sub\\inner.rs"));
    }

    #[tokio::test]
    async fn search_code_reports_line_numbers() {
        let (dir, dispatcher, mut tracker) = setup();
        fs::write(dir.path().join("lib.rs"), "fn alpha() {}\nfn beta() {}\n").unwrap();

        let outcome = dispatcher
            .dispatch(
                &mut tracker,
                "search_code",
                &serde_json::json!({"pattern": "beta"}),
            )
            .await;
        let text = outcome.into_text("search_code");
        assert!(text.starts_with("Search results:"));
        assert!(text.contains("lib.rs:2:"), "got: {text}");
    }

    #[tokio::test]
    async fn search_code_no_matches() {
        let (dir, dispatcher, mut tracker) = setup();
        fs::write(dir.path().join("lib.rs"), "nothing here\n").unwrap();

        let outcome = dispatcher
            .dispatch(
                &mut tracker,
                "search_code",
                &serde_json::json!({"pattern": "absent_symbol"}),
            )
            .await;
        assert_eq!(
            outcome.into_text("search_code"),
            "No matches found".to_string()
        );
    }

    #[tokio::test]
    async fn search_code_case_insensitive() {
        let (dir, dispatcher, mut tracker) = setup();
        fs::write(dir.path().join("lib.rs"), "const VALUE: u32 = 1;\n").unwrap();

        let sensitive = dispatcher
            .dispatch(
                &mut tracker,
                "search_code",
                &serde_json::json!({"pattern": "value"}),
            )
            .await
            .into_text("search_code");
        assert_eq!(sensitive, "No matches found");

        let insensitive = dispatcher
            .dispatch(
                &mut tracker,
                "search_code",
                &serde_json::json!({"pattern": "value", "case_sensitive": false}),
            )
            .await
            .into_text("search_code");
        assert!(insensitive.contains("VALUE"));
    }

    #[tokio::test]
    async fn run_command_reports_exit_code() {
        let (_dir, dispatcher, mut tracker) = setup();

        let outcome = dispatcher
            .dispatch(
                &mut tracker,
                "run_command",
                &serde_json::json!({"command": "exit 7"}),
            )
            .await;
        let text = outcome.into_text("run_command");
        assert!(text.contains("Exit code: 7"), "got: {text}");
    }

    #[tokio::test]
    async fn run_command_captures_streams() {
        let (_dir, dispatcher, mut tracker) = setup();

        let outcome = dispatcher
            .dispatch(
                &mut tracker,
                "run_command",
                &serde_json::json!({"command": "echo out; echo err >&2"}),
            )
            .await;
        let text = outcome.into_text("run_command");
        assert!(text.contains("Exit code: 0"));
        assert!(text.contains("STDOUT:\nout"));
        assert!(text.contains("STDERR:\nerr"));
    }

    #[tokio::test]
    async fn run_command_timeout_surfaces_as_error_text() {
        let (_dir, dispatcher, mut tracker) = setup();

        let outcome = dispatcher
            .dispatch(
                &mut tracker,
                "run_command",
                &serde_json::json!({"command": "sleep 5", "timeout": 1}),
            )
            .await;
        assert!(outcome.is_failed());
        let text = outcome.into_text("run_command");
        assert!(
            text.starts_with("Error executing run_command:") && text.contains("timed out"),
            "got: {text}"
        );
    }

    #[tokio::test]
    async fn unknown_tool_is_reported_not_fatal() {
        let (_dir, dispatcher, mut tracker) = setup();

        let outcome = dispatcher
            .dispatch(&mut tracker, "teleport", &serde_json::json!({}))
            .await;
        assert!(outcome.is_failed());
        assert!(outcome
            .into_text("teleport")
            .contains("Unknown tool: teleport"));
    }

    #[tokio::test]
    async fn missing_required_parameter_is_reported() {
        let (_dir, dispatcher, mut tracker) = setup();

        let outcome = dispatcher
            .dispatch(&mut tracker, "read_file", &serde_json::json!({}))
            .await;
        assert!(outcome.is_failed());
        assert!(outcome
            .into_text("read_file")
            .contains("missing required parameter: path"));
    }

    #[tokio::test]
    async fn reads_and_writes_feed_the_tracker() {
        let (dir, dispatcher, mut tracker) = setup();
        fs::write(dir.path().join("existing.txt"), "v1").unwrap();

        dispatcher
            .dispatch(
                &mut tracker,
                "read_file",
                &serde_json::json!({"path": "existing.txt"}),
            )
            .await;
        dispatcher
            .dispatch(
                &mut tracker,
                "write_file",
                &serde_json::json!({"path": "existing.txt", "content": "v2"}),
            )
            .await;

        let changes = tracker.check_changes();
        let summary = tracker.get_summary();
        assert_eq!(summary.files_read, 1);
        assert!(changes
            .iter()
            .any(|c| c.path == "existing.txt"
                && c.action == boreal_core::tracker::ChangeAction::Modified));
    }

    #[test]
    fn truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        // Multi-byte chars must not be split.
        assert_eq!(truncate_chars("héllo", 2), "hé");
    }
}
