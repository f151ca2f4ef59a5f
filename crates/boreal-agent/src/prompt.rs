//! System prompt construction for coding tasks.

use std::path::Path;

/// Build the system prompt for a run, embedding the working directory
/// and any caller-supplied context file paths.
pub fn build_system_prompt(working_directory: &Path, context_files: &[String]) -> String {
    let dir = working_directory.display();
    let mut prompt = format!(
        "You are an expert coding assistant executing tasks in the directory: {dir}

Your capabilities:
1. Read and analyze code files
2. Write new code files
3. Modify existing files
4. Execute shell commands
5. Search through codebases

Guidelines:
- Always verify file existence before modifying
- Use relative paths from the working directory
- Provide clear explanations for changes
- Follow best practices and existing code style
- Handle errors gracefully
- Test changes when possible

Current working directory: {dir}
"
    );

    if !context_files.is_empty() {
        prompt.push_str("\nRelevant context files:\n");
        for file in context_files {
            prompt.push_str(&format!("- {file}\n"));
        }
    }

    prompt
}
