use crate::generator::{GenerationRequest, ProjectContext};

/// Single-file code passed to the engine is capped at this many characters.
pub const MAX_FILE_DOC_CODE_CHARS: usize = 10_000;

const FILE_DOC_SYSTEM_PROMPT: &str =
    "You are a technical documentation expert. Write a detailed README section for this file.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

/// Assemble the chat messages for one request.
#[must_use]
pub fn assemble(request: &GenerationRequest) -> Vec<ChatMessage> {
    match request {
        GenerationRequest::ProjectReadme(context) => vec![
            ChatMessage {
                role: MessageRole::System,
                content: readme_system_prompt(&context.title),
            },
            ChatMessage {
                role: MessageRole::User,
                content: readme_user_content(context),
            },
        ],
        GenerationRequest::FileDocs { filename, code } => vec![
            ChatMessage {
                role: MessageRole::System,
                content: FILE_DOC_SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: MessageRole::User,
                content: format!("Filename: {filename}\nCode:\n{}", first_chars(code, MAX_FILE_DOC_CODE_CHARS)),
            },
        ],
    }
}

/// The title is embedded so the engine neither hallucinates one nor echoes
/// the instructions back.
fn readme_system_prompt(title: &str) -> String {
    format!(
        r#"You are a Senior Software Architect.
Generate a COMPREHENSIVE README.md for the project titled "{title}".

# Guidelines
1. **Title**: Use "{title}" as the main H1 title.
2. **Domain Analysis**: Analyze the 'Code Snippets' to write a specific Introduction (e.g., if you see 'MoodEntry', explain it's a Mood Tracker).
3. **Tech Stack**: List languages/libs found in 'Dependencies'.

# Required Output Structure:
# {title}
## 🚀 Introduction
[Write 2-3 sentences about what the app does based on the code]

## ✨ Key Features
[Bullet points derived from class names like 'AuthController' -> 'User Authentication']

## 🛠️ Tech Stack
[List from dependencies]

## 📂 Project Structure
[Briefly describe key folders]

Do not include conversational filler. Output only Markdown."#
    )
}

fn readme_user_content(context: &ProjectContext) -> String {
    format!(
        "--- FILE STRUCTURE ---\n{}\n\n--- DEPENDENCIES ---\n{}\n\n--- CODE SNIPPETS (Logic Analysis) ---\n{}",
        context.tree, context.dependencies, context.snippets
    )
}

fn first_chars(text: &str, cap: usize) -> &str {
    match text.char_indices().nth(cap) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readme_prompt_embeds_title_and_sections() {
        let request = GenerationRequest::ProjectReadme(ProjectContext {
            tree: "- src (directory)".to_string(),
            dependencies: "Filename: package.json".to_string(),
            snippets: "--- File: App.ts ---".to_string(),
            title: "Mood Tracker".to_string(),
        });

        let messages = assemble(&request);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::System);
        assert!(messages[0].content.contains("\"Mood Tracker\""));
        assert!(messages[1].content.contains("--- FILE STRUCTURE ---"));
        assert!(messages[1].content.contains("--- DEPENDENCIES ---"));
        assert!(messages[1].content.contains("--- CODE SNIPPETS (Logic Analysis) ---"));
    }

    #[test]
    fn file_docs_code_is_capped() {
        let request = GenerationRequest::FileDocs {
            filename: "big.ts".to_string(),
            code: "x".repeat(50_000),
        };

        let messages = assemble(&request);

        let user = &messages[1].content;
        assert!(user.starts_with("Filename: big.ts\nCode:\n"));
        assert_eq!(
            user.len(),
            "Filename: big.ts\nCode:\n".len() + MAX_FILE_DOC_CODE_CHARS
        );
    }
}
