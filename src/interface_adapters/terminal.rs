use colored::Colorize;
use rustyline::DefaultEditor;

use crate::domain::ports::{ListTarget, OperatorPrompt, Page, TextTarget};

// Renders page targets as labeled blocks on stdout. A terminal has no
// in-place clear, so every refresh starts a fresh block under the header.
#[derive(Debug, Clone, Default)]
pub struct TerminalPage;

impl TerminalPage {
    pub fn new() -> Self {
        Self
    }
}

impl Page for TerminalPage {
    fn set_text(&self, target: TextTarget, content: &str) {
        println!("{}", format!("[{}]", target.id()).cyan());
        println!("{content}");
    }

    fn clear_list(&self, target: ListTarget) {
        println!("{}", format!("[{}]", target.id()).cyan());
    }

    fn append_list_item(&self, _target: ListTarget, item: &str) {
        println!("- {item}");
    }
}

// Blocking dialogs on the controlling terminal.
#[derive(Debug, Clone, Default)]
pub struct TerminalOperator;

impl TerminalOperator {
    pub fn new() -> Self {
        Self
    }
}

impl OperatorPrompt for TerminalOperator {
    fn request_user_id(&self) -> Option<String> {
        let mut editor = DefaultEditor::new().ok()?;
        // Ctrl-C, Ctrl-D and terminal failures all count as a declined
        // dialog; the answer itself is passed through untrimmed.
        match editor.readline("User ID: ") {
            Ok(line) => Some(line),
            Err(_) => None,
        }
    }

    fn alert(&self, message: &str) {
        println!("{}", format!("[alert] {message}").yellow().bold());
    }
}
