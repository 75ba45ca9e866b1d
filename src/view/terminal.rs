//! Line-oriented terminal renderer.

use super::{ConnectionStatus, ContactView};
use crate::domain::ContactId;
use crate::formatter::{render_contact_line, sanitize, status_label};
use crate::models::{Contact, ContactDraft};
use async_trait::async_trait;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufRead, Lines};

/// Line source shared between the command loop and confirmation prompts.
pub type SharedLines<R> = Arc<tokio::sync::Mutex<Lines<R>>>;

/// Renders coordinator output as plain text lines.
pub struct TerminalView<R, W> {
    input: SharedLines<R>,
    out: Mutex<W>,
}

impl<R, W> TerminalView<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    pub fn new(input: SharedLines<R>, out: W) -> Self {
        Self {
            input,
            out: Mutex::new(out),
        }
    }

    /// Consume the view and return the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        match self.out.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_lines<I>(&self, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut out = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        for line in lines {
            let _ = writeln!(out, "{}", line);
        }
        let _ = out.flush();
    }
}

#[async_trait]
impl<R, W> ContactView for TerminalView<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    fn render_contacts(&self, contacts: &[Contact]) {
        if contacts.is_empty() {
            self.write_lines(["No matches found.".to_string()]);
            return;
        }
        self.write_lines(contacts.iter().map(render_contact_line));
    }

    fn render_error(&self, message: &str) {
        self.write_lines([sanitize(message)]);
    }

    fn set_status(&self, status: ConnectionStatus) {
        self.write_lines([format!("● {}", status_label(status))]);
    }

    fn notify(&self, message: &str) {
        self.write_lines([format!("! {}", sanitize(message))]);
    }

    fn show_form(&self, editing: Option<ContactId>, draft: &ContactDraft) {
        let title = match editing {
            Some(id) => format!("Edit Entry #{}", id),
            None => "New Entry".to_string(),
        };
        let mut lines = vec![title];
        if editing.is_some() {
            lines.push(format!(
                "  current: {} | {} | {}",
                sanitize(&draft.name),
                sanitize(&draft.phone),
                sanitize(&draft.email)
            ));
        }
        lines.push("  save <name> | <phone> [| <email>]   or   cancel".to_string());
        self.write_lines(lines);
    }

    fn hide_form(&self) {}

    async fn confirm(&self, prompt: &str) -> bool {
        {
            let mut out = match self.out.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            let _ = write!(out, "{} [y/N] ", prompt);
            let _ = out.flush();
        }

        let answer = self.input.lock().await.next_line().await;
        match answer {
            Ok(Some(line)) => matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncBufReadExt, BufReader};

    fn view_with_input(input: &'static str) -> TerminalView<BufReader<&'static [u8]>, Vec<u8>> {
        let lines = BufReader::new(input.as_bytes()).lines();
        TerminalView::new(Arc::new(tokio::sync::Mutex::new(lines)), Vec::new())
    }

    fn output(view: TerminalView<BufReader<&'static [u8]>, Vec<u8>>) -> String {
        String::from_utf8(view.into_writer()).unwrap()
    }

    #[test]
    fn test_render_empty_list() {
        let view = view_with_input("");
        view.render_contacts(&[]);
        assert_eq!(output(view), "No matches found.\n");
    }

    #[test]
    fn test_render_contacts_in_order() {
        let view = view_with_input("");
        view.render_contacts(&[
            Contact::new(2u64, "Zed", "5550000002"),
            Contact::new(1u64, "Amy", "5550000001"),
        ]);
        let text = output(view);
        let zed = text.find("Zed").unwrap();
        let amy = text.find("Amy").unwrap();
        assert!(zed < amy);
        assert!(text.contains("(555) 000-0002"));
    }

    #[test]
    fn test_status_and_notify() {
        let view = view_with_input("");
        view.set_status(ConnectionStatus::Offline);
        view.notify("duplicate phone");
        let text = output(view);
        assert!(text.contains("● Offline"));
        assert!(text.contains("! duplicate phone"));
    }

    #[test]
    fn test_show_form_titles() {
        let view = view_with_input("");
        view.show_form(None, &ContactDraft::default());
        view.show_form(Some(ContactId::new(5)), &ContactDraft::new("Bo", "123"));
        let text = output(view);
        assert!(text.contains("New Entry"));
        assert!(text.contains("Edit Entry #5"));
        assert!(text.contains("current: Bo | 123 | "));
    }

    #[tokio::test]
    async fn test_confirm_reads_answers() {
        let view = view_with_input("y\nno\nYES\n");
        assert!(view.confirm("Remove?").await);
        assert!(!view.confirm("Remove?").await);
        assert!(view.confirm("Remove?").await);
        // input exhausted
        assert!(!view.confirm("Remove?").await);
        assert!(output(view).contains("Remove? [y/N] "));
    }
}
