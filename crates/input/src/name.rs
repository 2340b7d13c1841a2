//! Single-line name editor for the high-score prompt.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Longest name accepted, in characters
pub const MAX_NAME_LEN: usize = 16;

/// Name used when the player submits an empty prompt
pub const DEFAULT_NAME: &str = "anonymous";

/// Result of feeding one key to [`NameEntry`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameInput {
    /// Still editing
    Editing,
    /// Enter pressed; the final name
    Submitted(String),
    /// Esc pressed; do not record a score
    Cancelled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameEntry {
    buf: String,
}

impl NameEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Append a printable character. Returns false when full or not printable.
    pub fn push(&mut self, c: char) -> bool {
        if c.is_control() || self.len() >= MAX_NAME_LEN {
            return false;
        }
        self.buf.push(c);
        true
    }

    pub fn backspace(&mut self) -> bool {
        self.buf.pop().is_some()
    }

    /// Trimmed name, or [`DEFAULT_NAME`] when nothing but spaces was typed
    pub fn finish(&self) -> String {
        let trimmed = self.buf.trim();
        if trimmed.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            trimmed.to_string()
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> NameInput {
        if key.kind == KeyEventKind::Release {
            return NameInput::Editing;
        }

        match key.code {
            KeyCode::Enter => NameInput::Submitted(self.finish()),
            KeyCode::Esc => NameInput::Cancelled,
            KeyCode::Backspace => {
                self.backspace();
                NameInput::Editing
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.push(c);
                NameInput::Editing
            }
            _ => NameInput::Editing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(entry: &mut NameEntry, s: &str) {
        for c in s.chars() {
            assert_eq!(
                entry.handle_key(KeyEvent::from(KeyCode::Char(c))),
                NameInput::Editing
            );
        }
    }

    #[test]
    fn typing_and_submit() {
        let mut entry = NameEntry::new();
        type_str(&mut entry, "ada");
        assert_eq!(entry.as_str(), "ada");
        assert_eq!(
            entry.handle_key(KeyEvent::from(KeyCode::Enter)),
            NameInput::Submitted("ada".to_string())
        );
    }

    #[test]
    fn empty_submit_is_anonymous() {
        let mut entry = NameEntry::new();
        type_str(&mut entry, "   ");
        assert_eq!(
            entry.handle_key(KeyEvent::from(KeyCode::Enter)),
            NameInput::Submitted("anonymous".to_string())
        );
    }

    #[test]
    fn length_is_capped() {
        let mut entry = NameEntry::new();
        type_str(&mut entry, "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(entry.len(), MAX_NAME_LEN);
        assert_eq!(entry.as_str(), "abcdefghijklmnop");
    }

    #[test]
    fn backspace_deletes_last_char() {
        let mut entry = NameEntry::new();
        type_str(&mut entry, "héé");
        entry.handle_key(KeyEvent::from(KeyCode::Backspace));
        assert_eq!(entry.as_str(), "hé");
        entry.clear();
        assert!(!entry.backspace());
    }

    #[test]
    fn esc_cancels() {
        let mut entry = NameEntry::new();
        type_str(&mut entry, "x");
        assert_eq!(
            entry.handle_key(KeyEvent::from(KeyCode::Esc)),
            NameInput::Cancelled
        );
    }

    #[test]
    fn ctrl_chars_are_not_typed() {
        let mut entry = NameEntry::new();
        entry.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(entry.is_empty());
    }
}
