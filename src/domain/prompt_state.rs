#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    running: bool,
    // Reserved for the transaction confirmation flow; no transition writes
    // it yet, the y/n answer is not consumed.
    record_transaction: bool,
    last_input: Option<String>,
}

impl Default for PromptState {
    fn default() -> Self {
        Self {
            running: true,
            record_transaction: false,
            last_input: None,
        }
    }
}

impl PromptState {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn record_transaction(&self) -> bool {
        self.record_transaction
    }

    pub fn note_input(&mut self, description: String) {
        self.last_input = Some(description);
    }

    pub fn last_input(&self) -> Option<&str> {
        self.last_input.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running_with_no_input_seen() {
        let state = PromptState::default();

        assert!(state.is_running());
        assert!(!state.record_transaction());
        assert_eq!(state.last_input(), None);
    }

    #[test]
    fn stop_is_terminal() {
        let mut state = PromptState::default();

        state.stop();

        assert!(!state.is_running());
    }

    #[test]
    fn note_input_keeps_latest_description() {
        let mut state = PromptState::default();

        state.note_input("key 'a'".to_owned());
        state.note_input("key 'b'".to_owned());

        assert_eq!(state.last_input(), Some("key 'b'"));
    }
}
