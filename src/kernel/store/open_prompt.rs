use crate::kernel::{Action, DialogState};

impl super::Store {
    pub(super) fn reduce_open_prompt_action(&mut self, action: Action) -> bool {
        let Some(DialogState::OpenFile(prompt)) = self.state.ui.dialog.as_mut() else {
            return false;
        };

        if prompt.cursor > prompt.value.len() {
            prompt.cursor = prompt.value.len();
        }

        match action {
            Action::OpenPromptInsert(text) => {
                let text: String = text.chars().filter(|ch| !ch.is_control()).collect();
                if text.is_empty() {
                    return false;
                }
                prompt.error = None;
                prompt.value.insert_str(prompt.cursor, &text);
                prompt.cursor += text.len();
                true
            }
            Action::OpenPromptBackspace => {
                if prompt.cursor == 0 {
                    return false;
                }
                prompt.error = None;
                let prev = prev_char_boundary(&prompt.value, prompt.cursor);
                prompt.value.drain(prev..prompt.cursor);
                prompt.cursor = prev;
                true
            }
            Action::OpenPromptCursorLeft => {
                if prompt.cursor == 0 {
                    return false;
                }
                prompt.cursor = prev_char_boundary(&prompt.value, prompt.cursor);
                true
            }
            Action::OpenPromptCursorRight => {
                let Some(ch) = prompt.value[prompt.cursor..].chars().next() else {
                    return false;
                };
                prompt.cursor += ch.len_utf8();
                true
            }
            _ => false,
        }
    }
}

fn prev_char_boundary(value: &str, cursor: usize) -> usize {
    value[..cursor]
        .char_indices()
        .last()
        .map(|(i, _)| i)
        .unwrap_or(0)
}
