//! Keyboard and paste handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::models::Mode;

/// Lines moved per PageUp/PageDown in the result panel
const RESULT_SCROLL_STEP: u16 = 5;

impl App {
    /// Dispatch one key press.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        // Global keybinds (always active)
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                self.quit();
                return;
            }
            _ => {}
        }

        // The info overlay is modal
        if self.session().info_visible() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::F(1)) {
                self.controller.set_info_visible(false);
            }
            return;
        }

        match key.code {
            KeyCode::Char('s') if ctrl => {
                self.submit();
            }
            KeyCode::Enter if ctrl => {
                self.submit();
            }
            KeyCode::Char('t') if ctrl => self.controller.toggle_theme(),
            KeyCode::Char('y') if ctrl => {
                self.controller.copy_result();
            }
            KeyCode::Char('u') if ctrl => {
                self.input.clear();
                self.sync_input();
            }
            KeyCode::F(1) => self.controller.set_info_visible(true),
            KeyCode::Tab => {
                let mode = self.session().mode().next();
                self.controller.set_mode(mode);
            }
            KeyCode::BackTab => {
                let mode = self.session().mode().prev();
                self.controller.set_mode(mode);
            }
            KeyCode::Char(c @ '1'..='3') if alt => {
                let index = (c as usize) - ('1' as usize);
                self.controller.set_mode(Mode::ALL[index]);
            }
            KeyCode::Char(c) if !ctrl && !alt => {
                self.input.insert_char(c);
                self.sync_input();
            }
            KeyCode::Enter => {
                self.input.insert_char('\n');
                self.sync_input();
            }
            KeyCode::Backspace => {
                if self.input.backspace() {
                    self.sync_input();
                }
            }
            KeyCode::Delete => {
                if self.input.delete() {
                    self.sync_input();
                }
            }
            KeyCode::PageDown if self.session().can_copy() => {
                self.result_scroll = self
                    .result_scroll
                    .saturating_add(RESULT_SCROLL_STEP)
                    .min(self.result_max_scroll.get());
                self.mark_dirty();
            }
            KeyCode::PageUp => {
                self.result_scroll = self
                    .result_scroll
                    .min(self.result_max_scroll.get())
                    .saturating_sub(RESULT_SCROLL_STEP);
                self.mark_dirty();
            }
            KeyCode::Left => self.move_cursor(|input| input.move_left()),
            KeyCode::Right => self.move_cursor(|input| input.move_right()),
            KeyCode::Up => self.move_cursor(|input| input.move_up()),
            KeyCode::Down => self.move_cursor(|input| input.move_down()),
            KeyCode::Home => self.move_cursor(|input| input.move_home()),
            KeyCode::End => self.move_cursor(|input| input.move_end()),
            _ => {}
        }
    }

    /// Bracketed paste lands in the input area, unless the overlay is open.
    pub fn handle_paste(&mut self, text: &str) {
        if self.session().info_visible() || text.is_empty() {
            return;
        }
        self.input.insert_str(text);
        self.sync_input();
    }

    fn move_cursor(&mut self, f: impl FnOnce(&mut crate::domain::InputBuffer)) {
        f(&mut self.input);
        self.mark_dirty();
    }
}
