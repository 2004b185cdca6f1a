use wallview_core::consts::{DEFAULT_WALL_HEIGHT_CM, DEFAULT_WALL_WIDTH_CM};
use wallview_core::panel::DecodeTicket;

/// Overall UI state.
pub struct UIState {
    /// Raw text of the wall width field, in cm.
    pub width_text: String,
    /// Raw text of the wall height field, in cm.
    pub height_text: String,

    /// Selection waiting on the picker or the decoder.
    pub pending_selection: Option<DecodeTicket>,
    pub exporting: bool,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            width_text: DEFAULT_WALL_WIDTH_CM.to_string(),
            height_text: DEFAULT_WALL_HEIGHT_CM.to_string(),
            pending_selection: None,
            exporting: false,
            log_messages: Vec::new(),
        }
    }
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.pending_selection.is_some() || self.exporting
    }

    /// Drop the loading indicator if `ticket` is the selection it belongs to.
    /// Results of superseded selections leave it in place.
    pub fn finish_selection(&mut self, ticket: DecodeTicket) -> bool {
        if self.pending_selection == Some(ticket) {
            self.pending_selection = None;
            true
        } else {
            false
        }
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
