//! Open/closed state of the reservation popup.

/// What the DOM layer has to do after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed,
    Unchanged,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PopupState {
    open: bool,
}

impl PopupState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Click on the reserve button.
    pub fn toggle(&mut self) -> Transition {
        if self.open {
            self.close()
        } else {
            self.open = true;
            Transition::Opened
        }
    }

    pub fn close(&mut self) -> Transition {
        if !self.open {
            return Transition::Unchanged;
        }
        self.open = false;
        Transition::Closed
    }

    /// Click anywhere in the document that reached the document listener.
    /// Clicks inside the popup keep it open.
    pub fn document_click(&mut self, inside_popup: bool) -> Transition {
        if inside_popup {
            Transition::Unchanged
        } else {
            self.close()
        }
    }

    pub fn scroll(&mut self) -> Transition {
        self.close()
    }
}
