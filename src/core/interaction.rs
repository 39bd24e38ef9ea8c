/// Pointer cursor shown over the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

impl Cursor {
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}

/// Result of feeding one frame's hit-test into the hover state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverChange {
    /// Beacon that stopped being hovered.
    pub left: Option<usize>,
    /// Beacon that became hovered.
    pub entered: Option<usize>,
    /// New cursor when it differs from the current one.
    pub cursor: Option<Cursor>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A beacon was under the pointer; its spot is now shown.
    Selected(usize),
    /// Nothing under the pointer; the panel is hidden.
    Dismissed,
}

/// Hover/selection state machine. Beacons are identified by index.
#[derive(Clone, Debug, Default)]
pub struct Interaction {
    hovered: Option<usize>,
    selected: Option<usize>,
    cursor: Cursor,
}

impl Interaction {
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Beacon whose spot is shown in the info panel, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// `hit` is the nearest beacon under the pointer this frame.
    pub fn update_hover(&mut self, hit: Option<usize>) -> HoverChange {
        let mut change = HoverChange::default();
        if self.hovered == hit {
            return change;
        }
        if let Some(prev) = self.hovered.take() {
            change.left = Some(prev);
        }
        let cursor = match hit {
            Some(i) => {
                self.hovered = Some(i);
                change.entered = Some(i);
                Cursor::Pointer
            }
            None => Cursor::Default,
        };
        if cursor != self.cursor {
            self.cursor = cursor;
            change.cursor = Some(cursor);
        }
        change
    }

    pub fn click(&mut self) -> ClickOutcome {
        match self.hovered {
            Some(i) => {
                self.selected = Some(i);
                ClickOutcome::Selected(i)
            }
            None => {
                self.selected = None;
                ClickOutcome::Dismissed
            }
        }
    }

    /// Close control and reset control both dismiss the panel.
    pub fn dismiss(&mut self) {
        self.selected = None;
    }
}
