/// Key that forces the mobile panel closed.
pub const CANCEL_KEY: &str = "Escape";

/// Open/closed state of the mobile navigation panel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    LinkActivated,
    Cancel,
}

impl MenuEvent {
    /// Maps a `KeyboardEvent.key` value to a menu event, if it is one.
    pub fn from_key(key: &str) -> Option<Self> {
        (key == CANCEL_KEY).then_some(MenuEvent::Cancel)
    }
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    /// Applies `event` and returns whether the state changed.
    ///
    /// Meant for `RwSignal::maybe_update`, so closing an already closed
    /// panel doesn't wake anything up.
    pub fn apply(&mut self, event: MenuEvent) -> bool {
        let before = *self;
        match event {
            MenuEvent::Toggle => self.toggle(),
            MenuEvent::LinkActivated | MenuEvent::Cancel => self.close(),
        }
        before != *self
    }
}
