use crossterm::event::{KeyCode, KeyModifiers};

/// Input and notification events. Targets are element ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press, aimed at the focused element when `target` is None.
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Primary-button click. Without a target the element under (x, y) is used.
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
    },
    Focus { target: String },
    Blur { target: String },
    /// A native control's checked flag changed.
    Change { target: String },
    Resize { width: u16, height: u16 },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
            x: 0,
            y: 0,
        }
    }

    pub fn click_at(x: u16, y: u16) -> Self {
        Self::Click { target: None, x, y }
    }

    /// An unmodified key press on whatever is focused.
    pub fn key(key: Key) -> Self {
        Self::Key {
            target: None,
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Key { target, .. } | Self::Click { target, .. } => target.as_deref(),
            Self::Focus { target } | Self::Blur { target } | Self::Change { target } => {
                Some(target)
            }
            Self::Resize { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// None for keys nothing here reacts to.
    pub fn from_code(code: KeyCode) -> Option<Self> {
        Some(match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !(self.shift || self.ctrl || self.alt)
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}
