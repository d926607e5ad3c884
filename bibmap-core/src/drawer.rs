use crate::models::PlaceKey;

/// The place detail drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open(PlaceKey),
}

impl DrawerState {
    /// Show `key`, replacing whatever was open.
    pub fn open(&mut self, key: PlaceKey) {
        *self = Self::Open(key);
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn selected(&self) -> Option<PlaceKey> {
        match self {
            Self::Open(key) => Some(*key),
            Self::Closed => None,
        }
    }
}

/// Where a click landed, relative to a toggle card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Card,
    Trigger,
    Elsewhere,
}

/// A card that its trigger opens and closes, and that any click elsewhere
/// dismisses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToggleCard {
    #[default]
    Closed,
    Open,
}

impl ToggleCard {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
    }

    /// Returns whether the click changed the state.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        match (*self, target) {
            (Self::Open, ClickTarget::Elsewhere) => {
                *self = Self::Closed;
                true
            }
            _ => false,
        }
    }

    pub fn is_open(&self) -> bool {
        *self == Self::Open
    }
}
