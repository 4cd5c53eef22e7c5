//! Lightbox Navigation
//!
//! Cursor over the filtered photo list. Navigation is bounded: stepping past
//! either end is a no-op, never a wrap-around.

/// Lightbox state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open { index: usize },
}

impl Lightbox {
    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open { .. })
    }

    /// Cursor position, `None` while closed
    pub fn current_index(&self) -> Option<usize> {
        match *self {
            Lightbox::Open { index } => Some(index),
            Lightbox::Closed => None,
        }
    }

    /// Open at `index`. Returns false (and leaves state untouched) when
    /// `index` is outside `0..len`.
    pub fn open(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        *self = Lightbox::Open { index };
        true
    }

    /// Returns true if the lightbox was open
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Lightbox::Closed;
        was_open
    }

    /// Step back one photo. Returns the new index, or `None` at the first
    /// photo or while closed.
    pub fn previous(&mut self) -> Option<usize> {
        match *self {
            Lightbox::Open { index } if index > 0 => {
                *self = Lightbox::Open { index: index - 1 };
                Some(index - 1)
            }
            _ => None,
        }
    }

    /// Step forward one photo. Returns the new index, or `None` at the last
    /// photo or while closed.
    pub fn next(&mut self, len: usize) -> Option<usize> {
        match *self {
            Lightbox::Open { index } if index + 1 < len => {
                *self = Lightbox::Open { index: index + 1 };
                Some(index + 1)
            }
            _ => None,
        }
    }

    /// In-bounds neighbours of the cursor (previous first)
    pub fn adjacent_indices(&self, len: usize) -> Vec<usize> {
        let Some(index) = self.current_index() else {
            return Vec::new();
        };
        let mut adjacent = Vec::with_capacity(2);
        if index > 0 {
            adjacent.push(index - 1);
        }
        if index + 1 < len {
            adjacent.push(index + 1);
        }
        adjacent
    }

    /// `current / total`, 1-based
    pub fn counter_text(&self, len: usize) -> String {
        match self.current_index() {
            Some(index) => format!("{} / {}", index + 1, len),
            None => String::new(),
        }
    }
}

/// Keys handled while the lightbox is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl LightboxKey {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(LightboxKey::Escape),
            "ArrowLeft" => Some(LightboxKey::ArrowLeft),
            "ArrowRight" => Some(LightboxKey::ArrowRight),
            _ => None,
        }
    }

    /// Arrow keys would otherwise scroll the page
    pub fn prevents_default(self) -> bool {
        matches!(self, LightboxKey::ArrowLeft | LightboxKey::ArrowRight)
    }
}

/// Orders slide swaps. A delayed swap holds a ticket and only lands while no
/// newer swap has been requested.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapSequence {
    latest: u64,
}

impl SwapSequence {
    pub fn next_ticket(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}
