//! Preference keys, typed values and the canonical preference set.
//!
//! Keys are stable small integers in the Dock's desktoppicture.db schema
//! and must not be renumbered.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::event::ChangeEvent;
use crate::position::Position;

/// A single configurable aspect of wallpaper behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrefKey {
    /// Path of the wallpaper image
    Wallpaper,
    /// How the wallpaper is placed on screen
    Position,
    /// Red channel of the background color
    Red,
    /// Green channel of the background color
    Green,
    /// Blue channel of the background color
    Blue,
    /// Event on which to change wallpaper
    ChangeEvent,
    /// Directory of changing wallpapers
    Directory,
    /// Interval at which to change wallpaper, in seconds
    ///
    /// Only has an effect if `Directory` is set.
    Interval,
    /// Whether to select the next wallpaper at random
    ///
    /// Only has an effect if `Directory` is set.
    Random,
    /// Whether to display a solid color instead of an image
    SolidColor,
    /// Currently selected item if `Directory` is set
    Current,
}

impl PrefKey {
    /// Stable key code in the store schema.
    pub fn code(&self) -> u8 {
        match self {
            PrefKey::Wallpaper => 1,
            PrefKey::Position => 2,
            PrefKey::Red => 3,
            PrefKey::Green => 4,
            PrefKey::Blue => 5,
            PrefKey::ChangeEvent => 9,
            PrefKey::Directory => 10,
            PrefKey::Interval => 11,
            PrefKey::Random => 12,
            PrefKey::SolidColor => 15,
            PrefKey::Current => 16,
        }
    }
}

/// The typed value held by a preference key.
///
/// Each key accepts exactly one variant; the resolver only ever pairs a key
/// with its matching variant, so the store layer can bind values without
/// runtime casts.
#[derive(Debug, Clone, PartialEq)]
pub enum PrefValue {
    /// Absolute filesystem path
    Path(PathBuf),
    /// Wallpaper placement
    Position(Position),
    /// Wallpaper change trigger
    Event(ChangeEvent),
    /// Boolean switch
    Flag(bool),
    /// Duration in seconds
    Seconds(u64),
    /// Color channel in [0, 1]
    Channel(f64),
}

/// The canonical key/value mapping handed to persistence.
///
/// Later writes win per key, so the order options were supplied does not
/// affect the final content. Iteration is key-ordered, which keeps the
/// store writes deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefSet {
    entries: BTreeMap<PrefKey, PrefValue>,
}

impl PrefSet {
    /// The set every invocation starts from: fill the screen, solid color
    /// until a wallpaper or directory is chosen.
    pub fn defaults() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(PrefKey::Position, PrefValue::Position(Position::Fill));
        entries.insert(PrefKey::SolidColor, PrefValue::Flag(true));
        Self { entries }
    }

    /// Set `key` to `value`, replacing any earlier write.
    pub fn put(&mut self, key: PrefKey, value: PrefValue) {
        self.entries.insert(key, value);
    }

    /// Get the value for `key`, if set.
    pub fn get(&self, key: PrefKey) -> Option<&PrefValue> {
        self.entries.get(&key)
    }

    /// Whether `key` has a value.
    pub fn contains(&self, key: PrefKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (PrefKey, &PrefValue)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
