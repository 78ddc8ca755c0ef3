//! Compact renderings of player sequences for logging.

use std::fmt::{Display, Formatter};

/// Renders a slice as `[a, b, c]`.
pub struct DisplaySlice<'a, D: Display> {
    items: &'a [D],
}

impl<'a, D: Display> Display for DisplaySlice<'a, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, item) in self.items.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl<'a, D: Display> From<&'a [D]> for DisplaySlice<'a, D> {
    fn from(items: &'a [D]) -> Self {
        DisplaySlice { items }
    }
}

/// Renders a lineup as its cyclic rotation, closing back on the first player:
/// `A1 → A2 → A3 → A1`.
pub struct DisplayRotation<'a, D: Display> {
    lineup: &'a [D],
}

impl<'a, D: Display> Display for DisplayRotation<'a, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for item in self.lineup {
            write!(f, "{item} → ")?;
        }
        match self.lineup.first() {
            None => Ok(()),
            Some(first) => write!(f, "{first}"),
        }
    }
}

impl<'a, D: Display> From<&'a [D]> for DisplayRotation<'a, D> {
    fn from(lineup: &'a [D]) -> Self {
        DisplayRotation { lineup }
    }
}
