//! FPL player positions and the `element_type` lookup table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Player positions as written to the CSV.
///
/// The API encodes position as `element_type`: 1 goalkeeper, 2 defender,
/// 3 midfielder, 4 forward. Any other code (e.g. the assistant-manager
/// chip's type 5) maps to `Unknown`.
///
/// # Examples
///
/// ```rust
/// use fpl_stats::Position;
///
/// assert_eq!(Position::from_element_type(3), Position::Midfielder);
/// assert_eq!(Position::from_element_type(9), Position::Unknown);
/// assert_eq!(Position::Forward.to_string(), "Forward");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
    Unknown,
}

impl Position {
    /// Map the API's `element_type` code to a position.
    pub fn from_element_type(element_type: u8) -> Self {
        match element_type {
            1 => Position::Goalkeeper,
            2 => Position::Defender,
            3 => Position::Midfielder,
            4 => Position::Forward,
            _ => Position::Unknown,
        }
    }

    pub fn is_defensive(&self) -> bool {
        matches!(self, Position::Goalkeeper | Position::Defender)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
            Position::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}
