//! Type-safe wrappers and enums for FPL data.

pub mod decimal;
pub mod ids;
pub mod position;
pub mod time;

pub use decimal::Decimal;
pub use ids::{PlayerId, TeamId};
pub use position::Position;
pub use time::Gameweek;
