//! The hero: stats, leveling and coins.

pub mod coins;
pub mod player;

pub use coins::Coins;
pub use player::{is_name_char, max_hp_for_level, validate_name, Player, NAME_CHARSET_HINT};
