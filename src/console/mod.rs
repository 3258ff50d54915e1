pub mod input;
pub mod listing;
pub mod messages;

pub use input::Console;
pub use listing::{parse_bets, render_bets};
