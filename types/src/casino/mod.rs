mod card;
mod constants;
mod game;
mod paytable;
mod round;

pub use card::*;
pub use constants::*;
pub use game::*;
pub use paytable::*;
pub use round::*;
