pub use card::*;
pub use errors::*;
pub use game::*;
pub use game_file::*;
pub use generator::*;
pub use marks::*;
pub use patterns::*;
pub use stream::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod card;
mod errors;
mod game;
mod game_file;
mod generator;
mod marks;
mod patterns;
mod stream;
mod visualization;
