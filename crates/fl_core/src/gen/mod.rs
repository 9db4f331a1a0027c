pub mod names;
pub mod squads;

pub use names::{nations, NameGen};
pub use squads::{build_club, generate_rating_set, youth_intake, ClubSeed};
