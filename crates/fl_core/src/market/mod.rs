pub mod free_agents;
pub mod poach;
pub mod signing;
pub mod trim;
pub mod value;

pub use free_agents::generate_pool;
pub use poach::{poach_player, run_poach_phase};
pub use signing::{release_player, run_club_window, sign_player};
pub use trim::trim_reserves;
pub use value::value;
