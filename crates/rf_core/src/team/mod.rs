pub mod registry;
pub mod types;

pub use registry::TeamRegistry;
pub use types::{Announcement, RaffleConfig, RosterEntry, TeamDefinition};
