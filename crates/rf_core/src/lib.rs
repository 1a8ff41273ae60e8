//! # rf_core - Response-Force Deployment Scheduler
//!
//! On-demand deployment of response teams: a global cooldown gate, atomic
//! reservation of the right to deploy, weighted roster composition under
//! quota constraints, and per-round dispatch bookkeeping.
//!
//! ## Features
//! - Non-blocking mutual exclusion: concurrent attempts observe `Busy`
//! - Deterministic roster composition under a seeded RNG
//! - Cooldown consumed optimistically, so broken templates cannot be hammered
//! - Round-restart cleanup that heals a gate left locked mid-flight
//!
//! The world substrate (area loading, actor spawning, announcements, round
//! state, operator config) sits behind the traits in [`deploy::hooks`].

pub mod deploy;
pub mod error;
pub mod roster;
pub mod team;

// Re-export the scheduler surface
pub use deploy::{
    ActorId, ActorSpawner, Announcer, AreaHandle, AreaLoader, ConfigStore, DeploymentGate,
    DeploymentHistory, DeploymentOrchestrator, DeploymentOutcome, DeploymentRecord, PlacementPoint,
    RoleDescriptor, RoundSource, SpawnedActor,
};
pub use error::{DeployError, DeployResult, RegistryError};
pub use roster::{compose_guaranteed, compose_optional, optional_quota, OVERRIDE_MAX};
pub use team::{Announcement, RaffleConfig, RosterEntry, TeamDefinition, TeamRegistry};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
