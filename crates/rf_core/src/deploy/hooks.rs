//! Seams to the surrounding game substrate.
//!
//! The scheduler core never touches the world directly; it talks to these
//! traits. Production wires them to the real area loader, entity spawner,
//! broadcast system, round tracker, and config store. Tests substitute stubs.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::team::RaffleConfig;

/// Opaque identifier of a spawned actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u64);

/// A location eligible to receive a spawned actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementPoint {
    pub x: f32,
    pub y: f32,
}

/// Handle to a provisioned transport/arrival area.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaHandle {
    pub id: u64,
    /// The area's own anchor location, used as the fallback placement point
    /// when no marked points exist.
    pub anchor: PlacementPoint,
}

/// A role slot attached to a spawned actor, direct or nested.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleDescriptor {
    pub role: String,
    /// Raffle policy already carried by the role, if any. The orchestrator
    /// fills or overrides this during propagation.
    pub raffle: Option<RaffleConfig>,
}

/// Result of spawning one roster template.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnedActor {
    pub id: ActorId,
    /// Role granted directly on the actor, if the template defines one.
    pub role: Option<RoleDescriptor>,
    /// Role defined inside a deferred ("ghost-role") spawner payload, if the
    /// template is such a spawner rather than a live actor.
    pub deferred_role: Option<RoleDescriptor>,
}

/// Loads a transport template into a fresh area.
pub trait AreaLoader: Send + Sync {
    fn load_area(&self, template: &str) -> Result<AreaHandle, String>;
}

/// Spawns actors and inspects placement markers within an area.
pub trait ActorSpawner: Send + Sync {
    fn spawn(&self, template: &str, point: &PlacementPoint) -> SpawnedActor;

    /// Stamp the "deployed-unit" marker onto a spawned actor.
    fn ensure_marker(&self, actor: ActorId);

    /// Placement points within `area` tagged with `marker`.
    fn find_placement_points(&self, area: &AreaHandle, marker: &str) -> Vec<PlacementPoint>;
}

/// Formats and broadcasts an arrival announcement.
pub trait Announcer: Send + Sync {
    fn announce(&self, body_key: &str, title_key: &str, sound: Option<&str>, color: Option<&str>);
}

/// Round lifecycle and session queries.
pub trait RoundSource: Send + Sync {
    fn is_round_active(&self) -> bool;
    fn elapsed(&self) -> Duration;
    fn player_count(&self) -> u32;
}

/// Operator-tunable settings, read at deploy time so they can be retuned
/// without a restart.
pub trait ConfigStore: Send + Sync {
    fn cooldown_minutes(&self) -> f64;

    /// Escape hatch for testing and staging setups; not a security boundary.
    fn allow_cooldown_bypass(&self) -> bool {
        false
    }
}
