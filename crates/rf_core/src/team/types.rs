use serde::{Deserialize, Serialize};

fn default_weight() -> f32 {
    1.0
}

fn default_copies() -> u32 {
    1
}

/// One weighted roster slot: which actor template to spawn, how likely the
/// entry is to fire on a given draw, and how many copies a firing draw yields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterEntry {
    /// Actor template identifier handed to the spawner substrate.
    pub template: String,
    /// Spawn probability in `[0, 1]`. 1.0 means the entry fires on every draw.
    #[serde(default = "default_weight")]
    pub weight: f32,
    /// Minimum copies yielded when the entry fires.
    #[serde(default = "default_copies")]
    pub min: u32,
    /// Maximum copies yielded when the entry fires.
    #[serde(default = "default_copies")]
    pub max: u32,
}

impl RosterEntry {
    /// Entry that always yields exactly one copy per draw.
    pub fn certain(template: impl Into<String>) -> Self {
        Self { template: template.into(), weight: 1.0, min: 1, max: 1 }
    }

    /// Entry that fires with the given probability, yielding one copy.
    pub fn chance(template: impl Into<String>, weight: f32) -> Self {
        Self { template: template.into(), weight, min: 1, max: 1 }
    }

    /// Entry that always fires, yielding between `min` and `max` copies.
    pub fn between(template: impl Into<String>, min: u32, max: u32) -> Self {
        Self { template: template.into(), weight: 1.0, min, max }
    }
}

/// Policy controlling how eligible candidates compete for a spawned role slot.
///
/// Propagated by the orchestrator onto every role a deployment creates, both
/// direct roles and roles nested inside deferred spawners, so selection
/// behaves the same regardless of how the role entered the world.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RaffleConfig {
    /// Named decider policy resolved by the role substrate.
    pub decider: String,
    /// Seconds the raffle stays open after the first entrant.
    pub initial_duration: u32,
    /// Seconds each additional entrant extends the raffle by.
    pub extends_by: u32,
    /// Hard ceiling on total raffle duration, in seconds.
    pub max_duration: u32,
}

impl Default for RaffleConfig {
    fn default() -> Self {
        Self { decider: "default".to_string(), initial_duration: 30, extends_by: 5, max_duration: 60 }
    }
}

/// Broadcast shown when a team arrives. Teams without one deploy silently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Announcement {
    /// Localization key for the announcement body.
    pub body_key: String,
    /// Localization key for the announcement title.
    pub title_key: String,
    /// Optional sound cue identifier.
    #[serde(default)]
    pub sound: Option<String>,
    /// Optional display color (e.g. "#00a0ff").
    #[serde(default)]
    pub color: Option<String>,
}

/// Static definition of a deployable response team.
///
/// Immutable once registered; the scheduler only reads these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamDefinition {
    /// Unique registry key.
    pub id: String,
    /// Display label used for history records and reporting.
    pub name: String,
    /// Area template loaded as the team's transport/arrival context.
    pub transport_template: String,
    /// Marker tag identifying this team's placement points on the transport.
    pub placement_marker: String,
    /// Members attempted once on every deployment.
    #[serde(default)]
    pub guaranteed_roster: Vec<RosterEntry>,
    /// Members spawned up to the computed or overridden quota.
    #[serde(default)]
    pub optional_roster: Vec<RosterEntry>,
    /// Divisor scaling the optional quota with player count.
    pub spawn_per_players: u32,
    /// Hard cap on the computed optional quota.
    pub max_roles_amount: u32,
    /// Raffle policy stamped onto spawned role slots, if any.
    #[serde(default)]
    pub raffle: Option<RaffleConfig>,
    /// Arrival broadcast; `None` deploys silently.
    #[serde(default)]
    pub announcement: Option<Announcement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_defaults_fill_weight_and_copies() {
        let entry: RosterEntry =
            serde_json::from_str(r#"{"template": "rf_trooper"}"#).unwrap();
        assert_eq!(entry.weight, 1.0);
        assert_eq!(entry.min, 1);
        assert_eq!(entry.max, 1);
    }

    #[test]
    fn team_round_trips_through_json() {
        let team = TeamDefinition {
            id: "security".to_string(),
            name: "Security Response Team".to_string(),
            transport_template: "shuttle_security".to_string(),
            placement_marker: "rf_security_spawn".to_string(),
            guaranteed_roster: vec![RosterEntry::certain("rf_security_leader")],
            optional_roster: vec![RosterEntry::between("rf_security_trooper", 1, 2)],
            spawn_per_players: 5,
            max_roles_amount: 10,
            raffle: Some(RaffleConfig::default()),
            announcement: None,
        };

        let json = serde_json::to_string(&team).unwrap();
        let back: TeamDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, team);
    }
}
