use std::collections::HashMap;

use super::types::{Announcement, RaffleConfig, RosterEntry, TeamDefinition};
use crate::error::RegistryError;

/// Lookup table of deployable team definitions, keyed by team id.
#[derive(Debug, Clone, Default)]
pub struct TeamRegistry {
    teams: HashMap<String, TeamDefinition>,
}

impl TeamRegistry {
    pub fn new() -> Self {
        Self { teams: HashMap::new() }
    }

    /// Parse a registry from a JSON array of team definitions.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let teams: Vec<TeamDefinition> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for team in teams {
            registry.register(team)?;
        }
        Ok(registry)
    }

    /// Validate and insert a team definition. Re-registering an id replaces
    /// the previous definition.
    pub fn register(&mut self, team: TeamDefinition) -> Result<(), RegistryError> {
        validate_team(&team)?;
        self.teams.insert(team.id.clone(), team);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&TeamDefinition> {
        self.teams.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.teams.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Stock catalog covering the common response teams. Content packs
    /// normally load their own JSON; this set keeps tests and demos honest.
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        let security = TeamDefinition {
            id: "security".to_string(),
            name: "Security Response Team".to_string(),
            transport_template: "shuttle_rf_security".to_string(),
            placement_marker: "rf_spawn_security".to_string(),
            guaranteed_roster: vec![
                RosterEntry::certain("rf_security_leader"),
                RosterEntry::certain("rf_security_medic"),
            ],
            optional_roster: vec![
                RosterEntry::between("rf_security_trooper", 1, 2),
                RosterEntry::chance("rf_security_sniper", 0.3),
            ],
            spawn_per_players: 5,
            max_roles_amount: 10,
            raffle: Some(RaffleConfig::default()),
            announcement: Some(Announcement {
                body_key: "rf-announce-security-body".to_string(),
                title_key: "rf-announce-security-title".to_string(),
                sound: Some("/Audio/Announcements/response_team.ogg".to_string()),
                color: Some("#18abf5".to_string()),
            }),
        };

        let medical = TeamDefinition {
            id: "medical".to_string(),
            name: "Medical Response Team".to_string(),
            transport_template: "shuttle_rf_medical".to_string(),
            placement_marker: "rf_spawn_medical".to_string(),
            guaranteed_roster: vec![RosterEntry::certain("rf_medical_leader")],
            optional_roster: vec![RosterEntry::certain("rf_medical_doctor")],
            spawn_per_players: 4,
            max_roles_amount: 8,
            raffle: Some(RaffleConfig::default()),
            announcement: Some(Announcement {
                body_key: "rf-announce-medical-body".to_string(),
                title_key: "rf-announce-medical-title".to_string(),
                sound: Some("/Audio/Announcements/response_team.ogg".to_string()),
                color: Some("#57d657".to_string()),
            }),
        };

        // Clandestine team: no announcement, fixed small roster.
        let cleanup = TeamDefinition {
            id: "cleanup".to_string(),
            name: "Cleanup Detail".to_string(),
            transport_template: "shuttle_rf_cleanup".to_string(),
            placement_marker: "rf_spawn_cleanup".to_string(),
            guaranteed_roster: vec![RosterEntry::between("rf_cleanup_agent", 2, 3)],
            optional_roster: Vec::new(),
            spawn_per_players: 10,
            max_roles_amount: 0,
            raffle: None,
            announcement: None,
        };

        for team in [security, medical, cleanup] {
            registry.register(team).expect("builtin team catalog must validate");
        }
        registry
    }
}

fn validate_team(team: &TeamDefinition) -> Result<(), RegistryError> {
    if team.id.is_empty() {
        return Err(RegistryError::Invalid { team: team.name.clone(), reason: "empty id".to_string() });
    }
    if team.spawn_per_players == 0 {
        return Err(RegistryError::Invalid {
            team: team.id.clone(),
            reason: "spawn_per_players must be positive".to_string(),
        });
    }
    for entry in team.guaranteed_roster.iter().chain(&team.optional_roster) {
        if entry.min > entry.max {
            return Err(RegistryError::Invalid {
                team: team.id.clone(),
                reason: format!("roster entry {} has min {} > max {}", entry.template, entry.min, entry.max),
            });
        }
        if !(0.0..=1.0).contains(&entry.weight) {
            return Err(RegistryError::Invalid {
                team: team.id.clone(),
                reason: format!("roster entry {} has weight {} outside [0, 1]", entry.template, entry.weight),
            });
        }
    }
    Ok(())
}
