use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use super::gate::DeploymentGate;
use super::history::{DeploymentHistory, DeploymentRecord};
use super::hooks::{ActorSpawner, Announcer, AreaHandle, AreaLoader, ConfigStore, RoleDescriptor, RoundSource, SpawnedActor};
use crate::error::{DeployError, DeployResult};
use crate::roster;
use crate::team::{RaffleConfig, TeamRegistry};

/// What a successful deployment produced, for reporting and admin feedback.
#[derive(Debug, Clone)]
pub struct DeploymentOutcome {
    pub team_id: String,
    pub area: AreaHandle,
    pub spawned: Vec<SpawnedActor>,
    pub guaranteed: usize,
    pub optional: usize,
}

/// Public entry point for response-team deployment.
///
/// Sequences gate-check, area provisioning, roster composition, spawning,
/// announcement, and history bookkeeping, and unwinds correctly on any
/// failure: every exit path releases the gate, and any failure past the
/// cooldown check still consumes the cooldown.
///
/// One instance per round context; call [`on_round_restart`] from the round
/// lifecycle to wipe history and heal the gate.
///
/// [`on_round_restart`]: DeploymentOrchestrator::on_round_restart
pub struct DeploymentOrchestrator {
    teams: TeamRegistry,
    gate: DeploymentGate,
    history: DeploymentHistory,
    areas: Arc<dyn AreaLoader>,
    spawner: Arc<dyn ActorSpawner>,
    announcer: Arc<dyn Announcer>,
    round: Arc<dyn RoundSource>,
    config: Arc<dyn ConfigStore>,
    rng: Mutex<ChaCha8Rng>,
}

impl DeploymentOrchestrator {
    pub fn new(
        teams: TeamRegistry,
        areas: Arc<dyn AreaLoader>,
        spawner: Arc<dyn ActorSpawner>,
        announcer: Arc<dyn Announcer>,
        round: Arc<dyn RoundSource>,
        config: Arc<dyn ConfigStore>,
    ) -> Self {
        Self::with_seed(teams, areas, spawner, announcer, round, config, rand::random())
    }

    /// Seeded constructor; same seed and call sequence give the same rosters
    /// and placement choices.
    pub fn with_seed(
        teams: TeamRegistry,
        areas: Arc<dyn AreaLoader>,
        spawner: Arc<dyn ActorSpawner>,
        announcer: Arc<dyn Announcer>,
        round: Arc<dyn RoundSource>,
        config: Arc<dyn ConfigStore>,
        seed: u64,
    ) -> Self {
        Self {
            teams,
            gate: DeploymentGate::new(),
            history: DeploymentHistory::new(),
            areas,
            spawner,
            announcer,
            round,
            config,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Attempt to deploy `team_id` on behalf of `source`.
    ///
    /// `override_extra` replaces the computed optional quota when it lies in
    /// `[0, 15]`; `force` bypasses the cooldown check but still stamps the
    /// cooldown clock.
    pub fn deploy(
        &self,
        team_id: &str,
        source: &str,
        override_extra: Option<u32>,
        force: bool,
    ) -> DeployResult<DeploymentOutcome> {
        if !self.gate.try_acquire() {
            warn!(team_id, source, "deployment refused: another attempt in flight");
            return Err(DeployError::Busy);
        }

        let result = self.run_locked(team_id, source, override_extra, force);
        self.gate.release();

        match &result {
            Ok(outcome) => info!(
                team_id,
                source,
                guaranteed = outcome.guaranteed,
                optional = outcome.optional,
                "response team deployed"
            ),
            Err(err) => warn!(team_id, source, %err, "deployment failed"),
        }
        result
    }

    /// Time until the next non-forced deployment is allowed.
    pub fn cooldown_remaining(&self) -> Duration {
        self.gate.cooldown_remaining(self.round.elapsed(), self.cooldown())
    }

    /// Read-only view of this round's deployments, oldest first.
    pub fn history(&self) -> Vec<DeploymentRecord> {
        self.history.snapshot()
    }

    /// Round-restart cleanup: wipe history, zero the cooldown, and
    /// force-release the gate even if an attempt was mid-flight.
    pub fn on_round_restart(&self) {
        info!(deployments = self.history.len(), "round restart: clearing deployment state");
        self.history.clear();
        self.gate.reset();
    }

    fn cooldown(&self) -> Duration {
        Duration::from_secs_f64((self.config.cooldown_minutes() * 60.0).max(0.0))
    }

    // Runs with the gate held; the caller releases it on every path.
    fn run_locked(
        &self,
        team_id: &str,
        source: &str,
        override_extra: Option<u32>,
        force: bool,
    ) -> DeployResult<DeploymentOutcome> {
        let team =
            self.teams.get(team_id).ok_or_else(|| DeployError::UnknownTeam(team_id.to_string()))?;

        if !self.round.is_round_active() {
            return Err(DeployError::RoundNotActive);
        }

        let now = self.round.elapsed();
        if !force && !self.config.allow_cooldown_bypass() {
            let remaining = self.gate.cooldown_remaining(now, self.cooldown());
            if !remaining.is_zero() {
                return Err(DeployError::OnCooldown { remaining });
            }
        }

        // Stamped before side effects: a deployment that dies provisioning
        // its transport still consumes the cooldown, so a broken template
        // cannot be retried in a tight loop.
        self.gate.record_success(now);

        let area = self.areas.load_area(&team.transport_template).map_err(|reason| {
            DeployError::ProvisionFailed { template: team.transport_template.clone(), reason }
        })?;

        let mut points = self.spawner.find_placement_points(&area, &team.placement_marker);
        if points.is_empty() {
            debug!(team_id, marker = %team.placement_marker, "no placement markers; using area anchor");
            points.push(area.anchor.clone());
        }

        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let guaranteed = roster::compose_guaranteed(team, &mut *rng);
        let quota = roster::optional_quota(team, self.round.player_count(), override_extra);
        let optional = roster::compose_optional(team, quota, &mut *rng);

        let mut spawned = Vec::with_capacity(guaranteed.len() + optional.len());
        for template in guaranteed.iter().chain(optional.iter()) {
            let point = &points[rng.gen_range(0..points.len())];
            let mut actor = self.spawner.spawn(template, point);
            self.spawner.ensure_marker(actor.id);
            if let Some(raffle) = &team.raffle {
                configure_roles(&mut actor, raffle);
            }
            spawned.push(actor);
        }
        drop(rng);

        if let Some(announcement) = &team.announcement {
            self.announcer.announce(
                &announcement.body_key,
                &announcement.title_key,
                announcement.sound.as_deref(),
                announcement.color.as_deref(),
            );
        }

        self.history.push(DeploymentRecord {
            event: team.name.clone(),
            round_time: now,
            source: source.to_string(),
        });

        Ok(DeploymentOutcome {
            team_id: team.id.clone(),
            area,
            spawned,
            guaranteed: guaranteed.len(),
            optional: optional.len(),
        })
    }
}

/// Stamp the team raffle policy onto the roles an actor carries.
///
/// A role nested in a deferred spawner always receives the team policy; a
/// directly-granted role keeps its own policy when it already has one.
fn configure_roles(actor: &mut SpawnedActor, raffle: &RaffleConfig) {
    if let Some(role) = actor.deferred_role.as_mut() {
        apply_raffle_config(role, raffle);
    }
    if let Some(role) = actor.role.as_mut() {
        if role.raffle.is_none() {
            apply_raffle_config(role, raffle);
        }
    }
}

fn apply_raffle_config(role: &mut RoleDescriptor, raffle: &RaffleConfig) {
    role.raffle = Some(raffle.clone());
}
