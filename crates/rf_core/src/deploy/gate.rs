use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Mutual-exclusion and cooldown guard for deployment attempts.
///
/// The lock is only ever held across one synchronous attempt, so acquisition
/// failing means a reentrant or concurrent call, not ordinary contention.
/// `release` and `reset` are safe to call on an unlocked gate; round-restart
/// cleanup relies on that to heal a gate left locked by a racing attempt.
#[derive(Debug, Default)]
pub struct DeploymentGate {
    in_flight: AtomicBool,
    last_deploy: Mutex<Duration>,
}

impl DeploymentGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-blocking exclusive acquire. Returns false if an attempt is
    /// already in flight.
    pub fn try_acquire(&self) -> bool {
        self.in_flight.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed).is_ok()
    }

    /// Unconditional release; a no-op when the gate is already unlocked.
    pub fn release(&self) {
        self.in_flight.store(false, Ordering::Release);
    }

    /// Round time of the last successful deployment, zero if none yet.
    pub fn last_deploy(&self) -> Duration {
        *self.lock_last_deploy()
    }

    /// `max(0, last_deploy + cooldown - now)`.
    pub fn cooldown_remaining(&self, now: Duration, cooldown: Duration) -> Duration {
        (*self.lock_last_deploy() + cooldown).saturating_sub(now)
    }

    /// Stamp the cooldown clock. Called once all preconditions have passed,
    /// before side effects, so a botched deployment still consumes cooldown.
    pub fn record_success(&self, now: Duration) {
        *self.lock_last_deploy() = now;
    }

    /// Zero the cooldown clock and force-release the lock.
    pub fn reset(&self) {
        *self.lock_last_deploy() = Duration::ZERO;
        self.release();
    }

    fn lock_last_deploy(&self) -> std::sync::MutexGuard<'_, Duration> {
        // A panicking attempt must not wedge the scheduler for the rest of
        // the round; recover the poisoned value instead.
        self.last_deploy.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
