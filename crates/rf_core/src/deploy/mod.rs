pub mod gate;
pub mod history;
pub mod hooks;
pub mod orchestrator;

pub use gate::DeploymentGate;
pub use history::{DeploymentHistory, DeploymentRecord};
pub use hooks::{
    ActorId, ActorSpawner, Announcer, AreaHandle, AreaLoader, ConfigStore, PlacementPoint,
    RoleDescriptor, RoundSource, SpawnedActor,
};
pub use orchestrator::{DeploymentOrchestrator, DeploymentOutcome};
