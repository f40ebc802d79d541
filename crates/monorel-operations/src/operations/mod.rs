mod apply;
mod dependents;
mod plan;
mod publish;
mod release;

pub use apply::{AppliedChanges, ChangeApplier, DependencyUpdateOutcome};
pub use dependents::{DependentPackage, find_dependents};
pub use monorel_manifest::DependencyWrite;
pub use plan::ReleasePlan;
pub use publish::{PublishOutcome, Publisher};
pub use release::{AbortReason, ReleaseInput, ReleaseOperation, ReleaseOutcome, ReleaseReport};
