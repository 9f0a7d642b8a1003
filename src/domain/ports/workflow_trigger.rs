//! Port for the workflow-dispatch side effect.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::InputFields;

/// Submits one workflow-dispatch event.
///
/// The dispatch target (repository, workflow, ref) is fixed per
/// implementation; callers only supply the flattened inputs. Success
/// carries no payload.
#[async_trait]
pub trait WorkflowTrigger: Send + Sync {
    async fn trigger(&self, inputs: &InputFields) -> DomainResult<()>;
}
