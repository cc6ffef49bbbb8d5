use thiserror::Error;
use tracing::info;

use crate::deployments::Deployment;
use crate::error::DeployError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("Contract source code already verified")]
    AlreadyVerified,

    #[error("Verification rejected: {0}")]
    Rejected(String),
}

/// External contract verification service (a block explorer).
pub trait Verifier {
    fn verify(&self, deployment: &Deployment, api_key: &str) -> Result<(), VerifyError>;
}

/// Submit `deployment` for verification. A contract that is already
/// verified counts as success.
pub fn verify(
    verifier: &dyn Verifier,
    deployment: &Deployment,
    api_key: &str,
) -> Result<(), DeployError> {
    info!("Verifying contract {}...", deployment.name);
    match verifier.verify(deployment, api_key) {
        Ok(()) => Ok(()),
        Err(VerifyError::AlreadyVerified) => {
            info!("Already verified!");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
