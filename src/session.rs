use std::str::FromStr;

use rusoto_core::Region;
use rusoto_credential::{AwsCredentials, ProfileProvider, ProvideAwsCredentials};

use crate::list_error::ListError;

// Resolved once up front and passed by reference to client construction, so
// no request-time code touches the credential store.
pub struct Session {
    pub(crate) credentials: AwsCredentials,
    pub(crate) region: Region,
}

impl Session {
    pub async fn open(profile: &str, region_name: Option<&str>) -> Result<Session, ListError> {
        let region = resolve_region(region_name)?;
        let provider = ProfileProvider::with_default_credentials(profile)?;
        Session::from_provider(provider, region).await
    }

    async fn from_provider<P: ProvideAwsCredentials>(
        provider: P,
        region: Region,
    ) -> Result<Session, ListError> {
        let credentials = provider.credentials().await?;
        Ok(Session { credentials, region })
    }
}

fn resolve_region(name: Option<&str>) -> Result<Region, ListError> {
    match name {
        Some(name) => Ok(Region::from_str(name)?),
        // Region::default reads AWS_DEFAULT_REGION / AWS_REGION and falls
        // back to us-east-1.
        None => Ok(Region::default()),
    }
}
