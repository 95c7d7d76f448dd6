use std::convert::TryFrom;

use rusoto_core::{Client, HttpClient};
use rusoto_credential::StaticProvider;
use rusoto_s3::{S3Client, S3};

use crate::list_error::ListError;
use crate::model::bucket::Bucket;
use crate::session::Session;

pub struct StoreClient {
    inner: S3Client,
}

impl StoreClient {
    pub fn open(session: &Session) -> Result<StoreClient, ListError> {
        let dispatcher = HttpClient::new()?;
        let provider = StaticProvider::from(session.credentials.clone());

        let client = Client::new_with(provider, dispatcher);
        let inner = S3Client::new_with_client(client, session.region.clone());

        Ok(StoreClient { inner })
    }

    // ListBuckets carries no continuation token in this API revision, so the
    // one response holds the complete collection.
    pub async fn list_buckets(&self) -> Result<Vec<Bucket>, ListError> {
        let resp = self.inner.list_buckets().await?;

        resp.buckets
            .unwrap_or_default()
            .into_iter()
            .map(Bucket::try_from)
            .collect()
    }
}
