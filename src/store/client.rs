use super::{ObjectStore, StoreError, StoreResult, StoredObject};
use crate::models::Config;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::{config::Region, Client as S3Client};

pub struct S3ObjectStore {
    client: S3Client,
    bucket: String,
}

impl S3ObjectStore {
    pub async fn new(
        access_key_id: String,
        secret_access_key: String,
        endpoint: String,
        region: String,
        bucket: String,
        force_path_style: bool,
    ) -> Self {
        let credentials = aws_sdk_s3::config::Credentials::new(
            access_key_id,
            secret_access_key,
            None,
            None,
            "objectstore",
        );

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(Region::new(region))
            .endpoint_url(endpoint)
            .load()
            .await;

        // Self-hosted stores usually can't resolve bucket subdomains.
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(force_path_style)
            .build();

        Self {
            client: S3Client::from_conf(s3_config),
            bucket,
        }
    }

    pub async fn from_config(config: &Config) -> Self {
        Self::new(
            config.objectstore_access_key_id.clone(),
            config.objectstore_secret_access_key.clone(),
            config.objectstore_endpoint.clone(),
            config.objectstore_region.clone(),
            config.objectstore_bucket.clone(),
            config.objectstore_force_path_style,
        )
        .await
    }
}

fn map_get_error(err: SdkError<GetObjectError, HttpResponse>) -> StoreError {
    let message = DisplayErrorContext(&err).to_string();

    if err
        .as_service_error()
        .is_some_and(GetObjectError::is_no_such_key)
    {
        return StoreError::Client {
            status: 404,
            message,
        };
    }

    // Dispatch failures and timeouts never produced a response to blame.
    match err.raw_response() {
        Some(raw) => StoreError::Client {
            status: raw.status().as_u16(),
            message,
        },
        None => StoreError::Unexpected(message),
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get(&self, key: &str) -> StoreResult<StoredObject> {
        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(map_get_error)?;

        Ok(StoredObject::new(response.body))
    }
}
