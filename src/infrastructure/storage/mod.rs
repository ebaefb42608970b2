use crate::infrastructure::config::Config;
use object_store::aws::AmazonS3Builder;
use object_store::memory::InMemory;
use object_store::ObjectStore;
use std::sync::Arc;

/// Open the object store that holds article records and audio.
///
/// Uses the configured S3 bucket (credentials from the usual AWS environment
/// variables), or an in-memory store when no bucket is configured.
pub fn create_object_store(config: &Config) -> Result<Arc<dyn ObjectStore>, object_store::Error> {
    match &config.content_bucket_name {
        Some(bucket) => {
            let store = AmazonS3Builder::from_env()
                .with_bucket_name(bucket)
                .with_region(&config.aws_region)
                .build()?;
            tracing::info!(bucket = %bucket, region = %config.aws_region, "S3 object store configured");
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!(
                "CONTENT_REPO_BUCKET_NAME not set, articles and audio are kept in memory and lost on restart"
            );
            Ok(Arc::new(InMemory::new()))
        }
    }
}
