use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;

/// Build an S3 client from the standard AWS environment (region,
/// credentials, `AWS_ENDPOINT_URL` for S3-compatible servers).
pub async fn build_client() -> Client {
    let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    let s3_config = aws_sdk_s3::config::Builder::from(&config)
        .force_path_style(std::env::var_os("AWS_ENDPOINT_URL").is_some())
        .build();
    Client::from_conf(s3_config)
}
