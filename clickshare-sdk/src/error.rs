use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Invalid device configuration: {0}")]
    InvalidConfig(#[from] clickshare_api::ConfigError),

    #[error("API error: {0}")]
    Api(#[from] clickshare_api::ApiError),
}
