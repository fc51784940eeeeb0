//! Static AWS credentials from the environment

use std::fmt;

use crate::error::AwsError;

pub const ENV_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const ENV_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const ENV_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

#[derive(Clone)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
}

impl Credentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
        }
    }

    /// Read `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` / `AWS_SESSION_TOKEN`
    pub fn from_env() -> Result<Self, AwsError> {
        let access_key_id = std::env::var(ENV_ACCESS_KEY_ID)
            .map_err(|_| AwsError::Credentials(format!("{ENV_ACCESS_KEY_ID} not set")))?;
        let secret_access_key = std::env::var(ENV_SECRET_ACCESS_KEY)
            .map_err(|_| AwsError::Credentials(format!("{ENV_SECRET_ACCESS_KEY} not set")))?;
        let session_token = std::env::var(ENV_SESSION_TOKEN)
            .ok()
            .filter(|t| !t.is_empty());
        Ok(Self::new(access_key_id, secret_access_key, session_token))
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub(crate) fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
