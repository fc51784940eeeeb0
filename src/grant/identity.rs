//! Identity Resolver - email to identity store user id

use crate::aws::{IdentityDirectory, Result};

use super::types::Identity;

pub struct IdentityResolver<'a> {
    directory: &'a dyn IdentityDirectory,
}

impl<'a> IdentityResolver<'a> {
    pub fn new(directory: &'a dyn IdentityDirectory) -> Self {
        Self { directory }
    }

    /// Look up `email` as a `UserName` within `identity_store_id`
    ///
    /// Zero matches is `Ok(None)`. With several matches the first one in
    /// directory order wins.
    pub async fn resolve_user(
        &self,
        identity_store_id: &str,
        email: &str,
    ) -> Result<Option<Identity>> {
        let users = self.directory.list_users(identity_store_id, email).await?;

        if users.len() > 1 {
            tracing::warn!(
                email,
                matches = users.len(),
                "Identity store returned several users for one UserName, using the first"
            );
        }

        Ok(users.into_iter().next().map(|u| Identity { user_id: u.user_id }))
    }
}
