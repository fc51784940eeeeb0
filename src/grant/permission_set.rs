//! Permission Set Resolver
//!
//! Walks every `ListPermissionSets` page and describes each candidate in
//! enumeration order (one describe call per ARN). A set whose name equals the
//! requested token ends the scan at once. A set matching only the token's
//! configured alias is remembered and used if no literal match turns up.

use std::collections::BTreeMap;

use crate::aws::{AccessAdmin, Result};
use crate::error::AwsError;

use super::types::PermissionSet;

pub struct PermissionSetResolver<'a> {
    admin: &'a dyn AccessAdmin,
    aliases: &'a BTreeMap<String, String>,
    max_pages: usize,
}

impl<'a> PermissionSetResolver<'a> {
    pub fn new(
        admin: &'a dyn AccessAdmin,
        aliases: &'a BTreeMap<String, String>,
        max_pages: usize,
    ) -> Self {
        Self {
            admin,
            aliases,
            max_pages,
        }
    }

    /// Lowercased alias target for `token`, if it differs from the token
    ///
    /// Alias keys compare case-insensitively, whatever case the config used.
    fn alias_target(&self, token: &str) -> Option<String> {
        self.aliases
            .iter()
            .find(|(alias, _)| alias.to_lowercase() == token)
            .map(|(_, target)| target.to_lowercase())
            .filter(|target| target != token)
    }

    /// Find the permission set named `name` under `instance_arn`
    ///
    /// Fails with [`AwsError::PageLimit`] when the listing still has pages
    /// after `max_pages`, rather than reporting a miss it cannot confirm.
    pub async fn resolve_permission_set(
        &self,
        instance_arn: &str,
        name: &str,
    ) -> Result<Option<PermissionSet>> {
        let token = name.to_lowercase();
        let alias = self.alias_target(&token);
        let mut alias_match: Option<PermissionSet> = None;
        let mut next_token: Option<String> = None;
        let mut page = 0;

        loop {
            if page >= self.max_pages {
                tracing::warn!(
                    max_pages = self.max_pages,
                    "Reached max pages listing permission sets, result would be incomplete"
                );
                return Err(AwsError::PageLimit {
                    operation: "ListPermissionSets",
                    pages: self.max_pages,
                });
            }
            page += 1;

            let listing = self
                .admin
                .list_permission_sets(instance_arn, next_token.as_deref())
                .await?;

            tracing::debug!(
                "Fetched permission set page {} with {} candidates",
                page,
                listing.arns.len()
            );

            for arn in &listing.arns {
                let described = self.admin.describe_permission_set(instance_arn, arn).await?;
                let candidate = described.name.to_lowercase();
                if candidate == token {
                    tracing::info!(
                        permission_set = %described.name,
                        arn = %described.arn,
                        "Matched permission set"
                    );
                    return Ok(Some(described));
                }
                if alias_match.is_none() && alias.as_deref() == Some(candidate.as_str()) {
                    alias_match = Some(described);
                }
            }

            match listing.next_token {
                Some(t) => next_token = Some(t),
                None => break,
            }
        }

        if let Some(set) = &alias_match {
            tracing::info!(
                requested = name,
                permission_set = %set.name,
                arn = %set.arn,
                "Matched permission set through alias"
            );
        }
        Ok(alias_match)
    }
}
