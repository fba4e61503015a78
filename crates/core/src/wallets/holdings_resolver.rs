use std::sync::Arc;

use log::debug;

use super::wallets_model::UserWallets;
use super::wallets_traits::HoldingsRepositoryTrait;
use crate::constants::MAX_USER_ID_LEN;
use crate::errors::{Error, Result, ValidationError};

/// Looks up a user's raw wallets. Asset resolution happens later, in the
/// portfolio services, since each view needs different asset metadata.
#[derive(Clone)]
pub struct HoldingsResolver {
    repository: Arc<dyn HoldingsRepositoryTrait>,
}

impl HoldingsResolver {
    pub fn new(repository: Arc<dyn HoldingsRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Resolves `user_id` to its wallets.
    ///
    /// Fails with `Validation` for a malformed id and `NotFound` for an id the
    /// store does not know. A known user with no wallets resolves to an empty
    /// `UserWallets`.
    pub fn resolve(&self, user_id: &str) -> Result<UserWallets> {
        let user_id = validate_user_id(user_id)?;
        match self.repository.get_user_wallets(user_id)? {
            Some(wallets) => {
                debug!(
                    "Resolved user {} with {} wallets and {} holdings",
                    user_id,
                    wallets.wallets.len(),
                    wallets.holding_count()
                );
                Ok(wallets)
            }
            None => Err(Error::NotFound(format!("User {} not found", user_id))),
        }
    }
}

/// Checks that a user id is usable as a lookup key and returns it trimmed.
pub fn validate_user_id(raw: &str) -> Result<&str> {
    let user_id = raw.trim();
    if user_id.is_empty() {
        return Err(ValidationError::MissingField("user_id".to_string()).into());
    }
    if user_id.chars().count() > MAX_USER_ID_LEN {
        return Err(Error::invalid_input(format!(
            "user_id must be at most {} characters",
            MAX_USER_ID_LEN
        )));
    }
    if user_id.chars().any(char::is_control) {
        return Err(Error::invalid_input(
            "user_id must not contain control characters",
        ));
    }
    Ok(user_id)
}
