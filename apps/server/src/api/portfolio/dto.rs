use folio_core::errors::{Error as CoreError, ValidationError};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ChartQuery {
    pub user_id: Option<String>,
}

#[derive(Deserialize)]
pub struct HoldingsQuery {
    pub user_id: Option<String>,
    pub asset_type: Option<String>,
}

/// Rejects a request without the `user_id` parameter. Further checks on the
/// value happen in the holdings resolver.
pub fn require_user_id(user_id: &Option<String>) -> Result<&str, CoreError> {
    user_id
        .as_deref()
        .ok_or_else(|| ValidationError::MissingField("user_id".to_string()).into())
}
