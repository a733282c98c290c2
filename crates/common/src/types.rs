use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Returned when an account identifier is zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("account id must be positive, got {0}")]
pub struct InvalidAccountId(pub i64);

/// Identifier of the account a purchase is charged to.
///
/// Always strictly positive. The only way to obtain one is through
/// [`AccountId::new`] (or deserialization, which runs the same check), so
/// collaborators receiving an `AccountId` never see an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AccountId(i64);

impl AccountId {
    /// Creates an account ID, rejecting zero and negative values.
    pub fn new(id: i64) -> Result<Self, InvalidAccountId> {
        if id <= 0 {
            return Err(InvalidAccountId(id));
        }
        Ok(Self(id))
    }

    /// Returns the raw integer value.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for AccountId {
    type Error = InvalidAccountId;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

/// Unique identifier for a completed purchase.
///
/// Wraps a UUID so confirmations can be correlated in logs without being
/// mixed up with other UUID-based identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PurchaseId(Uuid);

impl PurchaseId {
    /// Creates a new random purchase ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a purchase ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PurchaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PurchaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for PurchaseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
