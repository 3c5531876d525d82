use serde::{Deserialize, Serialize};

/// Caller identity established by the SSO gateway in front of this service.
///
/// The gateway authenticates against the SSO provider and forwards the
/// external staff id of the caller; nothing about the caller is persisted
/// locally except role grants keyed by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorIdentity {
    staff_id: i64,
}

impl ActorIdentity {
    /// Creates an identity from the gateway-authenticated staff id.
    #[must_use]
    pub fn new(staff_id: i64) -> Self {
        Self { staff_id }
    }

    /// Returns the external staff id of the caller.
    #[must_use]
    pub fn staff_id(&self) -> i64 {
        self.staff_id
    }
}
