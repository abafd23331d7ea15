// Per-request identity resolution

use mongodb::bson::oid::ObjectId;
use tracing::debug;

use crate::auth::token::{TokenCodec, TokenOutcome};
use crate::store::{StoreError, UserRecord, UserStore};

/// The identity attached to one inbound request. Resolved once per request
/// and kept on the request-scoped context only; never cached across
/// requests.
#[derive(Debug, Clone)]
pub enum Identity {
    Anonymous,
    User(UserRecord),
}

impl Identity {
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Identity::Anonymous)
    }

    pub fn user(&self) -> Option<&UserRecord> {
        match self {
            Identity::User(user) => Some(user),
            Identity::Anonymous => None,
        }
    }
}

/// Resolve an optional bearer token to an identity.
///
/// Every token problem degrades to `Anonymous` rather than failing the
/// request: no token, a token the codec rejects, a subject that is not a
/// well-formed ObjectId, or a subject with no matching record (a token
/// referencing a deleted account). Only a store failure propagates.
pub async fn resolve_identity(
    token: Option<&str>,
    codec: &TokenCodec,
    store: &dyn UserStore,
) -> Result<Identity, StoreError> {
    let Some(token) = token else {
        return Ok(Identity::Anonymous);
    };

    let subject = match codec.verify(token) {
        TokenOutcome::Valid { subject } => subject,
        TokenOutcome::Invalid => {
            debug!("invalid or expired session token; continuing as anonymous");
            return Ok(Identity::Anonymous);
        }
    };

    let Ok(id) = ObjectId::parse_str(&subject) else {
        debug!("token subject is not a valid object id; continuing as anonymous");
        return Ok(Identity::Anonymous);
    };

    match store.find_by_id(&id).await? {
        Some(user) => Ok(Identity::User(user)),
        None => {
            debug!("token subject {} has no matching user; continuing as anonymous", id);
            Ok(Identity::Anonymous)
        }
    }
}
