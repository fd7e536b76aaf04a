//! Session validation service
//!
//! Sessions are issued by the external auth provider; this service verifies
//! the HS256-signed tokens it receives and answers role questions against
//! the `user_roles` table.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::database::UserRepository;
use crate::models::user::AppRole;
use crate::utils::errors::{AdminError, Result};

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: Uuid,
    pub exp: i64,
    pub email: Option<String>,
}

/// Identity of an authenticated administrator
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub email: Option<String>,
}

#[derive(Clone)]
pub struct AuthService {
    secret: String,
}

impl AuthService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.session_secret.clone(),
        }
    }

    /// Verify a bearer session token and return its claims
    pub fn decode_session(&self, token: &str) -> Result<SessionClaims> {
        let data = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )?;

        debug!(user_id = %data.claims.sub, "Session token verified");
        Ok(data.claims)
    }

    /// Issue a session token. The platform's auth provider normally does
    /// this; the local path exists for operational tooling and tests.
    pub fn issue_session(
        &self,
        user_id: Uuid,
        email: Option<String>,
        ttl_seconds: i64,
    ) -> Result<String> {
        let exp = chrono::Utc::now()
            .checked_add_signed(chrono::Duration::seconds(ttl_seconds))
            .ok_or_else(|| AdminError::InvalidInput("session ttl overflow".to_string()))?
            .timestamp();

        let claims = SessionClaims {
            sub: user_id,
            exp,
            email,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Require the admin role for the given session's subject
    pub async fn require_admin(
        &self,
        users: &UserRepository,
        claims: &SessionClaims,
    ) -> Result<AuthContext> {
        let is_admin = users.has_role(claims.sub, AppRole::Admin).await?;

        if !is_admin {
            return Err(AdminError::PermissionDenied(format!(
                "user {} lacks the admin role",
                claims.sub
            )));
        }

        Ok(AuthContext {
            user_id: claims.sub,
            email: claims.email.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn service() -> AuthService {
        AuthService::new(&AuthConfig {
            session_secret: "0123456789abcdef0123456789abcdef".to_string(),
        })
    }

    #[test]
    fn round_trips_issued_sessions() {
        let auth = service();
        let user_id = Uuid::new_v4();
        let token = auth
            .issue_session(user_id, Some("admin@fixverse.com".to_string()), 3600)
            .expect("issue");

        let claims = auth.decode_session(&token).expect("decode");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email.as_deref(), Some("admin@fixverse.com"));
    }

    #[test]
    fn rejects_expired_sessions() {
        let auth = service();
        let token = auth
            .issue_session(Uuid::new_v4(), None, -3600)
            .expect("issue");

        assert_matches!(auth.decode_session(&token), Err(AdminError::SessionToken(_)));
    }

    #[test]
    fn rejects_tokens_signed_with_another_secret() {
        let auth = service();
        let other = AuthService::new(&AuthConfig {
            session_secret: "ffffffffffffffffffffffffffffffff".to_string(),
        });
        let token = other.issue_session(Uuid::new_v4(), None, 3600).expect("issue");

        assert_matches!(auth.decode_session(&token), Err(AdminError::SessionToken(_)));
    }

    #[test]
    fn rejects_garbage_tokens() {
        let auth = service();
        assert_matches!(
            auth.decode_session("not-a-token"),
            Err(AdminError::SessionToken(_))
        );
    }
}
