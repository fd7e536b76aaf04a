//! User repository implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::{AppRole, Profile, UserAccount, UserStatus};
use crate::utils::errors::AdminError;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

// One row per profile: DISTINCT ON collapses accounts holding both
// marketplace roles, and `r.role DESC` makes the seller role win
// (app_role declares seller after buyer, so it sorts higher).
fn account_list_sql() -> &'static str {
    r#"
    SELECT id, email, full_name, status, role, created_at
    FROM (
        SELECT DISTINCT ON (p.id)
            p.id, p.email, p.full_name, p.status, r.role, p.created_at
        FROM profiles p
        LEFT JOIN user_roles r
            ON r.user_id = p.id AND r.role IN ('buyer', 'seller')
        ORDER BY p.id, r.role DESC
    ) accounts
    ORDER BY created_at DESC
    "#
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all profiles joined with their marketplace role (buyer/seller)
    pub async fn list(&self) -> Result<Vec<UserAccount>, AdminError> {
        let users = sqlx::query_as::<_, UserAccount>(account_list_sql())
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    /// Find a profile by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, AdminError> {
        let profile = sqlx::query_as::<_, Profile>(
            "SELECT id, email, full_name, status, created_at, updated_at FROM profiles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Update a profile's account status
    pub async fn set_status(&self, id: Uuid, status: UserStatus) -> Result<Profile, AdminError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET status = $2, updated_at = $3
            WHERE id = $1
            RETURNING id, email, full_name, status, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Check whether a user carries a given role (the original `has_role` RPC)
    pub async fn has_role(&self, user_id: Uuid, role: AppRole) -> Result<bool, AdminError> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM user_roles WHERE user_id = $1 AND role = $2)",
        )
        .bind(user_id)
        .bind(role)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists.0)
    }

    /// Count all profiles
    pub async fn count(&self) -> Result<i64, AdminError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM profiles")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    /// Count users carrying a given role
    pub async fn count_by_role(&self, role: AppRole) -> Result<i64, AdminError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_roles WHERE role = $1")
            .bind(role)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    /// Count profiles created at or after the given instant
    pub async fn count_created_since(&self, since: DateTime<Utc>) -> Result<i64, AdminError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM profiles WHERE created_at >= $1")
            .bind(since)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_listing_collapses_multi_role_profiles() {
        let sql = account_list_sql();
        assert!(sql.contains("DISTINCT ON (p.id)"));
        assert!(sql.contains("ORDER BY p.id, r.role DESC"));
    }

    #[test]
    fn account_listing_stays_newest_first() {
        let sql = account_list_sql();
        assert!(sql.trim_end().ends_with("ORDER BY created_at DESC"));
    }
}
