//! Claim repository implementation

use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use core_kernel::EntityKind;
use domain_claims::{Claim, NewClaim};

use crate::error::DatabaseError;
use crate::repositories::client::CLIENT_COLUMNS;
use crate::repositories::policy::{PolicyRow, POLICY_COLUMNS};

/// Database row for a claim joined with its policy and client
#[derive(Debug, Clone, FromRow)]
pub struct ClaimRow {
    pub claim_id: i64,
    pub claim_number: String,
    pub description: String,
    pub claim_date: NaiveDate,
    pub status: Option<String>,
    #[sqlx(flatten)]
    pub policy: PolicyRow,
}

/// Repository for the `claims` table
#[derive(Debug, Clone)]
pub struct ClaimRepository {
    pool: PgPool,
}

impl ClaimRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select() -> String {
        format!(
            "SELECT k.id AS claim_id, k.claim_number, k.description, k.claim_date, k.status, \
             {POLICY_COLUMNS}, {CLIENT_COLUMNS} \
             FROM claims k \
             JOIN policies p ON p.id = k.policy_id \
             JOIN clients c ON c.id = p.client_id"
        )
    }

    /// Returns every claim ordered by identity
    pub async fn find_all(&self) -> Result<Vec<ClaimRow>, DatabaseError> {
        let sql = format!("{} ORDER BY k.id", Self::select());
        let rows = sqlx::query_as::<_, ClaimRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ClaimRow>, DatabaseError> {
        let sql = format!("{} WHERE k.id = $1", Self::select());
        let row = sqlx::query_as::<_, ClaimRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Inserts a claim and returns the generated identity
    pub async fn insert(&self, claim: &NewClaim) -> Result<i64, DatabaseError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO claims (claim_number, description, claim_date, status, policy_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&claim.claim_number)
        .bind(&claim.description)
        .bind(claim.claim_date)
        .bind(&claim.status)
        .bind(claim.policy.id.value())
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Overwrites the scalar columns of a claim; `policy_id` is never written
    pub async fn update(&self, claim: &Claim) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE claims
            SET claim_number = $2, description = $3, claim_date = $4, status = $5
            WHERE id = $1
            "#,
        )
        .bind(claim.id.value())
        .bind(&claim.claim_number)
        .bind(&claim.description)
        .bind(claim.claim_date)
        .bind(&claim.status)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found(EntityKind::Claim, claim.id));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM claims WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found(EntityKind::Claim, id));
        }
        Ok(())
    }
}
