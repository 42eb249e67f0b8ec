//! Policy repository implementation

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use core_kernel::EntityKind;
use domain_policy::{NewPolicy, Policy};

use crate::error::DatabaseError;
use crate::repositories::client::{ClientRow, CLIENT_COLUMNS};

pub(crate) const POLICY_COLUMNS: &str = "p.id AS policy_id, p.policy_number, p.policy_type, \
     p.coverage_amount, p.premium, p.start_date, p.end_date";

/// Database row for a policy joined with its client
#[derive(Debug, Clone, FromRow)]
pub struct PolicyRow {
    pub policy_id: i64,
    pub policy_number: String,
    pub policy_type: String,
    pub coverage_amount: Decimal,
    pub premium: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[sqlx(flatten)]
    pub client: ClientRow,
}

/// Repository for the `policies` table
#[derive(Debug, Clone)]
pub struct PolicyRepository {
    pool: PgPool,
}

impl PolicyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select() -> String {
        format!(
            "SELECT {POLICY_COLUMNS}, {CLIENT_COLUMNS} \
             FROM policies p JOIN clients c ON c.id = p.client_id"
        )
    }

    /// Returns every policy ordered by identity
    pub async fn find_all(&self) -> Result<Vec<PolicyRow>, DatabaseError> {
        let sql = format!("{} ORDER BY p.id", Self::select());
        let rows = sqlx::query_as::<_, PolicyRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<PolicyRow>, DatabaseError> {
        let sql = format!("{} WHERE p.id = $1", Self::select());
        let row = sqlx::query_as::<_, PolicyRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Inserts a policy and returns the generated identity
    ///
    /// Fails with `DatabaseError::ForeignKeyViolation` if the client row is gone.
    pub async fn insert(&self, policy: &NewPolicy) -> Result<i64, DatabaseError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO policies (
                policy_number, policy_type, coverage_amount, premium,
                start_date, end_date, client_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&policy.policy_number)
        .bind(&policy.policy_type)
        .bind(policy.coverage_amount)
        .bind(policy.premium)
        .bind(policy.start_date)
        .bind(policy.end_date)
        .bind(policy.client.id.value())
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Overwrites the scalar columns of a policy; `client_id` is never written
    pub async fn update(&self, policy: &Policy) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE policies
            SET policy_number = $2, policy_type = $3, coverage_amount = $4,
                premium = $5, start_date = $6, end_date = $7
            WHERE id = $1
            "#,
        )
        .bind(policy.id.value())
        .bind(&policy.policy_number)
        .bind(&policy.policy_type)
        .bind(policy.coverage_amount)
        .bind(policy.premium)
        .bind(policy.start_date)
        .bind(policy.end_date)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found(EntityKind::Policy, policy.id));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM policies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found(EntityKind::Policy, id));
        }
        Ok(())
    }
}
