//! Client repository implementation

use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use core_kernel::EntityKind;
use domain_client::{Client, NewClient};

use crate::error::DatabaseError;

pub(crate) const CLIENT_COLUMNS: &str =
    "c.id AS client_id, c.name, c.date_of_birth, c.address, c.contact_information";

/// Database row for a client
#[derive(Debug, Clone, FromRow)]
pub struct ClientRow {
    pub client_id: i64,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub contact_information: String,
}

/// Repository for the `clients` table
#[derive(Debug, Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    /// Creates a new ClientRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns every client ordered by identity
    pub async fn find_all(&self) -> Result<Vec<ClientRow>, DatabaseError> {
        let sql = format!("SELECT {CLIENT_COLUMNS} FROM clients c ORDER BY c.id");
        let rows = sqlx::query_as::<_, ClientRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ClientRow>, DatabaseError> {
        let sql = format!("SELECT {CLIENT_COLUMNS} FROM clients c WHERE c.id = $1");
        let row = sqlx::query_as::<_, ClientRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Inserts a client and returns the generated identity
    pub async fn insert(&self, client: &NewClient) -> Result<i64, DatabaseError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO clients (name, date_of_birth, address, contact_information)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&client.name)
        .bind(client.date_of_birth)
        .bind(&client.address)
        .bind(&client.contact_information)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Overwrites the editable columns of an existing client
    pub async fn update(&self, client: &Client) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE clients
            SET name = $2, date_of_birth = $3, address = $4, contact_information = $5
            WHERE id = $1
            "#,
        )
        .bind(client.id.value())
        .bind(&client.name)
        .bind(client.date_of_birth)
        .bind(&client.address)
        .bind(&client.contact_information)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found(EntityKind::Client, client.id));
        }
        Ok(())
    }

    /// Deletes a client; policies and claims go with it through the schema
    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found(EntityKind::Client, id));
        }
        Ok(())
    }
}
