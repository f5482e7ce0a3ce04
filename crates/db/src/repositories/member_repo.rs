//! Repository for the `members` table.

use orphanage_core::patch::ApplyUpdate;
use orphanage_core::types::DbId;
use sqlx::PgPool;

use crate::models::member::{CreateMember, Member, UpdateMember};

const COLUMNS: &str = "id, name, role, phone, email, joined_date";

/// Provides CRUD operations for staff members.
pub struct MemberRepo;

impl MemberRepo {
    /// Insert a new member, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMember) -> Result<Member, sqlx::Error> {
        let query = format!(
            "INSERT INTO members (name, role, phone, email)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.phone)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE id = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members ORDER BY id ASC");
        sqlx::query_as::<_, Member>(&query).fetch_all(pool).await
    }

    /// Apply a partial update under a row lock.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: UpdateMember,
    ) -> Result<Option<Member>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM members WHERE id = $1 FOR UPDATE");
        let Some(mut member) = sqlx::query_as::<_, Member>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        member.apply_update(input);

        let update = format!(
            "UPDATE members SET name = $2, role = $3, phone = $4, email = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Member>(&update)
            .bind(id)
            .bind(&member.name)
            .bind(&member.role)
            .bind(&member.phone)
            .bind(&member.email)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Permanently delete a member. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
