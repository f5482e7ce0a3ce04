//! Repository for the `orphans` table.

use orphanage_core::patch::ApplyUpdate;
use orphanage_core::types::DbId;
use sqlx::PgPool;

use crate::models::orphan::{CreateOrphan, Orphan, OrphanSummary, UpdateOrphan};

/// Full column list.
const COLUMNS: &str = "id, name, age, gender, date_joined, medical_condition, \
                       education_level, background, photo_url, is_adopted";

/// List column list; `background` is only served by the detail view.
const SUMMARY_COLUMNS: &str = "id, name, age, gender, date_joined, medical_condition, \
                               education_level, is_adopted, photo_url";

/// Provides CRUD operations for orphan records.
pub struct OrphanRepo;

impl OrphanRepo {
    /// Insert a new orphan, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateOrphan) -> Result<Orphan, sqlx::Error> {
        let query = format!(
            "INSERT INTO orphans
                (name, age, gender, medical_condition, education_level,
                 background, photo_url, is_adopted)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Orphan>(&query)
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.gender)
            .bind(&input.medical_condition)
            .bind(&input.education_level)
            .bind(&input.background)
            .bind(&input.photo_url)
            .bind(input.is_adopted)
            .fetch_one(pool)
            .await
    }

    /// Find an orphan by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Orphan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orphans WHERE id = $1");
        sqlx::query_as::<_, Orphan>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every orphan in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<OrphanSummary>, sqlx::Error> {
        let query = format!("SELECT {SUMMARY_COLUMNS} FROM orphans ORDER BY id ASC");
        sqlx::query_as::<_, OrphanSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update. Only fields present in `input` change.
    ///
    /// The row is locked, merged in memory, and written back in one
    /// transaction. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: UpdateOrphan,
    ) -> Result<Option<Orphan>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM orphans WHERE id = $1 FOR UPDATE");
        let Some(mut orphan) = sqlx::query_as::<_, Orphan>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        orphan.apply_update(input);

        let update = format!(
            "UPDATE orphans SET
                name = $2,
                age = $3,
                gender = $4,
                medical_condition = $5,
                education_level = $6,
                background = $7,
                photo_url = $8,
                is_adopted = $9
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Orphan>(&update)
            .bind(id)
            .bind(&orphan.name)
            .bind(orphan.age)
            .bind(&orphan.gender)
            .bind(&orphan.medical_condition)
            .bind(&orphan.education_level)
            .bind(&orphan.background)
            .bind(&orphan.photo_url)
            .bind(orphan.is_adopted)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Permanently delete an orphan. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM orphans WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
