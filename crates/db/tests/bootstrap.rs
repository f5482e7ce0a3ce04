use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    orphanage_db::health_check(&pool).await.unwrap();

    for table in ["admins", "orphans", "donations", "members"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Migrations never seed an administrator; provisioning is the API's job.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_default_admin_seeded(pool: PgPool) {
    let exists = orphanage_db::repositories::AdminRepo::any_exists(&pool)
        .await
        .unwrap();
    assert!(!exists);
}
