//! Default community data for fresh environments.

use sqlx::PgPool;

/// Communities created by [`seed_default_communities`], as `(title, description)`.
pub const DEFAULT_COMMUNITIES: &[(&str, &str)] = &[
    (
        "Tech Enthusiasts",
        "A community for tech lovers to share and discuss the latest in technology.",
    ),
    (
        "Book Club",
        "A place for bookworms to discuss their favorite reads.",
    ),
    (
        "Fitness Freaks",
        "A community for fitness enthusiasts to share tips and motivate each other.",
    ),
];

/// Insert each default community unless one with the same title exists.
///
/// Safe to run repeatedly. Returns the number of rows inserted.
pub async fn seed_default_communities(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for (title, description) in DEFAULT_COMMUNITIES {
        let result = sqlx::query(
            "INSERT INTO communities (title, description)
             SELECT $1, $2
             WHERE NOT EXISTS (SELECT 1 FROM communities WHERE title = $1)",
        )
        .bind(*title)
        .bind(*description)
        .execute(&mut *tx)
        .await?;
        inserted += result.rows_affected();
    }

    tx.commit().await?;
    tracing::info!(inserted, "Default communities seeded");
    Ok(inserted)
}
