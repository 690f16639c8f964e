use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn insert(pool: &PgPool, review: models::Review) -> Result<models::Review, String> {
    let query_span = tracing::info_span!("Saving new review into the database");
    // is_approved is hard-coded to false: a fresh review is always pending,
    // whatever the caller put into the model
    sqlx::query_as::<_, models::Review>(
        r#"
        INSERT INTO review (name, email, company, position, rating, review_text, is_approved, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, false, NOW() at time zone 'utc')
        RETURNING *
        "#,
    )
    .bind(review.name)
    .bind(review.email)
    .bind(review.company)
    .bind(review.position)
    .bind(review.rating)
    .bind(review.review_text)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn fetch_approved(
    pool: &PgPool,
    offset: i64,
    limit: i64,
) -> Result<Vec<models::Review>, String> {
    let query_span = tracing::info_span!("Fetch a page of approved reviews.");
    sqlx::query_as::<_, models::Review>(
        r#"
        SELECT *
        FROM review
        WHERE is_approved = true
        ORDER BY created_at DESC
        OFFSET $1 LIMIT $2
        "#,
    )
    .bind(offset)
    .bind(limit)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch approved reviews, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn fetch_pending(pool: &PgPool) -> Result<Vec<models::Review>, String> {
    let query_span = tracing::info_span!("Fetch all pending reviews.");
    sqlx::query_as::<_, models::Review>(
        r#"
        SELECT *
        FROM review
        WHERE is_approved = false
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch pending reviews, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

/// Flips a review to approved. `Ok(None)` when the id is unknown.
/// Approving an already approved review succeeds and returns it unchanged.
pub async fn approve(pool: &PgPool, id: i32) -> Result<Option<models::Review>, String> {
    let query_span = tracing::info_span!("Approving review");
    sqlx::query_as::<_, models::Review>(
        r#"
        UPDATE review
        SET is_approved = true
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map(|review| {
        if let Some(review) = review.as_ref() {
            tracing::info!("Review {} has been approved", review.id);
        }
        review
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to approve".to_string()
    })
}

/// Hard delete. `Ok(false)` when no row matched the id.
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, String> {
    tracing::info!("Delete review {}", id);
    sqlx::query::<sqlx::Postgres>("DELETE FROM review WHERE id = $1;")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete review: {:?}", err);
            "Failed to delete review".to_string()
        })
}
