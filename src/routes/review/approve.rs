use crate::db;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{put, web, Responder, Result};
use sqlx::PgPool;
use std::convert::Into;

// The only write path that makes a review publicly visible.
#[tracing::instrument(name = "Admin approve review.")]
#[put("/{id}/approve")]
pub async fn admin_approve_handler(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let review_id = path.0;
    let review = db::review::approve(pg_pool.get_ref(), review_id)
        .await
        .map_err(|err| JsonResponse::<views::review::Admin>::build().internal_server_error(&err))?
        .ok_or_else(|| JsonResponse::<views::review::Admin>::build().not_found("not found"))?;

    Ok(JsonResponse::build()
        .set_id(review.id)
        .set_item(Into::<views::review::Admin>::into(review))
        .ok("Approved"))
}
