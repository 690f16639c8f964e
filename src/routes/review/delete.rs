use crate::db;
use crate::helpers::JsonResponse;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;

// Rejection is a hard delete, there is no retained "rejected" state.
#[tracing::instrument(name = "Admin reject review.")]
#[delete("/{id}")]
pub async fn admin_delete_handler(
    path: web::Path<(i32,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let review_id = path.0;
    let deleted = db::review::delete(pg_pool.get_ref(), review_id)
        .await
        .map_err(|err| JsonResponse::<()>::build().internal_server_error(&err))?;

    if !deleted {
        return Err(JsonResponse::<()>::build().not_found("not found"));
    }

    Ok(JsonResponse::<()>::build().set_id(review_id).ok("Deleted"))
}
