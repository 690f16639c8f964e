use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Submit review.")]
#[post("")]
pub async fn add_handler(
    form: web::Json<forms::SubmitReview>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<models::Review>::build().form_error(errors.to_string()));
    }

    // the From impl drops any approval state the client may have sent,
    // a fresh submission is always pending
    db::review::insert(pg_pool.get_ref(), form.into_inner().into())
        .await
        .map(|review| {
            tracing::info!("New review {} is awaiting moderation", review.id);
            JsonResponse::build()
                .set_id(review.id)
                .set_item(review)
                .created("Saved")
        })
        .map_err(|err| JsonResponse::<models::Review>::build().internal_server_error(&err))
}
