use crate::configuration::Settings;
use crate::db;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{get, web, Responder, Result};
use serde::Deserialize;
use sqlx::PgPool;
use std::convert::Into;

#[derive(Debug, Deserialize)]
pub struct Pagination {
    page: Option<i64>,
    limit: Option<i64>,
}

fn page_offset(page: i64, limit: i64) -> i64 {
    // query values are client-controlled, a huge page must degrade to an
    // empty window instead of overflowing
    (page - 1).saturating_mul(limit)
}

#[tracing::instrument(name = "Anonymous list approved reviews.")]
#[get("")]
pub async fn anonymous_list_handler(
    query: web::Query<Pagination>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(settings.default_page_size).max(1);

    db::review::fetch_approved(pg_pool.get_ref(), page_offset(page, limit), limit)
        .await
        .map(|reviews| {
            let reviews = reviews
                .into_iter()
                .map(Into::into)
                .collect::<Vec<views::review::Anonymous>>();

            JsonResponse::build().set_list(reviews).ok("OK")
        })
        .map_err(|_err| JsonResponse::<views::review::Anonymous>::build().internal_server_error(""))
}

#[tracing::instrument(name = "Admin list pending reviews.")]
#[get("")]
pub async fn admin_list_handler(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    db::review::fetch_pending(pg_pool.get_ref())
        .await
        .map(|reviews| {
            let reviews = reviews
                .into_iter()
                .map(Into::into)
                .collect::<Vec<views::review::Admin>>();

            JsonResponse::build().set_list(reviews).ok("OK")
        })
        .map_err(|_err| JsonResponse::<views::review::Admin>::build().internal_server_error(""))
}
