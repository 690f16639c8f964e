use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::convert::From;

/// What an unauthenticated visitor sees. The submitter's email
/// stays private to the moderation surface.
#[derive(Debug, Serialize, Default)]
pub struct Anonymous {
    pub id: i32,
    pub name: String,
    pub company: Option<String>,
    pub position: Option<String>,
    pub rating: i32,
    pub review_text: String,
    pub created_at: DateTime<Utc>,
}

impl From<models::Review> for Anonymous {
    fn from(review: models::Review) -> Self {
        Self {
            id: review.id,
            name: review.name,
            company: review.company,
            position: review.position,
            rating: review.rating,
            review_text: review.review_text,
            created_at: review.created_at,
        }
    }
}
