use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::convert::From;

#[derive(Debug, Serialize, Default)]
pub struct Admin {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub position: Option<String>,
    pub rating: i32,
    pub review_text: String,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl From<models::Review> for Admin {
    fn from(review: models::Review) -> Self {
        Self {
            id: review.id,
            name: review.name,
            email: review.email,
            company: review.company,
            position: review.position,
            rating: review.rating,
            review_text: review.review_text,
            is_approved: review.is_approved,
            created_at: review.created_at,
        }
    }
}
