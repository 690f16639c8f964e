use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Default, sqlx::FromRow)]
pub struct Review {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub position: Option<String>,
    pub rating: i32,
    pub review_text: String,
    pub is_approved: bool, // a review goes public only after moderation
    pub created_at: DateTime<Utc>,
}
