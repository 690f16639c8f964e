use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct SubmitReview {
    #[validate(min_length = 1)]
    #[validate(max_length = 255)]
    pub name: String,
    // presence only, format is not checked
    #[validate(min_length = 1)]
    #[validate(max_length = 255)]
    pub email: String,
    #[validate(max_length = 255)]
    pub company: Option<String>,
    #[validate(max_length = 255)]
    pub position: Option<String>,
    #[validate(minimum = 1)]
    #[validate(maximum = 5)]
    pub rating: i32,
    #[validate(min_length = 1)]
    #[validate(max_length = 5000)]
    pub review_text: String,
}

impl From<SubmitReview> for models::Review {
    fn from(form: SubmitReview) -> Self {
        models::Review {
            name: form.name,
            email: form.email,
            company: form.company,
            position: form.position,
            rating: form.rating,
            review_text: form.review_text,
            // never taken from the client, the store sets it again on insert
            is_approved: false,
            ..Default::default()
        }
    }
}
