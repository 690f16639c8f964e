mod admin;
mod anonymous;

pub use admin::Admin as Admin;
pub use anonymous::Anonymous as Anonymous;
