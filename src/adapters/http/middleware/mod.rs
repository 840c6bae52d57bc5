//! HTTP extractors shared by the API routes.

mod user;

pub use user::{RequireUser, UserRejection, USER_ID_HEADER};
