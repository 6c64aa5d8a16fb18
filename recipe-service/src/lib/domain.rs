pub mod access_code;
pub mod invite;
pub mod recipe;
pub mod share_code;
pub mod user;
