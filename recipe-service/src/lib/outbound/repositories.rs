pub mod invite;
pub mod recipe;
pub mod share_code;
pub mod user;

pub use invite::PostgresInviteRepository;
pub use recipe::PostgresRecipeRepository;
pub use share_code::PostgresShareCodeRepository;
pub use user::PostgresUserRepository;
