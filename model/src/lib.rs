//! API model representations.

pub mod error;
pub mod player;
pub mod post;
pub mod request;
pub mod response;
pub mod user;

pub use error::ApiError;
pub use player::Player;
pub use post::Post;
pub use response::ApiResponse;
pub use user::User;
