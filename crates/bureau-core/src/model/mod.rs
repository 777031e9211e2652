pub mod gender;
pub mod interaction;
pub mod user;

pub use gender::Gender;
pub use interaction::{Like, Message};
pub use user::{NewUser, Profile, User, UserId};
