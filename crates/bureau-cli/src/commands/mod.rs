pub mod account;
pub mod interaction;
pub mod render;
pub mod search;
