pub mod article;
pub mod health;
pub mod narration;
