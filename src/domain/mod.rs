pub mod article;
pub mod narration;
