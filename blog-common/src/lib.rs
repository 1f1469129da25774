pub mod error;
pub mod models;

// 重新导出常用类型，方便直接使用
pub use error::BlogError;
pub use models::{parse_posts, Author, Category, Post, PostsPayload};
