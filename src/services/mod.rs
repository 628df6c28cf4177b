pub mod carbon_service;
pub mod forum_service;
pub mod news_service;
pub mod tips_service;
pub mod tracker_service;
pub mod user_service;

pub use news_service::NewsClient;
