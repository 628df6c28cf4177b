pub mod carbon;
pub mod forum;
pub mod level;
pub mod tracker;
pub mod user;

pub use carbon::*;
pub use forum::*;
pub use level::*;
pub use tracker::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// `{"msg": ...}` acknowledgement returned by the write routes.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        MessageResponse { msg: msg.into() }
    }
}
