pub mod path_id;
pub mod validated_json;

pub use path_id::{ResourceId, UserId};
pub use validated_json::ValidatedJson;
