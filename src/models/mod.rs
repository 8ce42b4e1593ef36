pub mod status;
pub mod technology;

pub use status::Status;
pub use technology::{Technology, next_id};
