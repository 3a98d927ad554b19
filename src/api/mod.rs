pub mod body;
pub mod format;

pub use body::JsonBody;
