mod get;
mod id;
mod resolve;

pub use get::run_get;
pub use id::run_id;
pub use resolve::run_resolve;
