pub mod config;
pub mod logging;

pub mod downloader;
pub mod error;
pub mod filename;
pub mod job;
pub mod lookup;
pub mod relay;
pub mod track_ref;

pub use error::TrackdlError;
