pub mod context;
pub mod digest;
pub mod disc;
pub mod error;
pub mod iso9660;
pub mod path;
pub mod platform;
pub mod reader;
pub mod util;

pub use context::HashContext;
pub use digest::Md5Digest;
pub use disc::{DiscReader, DiscTrack, TrackSelector};
pub use error::HashError;
pub use iso9660::FileExtent;
pub use platform::{Platform, PlatformParseError};
pub use reader::{FileReader, ReadSeek, StdFileReader};

/// Upper bound on any single contiguous allocation and on the number of
/// bytes fed into a digest from one logical region. Longer inputs are
/// truncated, never rejected.
pub const MAX_BUFFER_SIZE: u64 = 64 * 1024 * 1024;
