//! .NET installation detection.
//!
//! - [`legacy`] - framework versions before 4.5, from the `NDP` registry tree
//! - [`modern`] - framework 4.5 and later, from `NDP\v4\Full`
//! - [`releases`] - release-code lookup table for 4.5+
//! - [`runner`] - runs the `dotnet` queries and both readers in order

pub mod legacy;
pub mod modern;
pub mod releases;
pub mod runner;
pub mod types;

pub use releases::{version_for_release, RELEASE_CODES};
pub use runner::DetectionRunner;
pub use types::VersionEntry;
