//! Extended M3U serialization.
//!
//! The writer emits a header, one entry per track and a summary footer,
//! in that order:
//!
//! ```text
//! #EXTM3U
//!
//! #EXTINF:242,Rick Wakeman - Custer's Last Stand
//! music/01.ogg
//! # Artist: Rick Wakeman
//! # Album: Time Machine
//! # Duration: 00:04:02
//! # created by playlist 1.8.0
//! #END
//! ```

mod time;
mod writer;

pub use writer::PlaylistWriter;
