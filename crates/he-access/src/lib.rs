//! HE Access Assistant (UK) core library.
//!
//! Maps a self-reported international education background to UK higher
//! education guidance: an approximate qualification equivalence, recommended
//! pathways, a next-steps checklist, and funding signposting. The whole
//! computation is a stateless, deterministic transform over one submission;
//! the tool offers orientation only, never official recognition.

pub mod config;
pub mod error;
pub mod guidance;
pub mod telemetry;
