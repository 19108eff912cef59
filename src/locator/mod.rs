//! Resolution of logical script references to servable files.
//!
//! Candidate generation is a pure, separately testable step; the resolver
//! layers filesystem existence probes and the append-once output contract on
//! top of it. The same candidate lists drive both single-reference and batch
//! resolution.

mod candidates;
mod resolve;

pub use candidates::{localization_candidates, standard_candidates, third_party_candidate};
pub use resolve::ScriptLocator;
