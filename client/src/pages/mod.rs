//! One page per console view.

pub mod jobs;
pub mod login;
pub mod runs;
pub mod settings;
pub mod sources;
