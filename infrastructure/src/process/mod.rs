//! Child process execution

mod runner;

pub use runner::TokioProcessRunner;
