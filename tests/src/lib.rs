//! End-to-end tests for the batch engine, driven by scripted collaborators.

#[cfg(test)]
mod batch;
#[cfg(test)]
mod utils;
