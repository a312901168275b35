//! End-to-end checks for the mask → range → sweep pipeline.

mod sweep;
#[cfg(test)]
mod utils;
