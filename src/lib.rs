//! Autorent library exports for testing

pub mod api;
pub mod booking;
pub mod core;

#[cfg(test)]
pub mod test_support;
