//! Test fixtures for particle dump parsing


/// A small text PARDUMP with three particles.
pub const PARDUMP_FILE: &str = "\
1 10.0 20.0 5.0
2 10.5 20.5 7.5
3 11.0 21.0 10.0
";
