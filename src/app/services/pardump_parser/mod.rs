//! Streaming parser for text-format PARDUMP particle position files
//!
//! PARDUMP files have no header concept; every qualifying line contributes
//! one `(particle_id, lat, lon, height)` row. The parser holds one line at
//! a time so arbitrarily large dumps run in a bounded working set.
//!
//! HYSPLIT can also emit PARDUMP in a packed binary layout. That variant is
//! an unsupported format here; callers with binary dumps must convert them
//! externally before reading.

mod parser;

#[cfg(test)]
mod tests;

pub use parser::{PardumpParser, PardumpResult};
