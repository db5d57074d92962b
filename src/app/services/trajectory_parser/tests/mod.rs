//! Test fixtures for trajectory parsing
//!
//! Fixture content follows the endpoint file layout HYSPLIT's trajectory
//! model writes: grid and starting-point metadata, a diagnostic-variable
//! header line, then one fixed-layout row per endpoint.

mod stats_tests;

/// A standard (9 column) file with three endpoint rows.
pub const STANDARD_FILE: &str = "\
     1     1
    NGM    95     1     1     0
     1 FORWARD  OMEGA
    95     1     1     0   40.000  -90.000    10.0
     1 PRESSURE
     1     1    95     1     1     0     0     0     0.0   40.000  -90.000    10.0   975.0
     1     1    95     1     1     1     0     0     1.0   40.135  -90.210    35.1   970.2
     1     1    95     1     1     2     0     0     2.0   40.287  -90.404    58.9   965.4
";

/// An extended meteorology file (18 columns) with two endpoint rows.
pub const EXTENDED_FILE: &str = "\
     1     1
    NGM    95     1     1     0
     1 FORWARD  OMEGA
    95     1     1     0   40.000  -90.000    10.0
     9 PRESSURE THETA AIR_TEMP RAINFALL MIXDEPTH RELHUMID SPCHUMID H2OMIXRA TERR_MSL SUN_FLUX
     1     1    95     1     1     0     0     0     0.0   40.000  -90.000    10.0   975.0   290.1   280.5     0.0   500.0    60.0     5.1     4.2   200.0   100.0
     1     1    95     1     1     1     0     0     1.0   40.135  -90.210    35.1   970.2   290.4   280.1     0.2   520.0    62.0     5.0     4.1   205.0    95.0
";

/// A file with run metadata only and no header marker.
pub const HEADERLESS_FILE: &str = "\
     1     1
    NGM    95     1     1     0
     1 FORWARD  OMEGA
    95     1     1     0   40.000  -90.000    10.0
";
