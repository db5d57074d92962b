//! File classification pass for trajectory parsing
//!
//! The first pass over the file decides everything the extraction pass
//! needs: where the header line is and which variant the file carries.
//! Both markers are matched as literal substrings anywhere in a line.

use crate::constants::{EXTENDED_MET_MARKER, TRAJECTORY_HEADER_MARKER};

use super::schema::TrajectoryVariant;

/// Outcome of the classification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Index of the last line containing the header marker, if any. Data
    /// rows are the lines strictly after it. The last occurrence wins so
    /// that trailing re-occurrences of the marker restart the data section.
    pub header_idx: Option<usize>,

    /// Detected file variant. Meaningful only when a header was found.
    pub variant: TrajectoryVariant,
}

/// Scan all lines and locate the header and variant markers.
pub fn classify_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Classification {
    let mut header_idx = None;
    let mut extended = false;

    for (idx, line) in lines.into_iter().enumerate() {
        if line.contains(TRAJECTORY_HEADER_MARKER) {
            header_idx = Some(idx);
        }
        if line.contains(EXTENDED_MET_MARKER) {
            extended = true;
        }
    }

    Classification {
        header_idx,
        variant: if extended {
            TrajectoryVariant::Extended
        } else {
            TrajectoryVariant::Standard
        },
    }
}
