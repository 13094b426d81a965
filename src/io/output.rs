//! Reference list output
//!
//! Joins an already-sorted batch of citations into the final numbered
//! reference list. The join step lives outside the formatting core so any
//! `Write` sink works (stdout, a file, a test buffer).

use crate::core::FormattedCitation;
use std::io::Write;

/// Write citations as a numbered reference list
///
/// One line per citation, formatted as `N. <citation>`. An empty batch
/// produces no output.
///
/// # Errors
///
/// Returns an error if writing to the sink fails.
pub fn write_reference_list(
    citations: &[FormattedCitation],
    output: &mut dyn Write,
) -> Result<(), String> {
    for (index, citation) in citations.iter().enumerate() {
        writeln!(output, "{}. {}", index + 1, citation.formatted())
            .map_err(|e| format!("Failed to write reference list: {}", e))?;
    }

    output
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
