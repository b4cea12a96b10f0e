//! Result emission

use roam_alfred_core::alfred::AlfredResult;
use roam_alfred_core::error::Result;

/// Print a result document as one line of compact JSON.
pub fn print_result(result: &AlfredResult) -> Result<()> {
    println!("{}", result.to_json()?);
    Ok(())
}
