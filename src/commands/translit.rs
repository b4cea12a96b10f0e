use roam_alfred_core::error::Result;
use roam_alfred_core::translit::translit_result;

use crate::commands::output::print_result;

pub fn execute(words: &[String]) -> Result<()> {
    print_result(&translit_result(words))
}
