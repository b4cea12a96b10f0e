//! `roam-alfred capture` - org-capture template menu

use roam_alfred_core::automation::session_variables;
use roam_alfred_core::capture::{capture_items, CaptureContext};
use roam_alfred_core::error::Result;

use crate::commands::dispatch::command::CommandContext;
use crate::commands::output::print_result;

pub fn execute(ctx: &CommandContext, category: &str, query: &str) -> Result<()> {
    let session = session_variables(&ctx.automation());
    let capture = CaptureContext::from_session(query, &session);
    print_result(&capture_items(category, &capture)?)
}
