//! Capture menu items
//!
//! Each item names an org-capture template; the workflow runs the template
//! with the typed query as its initial content.

use crate::alfred::{AlfredResult, BrowserState, Item, Variables};
use crate::error::{RoamError, Result};

/// Template that keeps the capture buffer open for editing
const EDITING_TEMPLATE: &str = "e";

/// Capture categories and their inbox template keys
const CATEGORIES: &[(&str, &str)] = &[("home", "h"), ("goog", "g")];

/// Inputs for building the capture menu
#[derive(Debug, Clone, Default)]
pub struct CaptureContext {
    pub query: String,
    pub meeting: String,
    pub clocked_in_task: String,
    /// Raw browser state JSON, possibly empty
    pub browser_state: String,
}

impl CaptureContext {
    /// Build from resolved session variables.
    pub fn from_session(query: impl Into<String>, session: &Variables) -> Self {
        Self {
            query: query.into(),
            meeting: session.meeting.clone(),
            clocked_in_task: session.clocked_in_task.clone(),
            browser_state: session.browser_state.clone(),
        }
    }
}

/// Build the capture menu for `category` (`home` or `goog`).
pub fn capture_items(category: &str, ctx: &CaptureContext) -> Result<AlfredResult> {
    let inbox_template = CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, template)| *template)
        .ok_or_else(|| {
            let expected: Vec<&str> = CATEGORIES.iter().map(|(name, _)| *name).collect();
            RoamError::unknown_value("capture category", category, expected.join(", "))
        })?;
    let is_goog = category == "goog";
    let has_query = !ctx.query.is_empty();
    let page = BrowserState::decode(&ctx.browser_state);

    let mut items = Vec::new();
    let mut add = |title: String, template: &str, valid: bool| {
        items.push(capture_item(title, template, valid, &ctx.query));
    };

    if !ctx.meeting.is_empty() {
        add(
            format!("capture meeting notes for \"{}\"", ctx.meeting),
            EDITING_TEMPLATE,
            true,
        );
    }
    add("capture note into inbox".to_string(), inbox_template, has_query);
    if !ctx.clocked_in_task.is_empty() {
        add(
            "capture note for the clocked-in task".to_string(),
            "c",
            has_query,
        );
    }
    if let Some(page) = &page {
        add(format!("capture \"{page}\" into inbox"), &format!("b{inbox_template}"), true);
        if is_goog {
            add(format!("capture \"{page}\" for ads doc review"), "bd", true);
            add(format!("capture \"{page}\" for ads fact"), "bf", true);
            add(format!("capture \"{page}\" for career reading"), "bc", true);
        }
    }
    if is_goog {
        add("capture ads fact".to_string(), "f", true);
    }
    if ctx.meeting.is_empty() {
        add(
            "capture meeting notes for unknown meeting".to_string(),
            EDITING_TEMPLATE,
            true,
        );
    }

    tracing::debug!(category, items = items.len(), "built capture items");
    let mut result = AlfredResult::new(items);
    result.variables = Variables {
        browser_state: ctx.browser_state.clone(),
        meeting: ctx.meeting.clone(),
        clocked_in_task: ctx.clocked_in_task.clone(),
        ..Variables::default()
    };
    Ok(result)
}

fn capture_item(title: String, template: &str, valid: bool, query: &str) -> Item {
    let subtitle = if template == EDITING_TEMPLATE {
        "continue editing"
    } else {
        "finish immediately"
    };
    Item::new(title)
        .with_subtitle(subtitle)
        .with_arg(query)
        .with_valid(valid)
        .with_variables(Variables {
            action: "capture".to_string(),
            arg: template.to_string(),
            ..Variables::default()
        })
}
