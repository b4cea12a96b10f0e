//! Launcher script-filter output format
//!
//! The launcher treats the presence of a field as a signal, so every optional
//! field is omitted when empty instead of being emitted as `null` or `""`.

use serde::{Deserialize, Serialize};

/// One row in the launcher's result list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub uid: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub autocomplete: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Text>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub arg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Variables::is_empty")]
    pub variables: Variables,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    /// Whether selecting this item should be recorded in history
    #[serde(skip)]
    pub save: bool,
}

impl Item {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = uid.into();
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.arg = arg.into();
        self
    }

    pub fn with_autocomplete(mut self, autocomplete: impl Into<String>) -> Self {
        self.autocomplete = autocomplete.into();
        self
    }

    pub fn with_icon(mut self, icon: Option<Icon>) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }

    pub fn with_valid(mut self, valid: bool) -> Self {
        self.valid = Some(valid);
        self
    }

    pub fn with_text(mut self, text: Text) -> Self {
        self.text = Some(text);
        self
    }

    pub fn saveable(mut self) -> Self {
        self.save = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub path: String,
}

/// Text used for copy and large-type actions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Text {
    pub copy: String,
    #[serde(rename = "largetype")]
    pub large_type: String,
}

impl Text {
    pub fn both(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            copy: value.clone(),
            large_type: value,
        }
    }
}

/// Session variables handed back to the launcher workflow
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variables {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub browser_override: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub new_window: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub profile: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub browser_state: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub meeting: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub clocked_in_task: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub action: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub arg: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hist_item: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub query: String,
}

impl Variables {
    pub fn is_empty(&self) -> bool {
        *self == Variables::default()
    }
}

/// Complete script-filter response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlfredResult {
    pub items: Vec<Item>,
    #[serde(skip_serializing_if = "Variables::is_empty")]
    pub variables: Variables,
}

impl AlfredResult {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            variables: Variables::default(),
        }
    }

    /// Record each saveable item's own serialization in `hist_item`, so the
    /// workflow can hand it to `history add` when the item is chosen.
    pub fn attach_history_payloads(&mut self) -> serde_json::Result<()> {
        for item in self.items.iter_mut().filter(|item| item.save) {
            item.variables.hist_item = serde_json::to_string(item)?;
        }
        Ok(())
    }

    /// Compact JSON document for stdout
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Front browser tab as reported by OS automation
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BrowserState {
    pub url: String,
    pub title: String,
}

impl BrowserState {
    /// Decode the automation payload; empty or invalid input means no state.
    pub fn decode(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match serde_json::from_str::<BrowserState>(raw) {
            Ok(state) if !state.url.is_empty() => Some(state),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring undecodable browser state");
                None
            }
        }
    }
}

impl std::fmt::Display for BrowserState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.title.is_empty() {
            write!(f, "{}", self.url)
        } else {
            write!(f, "{}", self.title)
        }
    }
}
