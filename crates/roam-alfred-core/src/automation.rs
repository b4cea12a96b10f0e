//! Session state looked up from the desktop
//!
//! Every lookup is best effort: a failing or hanging helper is logged and
//! reported as an empty string, never as an error.

use std::io::{Read, Write};
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use wait_timeout::ChildExt;

use crate::alfred::Variables;
use crate::error::{RoamError, Result};

pub const BROWSER_STATE_VAR: &str = "browser_state";
pub const MEETING_VAR: &str = "meeting";
pub const CLOCKED_IN_TASK_VAR: &str = "clocked_in_task";

/// JXA script printing the frontmost browser tab as `{"url","title"}` JSON.
const FRONT_TAB_SCRIPT: &str = r#"
const frontmostAppName = Application("System Events").applicationProcesses.where({frontmost: true}).name()[0];
const frontmostApp = Application(frontmostAppName);
const chromiumVariants = ["Google Chrome", "Chromium"];
const webkitVariants = ["Safari", "Webkit"];
let tab = null;
if (chromiumVariants.some(name => frontmostAppName.startsWith(name))) {
  tab = frontmostApp.windows[0].activeTab;
} else if (webkitVariants.some(name => frontmostAppName.startsWith(name))) {
  tab = frontmostApp.documents[0];
} else {
  throw new Error("You need a supported browser as your frontmost app");
}
JSON.stringify({url: tab.url(), title: tab.name()});
"#;

/// Source of desktop session state. Empty strings mean "unavailable".
pub trait Automation {
    /// Front browser tab as raw JSON
    fn browser_state(&self) -> String;

    /// `"yes"` when the editor has a running clock
    fn clocked_in_task(&self) -> String;

    /// Title of the current meeting
    fn meeting(&self) -> String;
}

/// Lookups through `osascript` and `emacsclient`.
#[derive(Debug, Clone)]
pub struct OsAutomation {
    timeout: Duration,
}

impl OsAutomation {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Automation for OsAutomation {
    fn browser_state(&self) -> String {
        match run_with_timeout(
            "osascript",
            &["-l", "JavaScript"],
            Some(FRONT_TAB_SCRIPT),
            self.timeout,
        ) {
            Ok(output) => output.trim().to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "browser state lookup failed");
                String::new()
            }
        }
    }

    fn clocked_in_task(&self) -> String {
        match run_with_timeout("emacsclient", &["-e", "(org-clock-is-active)"], None, self.timeout)
        {
            Ok(output) if output.trim().is_empty() || output.starts_with("nil") => String::new(),
            Ok(_) => "yes".to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "clock lookup failed");
                String::new()
            }
        }
    }

    fn meeting(&self) -> String {
        // No desktop source for meetings; the launcher passes it in the environment.
        String::new()
    }
}

/// Run `program` to completion within `timeout`, returning its stdout.
///
/// Output pipes are drained on reader threads while the child runs. A child
/// still running at the deadline is killed and reaped.
pub fn run_with_timeout(
    program: &str,
    args: &[&str],
    input: Option<&str>,
    timeout: Duration,
) -> Result<String> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| RoamError::automation(program, e))?;

    let stdout_reader = child.stdout.take().map(drain);
    let stderr_reader = child.stderr.take().map(drain);

    if let (Some(input), Some(mut stdin)) = (input, child.stdin.take()) {
        if let Err(e) = stdin.write_all(input.as_bytes()) {
            let _ = child.kill();
            let _ = child.wait();
            return Err(RoamError::automation(program, e));
        }
    }

    let status = match child
        .wait_timeout(timeout)
        .map_err(|e| RoamError::automation(program, e))?
    {
        Some(status) => status,
        None => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(RoamError::automation(
                program,
                format!("timed out after {}ms", timeout.as_millis()),
            ));
        }
    };

    let stdout = collect(stdout_reader);
    if !status.success() {
        let stderr = collect(stderr_reader);
        return Err(RoamError::automation(
            program,
            format!("{}: {}", status, stderr.trim()),
        ));
    }

    tracing::debug!(program, bytes = stdout.len(), "automation call finished");
    Ok(stdout)
}

fn drain(mut pipe: impl Read + Send + 'static) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn collect(reader: Option<JoinHandle<String>>) -> String {
    reader
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default()
}

/// Resolve the session variables, preferring values set in the process
/// environment by the launcher.
pub fn session_variables(automation: &dyn Automation) -> Variables {
    session_variables_with(automation, |name| std::env::var(name).ok())
}

/// Like [`session_variables`] with an explicit environment lookup.
///
/// A variable that is present but empty still overrides the lookup.
pub fn session_variables_with(
    automation: &dyn Automation,
    env: impl Fn(&str) -> Option<String>,
) -> Variables {
    Variables {
        browser_state: env(BROWSER_STATE_VAR).unwrap_or_else(|| automation.browser_state()),
        meeting: env(MEETING_VAR).unwrap_or_else(|| automation.meeting()),
        clocked_in_task: env(CLOCKED_IN_TASK_VAR).unwrap_or_else(|| automation.clocked_in_task()),
        ..Variables::default()
    }
}
