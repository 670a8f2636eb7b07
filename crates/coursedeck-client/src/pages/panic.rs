//! Crash report page.
//!
//! A panic leaves the deck in an unknown state, so the hook records what
//! happened and reloads into `/panic`, where the report is shown.

use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

const CRASH_REPORT_KEY: &str = "coursedeck-crash-report";

/// What the reader was doing when the client panicked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanicReport {
    pub message: String,
    /// `file:line:column` of the panic, when known.
    pub location: Option<String>,
    /// Path that was open, e.g. `/course`.
    pub path: Option<String>,
}

impl PanicReport {
    fn from_info(info: &std::panic::PanicHookInfo<'_>, path: Option<String>) -> Self {
        let message = info
            .payload()
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| info.to_string());
        Self {
            message,
            location: info
                .location()
                .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column())),
            path,
        }
    }

    pub fn load() -> Option<Self> {
        LocalStorage::get(CRASH_REPORT_KEY).ok()
    }

    pub fn save(&self) -> bool {
        LocalStorage::set(CRASH_REPORT_KEY, self).is_ok()
    }

    pub fn discard() {
        LocalStorage::delete(CRASH_REPORT_KEY);
    }

    /// Plain-text form shown on the page.
    pub fn details(&self) -> String {
        let mut text = self.message.clone();
        if let Some(location) = &self.location {
            text.push_str("\n  at ");
            text.push_str(location);
        }
        if let Some(path) = &self.path {
            text.push_str("\n  while viewing ");
            text.push_str(path);
        }
        text
    }
}

/// Installs the panic hook: console output first, then the stored report
/// and a reload into the crash page.
pub fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);

        let Some(window) = web_sys::window() else {
            return;
        };
        let path = window.location().pathname().ok();
        // A panic on the crash page itself must not loop.
        if path.as_deref() == Some("/panic") {
            return;
        }
        PanicReport::from_info(info, path).save();
        let _ = window.location().set_pathname("/panic");
    }));
}

#[function_component(PanicPage)]
pub fn panic_page() -> Html {
    let report = use_state(PanicReport::load);

    let on_dismiss = {
        let report = report.clone();
        Callback::from(move |_: MouseEvent| {
            PanicReport::discard();
            report.set(None);
        })
    };

    let back_to = (*report)
        .as_ref()
        .and_then(|r| r.path.as_deref())
        .and_then(Route::recognize)
        .filter(|route| *route != Route::Panic)
        .unwrap_or(Route::Home);

    html! {
        <main class="page panic-page">
            <h1>{ "The course stopped unexpectedly" }</h1>
            if let Some(report) = &*report {
                <>
                    <pre class="panic-details">{ report.details() }</pre>
                    <button onclick={on_dismiss} class="btn-secondary">{ "Dismiss report" }</button>
                </>
            } else {
                <p>{ "There is no crash report to show." }</p>
            }
            <Link<Route> to={back_to} classes="btn-primary">{ "Reopen the course" }</Link<Route>>
        </main>
    }
}
