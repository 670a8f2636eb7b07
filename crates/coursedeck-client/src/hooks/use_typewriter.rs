//! Typewriter effect hook.

use coursedeck_core::Typewriter;
use gloo::timers::callback::Interval;
use yew::prelude::*;

/// Visible part of a typewriter line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypedText {
    pub text: String,
    pub finished: bool,
}

/// Types `text` out one character every `speed_ms`.
///
/// Restarts from an empty line whenever `text` or `speed_ms` change, so a
/// page that is shown again replays its heading.
#[hook]
pub fn use_typewriter(text: AttrValue, speed_ms: u32) -> TypedText {
    let typed = use_state(TypedText::default);

    {
        let typed = typed.clone();
        use_effect_with((text, speed_ms), move |(text, speed_ms)| {
            let mut typewriter = Typewriter::new(text.as_str(), *speed_ms);
            typed.set(TypedText {
                text: String::new(),
                finished: typewriter.is_finished(),
            });

            let interval = Interval::new(*speed_ms, move || {
                if typewriter.is_finished() {
                    return;
                }
                let text = typewriter.tick().unwrap_or_default().to_string();
                typed.set(TypedText {
                    text,
                    finished: typewriter.is_finished(),
                });
            });

            move || drop(interval)
        });
    }

    (*typed).clone()
}
