//! User-facing notices and confirmations.
//!
//! Views never talk to the DOM for feedback themselves: errors and successes
//! go through [`notify_error`] / [`notify_info`], which render a toast at the
//! bottom of the screen, and destructive actions ask [`confirm`] first.

use std::fmt::Display;

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[derive(Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Reports a failed action as `"{context}: {error}"` and logs it to the console.
pub fn notify_error(context: &str, error: impl Display) {
    let message = format!("{}: {}", context, error);
    gloo_console::error!(message.clone());
    show_toast(&message, NoticeKind::Error);
}

pub fn notify_info(message: &str) {
    show_toast(message, NoticeKind::Info);
}

/// Asks the user to confirm; a missing window counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Injects a styled notice into the page and removes it after a few seconds.
/// Error notices stay twice as long.
fn show_toast(message: &str, kind: NoticeKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    // Text, not HTML: messages may carry server-provided content.
    toast.set_text_content(Some(message));
    let html_toast: HtmlElement = toast.unchecked_into();
    let background = match kind {
        NoticeKind::Info => "rgba(0, 0, 0, 0.8)",
        NoticeKind::Error => "rgba(183, 28, 28, 0.95)",
    };
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", background).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("max-width", "80vw").ok();

    let lifetime = match kind {
        NoticeKind::Info => 3_000,
        NoticeKind::Error => 6_000,
    };
    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(lifetime).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
