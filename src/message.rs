use crate::core::constants::MESSAGE_DELAY;
use crate::core::{message_or_fallback, MessageSource};
use std::time::Duration;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Resolve after `delay` using a one-shot window timer.
pub async fn sleep(delay: Duration) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                &resolve,
                delay.as_millis() as i32,
            );
        }
    });
    _ = JsFuture::from(promise).await;
}

/// Compose the celebratory message after a short "sealing" pause.
/// Always yields a non-empty string.
pub async fn compose_message(source: &dyn MessageSource, name: &str) -> String {
    sleep(MESSAGE_DELAY).await;
    let mut rng = rand::thread_rng();
    message_or_fallback(source, name, &mut rng)
}
