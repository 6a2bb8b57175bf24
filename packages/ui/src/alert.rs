/// Blocking user-facing alert. A browser `alert()` on the web target; elsewhere the
/// message only goes to the log.
pub fn show_alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_ok() {
                return;
            }
        }
    }
    tracing::error!("{}", message);
}
