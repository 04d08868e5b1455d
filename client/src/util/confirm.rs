//! Blocking confirmation prompt for destructive actions.

/// Ask the user to confirm; outside the browser every prompt is accepted.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        true
    }
}
