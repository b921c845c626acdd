use std::time::Duration;

use crate::browser::Browser;

/// Origin used for shareable links, set at build time. When unset the
/// origin of the page serving the app is used.
pub const PUBLIC_ORIGIN: Option<&str> = option_env!("PUBLIC_ORIGIN");

/// How long the copy button shows its "Copied!" state.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// Delay between closing the invite modal and the test navigation, so the
/// close renders before the route changes.
pub const TEST_NAVIGATION_DELAY: Duration = Duration::from_millis(100);

/// Product name shown in the footer of the invitation email preview.
pub const PRODUCT_NAME: &str = "AI Itinerary";

/// Origin to prefix invite links with, without a trailing slash.
pub fn invite_origin(browser: &dyn Browser) -> String {
    if let Some(origin) = PUBLIC_ORIGIN {
        return origin.trim_end_matches('/').to_string();
    }

    match browser.origin() {
        Ok(origin) => origin.trim_end_matches('/').to_string(),
        Err(error) => {
            tracing::warn!(%error, "could not read page origin for invite link");
            String::new()
        }
    }
}
