#[cfg(feature = "desktop")]
const APP_NAME: &str = "Storefront";

/// Raise an OS notification on desktop builds. Other platforms already show
/// the outcome in-app, so this does nothing there.
#[allow(unused_variables)]
pub fn send(title: &str, body: &str) {
    #[cfg(feature = "desktop")]
    {
        let shown = dioxus_sdk_notification::Notification::new()
            .app_name(APP_NAME.to_string())
            .summary(title.to_string())
            .body(body.to_string())
            .show();
        if let Err(e) = shown {
            tracing::warn!(error = %e, title, "Desktop notification failed");
        }
    }
}
