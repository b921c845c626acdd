//! Browser capabilities used by the invite flow.
//!
//! Components never touch `web_sys` for clipboard or navigation directly.
//! They go through [`Browser`], which is provided by the
//! [`Environment`](crate::contexts::Environment) context so tests can swap
//! in a fake.

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};
use yew_router::navigator::Navigator;

use crate::Route;
use crate::invite::TripLocation;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrowserError {
    #[error("clipboard api is not available")]
    ClipboardUnavailable,
    #[error("clipboard write was rejected: {0}")]
    ClipboardRejected(String),
    #[error("no {0} available")]
    Missing(&'static str),
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("copy command was refused by the browser")]
    CopyCommandRefused,
    #[error("could not open a new tab: {0}")]
    WindowOpen(String),
    #[error("navigation needs a router")]
    NoRouter,
    #[error("navigation failed: {0}")]
    Navigation(String),
}

pub trait Browser {
    /// Origin of the current page, e.g. `https://example.com`.
    fn origin(&self) -> Result<String, BrowserError>;

    /// Full url of the current page.
    fn current_href(&self) -> Result<String, BrowserError>;

    /// Write text with the async clipboard api.
    fn write_text(
        &self,
        text: &str,
    ) -> LocalBoxFuture<'static, Result<(), BrowserError>>;

    /// Copy text through a temporary text field and the legacy copy
    /// command.
    fn fallback_copy(&self, text: &str) -> Result<(), BrowserError>;

    /// Open `url` in a new browsing context.
    fn open_new_tab(&self, url: &str) -> Result<(), BrowserError>;

    /// Client side navigation within the app.
    fn navigate(&self, location: &TripLocation) -> Result<(), BrowserError>;
}

/// [`Browser`] backed by the real window.
pub struct WebBrowser {
    navigator: Option<Navigator>,
}

impl WebBrowser {
    pub fn new(navigator: Option<Navigator>) -> Self {
        Self { navigator }
    }
}

fn window() -> Result<web_sys::Window, BrowserError> {
    web_sys::window().ok_or(BrowserError::Missing("window"))
}

fn describe(value: JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{value:?}"),
    }
}

fn dom_error(value: JsValue) -> BrowserError {
    BrowserError::Dom(describe(value))
}

/// `navigator.clipboard` is undefined outside secure contexts, which the
/// generated binding does not model, so look it up reflectively.
fn clipboard() -> Result<web_sys::Clipboard, BrowserError> {
    let navigator = window()?.navigator();
    js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .and_then(|value| value.dyn_into::<web_sys::Clipboard>().ok())
        .ok_or(BrowserError::ClipboardUnavailable)
}

impl Browser for WebBrowser {
    fn origin(&self) -> Result<String, BrowserError> {
        window()?.location().origin().map_err(dom_error)
    }

    fn current_href(&self) -> Result<String, BrowserError> {
        window()?.location().href().map_err(dom_error)
    }

    fn write_text(
        &self,
        text: &str,
    ) -> LocalBoxFuture<'static, Result<(), BrowserError>> {
        let promise = clipboard().map(|clipboard| clipboard.write_text(text));
        async move {
            JsFuture::from(promise?)
                .await
                .map(|_| ())
                .map_err(|e| BrowserError::ClipboardRejected(describe(e)))
        }
        .boxed_local()
    }

    fn fallback_copy(&self, text: &str) -> Result<(), BrowserError> {
        let document =
            window()?.document().ok_or(BrowserError::Missing("document"))?;
        let body = document.body().ok_or(BrowserError::Missing("body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(dom_error)?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| {
                BrowserError::Dom("created element is not a textarea".into())
            })?;
        textarea.set_value(text);
        textarea.set_attribute("readonly", "").map_err(dom_error)?;
        textarea
            .set_attribute(
                "style",
                "position: fixed; top: 0; left: 0; opacity: 0;",
            )
            .map_err(dom_error)?;

        body.append_child(&textarea).map_err(dom_error)?;
        textarea.select();

        let copied = match document.dyn_ref::<HtmlDocument>() {
            Some(html_document) => html_document.exec_command("copy"),
            None => Err(JsValue::from_str("document is not an html document")),
        };

        // The field goes away whether or not the copy worked.
        if let Err(e) = body.remove_child(&textarea) {
            tracing::warn!(
                "failed to remove fallback copy field: {}",
                describe(e)
            );
        }

        match copied {
            Ok(true) => Ok(()),
            Ok(false) => Err(BrowserError::CopyCommandRefused),
            Err(e) => Err(dom_error(e)),
        }
    }

    fn open_new_tab(&self, url: &str) -> Result<(), BrowserError> {
        let opened = window()?
            .open_with_url_and_target(url, "_blank")
            .map_err(|e| BrowserError::WindowOpen(describe(e)))?;
        match opened {
            Some(_) => Ok(()),
            None => Err(BrowserError::WindowOpen(
                "blocked by the browser".into(),
            )),
        }
    }

    fn navigate(&self, location: &TripLocation) -> Result<(), BrowserError> {
        let navigator =
            self.navigator.as_ref().ok_or(BrowserError::NoRouter)?;
        let route = Route::Trip {
            id: location.trip_id.clone(),
        };

        if location.query.is_empty() {
            navigator.push(&route);
        } else {
            navigator
                .push_with_query(&route, &location.query)
                .map_err(|e| BrowserError::Navigation(e.to_string()))?;
        }

        if let Ok(window) = window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        Ok(())
    }
}
