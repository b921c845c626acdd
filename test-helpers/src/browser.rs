//! A [`Browser`] that records calls instead of touching a window.

use std::cell::RefCell;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use trip_ui::browser::{Browser, BrowserError};
use trip_ui::invite::TripLocation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserCall {
    WriteText(String),
    FallbackCopy(String),
    OpenNewTab(String),
    /// Path and query of the navigation target.
    Navigate(String),
}

pub struct FakeBrowser {
    origin: String,
    href: String,
    calls: RefCell<Vec<BrowserCall>>,
    clipboard: RefCell<Option<String>>,
    clipboard_error: RefCell<Option<BrowserError>>,
    fallback_error: RefCell<Option<BrowserError>>,
}

impl FakeBrowser {
    pub fn new(origin: &str) -> Self {
        Self {
            origin: origin.to_string(),
            href: format!("{origin}/trip/{}", crate::TRIP_ID),
            calls: RefCell::new(Vec::new()),
            clipboard: RefCell::new(None),
            clipboard_error: RefCell::new(None),
            fallback_error: RefCell::new(None),
        }
    }

    /// Make every clipboard api write fail with `error`.
    pub fn reject_clipboard(&self, error: BrowserError) {
        *self.clipboard_error.borrow_mut() = Some(error);
    }

    /// Make the legacy copy path fail with `error`.
    pub fn fail_fallback(&self, error: BrowserError) {
        *self.fallback_error.borrow_mut() = Some(error);
    }

    pub fn calls(&self) -> Vec<BrowserCall> {
        self.calls.borrow().clone()
    }

    pub fn clipboard(&self) -> Option<String> {
        self.clipboard.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                BrowserCall::Navigate(target) => Some(target.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: BrowserCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl Browser for FakeBrowser {
    fn origin(&self) -> Result<String, BrowserError> {
        Ok(self.origin.clone())
    }

    fn current_href(&self) -> Result<String, BrowserError> {
        Ok(self.href.clone())
    }

    fn write_text(
        &self,
        text: &str,
    ) -> LocalBoxFuture<'static, Result<(), BrowserError>> {
        self.record(BrowserCall::WriteText(text.to_string()));
        let result = match self.clipboard_error.borrow().clone() {
            Some(error) => Err(error),
            None => {
                *self.clipboard.borrow_mut() = Some(text.to_string());
                Ok(())
            }
        };
        futures::future::ready(result).boxed_local()
    }

    fn fallback_copy(&self, text: &str) -> Result<(), BrowserError> {
        self.record(BrowserCall::FallbackCopy(text.to_string()));
        match self.fallback_error.borrow().clone() {
            Some(error) => Err(error),
            None => {
                *self.clipboard.borrow_mut() = Some(text.to_string());
                Ok(())
            }
        }
    }

    fn open_new_tab(&self, url: &str) -> Result<(), BrowserError> {
        self.record(BrowserCall::OpenNewTab(url.to_string()));
        Ok(())
    }

    fn navigate(&self, location: &TripLocation) -> Result<(), BrowserError> {
        self.record(BrowserCall::Navigate(location.to_string()));
        Ok(())
    }
}
