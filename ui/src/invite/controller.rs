use std::cell::RefCell;

use payloads::TripId;
use yew::Callback;

use super::{InviteAction, TripLocation, invite_link};
use crate::config::{COPY_FEEDBACK, TEST_NAVIGATION_DELAY};
use crate::contexts::Environment;
use crate::scheduler::ScheduledTask;

/// How the invite link reached the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Clipboard,
    Fallback,
    /// Both copy paths failed. The modal still shows "Copied!".
    FallbackFailed,
}

/// Operations behind the invite modal's buttons.
///
/// State changes go out through `dispatch`. Timers are owned here, so
/// dropping the controller (the modal unmounting, or the trip changing)
/// cancels anything still pending.
pub struct InviteController {
    env: Environment,
    trip_id: TripId,
    invite_link: String,
    dispatch: Callback<InviteAction>,
    copy_reset: RefCell<Option<ScheduledTask>>,
    pending_navigation: RefCell<Option<ScheduledTask>>,
}

impl InviteController {
    pub fn new(
        env: Environment,
        trip_id: TripId,
        origin: &str,
        dispatch: Callback<InviteAction>,
    ) -> Self {
        let invite_link = invite_link(origin, &trip_id);
        Self {
            env,
            trip_id,
            invite_link,
            dispatch,
            copy_reset: RefCell::new(None),
            pending_navigation: RefCell::new(None),
        }
    }

    pub fn invite_link(&self) -> &str {
        &self.invite_link
    }

    pub fn trip_id(&self) -> &TripId {
        &self.trip_id
    }

    /// Url of the page the modal is shown on, for the debug block.
    pub fn current_href(&self) -> String {
        self.env.browser.current_href().unwrap_or_else(|error| {
            tracing::debug!(%error, "could not read current url");
            String::new()
        })
    }

    /// Put the invite link on the clipboard, falling back to the legacy
    /// copy command, then show the confirmation for [`COPY_FEEDBACK`].
    /// Copying again restarts the confirmation timer.
    pub async fn copy_link(&self) -> CopyOutcome {
        let outcome = match self.env.browser.write_text(&self.invite_link).await
        {
            Ok(()) => {
                tracing::debug!(
                    link = %self.invite_link,
                    trip_id = %self.trip_id,
                    "copied invite link"
                );
                CopyOutcome::Clipboard
            }
            Err(error) => {
                tracing::warn!(%error, "clipboard write failed, using fallback");
                match self.env.browser.fallback_copy(&self.invite_link) {
                    Ok(()) => {
                        tracing::debug!(
                            link = %self.invite_link,
                            "copied invite link (fallback)"
                        );
                        CopyOutcome::Fallback
                    }
                    Err(error) => {
                        tracing::error!(%error, "fallback copy failed");
                        CopyOutcome::FallbackFailed
                    }
                }
            }
        };

        self.dispatch.emit(InviteAction::Copied);

        let dispatch = self.dispatch.clone();
        let reset = self.env.scheduler.schedule(
            COPY_FEEDBACK,
            Box::new(move || dispatch.emit(InviteAction::CopyFeedbackExpired)),
        );
        *self.copy_reset.borrow_mut() = Some(reset);

        outcome
    }

    /// Open the invite link in a new tab, leaving this session untouched.
    pub fn open_in_new_tab(&self) {
        tracing::debug!(link = %self.invite_link, "opening invite link in new tab");
        if let Err(error) = self.env.browser.open_new_tab(&self.invite_link) {
            tracing::error!(%error, "failed to open invite link");
        }
    }

    /// Close the modal, then after [`TEST_NAVIGATION_DELAY`] send this tab
    /// to the trip as a fresh recipient would see it.
    pub fn test_in_current_tab(&self, on_close: &Callback<()>) {
        let location = TripLocation::test(self.trip_id.clone());
        tracing::debug!(
            trip_id = %self.trip_id,
            from = %self.current_href(),
            to = %location,
            "testing invite flow in current tab"
        );

        on_close.emit(());

        let browser = self.env.browser.clone();
        let navigation = self.env.scheduler.schedule(
            TEST_NAVIGATION_DELAY,
            Box::new(move || {
                tracing::debug!(to = %location, "navigating to invite test");
                if let Err(error) = browser.navigate(&location) {
                    tracing::error!(%error, "invite test navigation failed");
                }
            }),
        );
        *self.pending_navigation.borrow_mut() = Some(navigation);
    }

    pub fn toggle_preview(&self) {
        self.dispatch.emit(InviteAction::TogglePreview);
    }
}
