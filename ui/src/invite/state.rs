use std::rc::Rc;

use yew::prelude::*;

/// Local state of an invite modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InviteState {
    /// The copy button shows its confirmation.
    pub copied: bool,
    pub show_email_preview: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InviteAction {
    Copied,
    CopyFeedbackExpired,
    TogglePreview,
}

impl Reducible for InviteState {
    type Action = InviteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            InviteAction::Copied => next.copied = true,
            InviteAction::CopyFeedbackExpired => next.copied = false,
            InviteAction::TogglePreview => {
                next.show_email_preview = !next.show_email_preview;
            }
        }

        Rc::new(next)
    }
}
