pub mod icons;
pub mod invite_modal;
pub mod modal;

pub use invite_modal::{InviteModal, InviteModalProps};
pub use modal::{Modal, ModalProps};
