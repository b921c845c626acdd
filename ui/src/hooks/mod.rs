pub mod use_invite_controller;

pub use use_invite_controller::use_invite_controller;
