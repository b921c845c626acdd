use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser::{Browser, WebBrowser};
use crate::scheduler::{Scheduler, TimeoutScheduler};

/// Browser capabilities and timers available to components.
///
/// The app runs against the real window. Provide a different value with
/// `ContextProvider<Environment>` to run components against fakes.
#[derive(Clone)]
pub struct Environment {
    pub browser: Rc<dyn Browser>,
    pub scheduler: Rc<dyn Scheduler>,
}

impl Environment {
    pub fn new(browser: Rc<dyn Browser>, scheduler: Rc<dyn Scheduler>) -> Self {
        Self { browser, scheduler }
    }

    pub fn web(navigator: Option<Navigator>) -> Self {
        Self::new(
            Rc::new(WebBrowser::new(navigator)),
            Rc::new(TimeoutScheduler),
        )
    }
}

impl PartialEq for Environment {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.browser), Rc::as_ptr(&other.browser))
            && std::ptr::addr_eq(
                Rc::as_ptr(&self.scheduler),
                Rc::as_ptr(&other.scheduler),
            )
    }
}

/// The provided environment, or the real browser when none is provided.
#[hook]
pub fn use_environment() -> Environment {
    let provided = use_context::<Environment>();
    let navigator = use_navigator();
    let web = use_memo(navigator, |navigator| {
        Environment::web(navigator.clone())
    });

    provided.unwrap_or_else(|| (*web).clone())
}
