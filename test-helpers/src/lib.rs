use std::cell::RefCell;
use std::rc::Rc;

use payloads::TripId;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, prelude::*};
use trip_ui::contexts::Environment;
use trip_ui::invite::{InviteAction, InviteController, InviteState};
use yew::prelude::{Callback, Reducible};

pub mod browser;
pub mod scheduler;

pub use browser::{BrowserCall, FakeBrowser};
pub use scheduler::ManualScheduler;

pub const ORIGIN: &str = "https://example.com";
pub const TRIP_ID: &str = "abc123";

/// Install a test-friendly subscriber. Later calls are no-ops.
pub fn init_test_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("error"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_test_writer();

    let _ = LogTracer::init();
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

pub fn trip_id() -> TripId {
    TripId::from(TRIP_ID)
}

/// A fake browser and a manual clock, wired together as an [`Environment`].
pub struct TestEnv {
    pub browser: Rc<FakeBrowser>,
    pub scheduler: Rc<ManualScheduler>,
}

impl TestEnv {
    pub fn new() -> Self {
        init_test_logging();
        Self {
            browser: Rc::new(FakeBrowser::new(ORIGIN)),
            scheduler: Rc::new(ManualScheduler::new()),
        }
    }

    pub fn environment(&self) -> Environment {
        Environment::new(self.browser.clone(), self.scheduler.clone())
    }

    /// A controller for `trip_id` whose state changes land in the returned
    /// [`RecordedState`].
    pub fn controller(
        &self,
        trip_id: TripId,
    ) -> (InviteController, RecordedState) {
        let state = RecordedState::default();
        let controller = InviteController::new(
            self.environment(),
            trip_id,
            ORIGIN,
            state.callback(),
        );
        (controller, state)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies dispatched actions to an [`InviteState`] the way `use_reducer`
/// would.
#[derive(Clone, Default)]
pub struct RecordedState {
    state: Rc<RefCell<Rc<InviteState>>>,
    actions: Rc<RefCell<Vec<InviteAction>>>,
}

impl RecordedState {
    pub fn callback(&self) -> Callback<InviteAction> {
        let this = self.clone();
        Callback::from(move |action: InviteAction| {
            this.actions.borrow_mut().push(action);
            let current = this.state.borrow().clone();
            *this.state.borrow_mut() = current.reduce(action);
        })
    }

    pub fn current(&self) -> InviteState {
        (**self.state.borrow()).clone()
    }

    pub fn actions(&self) -> Vec<InviteAction> {
        self.actions.borrow().clone()
    }
}

/// Records how often a close callback fired.
#[derive(Clone, Default)]
pub struct CloseCounter(Rc<RefCell<usize>>);

impl CloseCounter {
    pub fn callback(&self) -> Callback<()> {
        let count = self.0.clone();
        Callback::from(move |()| *count.borrow_mut() += 1)
    }

    pub fn count(&self) -> usize {
        *self.0.borrow()
    }
}
