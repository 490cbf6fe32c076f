//! Runtime and mock directory server for block-list scenarios.
//!
//! Step functions are synchronous, so each scenario keeps one Tokio runtime
//! to drive `BlockListManager` calls and one Wiremock server standing in for
//! the user directory's REST API.

use std::cell::RefCell;
use std::future::Future;
use std::io;
use std::rc::Rc;

use rstest_bdd::Slot;
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

/// Runtime handle kept in the scenario state between steps.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    /// Wraps a freshly built runtime.
    pub fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    /// Drives `future` to completion on the shared runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Starts the runtime and the mock directory on first use and returns the
/// runtime.
///
/// # Errors
///
/// Returns an error if the Tokio runtime cannot be created.
pub fn ensure_runtime_and_server(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
) -> Result<SharedRuntime, io::Error> {
    if runtime.with_ref(|_| ()).is_none() {
        runtime.set(SharedRuntime::new(Runtime::new()?));
    }

    let shared_runtime = runtime
        .get()
        .ok_or_else(|| io::Error::other("runtime not initialised after set"))?;

    if server.with_ref(|_| ()).is_none() {
        server.set(shared_runtime.block_on(MockServer::start()));
    }

    Ok(shared_runtime)
}

/// Mounts directory endpoint `mocks` in order, starting the server if needed.
///
/// Earlier mounts take precedence when several mocks match a request.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
pub fn mount_all(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
    mocks: Vec<Mock>,
) -> Result<(), io::Error> {
    let shared_runtime = ensure_runtime_and_server(runtime, server)?;
    server
        .with_ref(|mock_server| {
            for mock in mocks {
                shared_runtime.block_on(mock.mount(mock_server));
            }
        })
        .ok_or_else(|| io::Error::other("mock server not initialised"))
}
