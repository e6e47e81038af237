//! Per-view state and lifetime
//!
//! A [`View`] owns its fetched data exclusively. Loads and write actions run
//! inside the view's [`ViewScope`]; unmounting (or dropping) the view cancels
//! anything still in flight and late results are discarded.

use std::future::Future;
use std::sync::Arc;

use crmdesk_domain::{CrmError, Result};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::notify::{Notification, Notifier};

/// Loading flag plus the last successfully fetched data
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<T> {
    pub loading: bool,
    pub data: T,
}

impl<T: Default> Default for ViewState<T> {
    fn default() -> Self {
        Self { loading: true, data: T::default() }
    }
}

/// Cancellation scope tied to a view's lifetime
#[derive(Debug, Default)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle that can unmount the view from elsewhere.
    pub fn handle(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn is_mounted(&self) -> bool {
        !self.token.is_cancelled()
    }

    pub fn unmount(&self) {
        self.token.cancel();
    }

    /// Run `fut` unless the scope is (or becomes) cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`CrmError::Cancelled`] when the view unmounts first, otherwise
    /// whatever `fut` returns.
    pub async fn run<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::select! {
            biased;
            () = self.token.cancelled() => Err(CrmError::Cancelled),
            result = fut => result,
        }
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// A fetch-then-render unit
pub struct View<T> {
    name: &'static str,
    state: ViewState<T>,
    scope: ViewScope,
    notifier: Arc<dyn Notifier>,
}

impl<T: Default> View<T> {
    pub fn new(name: &'static str, notifier: Arc<dyn Notifier>) -> Self {
        Self { name, state: ViewState::default(), scope: ViewScope::new(), notifier }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn data(&self) -> &T {
        &self.state.data
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    /// Fetch and store the result.
    ///
    /// On failure the previous data is kept and one error toast is raised.
    /// A cancelled load changes nothing and raises nothing. Returns whether
    /// new data was stored.
    pub async fn load<F>(&mut self, fetch: F) -> bool
    where
        F: Future<Output = Result<T>>,
    {
        self.state.loading = true;
        let result = self.scope.run(fetch).await;

        match result {
            Ok(data) => {
                self.state.data = data;
                self.state.loading = false;
                debug!(view = self.name, "view loaded");
                true
            }
            Err(CrmError::Cancelled) => {
                debug!(view = self.name, "load discarded after unmount");
                false
            }
            Err(err) => {
                self.state.loading = false;
                self.raise(&err);
                false
            }
        }
    }

    /// Run a write action.
    ///
    /// On success an optional confirmation toast is raised and the action's
    /// value returned; the caller then reloads. On failure one error toast is
    /// raised and the view's data is left untouched.
    pub async fn perform<R, F>(&mut self, action: F, confirmation: Option<&str>) -> Option<R>
    where
        F: Future<Output = Result<R>>,
    {
        match self.scope.run(action).await {
            Ok(value) => {
                if let Some(message) = confirmation {
                    self.notifier.notify(Notification::success(message));
                }
                Some(value)
            }
            Err(CrmError::Cancelled) => None,
            Err(err) => {
                self.raise(&err);
                None
            }
        }
    }

    /// Surface a locally produced error (e.g. validation) the same way as a
    /// failed request.
    pub fn reject(&self, err: &CrmError) {
        self.raise(err);
    }

    fn raise(&self, err: &CrmError) {
        warn!(view = self.name, kind = err.label(), error = %err, "view action failed");
        self.notifier.notify(Notification::error(err.user_message()));
    }
}
