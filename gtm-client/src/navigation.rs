//! Navigation epoch guard
//!
//! Each navigation bumps an epoch. A load started under an older epoch
//! finishes as [`ClientError::Stale`] so a late response can never replace
//! the data of the view the user is looking at now.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::loader::{load_route, RouteData};
use crate::routes::Route;
use crate::{BffClient, ClientError, ClientResult};

/// Proof of which navigation a request was started under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTicket {
    epoch: u64,
    route: Route,
}

impl NavTicket {
    pub fn route(&self) -> &Route {
        &self.route
    }
}

#[derive(Debug)]
struct NavState {
    epoch: AtomicU64,
    current: RwLock<Route>,
}

/// Current route plus the epoch guarding responses for it
#[derive(Debug, Clone)]
pub struct Navigator {
    state: Arc<NavState>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            state: Arc::new(NavState {
                epoch: AtomicU64::new(0),
                current: RwLock::new(initial),
            }),
        }
    }

    pub async fn current(&self) -> Route {
        *self.state.current.read().await
    }

    /// Switch to `route`; responses for earlier tickets become stale
    pub async fn navigate(&self, route: Route) -> NavTicket {
        let mut current = self.state.current.write().await;
        *current = route;
        let epoch = self.state.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        NavTicket { epoch, route }
    }

    pub fn is_current(&self, ticket: &NavTicket) -> bool {
        self.state.epoch.load(Ordering::SeqCst) == ticket.epoch
    }

    /// Pass `result` through only if no navigation happened since `ticket`
    pub fn accept<T>(&self, ticket: &NavTicket, result: ClientResult<T>) -> ClientResult<T> {
        if !self.is_current(ticket) {
            debug!("Discarding response for {}", ticket.route);
            return Err(ClientError::Stale);
        }
        result
    }

    /// Navigate and load the new route's data
    pub async fn open(&self, client: &BffClient, route: Route) -> ClientResult<RouteData> {
        let ticket = self.navigate(route).await;
        let data = load_route(client, &route).await;
        self.accept(&ticket, data)
    }
}
