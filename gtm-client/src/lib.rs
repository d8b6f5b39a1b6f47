//! gtm-client - typed access to the GTM Kit backend-for-frontend
//!
//! The presentation layer talks to the service through [`BffClient`]. Each
//! project-scoped view is a [`Route`]; [`Navigator`] resolves the data a
//! route needs before it renders and discards responses that arrive after
//! the user has moved on.

pub mod client;
pub mod error;
pub mod loader;
pub mod navigation;
pub mod requests;
pub mod routes;

pub use client::BffClient;
pub use error::{ClientError, ClientResult};
pub use loader::{load_route, RouteData, ViewData};
pub use navigation::{NavTicket, Navigator};
pub use routes::{sidebar, NavItem, Route, View};
