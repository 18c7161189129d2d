// Wellbeing dashboard - Core Library
//
// Transport-free building blocks shared by the API client and the web UI:
// request descriptors, base URL handling, the endpoint table and routes.

pub mod config;
pub mod endpoints;
pub mod models;
pub mod routes;
pub mod url;

pub use config::*;
pub use endpoints::SearchPlan;
pub use models::*;
pub use routes::*;
pub use url::*;
