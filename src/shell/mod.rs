// Composition root for the records service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the dataset store and the record service.
// - Expose the HTTP router, GraphQL endpoint included.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
