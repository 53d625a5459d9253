pub mod graphql;
pub mod poller;
