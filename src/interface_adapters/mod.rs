// Interface adapters: HTTP protocol, handlers and the outbound collaborators.

pub mod clients;
pub mod decoder;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
