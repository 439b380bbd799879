//! Test support.

mod server;

pub(crate) use server::StubServer;
