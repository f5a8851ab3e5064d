//! Core library for the `xffgen` CLI.
//!
//! `xffgen` fires a configurable number of HTTP GET/PUT requests at a target
//! host with a spoofed `x-forwarded-for` header, to exercise how a downstream
//! system treats client-supplied forwarding addresses. The library exposes
//! the CLI argument types, config loading, the header builder, and the
//! request producer with its injectable [`http::HttpClient`] seam.
pub mod args;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
