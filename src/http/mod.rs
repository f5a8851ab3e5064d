//! Request generation: header sets, the HTTP client seam, and the producer loop.
mod client;
pub mod header;
mod producer;


pub use client::{HttpClient, ReqwestClient};
pub use header::{HeaderMode, HeaderSet, build_header};
pub use producer::{PUT_BODY, RequestProducer};
