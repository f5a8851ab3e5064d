mod adapters;
mod args;
mod config;
mod domain;
mod entry;
mod error;
mod http;
mod system;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
