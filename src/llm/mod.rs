pub mod api;

#[cfg(test)]
pub mod test_server;

pub use api::{
    build_prompt,
    fetch_example_sentence,
    DEFAULT_ENDPOINT,
};

#[cfg(test)]
pub use test_server::StubEndpoint;
