pub mod hh;
mod http;
pub mod superjob;

pub use hh::HhClient;
pub use superjob::SuperjobClient;
