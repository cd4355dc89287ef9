//! EuroFX Feed Crate
//!
//! Turns the euro foreign exchange reference rate document (`eurofxref`)
//! into dated [`Snapshot`](eurofx_core::Snapshot)s, either from a local
//! bootstrap file or from the publisher over HTTP.
//!
//! The document is a sequence of nested `Cube` elements:
//!
//! ```text
//! <Cube>
//!   <Cube time="2010-07-14">
//!     <Cube currency="USD" rate="1.2703"/>
//!     <Cube currency="GBP" rate="0.8343"/>
//!   </Cube>
//!   ...
//! </Cube>
//! ```

pub mod errors;
pub mod loader;
pub mod parser;
pub mod provider;

pub use errors::FeedError;
pub use loader::load_file;
pub use parser::{parse_feed, parse_feed_str};
pub use provider::{EcbFeedClient, FeedSource, DEFAULT_FEED_URL};
