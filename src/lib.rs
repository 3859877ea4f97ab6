//! Random "adjective adjective animal" names drawn from word lists that are fetched once from the
//! asset host and cached under `~/.gfycat`.
//!
//! ```no_run
//! use gfycat::{Generator, Order};
//!
//! let generator = Generator::new().expect("unable to load word lists");
//! println!("{}", generator.generate_name());
//! println!("{}", generator.generate_name_order(Order::AnimalFirst));
//! println!("{}", generator.generate_name_fmt("%s-%s-%s"));
//! ```

pub mod cache;
pub mod configuration;
pub mod constants;
pub mod errors;
pub mod fetch;
pub mod names;
pub mod random;
pub mod version;

pub use cache::LocalCache;
pub use configuration::Configuration;
pub use errors::{Error, Result};
pub use fetch::{AssetFetcher, Fetcher};
pub use names::{Generator, Order};
pub use random::{LockedSource, RandomSource};
