pub mod dictionary;
pub mod dom;
pub mod error;
pub mod fetcher;
pub mod lookup;
pub mod render;
pub mod types;

pub use dictionary::OnlineDictionary;
pub use error::{FetchError, LookupError, ParseError};
pub use fetcher::PageFetcher;
pub use types::{Definition, Entry};
