pub mod error;

pub use error::LoaderError;
