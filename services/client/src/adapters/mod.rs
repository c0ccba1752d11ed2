pub mod http;
pub mod token_file;

pub use http::HttpBackend;
pub use token_file::TokenFile;
