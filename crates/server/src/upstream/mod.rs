mod http_source;
mod kind;
mod source;
mod static_source;

pub use http_source::HttpNumberSource;
pub use kind::NumberKind;
pub use source::{FetchError, NumberSource};
pub use static_source::StaticNumberSource;
