//! Value objects - Immutable objects defined by their attributes

mod attachment;
mod correlation_token;
mod occupation;

pub use attachment::FileAttachment;
pub use correlation_token::CorrelationToken;
pub use occupation::Occupation;
