//! Network collaborators: the two record endpoints and the description API.

pub mod describe;
pub mod http;
pub mod source;
