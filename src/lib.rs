//! Client for the folder endpoints of the [Document360](https://document360.com)
//! drive api. Folders can be listed, created, renamed and deleted, either
//! through standalone commands or through a [session](crate::session) that
//! remembers the last created folder.

pub mod client;
pub mod credentials;
pub mod error;
pub mod folder;
pub mod prelude;
pub mod response;
pub mod session;
