mod credential;
mod not_found;

pub use credential::*;
pub use not_found::*;
