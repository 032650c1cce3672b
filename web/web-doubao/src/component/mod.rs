mod credential_form;
mod title;

pub use credential_form::*;
pub use title::*;
