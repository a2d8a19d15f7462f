pub mod book;
pub mod domain;
pub mod error;
pub mod rules;

pub use book::{AddressBook, Page, Pages, DEFAULT_PAGE_SIZE};
pub use domain::*;
pub use error::CoreError;
pub use rules::*;
