mod navbar;
mod postal_search;

pub use self::{navbar::*, postal_search::*};
