mod locator;
mod tracking;

#[derive(Debug, Clone, Copy, Default)]
pub enum Page {
    #[default]
    Locator,
    Tracking,
}

impl Page {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Locator => "/",
            Self::Tracking => "/tracking",
        }
    }
}

pub use self::{locator::*, tracking::*};
