mod locate_device;
mod refresh_markers;


pub use self::{locate_device::*, refresh_markers::*};
