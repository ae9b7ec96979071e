pub mod bmhs;
pub mod ca;
pub mod hc;
