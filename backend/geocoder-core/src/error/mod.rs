pub mod locator;

pub use locator::LocatorError;
