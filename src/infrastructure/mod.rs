// Holiday calendar sources
pub mod holidays;
