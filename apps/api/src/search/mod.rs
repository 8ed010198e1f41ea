// Profile discovery: search-provider client and the cached Profile Finder.

pub mod finder;
pub mod serpapi;
