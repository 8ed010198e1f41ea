// Candidate fit scoring: keyword tables and the two scorer backends.

pub mod fit_scoring;
pub mod keywords;
