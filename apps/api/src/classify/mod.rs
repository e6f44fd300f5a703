//! Skill extraction and domain classification over raw resume text.

pub mod domains;
pub mod skills;
