//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod line_repo;
pub mod section_repo;
pub mod station_repo;

pub use line_repo::LineRepo;
pub use section_repo::SectionRepo;
pub use station_repo::StationRepo;
