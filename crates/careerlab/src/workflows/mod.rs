pub mod coding;
pub mod registration;
pub mod resume;
