//! Command implementations.

pub mod people;
pub mod relate;

pub use self::people::execute_people;
pub use self::relate::execute_relate;
