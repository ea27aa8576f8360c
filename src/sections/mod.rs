//! Password analysis sections
//!
//! Each section computes one ingredient of the validation rules or the
//! strength score.

pub mod brute_force;
pub mod length;
pub mod variety;

pub use brute_force::{keyspace_size, BruteForceEstimate};
pub use length::{char_length, excess_length};
pub use variety::{combination_bonus, count_class_units, ClassUnits, UnitCounting};
