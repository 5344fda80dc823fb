//! Static chemistry lookup tables.
//!
//! All tables are compile-time perfect-hash maps. Lookups never fail: unknown
//! atom types resolve to a zero radius and unknown residue names fall into the
//! "other" contact bucket.

pub mod polarity;
pub mod radii;
pub mod residues;
