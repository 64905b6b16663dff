use crate::moves::magic::precompute::{MagicTableSeed, generate_magic_tables};
use crate::moves::magic::structs::MagicTables;

#[cfg(feature = "deterministic_magic")]
const MAGIC_SEED: u64 = 0xC0FF_EE00_D15E_A5E5;

fn seed() -> MagicTableSeed {
    #[cfg(feature = "deterministic_magic")]
    {
        MagicTableSeed::Fixed(MAGIC_SEED)
    }
    #[cfg(not(feature = "deterministic_magic"))]
    {
        MagicTableSeed::Random
    }
}

/// Returns the process-wide magic-bitboard tables, building them on first call.
///
/// The `load_magic` feature is reserved for deserializing a prebuilt table from a
/// shipped binary asset; no such asset is part of this tree, so both paths
/// currently build the tables in-process. `deterministic_magic` pins the search
/// seed so the resulting magics (and therefore table layout) are stable across runs.
pub fn load_magic_tables() -> MagicTables {
    generate_magic_tables(seed()).expect("failed to generate magic bitboard tables")
}
