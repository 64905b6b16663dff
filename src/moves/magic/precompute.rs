use crate::bitboard::BitboardExt;
use crate::moves::magic::attacks::{bishop_attacks_per_square, rook_attacks_per_square};
use crate::moves::magic::search::find_magic_number_for_square;
use crate::moves::magic::structs::{BishopMagicTables, MagicEntry, MagicTables, RookMagicTables};
use rand::{RngCore, SeedableRng, rngs::StdRng};

const FILE_A: u64 = 0x0101_0101_0101_0101;
const FILE_H: u64 = 0x8080_8080_8080_8080;
const RANK_1: u64 = 0x0000_0000_0000_00FF;
const RANK_8: u64 = 0xFF00_0000_0000_0000;
/// Board edges, excluded from every relevant-occupancy mask since a blocker sitting
/// on the edge never changes whether the ray continues past it.
const EDGES: u64 = FILE_A | FILE_H | RANK_1 | RANK_8;

/// How to seed the magic-number search's PRNG.
pub enum MagicTableSeed {
    /// Draw from the process entropy source; different tables on every run.
    Random,
    /// Fixed seed, for reproducible tables across runs (used by tests and by the
    /// `deterministic_magic` feature).
    Fixed(u64),
}

fn make_rng(seed: MagicTableSeed) -> StdRng {
    match seed {
        MagicTableSeed::Fixed(s) => StdRng::seed_from_u64(s),
        MagicTableSeed::Random => {
            let mut bytes = [0u8; 32];
            rand::rng().fill_bytes(&mut bytes);
            StdRng::from_seed(bytes)
        }
    }
}

/// Relevant-occupancy mask for a rook on `square`: every square a blocker could
/// occupy on the rook's rank/file rays, excluding the board edge on each ray
/// (a piece there can never be jumped, so it never changes the attack set).
fn rook_mask(square: usize) -> u64 {
    let full_ray = rook_attacks_per_square(square, 0);
    let rank = square / 8;
    let file = square % 8;
    let mut mask = full_ray;
    if rank != 0 {
        mask &= !RANK_1;
    }
    if rank != 7 {
        mask &= !RANK_8;
    }
    if file != 0 {
        mask &= !FILE_A;
    }
    if file != 7 {
        mask &= !FILE_H;
    }
    mask
}

/// Relevant-occupancy mask for a bishop on `square`: the diagonal rays, with the
/// board edge excluded (diagonals always terminate on an edge, which this removes
/// unconditionally since a diagonal never has an "own square on this edge" case
/// the way rook rays do).
fn bishop_mask(square: usize) -> u64 {
    bishop_attacks_per_square(square, 0) & !EDGES
}

fn build_entry(
    square: usize,
    mask: u64,
    attacks_fn: fn(usize, u64) -> u64,
    rng: &mut StdRng,
) -> Result<MagicEntry, String> {
    let popcount = mask.pop_count();
    let shift = 64 - popcount;
    let size = 1usize << popcount;

    let blockers: Vec<u64> = mask.subsets().collect();
    let attacks: Vec<u64> = blockers.iter().map(|&occ| attacks_fn(square, occ)).collect();
    debug_assert_eq!(blockers.len(), size);

    let magic = find_magic_number_for_square(&blockers, &attacks, shift, rng)?;

    let mut table = vec![0u64; size];
    for (&occ, &attack) in blockers.iter().zip(attacks.iter()) {
        let index = ((occ.wrapping_mul(magic)) >> shift) as usize;
        table[index] = attack;
    }

    Ok(MagicEntry {
        magic,
        shift,
        mask,
        table: table.into_boxed_slice(),
    })
}

/// Builds the rook and bishop magic-bitboard attack tables for every square from
/// scratch. This is the process-wide, one-time initialization path; callers should
/// go through `magic::loader::load_magic_tables` rather than calling this directly.
pub fn generate_magic_tables(seed: MagicTableSeed) -> Result<MagicTables, String> {
    let mut rng = make_rng(seed);

    let mut rook_entries = Vec::with_capacity(64);
    let mut bishop_entries = Vec::with_capacity(64);

    for square in 0..64usize {
        rook_entries.push(build_entry(
            square,
            rook_mask(square),
            rook_attacks_per_square,
            &mut rng,
        )?);
        bishop_entries.push(build_entry(
            square,
            bishop_mask(square),
            bishop_attacks_per_square,
            &mut rng,
        )?);
    }

    Ok(MagicTables {
        rook: RookMagicTables {
            entries: rook_entries,
        },
        bishop: BishopMagicTables {
            entries: bishop_entries,
        },
    })
}
