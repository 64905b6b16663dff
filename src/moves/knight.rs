use once_cell::sync::Lazy;

/// `KNIGHT_ATTACKS[sq]` = destinations reachable by a knight on `sq`, computed once at
/// startup from the eight knight step offsets, discarding any that wrap a file.
pub static KNIGHT_ATTACKS: Lazy<[u64; 64]> = Lazy::new(compute_knight_attacks);

const KNIGHT_STEPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

fn compute_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    for sq in 0..64u8 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut attacks = 0u64;
        for &(dr, df) in &KNIGHT_STEPS {
            let nr = rank + dr;
            let nf = file + df;
            if (0..8).contains(&nr) && (0..8).contains(&nf) {
                attacks |= 1u64 << (nr * 8 + nf);
            }
        }
        table[sq as usize] = attacks;
    }
    table
}
