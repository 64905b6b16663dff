use once_cell::sync::Lazy;

/// `KING_ATTACKS[sq]` = destinations reachable by a king on `sq`, computed once at
/// startup by stepping the eight compass offsets and discarding any that wrap a file.
pub static KING_ATTACKS: Lazy<[u64; 64]> = Lazy::new(compute_king_attacks);

fn compute_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    for sq in 0..64u8 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut attacks = 0u64;
        for dr in -1..=1i8 {
            for df in -1..=1i8 {
                if dr == 0 && df == 0 {
                    continue;
                }
                let nr = rank + dr;
                let nf = file + df;
                if (0..8).contains(&nr) && (0..8).contains(&nf) {
                    attacks |= 1u64 << (nr * 8 + nf);
                }
            }
        }
        table[sq as usize] = attacks;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_destinations() {
        assert_eq!(KING_ATTACKS[0].count_ones(), 3); // a1
    }

    #[test]
    fn center_has_eight_destinations() {
        assert_eq!(KING_ATTACKS[27].count_ones(), 8); // d4
    }

    #[test]
    fn never_wraps_a_file() {
        for sq in 0..64usize {
            let attacks = KING_ATTACKS[sq];
            for dest in 0..64u64 {
                if attacks & (1 << dest) != 0 {
                    let df = (dest as i8 % 8) - (sq as i8 % 8);
                    assert!(df.abs() <= 1);
                }
            }
        }
    }
}
