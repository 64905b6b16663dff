use super::fen_tables::{CHAR_TO_PC, PC_TO_CHAR};
use super::{Board, CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ, Color, EMPTY_SQ, Piece};
use crate::square::Square;

impl Board {
    /// Parses a standard six-field FEN string into `self`, replacing its contents
    /// entirely. On failure `self` is left untouched and a diagnostic is returned.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), String> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(format!("FEN must have at least 4 fields, got {}", fields.len()));
        }

        let mut piece_bb = [[0u64; 6]; 2];
        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(format!("FEN placement must have 8 ranks, got {}", ranks.len()));
        }

        for (rank_from_top, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_from_top as u8;
            let mut file = 0u8;
            for ch in rank_str.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(format!("invalid empty-run digit '{ch}' in FEN"));
                    }
                    file += skip as u8;
                } else {
                    if file >= 8 {
                        return Err(format!("rank '{rank_str}' overflows 8 files"));
                    }
                    let (piece, color) = CHAR_TO_PC[ch as usize]
                        .ok_or_else(|| format!("invalid piece glyph '{ch}' in FEN"))?;
                    let sq = Square::from_file_rank(file, rank);
                    piece_bb[color as usize][piece as usize] |= 1u64 << sq.index();
                    file += 1;
                }
            }
            if file != 8 {
                return Err(format!("rank '{rank_str}' does not sum to 8 files"));
            }
        }

        for color in [Color::White, Color::Black] {
            let mut seen = 0u64;
            for piece in 0..6 {
                let bb = piece_bb[color as usize][piece];
                if seen & bb != 0 {
                    return Err("FEN places two pieces on the same square".to_string());
                }
                seen |= bb;
            }
        }
        for piece in 0..6 {
            if piece_bb[0][piece] & piece_bb[1][piece] != 0 {
                return Err("FEN places two pieces on the same square".to_string());
            }
        }
        for color in [Color::White, Color::Black] {
            if piece_bb[color as usize][Piece::King as usize].count_ones() != 1 {
                return Err(format!("FEN must have exactly one {color:?} king"));
            }
        }

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(format!("invalid side-to-move field '{other}'")),
        };

        let mut castling_rights = 0u8;
        if fields[2] != "-" {
            for ch in fields[2].chars() {
                castling_rights |= match ch {
                    'K' => CASTLE_WK,
                    'Q' => CASTLE_WQ,
                    'k' => CASTLE_BK,
                    'q' => CASTLE_BQ,
                    other => return Err(format!("invalid castling glyph '{other}'")),
                };
            }
        }

        let en_passant = if fields[3] == "-" {
            None
        } else {
            Some(
                fields[3]
                    .parse::<Square>()
                    .map_err(|_| format!("invalid en-passant square '{}'", fields[3]))?,
            )
        };
        if let Some(ep) = en_passant {
            let expected_rank = if side_to_move == Color::White { 5 } else { 2 };
            if ep.rank() != expected_rank {
                return Err(format!("en-passant square '{ep}' is on the wrong rank for {side_to_move:?} to move"));
            }
        }

        let halfmove_clock = fields
            .get(4)
            .unwrap_or(&"0")
            .parse::<u32>()
            .map_err(|_| "invalid half-move clock field".to_string())?;
        let fullmove_number = fields
            .get(5)
            .unwrap_or(&"1")
            .parse::<u32>()
            .map_err(|_| "invalid full-move number field".to_string())?;

        // All fields validated; now commit.
        let mut board = Board::new_empty();
        for color in [Color::White, Color::Black] {
            for (piece_idx, &piece) in [
                Piece::Pawn,
                Piece::Knight,
                Piece::Bishop,
                Piece::Rook,
                Piece::Queen,
                Piece::King,
            ]
            .iter()
            .enumerate()
            {
                board.set_bb(color, piece, piece_bb[color as usize][piece_idx]);
            }
        }
        board.side_to_move = side_to_move;
        board.castling_rights = castling_rights;
        board.en_passant = en_passant;
        board.halfmove_clock = halfmove_clock;
        board.fullmove_number = fullmove_number;
        board.refresh_zobrist();

        *self = board;
        Ok(())
    }

    /// Serializes the current position to a standard six-field FEN string.
    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for rank_from_top in 0..8u8 {
            let rank = 7 - rank_from_top;
            let mut empty_run = 0u8;
            for file in 0..8u8 {
                let sq = Square::from_file_rank(file, rank);
                let idx = sq.index() as usize;
                if self.piece_on_sq[idx] == EMPTY_SQ {
                    empty_run += 1;
                    continue;
                }
                if empty_run > 0 {
                    placement.push((b'0' + empty_run) as char);
                    empty_run = 0;
                }
                let color = (self.piece_on_sq[idx] >> 3) & 1;
                let piece = self.piece_on_sq[idx] & 0b111;
                placement.push(PC_TO_CHAR[(color as usize) * 6 + piece as usize]);
            }
            if empty_run > 0 {
                placement.push((b'0' + empty_run) as char);
            }
            if rank_from_top != 7 {
                placement.push('/');
            }
        }

        let side = if self.side_to_move == Color::White { "w" } else { "b" };

        let mut castling = String::new();
        if self.castling_rights & CASTLE_WK != 0 {
            castling.push('K');
        }
        if self.castling_rights & CASTLE_WQ != 0 {
            castling.push('Q');
        }
        if self.castling_rights & CASTLE_BK != 0 {
            castling.push('k');
        }
        if self.castling_rights & CASTLE_BQ != 0 {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = match self.en_passant {
            Some(sq) => sq.to_string(),
            None => "-".to_string(),
        };

        format!(
            "{placement} {side} {castling} {ep} {} {}",
            self.halfmove_clock, self.fullmove_number
        )
    }
}
