use crate::model::{Board, Piece};
use serde::Serialize;

const WHITE: &str = "\x1b[37m";
const MAGENTA: &str = "\x1b[35m";
const BLUE: &str = "\x1b[34m";
const NORMAL: &str = "\x1b[m";

pub const DIRECTIONS: &str = "\
This chess program gives a starting board and allows for all
moves, legal and illegal. To make a move, specify from and to.
Moves must be formatted similar to \"a3\" where each move is a
lowercase character from a-h and each number is from 1-8.
Type \"quit\" to end the game.
";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Style {
    #[default]
    Ansi,
    Plain,
    Json
}

#[derive(Serialize)]
struct Snapshot {
    board: Vec<u8>,
    ranks: Vec<String>
}

impl Snapshot {
    fn from_board(board: &Board) -> Snapshot {
        Snapshot {
            board: board.cells().iter().map(|piece| piece.code()).collect(),
            ranks: board.cells().chunks(8).rev().map(
                |rank| rank.iter().map(|piece| piece.glyph()).collect()
            ).collect()
        }
    }
}

fn border() -> String {
    "---".repeat(8)
}

fn colour(piece: Piece) -> &'static str {
    if piece.is_white() {
        WHITE
    } else if piece.is_black() {
        MAGENTA
    } else {
        BLUE
    }
}

/// Board dump with rank 8 on the first line, so white's back rank is printed last.
pub fn render(board: &Board, style: Style) -> String {
    if style == Style::Json {
        //Snapshot only holds plain data
        return serde_json::to_string(&Snapshot::from_board(board))
            .unwrap_or_default() + "\n";
    }
    let mut out = border();
    out.push('\n');
    for rank in board.cells().chunks(8).rev() {
        for &piece in rank {
            if style == Style::Ansi {
                out.push_str(colour(piece));
            }
            out.push('|');
            out.push(piece.glyph());
            out.push('|');
        }
        if style == Style::Ansi {
            out.push_str(NORMAL);
        }
        out.push('\n');
    }
    out.push_str(&border());
    out.push('\n');
    out
}
