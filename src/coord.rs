use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid Move")]
    Length,
    #[error("Invalid Letter")]
    Letter,
    #[error("Invalid Number")]
    Number
}

/// One of the 64 cells, stored as `rank * 8 + file`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }
    pub fn from_index(index: usize) -> Option<Square> {
        if index < 64 {
            Some(Square(index as u8))
        } else {
            None
        }
    }
    pub fn index(self) -> usize {
        self.0 as usize
    }
    pub fn file(self) -> u8 {
        self.0 % 8
    }
    pub fn rank(self) -> u8 {
        self.0 / 8
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, (b'1' + self.rank()) as char)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square
}

impl Move {
    /// Wire form, `<fromFile><fromRank><toFile><toRank>`.
    pub fn to_bytes(self) -> [u8; 4] {
        [
            b'a' + self.from.file(),
            b'1' + self.from.rank(),
            b'a' + self.to.file(),
            b'1' + self.to.rank()
        ]
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Decodes a two character token such as `e2`. The file must be `a`..=`h`,
/// the rank `1`..=`8`; nothing else is accepted.
pub fn parse_square(token: &str) -> Result<Square, ParseError> {
    let bytes = token.as_bytes();
    if bytes.len() != 2 {
        return Err(ParseError::Length);
    }
    let (letter, number) = (bytes[0], bytes[1]);
    if !(b'a'..=b'h').contains(&letter) {
        return Err(ParseError::Letter);
    }
    if !(b'1'..=b'8').contains(&number) {
        return Err(ParseError::Number);
    }
    Ok(Square((number - b'1') * 8 + (letter - b'a')))
}

pub fn is_valid_coordinate(token: &str) -> bool {
    parse_square(token).is_ok()
}

/// Splits a four character move token into its source and destination halves.
///
/// The token must be exactly four ASCII characters; callers check this first.
pub fn split_move(token: &str) -> (&str, &str) {
    token.split_at(2)
}

/// Parses a move token, locally typed or received from the peer.
pub fn parse_move(token: &str) -> Result<Move, ParseError> {
    if token.len() != 4 || !token.is_ascii() {
        return Err(ParseError::Length);
    }
    let (from, to) = split_move(token);
    Ok(Move {
        from: parse_square(from)?,
        to: parse_square(to)?
    })
}
