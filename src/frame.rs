use crate::coord::{self, Move, ParseError};
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

pub const FRAME_LEN: usize = 4;
const QUIT: &[u8; FRAME_LEN] = b"quit";

/// One unit of the wire protocol: four bytes, no length prefix or delimiter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    Move(Move),
    Quit
}

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("connection closed by peer")]
    Closed,
    #[error("malformed frame {bytes:?}")]
    Malformed {
        bytes: [u8; FRAME_LEN],
        source: ParseError
    },
    #[error(transparent)]
    Io(#[from] io::Error)
}

impl Frame {
    pub fn encode(self) -> [u8; FRAME_LEN] {
        match self {
            Frame::Move(mv) => mv.to_bytes(),
            Frame::Quit => *QUIT
        }
    }
    pub fn decode(bytes: [u8; FRAME_LEN]) -> Result<Frame, FrameError> {
        if &bytes == QUIT {
            return Ok(Frame::Quit);
        }
        let token = std::str::from_utf8(&bytes).map_err(|_| FrameError::Malformed {
            bytes,
            source: ParseError::Length
        })?;
        coord::parse_move(token)
            .map(Frame::Move)
            .map_err(|source| FrameError::Malformed { bytes, source })
    }
}

/// Waits for exactly one frame; a stream ending part-way through is `Closed`.
pub async fn read_frame<R>(reader: &mut R) -> Result<Frame, FrameError>
where
    R: AsyncRead + Unpin
{
    let mut buffer = [0u8; FRAME_LEN];
    match reader.read_exact(&mut buffer).await {
        Ok(_) => Frame::decode(buffer),
        Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => Err(FrameError::Closed),
        Err(error) => Err(FrameError::Io(error))
    }
}

pub async fn write_frame<W>(writer: &mut W, frame: Frame) -> Result<(), FrameError>
where
    W: AsyncWrite + Unpin
{
    writer.write_all(&frame.encode()).await?;
    writer.flush().await?;
    Ok(())
}
