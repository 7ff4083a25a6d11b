use crate::{
    coord::{self, Move},
    frame::{self, Frame, FrameError},
    model::Board,
    render::{self, Style}
};
use futures::stream::{Stream, StreamExt};
use std::{
    fmt,
    io::{self, Write}
};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

const QUIT: &str = "quit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    /// Dials out and plays white, moving first.
    Connector,
    /// Accepts one peer and plays black.
    Listener
}

impl Role {
    /// Any argument starting with `b` hosts; everything else connects.
    pub fn from_arg(arg: &str) -> Role {
        if arg.starts_with('b') {
            Role::Listener
        } else {
            Role::Connector
        }
    }
    pub fn opponent_name(self) -> &'static str {
        match self {
            Role::Connector => "Black",
            Role::Listener => "White"
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Role::Connector => write!(f, "connector"),
            Role::Listener => write!(f, "listener")
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    AwaitingLocalMove,
    AwaitingRemoteMove,
    Terminated
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    LocalQuit,
    PeerQuit
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("peer")]
    Frame(#[from] FrameError),
    #[error("output")]
    Io(#[from] io::Error),
    #[error("session already terminated")]
    Terminated
}

/// One game against one peer.
///
/// `stream` carries frames to and from the peer, `input` yields the lines
/// typed by the local player and `output` receives prompts and board dumps.
pub struct Session<S, I, O> {
    role: Role,
    state: State,
    outcome: Option<Outcome>,
    board: Board,
    stream: S,
    input: I,
    output: O,
    style: Style
}

impl<S, I, O> Session<S, I, O>
where
    S: AsyncRead + AsyncWrite + Unpin,
    I: Stream<Item = io::Result<String>> + Unpin,
    O: Write
{
    pub fn new(role: Role, board: Board, stream: S, input: I, output: O, style: Style) -> Self {
        let state = match role {
            Role::Connector => State::AwaitingLocalMove,
            Role::Listener => State::AwaitingRemoteMove
        };
        Session {
            role,
            state,
            outcome: None,
            board,
            stream,
            input,
            output,
            style
        }
    }
    pub fn state(&self) -> State {
        self.state
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    /// Drives the session until either side quits.
    pub async fn run(&mut self) -> Result<Outcome, SessionError> {
        loop {
            if let Some(outcome) = self.step().await? {
                return Ok(outcome);
            }
        }
    }
    /// Performs one transition. Returns the outcome once the session ends.
    pub async fn step(&mut self) -> Result<Option<Outcome>, SessionError> {
        let next = match self.state {
            State::AwaitingLocalMove => self.local_turn().await?,
            State::AwaitingRemoteMove => self.remote_turn().await?,
            State::Terminated => return Err(SessionError::Terminated)
        };
        if next != self.state {
            debug!(role = %self.role, from = ?self.state, to = ?next, "state transition");
        }
        self.state = next;
        Ok(self.outcome)
    }
    async fn local_turn(&mut self) -> Result<State, SessionError> {
        write!(self.output, "Move: ")?;
        self.output.flush()?;
        let line = match self.input.next().await {
            Some(line) => line?,
            //End of input counts as quitting
            None => QUIT.to_string()
        };
        let line = line.trim();
        if line == QUIT {
            return self.quit(Outcome::LocalQuit, true).await;
        }
        match coord::parse_move(line) {
            Ok(mv) => {
                self.apply(mv)?;
                frame::write_frame(&mut self.stream, Frame::Move(mv)).await?;
                debug!(role = %self.role, %mv, "sent move");
                Ok(State::AwaitingRemoteMove)
            },
            Err(error) => {
                //Local retry, nothing is sent
                writeln!(self.output, "{}", error)?;
                Ok(State::AwaitingLocalMove)
            }
        }
    }
    async fn remote_turn(&mut self) -> Result<State, SessionError> {
        match frame::read_frame(&mut self.stream).await? {
            Frame::Move(mv) => {
                debug!(role = %self.role, %mv, "received move");
                self.apply(mv)?;
                writeln!(self.output, "{}'s move: {}", self.role.opponent_name(), mv)?;
                Ok(State::AwaitingLocalMove)
            },
            Frame::Quit => {
                writeln!(self.output, "{} quit", self.role.opponent_name())?;
                self.quit(Outcome::PeerQuit, false).await
            }
        }
    }
    fn apply(&mut self, mv: Move) -> Result<(), SessionError> {
        self.board.apply(mv);
        self.output.write_all(render::render(&self.board, self.style).as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
    async fn quit(&mut self, outcome: Outcome, notify: bool) -> Result<State, SessionError> {
        if notify {
            frame::write_frame(&mut self.stream, Frame::Quit).await?;
        }
        //Peer may already be gone
        if let Err(error) = self.stream.shutdown().await {
            debug!(role = %self.role, %error, "shutdown failed");
        }
        info!(role = %self.role, ?outcome, "session terminated");
        self.outcome = Some(outcome);
        Ok(State::Terminated)
    }
}
