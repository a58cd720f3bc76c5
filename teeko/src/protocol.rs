use serde::{Deserialize, Serialize};

use crate::{Board, Piece};

/// Request for a bot to do something.
///
/// Requests are sent as one JSON object per line on the bot's stdin, and the
/// bot answers with one JSON value per line on its stdout.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Request to reset the bot's state for a new game, in which it plays `piece`.
    ///
    /// The response should be an [`Okay`].
    NewGame { piece: Piece },
    /// Request to play the next turn.
    ///
    /// The response should be a [`Move`](crate::Move) that is legal for the
    /// bot's piece on the given board. Whether it is a placement or a
    /// relocation follows from the [`Phase`](crate::Phase) of the board.
    PlayTurn { board: Board },
    /// The bot should shut down. There is no response.
    Bye,
}

/// Dummy struct for use in bot communication.
///
/// Used to signal an acknowledgement without data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Okay();
