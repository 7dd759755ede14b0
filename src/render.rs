//! Text rendering of a game.
//!
//! ```text
//!                    -->               P1
//! -----------------------------------------
//! |    | 04 | 04 | 04 | 04 | 04 | 04 |    |
//! | 00 |-----------------------------| 00 |
//! |    | 04 | 04 | 04 | 04 | 04 | 04 |    |
//! -----------------------------------------
//!   P2               <--
//! Current turn: P1
//! ```
//!
//! Player one's pits run left to right along the top with their store on
//! the right; player two's run right to left along the bottom with their
//! store on the left.

use std::fmt;

use crate::core::{Game, Player};

const RULE: &str = "-----------------------------------------";

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.board();
        let top = board.pits(Player::PlayerOne);
        let bottom = board.pits(Player::PlayerTwo);

        writeln!(f, "                   -->               P1  ")?;
        writeln!(f, "{RULE}")?;
        write!(f, "|    |")?;
        for count in top {
            write!(f, " {count:02} |")?;
        }
        writeln!(f, "    |")?;
        writeln!(
            f,
            "| {:02} |-----------------------------| {:02} |",
            board.store(Player::PlayerTwo),
            board.store(Player::PlayerOne),
        )?;
        write!(f, "|    |")?;
        for count in bottom.iter().rev() {
            write!(f, " {count:02} |")?;
        }
        writeln!(f, "    |")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "  P2               <--                   ")?;
        writeln!(f, "Current turn: {}", self.turn())
    }
}
