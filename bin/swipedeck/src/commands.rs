//! Line commands for the terminal front-end.

use sd_core::models::SwipeDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Swipe(SwipeDirection),
    Info,
    Stats,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "l" | "left" | "pass" => Some(Command::Swipe(SwipeDirection::Left)),
            "r" | "right" | "like" => Some(Command::Swipe(SwipeDirection::Right)),
            "i" | "info" => Some(Command::Info),
            "s" | "stats" => Some(Command::Stats),
            "h" | "help" | "?" => Some(Command::Help),
            "q" | "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailCommand {
    Next,
    Previous,
    /// 1-based, as typed.
    Goto(usize),
    ToggleLike,
    Back,
}

impl DetailCommand {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim().to_ascii_lowercase();
        let mut parts = line.split_whitespace();
        let command = match parts.next()? {
            "n" | "next" => DetailCommand::Next,
            "p" | "prev" | "previous" => DetailCommand::Previous,
            "g" | "go" => DetailCommand::Goto(parts.next()?.parse().ok()?),
            "t" | "toggle" => DetailCommand::ToggleLike,
            "b" | "back" | "q" => DetailCommand::Back,
            _ => return None,
        };
        parts.next().is_none().then_some(command)
    }
}

pub const HELP: &str = "\
commands:
  l, left     pass on the top card
  r, right    like the top card
  i, info     open the top card's details
  s, stats    show totals across all judged profiles
  q, quit     leave";

pub const DETAIL_HELP: &str = "\
details: n next photo | p previous photo | g <n> go to photo n | t toggle like | b back";
