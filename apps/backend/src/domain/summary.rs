//! End-of-game summary: a structured breakdown plus a short narrative.

use serde::{Deserialize, Serialize};

use crate::domain::frames::Frame;
use crate::domain::rules::{MAX_SCORE, PINS};
use crate::domain::state::{GameId, GameState, PlayerId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSummary {
    pub frame: u8,
    /// Scorecard marks: `X` strike, `/` spare, `-` gutter, digits otherwise.
    pub marks: Vec<String>,
    pub score: Option<u16>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub owner: String,
    pub total_score: u16,
    pub strikes: usize,
    pub spares: usize,
    /// Three strikes in a row; a run of six counts twice.
    pub turkeys: usize,
    pub open_frames: usize,
    pub frames: Vec<FrameSummary>,
    pub rolls: Vec<u8>,
}

/// Build the structured summary. Callers check the game is over first.
pub fn summarize(state: &GameState) -> GameSummary {
    let pins = state.pins();
    let frames = state.frames();
    let cumulative = state.cumulative_scores();

    let frame_marks: Vec<Vec<String>> = frames.iter().map(marks).collect();
    let all_marks: Vec<&str> = frame_marks.iter().flatten().map(String::as_str).collect();

    GameSummary {
        game_id: state.id,
        player_id: state.player_id,
        owner: state.owner.clone(),
        total_score: cumulative.last().copied().unwrap_or(0),
        strikes: all_marks.iter().filter(|m| **m == "X").count(),
        spares: all_marks.iter().filter(|m| **m == "/").count(),
        turkeys: count_turkeys(&all_marks),
        open_frames: frames
            .iter()
            .filter(|f| f.is_complete && !f.is_strike && !f.is_spare)
            .count(),
        frames: frames
            .iter()
            .zip(frame_marks)
            .enumerate()
            .map(|(i, (frame, marks))| FrameSummary {
                frame: frame.frame_no,
                marks,
                score: cumulative.get(i).copied(),
            })
            .collect(),
        rolls: pins,
    }
}

/// Scorecard marks for one frame, tracking when the rack resets.
fn marks(frame: &Frame) -> Vec<String> {
    let mut out = Vec::with_capacity(frame.rolls.len());
    let mut first_on_rack: Option<u8> = None;

    for &pins in &frame.rolls {
        let mark = match first_on_rack {
            None if pins == PINS => "X".to_string(),
            None => {
                first_on_rack = Some(pins);
                digit(pins)
            }
            Some(first) => {
                first_on_rack = None;
                if u16::from(first) + u16::from(pins) == u16::from(PINS) {
                    "/".to_string()
                } else {
                    digit(pins)
                }
            }
        };
        out.push(mark);
    }

    out
}

fn digit(pins: u8) -> String {
    if pins == 0 {
        "-".to_string()
    } else {
        pins.to_string()
    }
}

fn count_turkeys(marks: &[&str]) -> usize {
    let mut turkeys = 0;
    let mut run = 0;
    for mark in marks {
        if *mark == "X" {
            run += 1;
            if run == 3 {
                turkeys += 1;
                run = 0;
            }
        } else {
            run = 0;
        }
    }
    turkeys
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Short narrative for the finished game.
pub fn render_text(summary: &GameSummary) -> String {
    let mut text = format!(
        "{} finished with {} points.",
        summary.owner, summary.total_score
    );

    if summary.total_score == MAX_SCORE {
        text.push_str(" A perfect game: twelve strikes in a row!");
        return text;
    }
    if summary.total_score == 0 {
        text.push_str(" Every ball found the gutter this time. Next game can only go up.");
        return text;
    }

    text.push_str(&format!(
        " The card shows {}, {} and {}.",
        plural(summary.strikes, "strike"),
        plural(summary.spares, "spare"),
        plural(summary.open_frames, "open frame"),
    ));

    if summary.turkeys > 0 {
        text.push_str(&format!(
            " That includes {}.",
            plural(summary.turkeys, "turkey")
        ));
    }

    if let Some((frame, points)) = best_frame(summary) {
        text.push_str(&format!(" Best frame: {frame}, worth {points} points."));
    }

    text
}

fn best_frame(summary: &GameSummary) -> Option<(u8, u16)> {
    let mut previous = 0;
    let mut best: Option<(u8, u16)> = None;
    for frame in &summary.frames {
        let running = frame.score?;
        let points = running - previous;
        previous = running;
        if best.map_or(true, |(_, b)| points > b) {
            best = Some((frame.frame, points));
        }
    }
    best
}
