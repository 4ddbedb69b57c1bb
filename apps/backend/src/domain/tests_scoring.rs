use crate::domain::frames::derive_frames;
use crate::domain::scoring::{cumulative_scores, frame_score, total_score};
use crate::domain::state::GameState;

fn cumulative(pins: &[u8]) -> Vec<u16> {
    cumulative_scores(pins, &derive_frames(pins))
}

fn play(pins: &[i64]) -> GameState {
    let mut state = GameState::new(1, 1, "bowler");
    for &p in pins {
        state.record_roll(p).unwrap();
    }
    state
}

#[test]
fn perfect_game_scores_300() {
    let state = play(&[10; 12]);
    assert!(state.is_game_over());
    assert_eq!(state.total_score(), 300);
    assert_eq!(
        state.cumulative_scores(),
        vec![30, 60, 90, 120, 150, 180, 210, 240, 270, 300]
    );
}

#[test]
fn all_fives_score_150() {
    let state = play(&[5; 21]);
    assert!(state.is_game_over());
    assert_eq!(state.total_score(), 150);
}

#[test]
fn gutter_game_scores_zero_and_ends_on_20th_ball() {
    let mut state = play(&[0; 19]);
    assert!(!state.is_game_over());
    state.record_roll(0).unwrap();
    assert!(state.is_game_over());
    assert_eq!(state.total_score(), 0);
    assert_eq!(state.cumulative_scores().len(), 10);
}

#[test]
fn reference_game_intermediate_totals() {
    let state = play(&[10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1]);
    assert!(state.is_game_over());
    assert_eq!(
        state.cumulative_scores(),
        vec![20, 39, 48, 66, 74, 84, 90, 120, 148, 167]
    );
    assert_eq!(state.total_score(), 167);
}

#[test]
fn strike_is_pending_until_two_more_rolls() {
    assert_eq!(cumulative(&[10]), Vec::<u16>::new());
    assert_eq!(cumulative(&[10, 3]), Vec::<u16>::new());
    assert_eq!(cumulative(&[10, 3, 4]), vec![17, 24]);
}

#[test]
fn spare_is_pending_until_next_roll() {
    assert_eq!(cumulative(&[6, 4]), Vec::<u16>::new());
    assert_eq!(cumulative(&[6, 4, 5]), vec![15]);
}

#[test]
fn cumulative_stops_at_first_pending_frame() {
    // Frame 3 is in progress, so frame 2 still waits on its second bonus ball.
    let pins = [10, 10, 3];
    let frames = derive_frames(&pins);
    assert_eq!(frame_score(&pins, &frames[0]), Some(23));
    assert_eq!(frame_score(&pins, &frames[1]), None);
    assert_eq!(cumulative(&pins), vec![23]);
}

#[test]
fn tenth_frame_counts_only_its_own_rolls() {
    let mut pins = vec![0u8; 18];
    pins.extend([10, 10, 10]);
    let frames = derive_frames(&pins);
    assert_eq!(frame_score(&pins, &frames[9]), Some(30));
}

#[test]
fn total_is_zero_before_anything_settles() {
    assert_eq!(total_score(&[]), 0);
    assert_eq!(total_score(&cumulative(&[10])), 0);
}
