// Service-level property tests: random legal play through GameService.

use bowling_backend::{GameService, Store};
use proptest::prelude::*;

use crate::common::proptest_prelude::proptest_prelude_config;

proptest! {
    #![proptest_config(proptest_prelude_config())]

    /// Playing the largest-or-scaled legal value each turn always finishes
    /// within 21 rolls, and the keypad bound is always accepted.
    #[test]
    fn prop_service_games_finish(draws in prop::collection::vec(any::<u8>(), 21)) {
        let store = Store::new();
        let svc = GameService::new();
        let id = svc.create_game(&store, "prop").unwrap().game.id;

        for draw in draws {
            let view = svc.get_state(&store, id).unwrap();
            let Some(max) = view.max_pins else { break };
            let pins = i64::from(draw % (max + 1));
            svc.record_roll(&store, id, pins, None).unwrap();
        }

        let view = svc.get_state(&store, id).unwrap();
        prop_assert!(view.game_over);
        prop_assert!(view.rolls <= 21 && view.rolls >= 11);
        prop_assert!(view.total_score <= 300);
        prop_assert_eq!(view.cumulative_scores.len(), 10);
    }

    /// One more pin than `maxPins` is always refused, and the game is unchanged.
    #[test]
    fn prop_over_max_is_rejected(draws in prop::collection::vec(any::<u8>(), 0..21)) {
        let store = Store::new();
        let svc = GameService::new();
        let id = svc.create_game(&store, "prop").unwrap().game.id;

        for draw in draws {
            let Some(max) = svc.get_state(&store, id).unwrap().max_pins else { break };
            svc.record_roll(&store, id, i64::from(draw % (max + 1)), None).unwrap();
        }

        let before = svc.get_state(&store, id).unwrap();
        let next = before.max_pins.map_or(0, |max| i64::from(max) + 1);
        prop_assert!(svc.record_roll(&store, id, next, None).is_err());
        prop_assert_eq!(svc.get_state(&store, id).unwrap(), before);
    }
}
