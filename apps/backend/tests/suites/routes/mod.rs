pub mod extractor_game_id;
pub mod handler_games_if_match;
pub mod trace_headers;
pub mod validated_json;
