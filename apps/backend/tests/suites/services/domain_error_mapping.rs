// Domain errors surface as the documented codes and statuses.

use actix_web::http::StatusCode;
use bowling_backend::{AppError, ErrorCode, GameService, Store};

#[test]
fn roll_rejections_map_to_codes() {
    let store = Store::new();
    let svc = GameService::new();
    let id = svc.create_game(&store, "Ada").unwrap().game.id;
    svc.record_roll(&store, id, 9, None).unwrap();

    let cases = [
        (12, ErrorCode::OutOfRange, StatusCode::BAD_REQUEST),
        (2, ErrorCode::PinsExceedStanding, StatusCode::BAD_REQUEST),
    ];
    for (pins, code, status) in cases {
        let err: AppError = svc.record_roll(&store, id, pins, None).unwrap_err().into();
        assert_eq!(err.code(), code);
        assert_eq!(err.status(), status);
    }
}

#[test]
fn lifecycle_errors_map_to_conflict_and_not_found() {
    let store = Store::new();
    let svc = GameService::new();
    let id = svc.create_game(&store, "Ada").unwrap().game.id;

    let err: AppError = svc.get_summary(&store, id).unwrap_err().into();
    assert_eq!(err.code(), ErrorCode::GameNotComplete);
    assert_eq!(err.status(), StatusCode::CONFLICT);

    let err: AppError = svc.record_roll(&store, id, 3, Some(7)).unwrap_err().into();
    assert_eq!(err.code(), ErrorCode::OptimisticLock);
    assert_eq!(err.status(), StatusCode::CONFLICT);

    for _ in 0..12 {
        svc.record_roll(&store, id, 10, None).unwrap();
    }
    let err: AppError = svc.record_roll(&store, id, 0, None).unwrap_err().into();
    assert_eq!(err.code(), ErrorCode::GameComplete);
    assert_eq!(err.status(), StatusCode::CONFLICT);

    let err: AppError = svc.get_state(&store, id + 1).unwrap_err().into();
    assert_eq!(err.code(), ErrorCode::GameNotFound);
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}
