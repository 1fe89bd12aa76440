//! Single-active toggling for mission/vision statements.

use cms_db::models::mission_vision::{CreateMissionVision, UpdateMissionVision};
use cms_db::repositories::MissionVisionRepo;
use sqlx::PgPool;

async fn create(pool: &PgPool, kind: &str, content: &str, status: Option<&str>) -> i64 {
    MissionVisionRepo::create(
        pool,
        &CreateMissionVision {
            kind: kind.to_string(),
            content: content.to_string(),
            author_name: None,
            status: status.map(str::to_string),
        },
    )
    .await
    .unwrap()
    .id
}

async fn active_ids(pool: &PgPool, kind: &str) -> Vec<i64> {
    MissionVisionRepo::list(pool, Some("active"))
        .await
        .unwrap()
        .into_iter()
        .filter(|row| row.kind == kind)
        .map(|row| row.id)
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_new_statements_default_inactive(pool: PgPool) {
    create(&pool, "mission", "First", None).await;
    assert!(active_ids(&pool, "mission").await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_toggle_on_deactivates_others_of_same_kind(pool: PgPool) {
    let a = create(&pool, "mission", "A", Some("active")).await;
    let b = create(&pool, "mission", "B", None).await;
    let v = create(&pool, "vision", "V", Some("active")).await;

    let row = MissionVisionRepo::toggle(&pool, b, true).await.unwrap().unwrap();
    assert_eq!(row.status, "active");

    assert_eq!(active_ids(&pool, "mission").await, vec![b]);
    assert_eq!(active_ids(&pool, "vision").await, vec![v]);

    let a_row = MissionVisionRepo::find_by_id(&pool, a).await.unwrap().unwrap();
    assert_eq!(a_row.status, "inactive");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_toggle_off_only_touches_target(pool: PgPool) {
    let a = create(&pool, "vision", "A", Some("active")).await;

    let row = MissionVisionRepo::toggle(&pool, a, false).await.unwrap().unwrap();
    assert_eq!(row.status, "inactive");
    assert!(active_ids(&pool, "vision").await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_toggle_missing_row_returns_none(pool: PgPool) {
    assert!(MissionVisionRepo::toggle(&pool, 999_999, true)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_active_replaces_previous_active(pool: PgPool) {
    let first = create(&pool, "mission", "First", Some("active")).await;
    let second = create(&pool, "mission", "Second", Some("active")).await;

    assert_eq!(active_ids(&pool, "mission").await, vec![second]);
    let first_row = MissionVisionRepo::find_by_id(&pool, first).await.unwrap().unwrap();
    assert_eq!(first_row.status, "inactive");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_moving_active_row_to_other_kind(pool: PgPool) {
    let vision = create(&pool, "vision", "Old vision", Some("active")).await;
    let moved = create(&pool, "mission", "Actually a vision", Some("active")).await;

    let row = MissionVisionRepo::update(
        &pool,
        moved,
        &UpdateMissionVision {
            kind: Some("vision".to_string()),
            content: "Actually a vision".to_string(),
            status: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(row.kind, "vision");
    assert_eq!(row.status, "active");
    assert_eq!(active_ids(&pool, "vision").await, vec![moved]);
    assert!(active_ids(&pool, "mission").await.is_empty());

    let old = MissionVisionRepo::find_by_id(&pool, vision).await.unwrap().unwrap();
    assert_eq!(old.status, "inactive");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_toggles_leave_one_active(pool: PgPool) {
    let mut ids = Vec::new();
    for i in 0..6 {
        ids.push(create(&pool, "mission", &format!("Statement {i}"), None).await);
    }

    let handles: Vec<_> = ids
        .iter()
        .map(|&id| {
            let pool = pool.clone();
            tokio::spawn(async move { MissionVisionRepo::toggle(&pool, id, true).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap().unwrap();
    }

    assert_eq!(active_ids(&pool, "mission").await.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_active_creates_on_empty_kind(pool: PgPool) {
    for round in 0..5 {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    MissionVisionRepo::create(
                        &pool,
                        &CreateMissionVision {
                            kind: "vision".to_string(),
                            content: format!("Round {round} draft {i}"),
                            author_name: None,
                            status: Some("active".to_string()),
                        },
                    )
                    .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(active_ids(&pool, "vision").await.len(), 1);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_cross_kind_updates_complete(pool: PgPool) {
    for round in 0..10 {
        let mission = create(&pool, "mission", &format!("Mission {round}"), Some("active")).await;
        let vision = create(&pool, "vision", &format!("Vision {round}"), Some("active")).await;

        let swap = |id: i64, to: &'static str| {
            let pool = pool.clone();
            tokio::spawn(async move {
                MissionVisionRepo::update(
                    &pool,
                    id,
                    &UpdateMissionVision {
                        kind: Some(to.to_string()),
                        content: format!("Moved to {to}"),
                        status: Some("active".to_string()),
                    },
                )
                .await
            })
        };
        let to_vision = swap(mission, "vision");
        let to_mission = swap(vision, "mission");

        to_vision.await.unwrap().unwrap().unwrap();
        to_mission.await.unwrap().unwrap().unwrap();

        assert_eq!(active_ids(&pool, "mission").await.len(), 1);
        assert_eq!(active_ids(&pool, "vision").await.len(), 1);
    }
}
