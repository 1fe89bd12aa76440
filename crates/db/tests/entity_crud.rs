//! Integration tests for the repository layer against a real database:
//! - Create/read/update/delete round trips
//! - Defaults bound from the vocabularies
//! - Unique and check constraints
//! - Faculty deletion clearing references

use assert_matches::assert_matches;
use cms_db::models::about::UpsertAbout;
use cms_db::models::academic_calendar::CalendarEntryInput;
use cms_db::models::announcement::{CreateAnnouncement, UpdateAnnouncement};
use cms_db::models::faculty::CreateFaculty;
use cms_db::models::history::CreateHistoryEntry;
use cms_db::models::library::LibraryItemInput;
use cms_db::models::news_event::CreateNewsEvent;
use cms_db::models::policy::CreatePolicy;
use cms_db::models::staff::CreateStaff;
use cms_db::repositories::{
    AboutRepo, AcademicCalendarRepo, AnnouncementRepo, FacultyRepo, HistoryRepo, LibraryRepo,
    NewsEventRepo, PolicyRepo, StaffRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_announcement(headline: &str) -> CreateAnnouncement {
    CreateAnnouncement {
        headline: headline.to_string(),
        description: "Body".to_string(),
        author_id: Some(1),
        author_name: Some("Registrar".to_string()),
        category: None,
        status: None,
    }
}

fn new_faculty(name: &str) -> CreateFaculty {
    CreateFaculty {
        name: name.to_string(),
        description: "Faculty description".to_string(),
        dean_name: None,
        contact_email: None,
        phone: None,
        location: None,
        established_year: Some(1990),
        author_id: Some(1),
        author_name: None,
        status: None,
    }
}

fn new_staff(staff_id: &str, email: &str) -> CreateStaff {
    CreateStaff {
        staff_id: staff_id.to_string(),
        name: "Jane Doe".to_string(),
        email: email.to_string(),
        password: "unused-here".to_string(),
        department: Some("Physics".to_string()),
        phone: None,
        role: None,
        office_location: None,
    }
}

fn new_news_event(headline: &str, event_time: Option<chrono::DateTime<chrono::Utc>>) -> CreateNewsEvent {
    CreateNewsEvent {
        headline: headline.to_string(),
        description: "Details".to_string(),
        event_time,
        location: None,
        kind: None,
        author_id: Some(1),
        author_name: None,
        status: None,
    }
}

fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505") && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Announcements
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_announcement_defaults_and_round_trip(pool: PgPool) {
    let created = AnnouncementRepo::create(&pool, &new_announcement("Exams"))
        .await
        .unwrap();
    assert_eq!(created.status, "active");
    assert_eq!(created.category, "General");

    let fetched = AnnouncementRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("row should exist");
    assert_eq!(fetched.headline, "Exams");
    assert_eq!(fetched.description, "Body");
    assert_eq!(fetched.author_id, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_announcement_update_keeps_status_when_omitted(pool: PgPool) {
    let mut input = new_announcement("Draft notice");
    input.status = Some("draft".to_string());
    let created = AnnouncementRepo::create(&pool, &input).await.unwrap();

    let update = UpdateAnnouncement {
        headline: "Final notice".to_string(),
        description: "New body".to_string(),
        category: Some("Exams".to_string()),
        status: None,
    };
    let updated = AnnouncementRepo::update(&pool, created.id, &update)
        .await
        .unwrap()
        .expect("row should exist");

    assert_eq!(updated.headline, "Final notice");
    assert_eq!(updated.category, "Exams");
    assert_eq!(updated.status, "draft");
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_announcement_list_filters_by_status(pool: PgPool) {
    AnnouncementRepo::create(&pool, &new_announcement("A")).await.unwrap();
    let mut archived = new_announcement("B");
    archived.status = Some("archived".to_string());
    AnnouncementRepo::create(&pool, &archived).await.unwrap();

    let all = AnnouncementRepo::list(&pool, None).await.unwrap();
    assert_eq!(all.len(), 2);

    let active = AnnouncementRepo::list(&pool, Some("active")).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].headline, "A");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_and_delete_missing_rows(pool: PgPool) {
    let update = UpdateAnnouncement {
        headline: "x".to_string(),
        description: "y".to_string(),
        category: None,
        status: None,
    };
    assert!(AnnouncementRepo::update(&pool, 999_999, &update)
        .await
        .unwrap()
        .is_none());
    assert!(!AnnouncementRepo::delete(&pool, 999_999).await.unwrap());
    assert!(NewsEventRepo::delete(&pool, 999_999).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// News/events
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_news_events_order_by_event_time_with_undated_last(pool: PgPool) {
    let early = chrono::Utc::now() - chrono::Duration::days(10);
    let late = chrono::Utc::now() + chrono::Duration::days(10);

    NewsEventRepo::create(&pool, &new_news_event("undated", None), None)
        .await
        .unwrap();
    NewsEventRepo::create(&pool, &new_news_event("early", Some(early)), None)
        .await
        .unwrap();
    NewsEventRepo::create(&pool, &new_news_event("late", Some(late)), None)
        .await
        .unwrap();

    let rows = NewsEventRepo::list(&pool, None).await.unwrap();
    let headlines: Vec<&str> = rows.iter().map(|r| r.headline.as_str()).collect();
    assert_eq!(headlines, ["late", "early", "undated"]);
    assert!(rows.iter().all(|r| r.kind == "event"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_news_event_image_path_kept_when_update_has_none(pool: PgPool) {
    let created = NewsEventRepo::create(
        &pool,
        &new_news_event("With image", None),
        Some("/uploads/news-events/news_1_abcd1234.png"),
    )
    .await
    .unwrap();

    let update = cms_db::models::news_event::UpdateNewsEvent {
        headline: "Renamed".to_string(),
        description: "Details".to_string(),
        event_time: None,
        location: Some("Main hall".to_string()),
        kind: Some("news".to_string()),
        status: None,
    };
    let updated = NewsEventRepo::update(&pool, created.id, &update, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        updated.image_path.as_deref(),
        Some("/uploads/news-events/news_1_abcd1234.png")
    );
    assert_eq!(updated.kind, "news");

    let removed = NewsEventRepo::delete(&pool, created.id).await.unwrap();
    assert_eq!(
        removed,
        Some(Some("/uploads/news-events/news_1_abcd1234.png".to_string()))
    );
}

// ---------------------------------------------------------------------------
// Staff
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_staff_duplicate_staff_id_violates_unique(pool: PgPool) {
    StaffRepo::create(&pool, &new_staff("S001", "a@uni.edu"), "hash")
        .await
        .unwrap();

    let err = StaffRepo::create(&pool, &new_staff("S001", "b@uni.edu"), "hash")
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err, "uq_staff_staff_id"), "got {err:?}");

    let err = StaffRepo::create(&pool, &new_staff("S002", "a@uni.edu"), "hash")
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err, "uq_staff_email"), "got {err:?}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_staff_credentials_and_password_update(pool: PgPool) {
    let staff = StaffRepo::create(&pool, &new_staff("S010", "c@uni.edu"), "old-hash")
        .await
        .unwrap();
    assert_eq!(staff.role, "STAFF");
    assert_eq!(staff.status, "active");

    let creds = StaffRepo::find_credentials_by_staff_id(&pool, "S010")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(creds.id, staff.id);
    assert_eq!(creds.password_hash, "old-hash");

    assert!(StaffRepo::update_password(&pool, staff.id, "new-hash").await.unwrap());
    let creds = StaffRepo::find_credentials(&pool, staff.id).await.unwrap().unwrap();
    assert_eq!(creds.password_hash, "new-hash");

    let photo = StaffRepo::set_photo(&pool, staff.id, "/uploads/staff/profile_1_x.png")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(photo.profile_photo.as_deref(), Some("/uploads/staff/profile_1_x.png"));

    let by_login = StaffRepo::find_by_staff_id(&pool, "S010").await.unwrap();
    assert_matches!(by_login, Some(s) if s.email == "c@uni.edu");
}

// ---------------------------------------------------------------------------
// Faculties and library
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_faculty_clears_library_reference(pool: PgPool) {
    let faculty = FacultyRepo::create(&pool, &new_faculty("Science"), None)
        .await
        .unwrap();

    let item = LibraryRepo::create(
        &pool,
        &LibraryItemInput {
            title: "Mechanics".to_string(),
            kind: None,
            author: Some("Newton".to_string()),
            isbn: None,
            year: Some(1687),
            course: None,
            subject: Some("Physics".to_string()),
            faculty_id: Some(faculty.id),
            faculty_name: Some("Science".to_string()),
            level: "Undergraduate".to_string(),
            description: None,
            created_by: None,
            status: None,
        },
        Some("/uploads/library/library_1_abcd.pdf"),
    )
    .await
    .unwrap();
    assert_eq!(item.kind, "books");

    assert_eq!(FacultyRepo::delete(&pool, faculty.id).await.unwrap(), Some(None));

    let item = LibraryRepo::find_by_id(&pool, item.id).await.unwrap().unwrap();
    assert_eq!(item.faculty_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_library_unknown_faculty_is_fk_violation(pool: PgPool) {
    let err = LibraryRepo::create(
        &pool,
        &LibraryItemInput {
            title: "Orphan".to_string(),
            kind: None,
            author: None,
            isbn: None,
            year: None,
            course: None,
            subject: None,
            faculty_id: Some(424_242),
            faculty_name: None,
            level: "Postgraduate".to_string(),
            description: None,
            created_by: None,
            status: None,
        },
        None,
    )
    .await
    .unwrap_err();

    assert_matches!(err, sqlx::Error::Database(ref e) if e.code().as_deref() == Some("23503"));
}

// ---------------------------------------------------------------------------
// Policies, history, about, calendar
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_policy_slug_is_unique(pool: PgPool) {
    let input = CreatePolicy {
        title: "Code of Conduct".to_string(),
        slug: None,
        content: None,
        author_id: None,
        author_name: None,
        status: None,
    };
    let policy = PolicyRepo::create(&pool, &input, "code-of-conduct").await.unwrap();
    assert_eq!(policy.status, "inactive");

    let err = PolicyRepo::create(&pool, &input, "code-of-conduct")
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err, "uq_policies_slug"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_history_set_status_is_not_exclusive(pool: PgPool) {
    let mut ids = Vec::new();
    for year in ["1950", "1975"] {
        let entry = HistoryRepo::create(
            &pool,
            &CreateHistoryEntry {
                year: year.to_string(),
                title: format!("Founded {year}"),
                description: "Milestone".to_string(),
                author_name: None,
                status: None,
            },
        )
        .await
        .unwrap();
        ids.push(entry.id);
    }

    for id in &ids {
        HistoryRepo::set_status(&pool, *id, "active").await.unwrap().unwrap();
    }

    let active = HistoryRepo::list(&pool, Some("active")).await.unwrap();
    assert_eq!(active.len(), 2);
    assert_eq!(active[0].year, "1950");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_about_upsert_is_singleton(pool: PgPool) {
    assert!(AboutRepo::get(&pool).await.unwrap().is_none());

    AboutRepo::upsert(
        &pool,
        &UpsertAbout {
            mission: Some("Teach".to_string()),
            vision: None,
        },
    )
    .await
    .unwrap();
    let about = AboutRepo::upsert(
        &pool,
        &UpsertAbout {
            mission: Some("Teach well".to_string()),
            vision: Some("Lead".to_string()),
        },
    )
    .await
    .unwrap();

    assert_eq!(about.id, 1);
    assert_eq!(about.mission.as_deref(), Some("Teach well"));

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM about")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_calendar_range_check_rejects_inverted_dates(pool: PgPool) {
    let date = |s: &str| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
    let input = CalendarEntryInput {
        title: "Semester".to_string(),
        kind: None,
        start_date: Some(date("2025-09-01")),
        end_date: Some(date("2025-08-01")),
        description: None,
        status: None,
    };

    let err = AcademicCalendarRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(
        err,
        sqlx::Error::Database(ref e) if e.constraint() == Some("ck_academic_calendar_range")
    );

    let valid = CalendarEntryInput {
        end_date: Some(date("2025-12-15")),
        ..input
    };
    let entry = AcademicCalendarRepo::create(&pool, &valid).await.unwrap();
    assert_eq!(entry.kind, "Event");
    assert_eq!(entry.status, "active");
}
