//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. List methods take an
//! optional status filter; `None` returns every row.

pub mod about_repo;
pub mod academic_calendar_repo;
pub mod affiliate_repo;
pub mod announcement_repo;
pub mod campus_repo;
pub mod faculty_repo;
pub mod history_repo;
pub mod leadership_repo;
pub mod library_repo;
pub mod mission_vision_repo;
pub mod news_event_repo;
pub mod policy_repo;
pub mod programme_repo;
pub mod staff_repo;
pub mod strategic_plan_repo;

pub use about_repo::AboutRepo;
pub use academic_calendar_repo::AcademicCalendarRepo;
pub use affiliate_repo::AffiliateRepo;
pub use announcement_repo::AnnouncementRepo;
pub use campus_repo::CampusRepo;
pub use faculty_repo::FacultyRepo;
pub use history_repo::HistoryRepo;
pub use leadership_repo::LeadershipRepo;
pub use library_repo::LibraryRepo;
pub use mission_vision_repo::MissionVisionRepo;
pub use news_event_repo::NewsEventRepo;
pub use policy_repo::PolicyRepo;
pub use programme_repo::ProgrammeRepo;
pub use staff_repo::StaffRepo;
pub use strategic_plan_repo::StrategicPlanRepo;
