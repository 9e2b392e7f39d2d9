pub mod dashboard;
pub mod teacher_approval;

pub use dashboard::DashboardPage;
pub use teacher_approval::TeacherApprovalPage;
