//! Entity models shared between the admin server and the API client
//!
//! Database derives (`FromRow`, `Type`) are gated behind the `db` feature so
//! non-server consumers do not pull in sqlx.

pub mod attendance;
pub mod group;
pub mod interest;
pub mod member;
pub mod sync;

pub use attendance::{AttendanceRecord, EventType, MonthlyAttendance};
pub use group::{
    Group, GroupMemberRow, GroupType, GroupWithMemberCount, MemberParticipation,
    ParticipationDetail, ParticipationRole,
};
pub use interest::{InterestArea, InterestDetail, MemberInterest};
pub use member::{Member, MemberStatus, MemberSummary, MemberUpsert};
pub use sync::SyncReport;
