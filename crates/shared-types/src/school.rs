//! Records served by the school REST API.
//!
//! The API nests related records (an attendance row carries its student,
//! which carries its user) and is not consistent about which fields it
//! includes, so every struct decodes leniently: missing and `null` fields
//! fall back to their defaults and decimal fields accept either a JSON
//! number or a numeric string.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Collection endpoints
// ---------------------------------------------------------------------------

/// A collection endpoint of the REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Students,
    Teachers,
    Classes,
    Subjects,
    Attendance,
    Grades,
    Assignments,
}

impl Entity {
    pub const ALL: [Entity; 7] = [
        Entity::Students,
        Entity::Teachers,
        Entity::Classes,
        Entity::Subjects,
        Entity::Attendance,
        Entity::Grades,
        Entity::Assignments,
    ];

    /// Path relative to the API root, with the trailing slash Django expects.
    pub fn path(&self) -> &'static str {
        match self {
            Entity::Students => "/students/",
            Entity::Teachers => "/teachers/",
            Entity::Classes => "/classes/",
            Entity::Subjects => "/subjects/",
            Entity::Attendance => "/attendance/",
            Entity::Grades => "/grades/",
            Entity::Assignments => "/assignments/",
        }
    }

    /// Lowercase plural noun for log lines and empty-state copy.
    pub fn noun(&self) -> &'static str {
        match self {
            Entity::Students => "students",
            Entity::Teachers => "teachers",
            Entity::Classes => "classes",
            Entity::Subjects => "subjects",
            Entity::Attendance => "attendance records",
            Entity::Grades => "grades",
            Entity::Assignments => "assignments",
        }
    }
}

/// A list payload. The API returns either a paginated envelope
/// `{"count": .., "results": [..]}` or a bare array; both decode here.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Collection<T>(pub Vec<T>);

impl<T> Collection<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Collection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire<T> {
            Envelope { results: Vec<T> },
            Bare(Vec<T>),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Envelope { results } => Collection(results),
            Wire::Bare(items) => Collection(items),
        })
    }
}

// ---------------------------------------------------------------------------
// People
// ---------------------------------------------------------------------------

/// The user account nested inside student and teacher records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct PersonRef {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

impl PersonRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn initials(&self) -> String {
        initials(&self.first_name, &self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Student {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub user: PersonRef,
    #[serde(deserialize_with = "null_as_default")]
    pub student_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub grade_level: String,
    #[serde(deserialize_with = "null_as_default")]
    pub enrollment_date: String,
    pub parent_name: Option<String>,
    pub parent_phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Teacher {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub user: PersonRef,
    #[serde(deserialize_with = "null_as_default")]
    pub employee_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(deserialize_with = "null_as_default")]
    pub experience_years: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub hire_date: String,
    pub qualification: Option<String>,
}

// ---------------------------------------------------------------------------
// Curriculum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Subject {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub credits: i64,
}

impl Subject {
    /// "1 Credit" / "3 Credits".
    pub fn credits_label(&self) -> String {
        if self.credits == 1 {
            "1 Credit".to_string()
        } else {
            format!("{} Credits", self.credits)
        }
    }
}

/// A class section: a subject taught by a teacher to a group of students.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SchoolClass {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub subject: Option<Subject>,
    pub teacher: Option<Teacher>,
    pub room_number: Option<String>,
    pub schedule_time: Option<String>,
    pub schedule_days: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub max_capacity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub student_count: i64,
}

impl SchoolClass {
    pub fn subject_name(&self) -> &str {
        self.subject.as_ref().map(|s| s.name.as_str()).unwrap_or("")
    }

    pub fn teacher_name(&self) -> String {
        self.teacher
            .as_ref()
            .map(|t| t.user.full_name())
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Attendance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AttendanceStatus {
    #[serde(rename = "P")]
    Present,
    #[serde(rename = "A")]
    Absent,
    #[serde(rename = "L")]
    Late,
    #[serde(rename = "E")]
    Excused,
    #[default]
    #[serde(other)]
    Unknown,
}

impl AttendanceStatus {
    /// Options offered by the status filter, in display order.
    pub const FILTERABLE: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Late,
        AttendanceStatus::Excused,
    ];

    /// Single-letter wire code, also used as the `<select>` value.
    pub fn code(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "P",
            AttendanceStatus::Absent => "A",
            AttendanceStatus::Late => "L",
            AttendanceStatus::Excused => "E",
            AttendanceStatus::Unknown => "",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::FILTERABLE.into_iter().find(|s| s.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Excused => "Excused",
            AttendanceStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AttendanceRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub student: Option<Student>,
    pub class_session: Option<SchoolClass>,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: AttendanceStatus,
    pub marked_by: Option<PersonRef>,
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Grades
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Grade {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub student: Option<Student>,
    pub subject: Option<Subject>,
    #[serde(deserialize_with = "null_as_default")]
    pub assignment_name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub grade: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub max_grade: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub percentage: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub date_assigned: String,
}

/// Letter grade for a percentage: A ≥ 90, B ≥ 80, C ≥ 70, D ≥ 60, else F.
pub fn letter_grade(percentage: f64) -> char {
    if percentage >= 90.0 {
        'A'
    } else if percentage >= 80.0 {
        'B'
    } else if percentage >= 70.0 {
        'C'
    } else if percentage >= 60.0 {
        'D'
    } else {
        'F'
    }
}

// ---------------------------------------------------------------------------
// Assignments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AssignmentStatus {
    #[serde(rename = "P")]
    Published,
    #[serde(rename = "D")]
    Draft,
    #[serde(rename = "C")]
    Closed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl AssignmentStatus {
    pub const FILTERABLE: [AssignmentStatus; 3] = [
        AssignmentStatus::Published,
        AssignmentStatus::Draft,
        AssignmentStatus::Closed,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            AssignmentStatus::Published => "P",
            AssignmentStatus::Draft => "D",
            AssignmentStatus::Closed => "C",
            AssignmentStatus::Unknown => "",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::FILTERABLE.into_iter().find(|s| s.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssignmentStatus::Published => "Published",
            AssignmentStatus::Draft => "Draft",
            AssignmentStatus::Closed => "Closed",
            AssignmentStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Assignment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub class_session: Option<SchoolClass>,
    pub teacher: Option<Teacher>,
    #[serde(deserialize_with = "lenient_f64")]
    pub max_points: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub due_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: AssignmentStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub submission_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl Assignment {
    pub fn class_name(&self) -> &str {
        self.class_session
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("")
    }

    pub fn subject_name(&self) -> &str {
        self.class_session
            .as_ref()
            .map(|c| c.subject_name())
            .unwrap_or("")
    }

    pub fn teacher_name(&self) -> String {
        self.teacher
            .as_ref()
            .map(|t| t.user.full_name())
            .unwrap_or_default()
    }

    /// Due date has passed.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        parse_timestamp(&self.due_date).is_some_and(|due| due < now)
    }

    /// Only published work is flagged as overdue; drafts and closed
    /// assignments are past their deadline by definition.
    pub fn shows_overdue_flag(&self, now: DateTime<Utc>) -> bool {
        self.status == AssignmentStatus::Published && self.is_overdue(now)
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Aggregate counters from `/dashboard/`. Which fields are present depends
/// on the caller's role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct DashboardStats {
    // Admin
    pub total_students: Option<i64>,
    pub total_teachers: Option<i64>,
    pub total_classes: Option<i64>,
    pub total_subjects: Option<i64>,
    pub recent_registrations: Option<i64>,
    // Teacher
    pub my_classes: Option<i64>,
    pub recent_submissions: Option<i64>,
    // Teacher + Student
    pub pending_assignments: Option<i64>,
    // Student
    pub enrolled_classes: Option<i64>,
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub average_grade: Option<f64>,
    #[serde(deserialize_with = "lenient_opt_f64")]
    pub attendance_rate: Option<f64>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Two-letter avatar initials.
pub fn initials(first: &str, last: &str) -> String {
    first
        .chars()
        .next()
        .into_iter()
        .chain(last.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Parse an API timestamp. Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS`
/// (treated as UTC) and a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
    Null(()),
}

impl NumberOrText {
    fn value(self) -> Option<f64> {
        match self {
            NumberOrText::Number(n) => Some(n),
            NumberOrText::Text(s) => s.trim().parse().ok(),
            NumberOrText::Null(()) => None,
        }
    }
}

/// Nullable columns come back as `null`; treat that like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Django serializes `DecimalField` as a string; accept both encodings.
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(NumberOrText::deserialize(deserializer)?
        .value()
        .unwrap_or_default())
}

fn lenient_opt_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(NumberOrText::deserialize(deserializer)?.value())
}
