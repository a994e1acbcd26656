//! Role-based view composition.
//!
//! Everything a role may see is decided here: sidebar entries, which
//! sections the router lets through, how much data a page asks for, page
//! copy, table columns and dashboard counters. Every function is total over
//! [`Role`]; `Role::Unknown` always falls into the default-deny branch.

use crate::school::{DashboardStats, Entity};
use crate::Role;

/// A top-level page of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Profile,
    Students,
    Teachers,
    Classes,
    Subjects,
    Attendance,
    Grades,
    Assignments,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Dashboard,
        Section::Profile,
        Section::Students,
        Section::Teachers,
        Section::Classes,
        Section::Subjects,
        Section::Attendance,
        Section::Grades,
        Section::Assignments,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Section::Dashboard => "/dashboard",
            Section::Profile => "/profile",
            Section::Students => "/students",
            Section::Teachers => "/teachers",
            Section::Classes => "/classes",
            Section::Subjects => "/subjects",
            Section::Attendance => "/attendance",
            Section::Grades => "/grades",
            Section::Assignments => "/assignments",
        }
    }

    /// Match a browser path, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        Self::ALL.into_iter().find(|s| s.path() == trimmed)
    }

    /// The collection this section lists, if it is an entity page.
    pub fn entity(&self) -> Option<Entity> {
        match self {
            Section::Dashboard | Section::Profile => None,
            Section::Students => Some(Entity::Students),
            Section::Teachers => Some(Entity::Teachers),
            Section::Classes => Some(Entity::Classes),
            Section::Subjects => Some(Entity::Subjects),
            Section::Attendance => Some(Entity::Attendance),
            Section::Grades => Some(Entity::Grades),
            Section::Assignments => Some(Entity::Assignments),
        }
    }

    fn default_label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Profile => "Profile",
            Section::Students => "Students",
            Section::Teachers => "Teachers",
            Section::Classes => "Classes",
            Section::Subjects => "Subjects",
            Section::Attendance => "Attendance",
            Section::Grades => "Grades",
            Section::Assignments => "Assignments",
        }
    }
}

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationItem {
    pub section: Section,
    pub label: &'static str,
    pub path: &'static str,
    /// Roles allowed to open the section. Empty means every signed-in user.
    pub required_roles: &'static [Role],
}

const EVERYONE: &[Role] = &[];
const ADMIN: &[Role] = &[Role::Admin];
const STAFF_AND_STUDENTS: &[Role] = &[Role::Admin, Role::Teacher, Role::Student];

/// Section → roles table. Order is sidebar order.
const ACCESS: &[(Section, &[Role])] = &[
    (Section::Dashboard, EVERYONE),
    (Section::Profile, EVERYONE),
    (Section::Students, ADMIN),
    (Section::Teachers, ADMIN),
    (Section::Classes, STAFF_AND_STUDENTS),
    (Section::Subjects, ADMIN),
    (Section::Attendance, STAFF_AND_STUDENTS),
    (Section::Grades, STAFF_AND_STUDENTS),
    (Section::Assignments, STAFF_AND_STUDENTS),
];

fn required_roles(section: Section) -> &'static [Role] {
    ACCESS
        .iter()
        .find(|(s, _)| *s == section)
        .map(|(_, roles)| *roles)
        .unwrap_or(ADMIN)
}

/// Whether `role` may open `section`. The sidebar and the route guard both
/// go through this, so a hidden link is always also a blocked route.
pub fn can_view(role: Role, section: Section) -> bool {
    let roles = required_roles(section);
    roles.is_empty() || roles.contains(&role)
}

/// Sidebar label; teachers and students see possessive wording.
pub fn nav_label(role: Role, section: Section) -> &'static str {
    match (role, section) {
        (Role::Teacher | Role::Student, Section::Classes) => "My Classes",
        (Role::Student, Section::Attendance) => "My Attendance",
        (Role::Student, Section::Grades) => "My Grades",
        _ => section.default_label(),
    }
}

/// Sidebar entries for `role`, in display order.
pub fn navigation(role: Role) -> Vec<NavigationItem> {
    ACCESS
        .iter()
        .filter(|(section, _)| can_view(role, *section))
        .map(|(section, roles)| NavigationItem {
            section: *section,
            label: nav_label(role, *section),
            path: section.path(),
            required_roles: roles,
        })
        .collect()
}

/// How much of a collection the API is expected to hand a role. The API
/// does the actual scoping; `None` means the client does not ask at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataScope {
    All,
    TaughtClasses,
    OwnRecords,
    None,
}

pub fn data_scope(role: Role) -> DataScope {
    match role {
        Role::Admin => DataScope::All,
        Role::Teacher => DataScope::TaughtClasses,
        Role::Student => DataScope::OwnRecords,
        Role::Unknown => DataScope::None,
    }
}

pub fn page_title(role: Role, section: Section) -> &'static str {
    match section {
        Section::Dashboard => "Dashboard",
        Section::Profile => "Profile",
        Section::Students => match role {
            Role::Student => "My Profile",
            _ => "Students",
        },
        Section::Teachers => "Teachers",
        Section::Subjects => "Subjects",
        Section::Classes => match role {
            Role::Admin => "All Classes",
            Role::Teacher | Role::Student => "My Classes",
            Role::Unknown => "Classes",
        },
        Section::Attendance => match role {
            Role::Admin => "All Attendance Records",
            Role::Teacher => "Class Attendance",
            Role::Student => "My Attendance",
            Role::Unknown => "Attendance",
        },
        Section::Grades => match role {
            Role::Admin => "All Grades",
            Role::Teacher => "Student Grades",
            Role::Student => "My Grades",
            Role::Unknown => "Grades",
        },
        Section::Assignments => match role {
            Role::Admin => "All Assignments",
            Role::Teacher | Role::Student => "My Assignments",
            Role::Unknown => "Assignments",
        },
    }
}

pub fn page_description(role: Role, section: Section) -> &'static str {
    match section {
        Section::Dashboard => "Overview of your school activity",
        Section::Profile => "Your account details",
        Section::Students => match role {
            Role::Student => "View your student information and academic details",
            _ => "Manage student records and information",
        },
        Section::Teachers => "Manage teacher records and information",
        Section::Subjects => "Browse all available subjects and their details",
        Section::Classes => match role {
            Role::Admin => "Manage all classes and their details",
            Role::Teacher => "View and manage your assigned classes",
            Role::Student => "View your enrolled classes and schedules",
            Role::Unknown => "Class information",
        },
        Section::Attendance => match role {
            Role::Admin => "View and manage all attendance records",
            Role::Teacher => "Track attendance for your classes",
            Role::Student => "View your attendance history",
            Role::Unknown => "Attendance information",
        },
        Section::Grades => match role {
            Role::Admin => "View and manage all student grades",
            Role::Teacher => "View grades for your students",
            Role::Student => "View your academic performance",
            Role::Unknown => "Grade information",
        },
        Section::Assignments => match role {
            Role::Admin => "View and manage all assignments",
            Role::Teacher => "Manage assignments for your classes",
            Role::Student => "View your assigned work and deadlines",
            Role::Unknown => "Assignment information",
        },
    }
}

/// A table column or card field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Student,
    StudentId,
    GradeLevel,
    EnrollmentDate,
    Contact,
    Teacher,
    EmployeeId,
    Department,
    Experience,
    HireDate,
    Class,
    Subject,
    Schedule,
    Room,
    Capacity,
    Code,
    Credits,
    Description,
    Date,
    Status,
    MarkedBy,
    Notes,
    Assignment,
    Grade,
    Percentage,
    LetterGrade,
    MaxPoints,
    DueDate,
    Submissions,
    Actions,
}

impl Column {
    pub fn header(&self) -> &'static str {
        match self {
            Column::Student => "Student",
            Column::StudentId => "Student ID",
            Column::GradeLevel => "Grade Level",
            Column::EnrollmentDate => "Enrollment Date",
            Column::Contact => "Contact",
            Column::Teacher => "Teacher",
            Column::EmployeeId => "Employee ID",
            Column::Department => "Department",
            Column::Experience => "Experience",
            Column::HireDate => "Hire Date",
            Column::Class => "Class",
            Column::Subject => "Subject",
            Column::Schedule => "Schedule",
            Column::Room => "Room",
            Column::Capacity => "Capacity",
            Column::Code => "Code",
            Column::Credits => "Credits",
            Column::Description => "Description",
            Column::Date => "Date",
            Column::Status => "Status",
            Column::MarkedBy => "Marked By",
            Column::Notes => "Notes",
            Column::Assignment => "Assignment",
            Column::Grade => "Grade",
            Column::Percentage => "Percentage",
            Column::LetterGrade => "Letter Grade",
            Column::MaxPoints => "Max Points",
            Column::DueDate => "Due Date",
            Column::Submissions => "Submissions",
            Column::Actions => "Actions",
        }
    }
}

/// Columns (for table pages) or card fields (for card pages) shown to
/// `role` on `section`. Dashboard and Profile have none.
pub fn columns(role: Role, section: Section) -> Vec<Column> {
    let mut cols = match section {
        Section::Dashboard | Section::Profile => vec![],
        Section::Students => vec![
            Column::Student,
            Column::StudentId,
            Column::GradeLevel,
            Column::EnrollmentDate,
            Column::Contact,
            Column::Actions,
        ],
        Section::Teachers => vec![
            Column::Teacher,
            Column::EmployeeId,
            Column::Department,
            Column::Experience,
            Column::HireDate,
            Column::Actions,
        ],
        Section::Classes => vec![
            Column::Subject,
            Column::Teacher,
            Column::Schedule,
            Column::Room,
            Column::Capacity,
        ],
        Section::Subjects => vec![Column::Code, Column::Credits, Column::Description],
        Section::Attendance => vec![
            Column::Student,
            Column::Class,
            Column::Date,
            Column::Status,
            Column::MarkedBy,
            Column::Notes,
        ],
        Section::Grades => vec![
            Column::Student,
            Column::Subject,
            Column::Assignment,
            Column::Grade,
            Column::Percentage,
            Column::LetterGrade,
            Column::Date,
        ],
        Section::Assignments => vec![
            Column::Class,
            Column::Subject,
            Column::Teacher,
            Column::MaxPoints,
            Column::DueDate,
            Column::Submissions,
            Column::Status,
        ],
    };

    match (role, section) {
        // A student's own records need no student column.
        (Role::Student, Section::Attendance | Section::Grades) => {
            cols.retain(|c| *c != Column::Student)
        }
        // A teacher's assignments are all their own.
        (Role::Teacher, Section::Assignments) => cols.retain(|c| *c != Column::Teacher),
        _ => {}
    }
    cols
}

/// Students looking at their own record get no search box.
pub fn show_search(role: Role, section: Section) -> bool {
    section.entity().is_some() && !(role == Role::Student && section == Section::Students)
}

/// One dashboard counter.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

impl StatCard {
    fn count(label: &'static str, value: Option<i64>) -> Self {
        Self {
            label,
            value: value.unwrap_or(0).to_string(),
        }
    }
}

/// Dashboard counters for `role`. Missing stats render as zero; an
/// unknown role gets no cards.
pub fn dashboard_cards(role: Role, stats: &DashboardStats) -> Vec<StatCard> {
    match role {
        Role::Admin => vec![
            StatCard::count("Total Students", stats.total_students),
            StatCard::count("Total Teachers", stats.total_teachers),
            StatCard::count("Total Classes", stats.total_classes),
            StatCard::count("Total Subjects", stats.total_subjects),
            StatCard::count("Recent Registrations", stats.recent_registrations),
        ],
        Role::Teacher => vec![
            StatCard::count("My Classes", stats.my_classes),
            StatCard::count("Total Students", stats.total_students),
            StatCard::count("Pending Assignments", stats.pending_assignments),
            StatCard::count("Recent Submissions", stats.recent_submissions),
        ],
        Role::Student => vec![
            StatCard::count("Enrolled Classes", stats.enrolled_classes),
            StatCard::count("Pending Assignments", stats.pending_assignments),
            StatCard {
                label: "Average Grade",
                value: format!("{:.1}%", stats.average_grade.unwrap_or(0.0)),
            },
            StatCard {
                label: "Attendance Rate",
                value: format!("{}%", format_rate(stats.attendance_rate.unwrap_or(0.0))),
            },
        ],
        Role::Unknown => vec![],
    }
}

/// Whole numbers without a decimal point, fractions as given.
fn format_rate(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{:.0}", rate)
    } else {
        rate.to_string()
    }
}

/// Shortcut links shown under a student's dashboard.
pub fn quick_actions(role: Role) -> Vec<(&'static str, Section)> {
    match role {
        Role::Student => vec![
            ("View Assignments", Section::Assignments),
            ("Check Grades", Section::Grades),
            ("View Attendance", Section::Attendance),
        ],
        _ => vec![],
    }
}
