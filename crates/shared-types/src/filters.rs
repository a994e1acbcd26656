//! In-memory filtering for the list pages.
//!
//! Search is a case-insensitive substring match over a record's searchable
//! fields; an empty or whitespace-only term matches everything. Pages with
//! extra controls (date, status, subject) AND those predicates with the
//! search term.

use crate::school::{
    Assignment, AssignmentStatus, AttendanceRecord, AttendanceStatus, Grade, SchoolClass,
    Student, Subject, Teacher,
};

pub use crate::school::letter_grade;

/// A record that can be matched by the search box.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// A predicate over one kind of record.
pub trait CollectionFilter {
    type Item: Clone;

    fn matches(&self, item: &Self::Item) -> bool;

    /// Whether any control is set; drives the "Clear Filters" button and
    /// the empty-state wording.
    fn is_active(&self) -> bool;

    fn apply(&self, items: &[Self::Item]) -> Vec<Self::Item> {
        items.iter().filter(|i| self.matches(i)).cloned().collect()
    }
}

pub fn matches_search<T: Searchable + ?Sized>(item: &T, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    item.search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Search-box-only filter used by the students, teachers, classes and
/// subjects pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter<T> {
    pub search: String,
    _item: std::marker::PhantomData<fn() -> T>,
}

impl<T> SearchFilter<T> {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            _item: std::marker::PhantomData,
        }
    }
}

impl<T: Searchable + Clone> CollectionFilter for SearchFilter<T> {
    type Item = T;

    fn matches(&self, item: &T) -> bool {
        matches_search(item, &self.search)
    }

    fn is_active(&self) -> bool {
        !self.search.trim().is_empty()
    }
}

/// Convenience for the search-only pages.
pub fn search<T: Searchable + Clone>(items: &[T], term: &str) -> Vec<T> {
    SearchFilter::<T>::new(term).apply(items)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceFilter {
    pub search: String,
    /// Exact `YYYY-MM-DD` match; empty means any date.
    pub date: String,
    pub status: Option<AttendanceStatus>,
}

impl CollectionFilter for AttendanceFilter {
    type Item = AttendanceRecord;

    fn matches(&self, record: &AttendanceRecord) -> bool {
        matches_search(record, &self.search)
            && (self.date.is_empty() || record.date == self.date)
            && self.status.map_or(true, |s| record.status == s)
    }

    fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || !self.date.is_empty() || self.status.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeFilter {
    pub search: String,
    pub subject_id: Option<i64>,
}

impl CollectionFilter for GradeFilter {
    type Item = Grade;

    fn matches(&self, grade: &Grade) -> bool {
        matches_search(grade, &self.search)
            && self
                .subject_id
                .map_or(true, |id| grade.subject.as_ref().is_some_and(|s| s.id == id))
    }

    fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.subject_id.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentFilter {
    pub search: String,
    pub status: Option<AssignmentStatus>,
}

impl CollectionFilter for AssignmentFilter {
    type Item = Assignment;

    fn matches(&self, assignment: &Assignment) -> bool {
        matches_search(assignment, &self.search)
            && self.status.map_or(true, |s| assignment.status == s)
    }

    fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.status.is_some()
    }
}

/// Mean percentage over `grades`, `None` when there are none.
pub fn average_percentage(grades: &[Grade]) -> Option<f64> {
    if grades.is_empty() {
        return None;
    }
    let total: f64 = grades.iter().map(|g| g.percentage).sum();
    Some(total / grades.len() as f64)
}

// ---------------------------------------------------------------------------
// Searchable impls
// ---------------------------------------------------------------------------

impl Searchable for Student {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.user.first_name.as_str(),
            self.user.last_name.as_str(),
            self.student_id.as_str(),
            self.user.email.as_str(),
        ]
    }
}

impl Searchable for Teacher {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.user.first_name.as_str(),
            self.user.last_name.as_str(),
            self.employee_id.as_str(),
            self.department.as_str(),
            self.user.email.as_str(),
        ]
    }
}

impl Searchable for SchoolClass {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.subject_name()];
        if let Some(teacher) = &self.teacher {
            fields.push(&teacher.user.first_name);
            fields.push(&teacher.user.last_name);
        }
        fields.extend(self.room_number.as_deref());
        fields
    }
}

impl Searchable for Subject {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.code.as_str(),
            self.description.as_str(),
        ]
    }
}

impl Searchable for AttendanceRecord {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::new();
        if let Some(student) = &self.student {
            fields.push(student.user.first_name.as_str());
            fields.push(&student.user.last_name);
        }
        if let Some(class) = &self.class_session {
            fields.push(&class.name);
            fields.push(class.subject_name());
        }
        fields
    }
}

impl Searchable for Grade {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.assignment_name.as_str()];
        if let Some(student) = &self.student {
            fields.push(&student.user.first_name);
            fields.push(&student.user.last_name);
        }
        if let Some(subject) = &self.subject {
            fields.push(&subject.name);
        }
        fields
    }
}

impl Searchable for Assignment {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.class_name(),
            self.subject_name(),
        ]
    }
}
