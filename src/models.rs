use std::collections::BTreeMap;

use serde::Deserialize;

// Record model for the portal API. Every struct is decoded once from a
// response body and never mutated afterwards. Field names must match the
// JSON the portal sends; the portal also omits fields freely, so anything
// it is known to leave out defaults to its empty value.

// Envelope of GET /api/students.
#[derive(Debug, Deserialize, Clone)]
pub struct StudentsResponse {
    pub data: Vec<Student>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Student {
    pub id: i64,
    #[serde(rename = "fullname")]
    pub full_name: String,
    #[serde(default)]
    pub jmbg: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub schools: BTreeMap<i64, School>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct School {
    #[serde(rename = "schoolName")]
    pub school_name: String,
    #[serde(rename = "schoolyears", default)]
    pub school_years: BTreeMap<i64, SchoolYear>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SchoolYear {
    pub year: String,
    pub year_id: i64,
    #[serde(default)]
    pub classes: BTreeMap<i64, Class>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub section: String,
    // Key for the grades endpoint.
    pub student_class_id: i64,
    #[serde(default)]
    pub courses: BTreeMap<i64, Course>,
}

// Course as it appears inside the enrollment tree: a label-only descriptor.
// Grades live in the separate CourseGrading projection below.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Course {
    pub student_class_course_id: i64,
    pub class_course_id: i64,
    pub name: String,
    pub sequence: i64,
}

// One element of the GET /api/grades/{classId} array.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CourseGrading {
    pub course: String,
    #[serde(default)]
    pub class_course_id: i64,
    #[serde(default)]
    pub class_course_grade_type_id: i64,
    #[serde(default)]
    pub sequence: i64,
    // Keyed by semester index, 1 or 2.
    #[serde(rename = "parts", default)]
    pub semesters: BTreeMap<u8, Semester>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Semester {
    pub grades: Vec<Grade>,
    #[serde(rename = "final")]
    pub final_grade: FinalGrade,
    // Server-side average; sometimes a number, sometimes a placeholder
    // string, sometimes absent. Nothing downstream reads it.
    pub average: serde_json::Value,
}

// value == 0 means the teacher has not concluded the semester yet. That
// sentinel is never a real grade.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FinalGrade {
    pub name: String,
    pub value: u8,
    pub school_year_part_id: i64,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Grade {
    // Descriptive grades carry no numeric value.
    pub descriptive: bool,
    pub date: String,
    pub create_datetime: String,
    pub full_grade: String,
    pub grade: u8,
    pub grade_category: String,
    pub note: String,
    pub school_year_part_id: i64,
}
