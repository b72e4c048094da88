// Offline end-to-end check against captured API shapes: decode the
// enrollment tree and the grades array the way the live flow does, then
// make sure the rendered table comes out byte-for-byte as expected.

use esdnevnik::models::{CourseGrading, StudentsResponse};
use esdnevnik::utils::report::render_table;
use esdnevnik::utils::resolve::{average, final_grade};

static STUDENTS_JSON: &str = include_str!("fixtures/students.json");
static GRADES_JSON: &str = include_str!("fixtures/grades.json");
static EXPECTED_REPORT: &str = include_str!("fixtures/report.txt");

#[test]
fn students_fixture_resolves_to_a_single_class() {
    let response: StudentsResponse = serde_json::from_str(STUDENTS_JSON).unwrap();
    assert_eq!(response.data.len(), 1);

    let student = &response.data[0];
    assert_eq!(student.full_name, "Petar Petrovic");
    assert_eq!(student.schools.len(), 1);

    let school = student.schools.values().next().unwrap();
    assert_eq!(school.school_name, "OS Vuk Karadzic");
    assert_eq!(school.school_years.len(), 1);

    let year = school.school_years.values().next().unwrap();
    assert_eq!(year.year, "2024/2025");
    assert_eq!(year.classes.len(), 1);

    let class = year.classes.values().next().unwrap();
    assert_eq!(class.section, "VII-2");
    assert_eq!(class.student_class_id, 9876);
    assert_eq!(class.courses.len(), 3);
}

#[test]
fn grades_fixture_renders_the_known_table() {
    let grades: Vec<CourseGrading> = serde_json::from_str(GRADES_JSON).unwrap();
    assert_eq!(render_table(5, &grades), EXPECTED_REPORT);
}

#[test]
fn grades_fixture_resolves_expected_finals() {
    let grades: Vec<CourseGrading> = serde_json::from_str(GRADES_JSON).unwrap();

    // Rounded up from 14/3; no second-semester override.
    assert_eq!(final_grade(&grades[0]), 5);
    // Explicit second-semester final wins over the 5.00 average.
    assert_eq!(final_grade(&grades[1]), 4);
    assert_eq!(average(&grades[1]), 5.0);
    // Descriptive-only course never resolves.
    assert_eq!(final_grade(&grades[2]), 0);
    assert!(average(&grades[2]).is_nan());
}
