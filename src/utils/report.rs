use crate::models::CourseGrading;
use crate::utils::resolve::{average, final_grade, Overall};

// Builds the end-of-year table: the conduct row, one row per concluded
// course, and the overall average. Courses without a concluded grade are
// left out entirely. Rendering into a String keeps this testable offline.
pub fn render_table(conduct: u8, courses: &[CourseGrading]) -> String {
    let mut overall = Overall::seeded(conduct);

    let mut table = format!("{:<40} {:<8} {:<12}\n", "Predmet", "Prosek", "Zakljuceno");
    // Conduct has no fetched average; its average column is pinned at 5.00.
    table.push_str(&format!(
        "{:<40} {:<8.2} {:<12}\n",
        "Vladanje", 5.00, conduct
    ));

    for course in courses {
        let concluded = final_grade(course);
        if concluded == 0 {
            continue;
        }
        overall.push(concluded);
        table.push_str(&format!(
            "{:<40} {:<8.2} {:<12}\n",
            course.course,
            average(course),
            concluded
        ));
    }

    table.push_str(&format!("\nProsek na kraju: {:.2}\n", overall.value()));
    table
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::{FinalGrade, Grade, Semester};

    fn concluded_course(name: &str, final_value: u8) -> CourseGrading {
        CourseGrading {
            course: name.to_string(),
            class_course_id: 1,
            class_course_grade_type_id: 1,
            sequence: 1,
            semesters: BTreeMap::from([(
                2,
                Semester {
                    grades: vec![Grade {
                        grade: final_value,
                        ..Grade::default()
                    }],
                    final_grade: FinalGrade {
                        value: final_value,
                        ..FinalGrade::default()
                    },
                    ..Semester::default()
                },
            )]),
        }
    }

    fn unresolved_course(name: &str) -> CourseGrading {
        CourseGrading {
            course: name.to_string(),
            class_course_id: 2,
            class_course_grade_type_id: 1,
            sequence: 2,
            semesters: BTreeMap::new(),
        }
    }

    #[test]
    fn unresolved_courses_are_omitted() {
        let table = render_table(
            5,
            &[
                concluded_course("Matematika", 5),
                unresolved_course("Likovna kultura"),
            ],
        );
        assert!(table.contains("Matematika"));
        assert!(!table.contains("Likovna kultura"));
        // conduct 5 + final 5 over two grade units
        assert!(table.ends_with("Prosek na kraju: 5.00\n"));
    }

    #[test]
    fn conduct_row_is_always_present() {
        let table = render_table(3, &[]);
        assert!(table.contains("Vladanje"));
        assert!(table.ends_with("Prosek na kraju: 3.00\n"));
    }
}
