use std::io::{self, Write};

use log::info;

use crate::error::{Error, Level};
use crate::models::{Class, School, SchoolYear, Student};
use crate::utils::report;
use crate::utils::session::Session;

// Capabilities the orchestrator needs from the terminal (or from a test
// double): pick one of several labeled options, and read a secret line.
pub trait Interact {
    fn choose_one(&mut self, label: &str, options: &[String]) -> io::Result<usize>;
    fn read_secret(&mut self) -> io::Result<String>;
}

// How many candidates a level of the enrollment tree offers. Each step
// pattern-matches on this instead of counting map entries by hand.
enum Resolution<'a, T> {
    Resolved(&'a T),
    Empty,
    Ambiguous(Vec<&'a T>),
}

fn resolve<'a, T>(candidates: impl IntoIterator<Item = &'a T>) -> Resolution<'a, T> {
    let mut candidates = candidates.into_iter();
    match (candidates.next(), candidates.next()) {
        (None, _) => Resolution::Empty,
        (Some(only), None) => Resolution::Resolved(only),
        (Some(first), Some(second)) => {
            let mut all = vec![first, second];
            all.extend(candidates);
            Resolution::Ambiguous(all)
        }
    }
}

// The whole run, in the only order the data dependencies allow: login,
// students, student, school, year, class, conduct, grades, report. There
// are no backward transitions and no retries.
pub async fn run(session: &Session, username: &str, ui: &mut dyn Interact) -> Result<(), Error> {
    println!("Nalog: {}\n", username);

    print!("Password: ");
    io::stdout().flush()?;
    let password = ui.read_secret()?;
    // Wipe the prompt so the secret's line leaves no trace on screen.
    print!("\r \r");
    io::stdout().flush()?;

    session.login(username, &password).await?;

    let students = session.fetch_students().await?;
    info!("Students retrieved successfully");

    let student = select_student(&students, ui)?;
    let school = select_school(student)?;
    println!("Skola: {}", school.school_name);

    let year = select_year(school, ui)?;
    let class = select_class(year)?;
    println!("Odeljenje: {}", class.section);

    let conduct = select_conduct(ui)?;
    println!();

    let grades = session.fetch_grades(class.student_class_id).await?;
    info!("Grades retrieved successfully");

    print!("{}", report::render_table(conduct, &grades));
    Ok(())
}

fn select_student<'a>(
    students: &'a [Student],
    ui: &mut dyn Interact,
) -> Result<&'a Student, Error> {
    match resolve(students) {
        Resolution::Empty => Err(Error::NoCandidates(Level::Students)),
        Resolution::Resolved(student) => {
            println!("Izabran ucenik: {}", student.full_name);
            Ok(student)
        }
        Resolution::Ambiguous(candidates) => pick_one(ui, "Izaberi ucenika", candidates, |s| {
            s.full_name.clone()
        }),
    }
}

fn select_school(student: &Student) -> Result<&School, Error> {
    match resolve(student.schools.values()) {
        Resolution::Empty => Err(Error::NoCandidates(Level::Schools)),
        Resolution::Resolved(school) => Ok(school),
        Resolution::Ambiguous(_) => Err(Error::Unsupported(Level::Schools)),
    }
}

fn select_year<'a>(school: &'a School, ui: &mut dyn Interact) -> Result<&'a SchoolYear, Error> {
    match resolve(school.school_years.values()) {
        Resolution::Empty => Err(Error::NoCandidates(Level::SchoolYears)),
        Resolution::Resolved(year) => {
            println!("Izabrana godina: {}", year.year);
            Ok(year)
        }
        Resolution::Ambiguous(candidates) => {
            pick_one(ui, "Izaberi godinu", candidates, |y| y.year.clone())
        }
    }
}

fn select_class(year: &SchoolYear) -> Result<&Class, Error> {
    match resolve(year.classes.values()) {
        Resolution::Empty => Err(Error::NoCandidates(Level::Classes)),
        Resolution::Resolved(class) => Ok(class),
        Resolution::Ambiguous(_) => Err(Error::Unsupported(Level::Classes)),
    }
}

// Conduct has no server-side source, so it is always asked for.
fn select_conduct(ui: &mut dyn Interact) -> Result<u8, Error> {
    let options: Vec<String> = (1..=5).map(|grade| grade.to_string()).collect();
    let index = ui.choose_one("Vladanje", &options)?;
    Ok(index as u8 + 1)
}

fn pick_one<'a, T>(
    ui: &mut dyn Interact,
    label: &str,
    candidates: Vec<&'a T>,
    name: impl Fn(&T) -> String,
) -> Result<&'a T, Error> {
    let options: Vec<String> = candidates.iter().map(|c| name(c)).collect();
    let index = ui.choose_one(label, &options)?;
    candidates.get(index).copied().ok_or_else(|| {
        Error::Prompt(io::Error::new(
            io::ErrorKind::InvalidInput,
            "selection out of range",
        ))
    })
}
