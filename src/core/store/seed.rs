//! Sample program used by `studyprogress setup`

use super::{Catalog, ProgramId, StoreError};
use chrono::NaiveDate;
use tracing::info;

/// Name of the sample program
pub const DEFAULT_PROGRAM_NAME: &str = "B.Sc. Angewandte Künstliche Intelligenz";

/// Planned semesters of the sample program
pub const DEFAULT_PLANNED_SEMESTERS: u32 = 8;

/// Credit target of the sample program
pub const DEFAULT_TOTAL_CREDITS: u32 = 180;

/// Compulsory modules, elective pools A–D and the internship.
///
/// The electives over-subscribe the credit target on purpose.
const DEFAULT_MODULES: &[(&str, u32)] = &[
    ("Artificial Intelligence", 5),
    ("Einführung in die Programmierung mit Python", 5),
    ("Mathematik: Analysis", 5),
    ("Einführung in das wissenschaftliche Arbeiten für IT und Technik", 5),
    ("Projekt: Objektorientierte und funktionale Programmierung mit Python", 5),
    ("Mathematik: Lineare Algebra", 5),
    ("Statistik - Wahrscheinlichkeit und deskriptive Statistik", 5),
    ("Statistik - Induktive Statistik", 5),
    ("Cloud Computing", 5),
    ("Projekt: Cloud Programming", 5),
    ("Maschinelles Lernen - Supervised Learning", 5),
    ("Maschinelles Lernen - Unsupervised Learning und Feature Engineering", 5),
    ("Neuronale Netze und Deep Learning", 5),
    ("Einführung in Computer Vision", 5),
    ("Projekt: Computer Vision", 5),
    ("Einführung in das Reinforcement Learning", 5),
    ("Einführung in Datenschutz und IT-Sicherheit", 5),
    ("Ethische und rechtliche Aspekte in der KI", 5),
    ("Einführung in NLP", 5),
    ("Projekt: NLP", 5),
    ("Seminar: Ethische Innovation", 5),
    ("Projekt: Edge AI", 5),
    ("Model Engineering", 5),
    ("Bachelorarbeit", 9),
    ("Kolloquium", 1),
    // Elective pool A
    ("Mobile Robotik", 5),
    ("Projekt: Angewandte Robotik mit Robotik-Plattformen", 5),
    ("Automatisierung und Robotics", 5),
    ("Self-Driving Vehicles", 5),
    ("Digitale Signalverarbeitung", 5),
    ("Seminar: Current Topics and Trends in Self-Driving Technology", 5),
    ("Einführung in die Robotik", 5),
    ("Sensorik", 5),
    ("Mechanik - Kinematik", 5),
    // Elective pool B
    ("Embedded Systems", 5),
    ("Seminar: Mensch-Maschinen-Interaktion", 5),
    ("Projekt: X-Reality Einführung in Motion Capturing und Tracking", 5),
    ("User Experience", 5),
    ("Projekt: AI in XR", 5),
    ("Human-Computer Interaction", 5),
    ("Augmented, Mixed und Virtual Reality", 5),
    ("UX-Projekt", 5),
    ("Seminar: Ethische und gesellschaftliche Aspekte von XR", 5),
    ("Projekt: Generative KI im Unternehmenskontext", 5),
    // Elective pool C
    ("Project: AWS - Cloud Essentials", 5),
    ("Data Science Software Engineering", 5),
    ("Project: AWS - Cloud Advanced", 5),
    ("Projekt: Vom Modell zum Produktivsystem", 5),
    ("Data Engineering", 5),
    ("Digitale Business-Modelle", 5),
    ("Data Quality and Data Wrangling", 5),
    ("Business Intelligence", 5),
    ("Advanced Data Analysis", 5),
    ("Projekt: Business Intelligence", 5),
    ("Projekt: Datenanalyse", 5),
    ("Datenmodellierung und Datenbanksysteme", 5),
    ("Big-Data-Technologien", 5),
    ("Projekt: Digitale Business-Modelle", 5),
    // Elective pool D
    ("Experience Psychology", 5),
    ("Interkulturelle und ethische Handlungskompetenzen", 5),
    ("Ethik und Nachhaltigkeit in der IT", 5),
    ("Projekt: KI-Exzellenz mit kreativen Prompt-Techniken", 5),
    ("Kollaboratives Arbeiten", 5),
    ("IT-Architekturmanagement", 5),
    ("Personal Skills", 5),
    ("Studium Generale I", 5),
    ("Studium Generale II", 5),
    // Internship
    ("Praktikum: Bachelor Data Science und KI", 30),
];

/// Start date of the sample program
#[must_use]
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap_or(NaiveDate::MIN)
}

/// Create the sample program with all of its modules.
///
/// # Errors
///
/// Fails if the program or any module name already exists in `catalog`.
pub fn create_default_program(catalog: &mut Catalog) -> Result<ProgramId, StoreError> {
    let program_id = catalog.create_program(
        DEFAULT_PROGRAM_NAME,
        DEFAULT_PLANNED_SEMESTERS,
        DEFAULT_TOTAL_CREDITS,
        default_start_date(),
    )?;
    for (name, credits) in DEFAULT_MODULES {
        catalog.create_module(name, *credits, None, Some(program_id))?;
    }
    info!(
        program_id,
        modules = DEFAULT_MODULES.len(),
        "sample program created"
    );
    Ok(program_id)
}
