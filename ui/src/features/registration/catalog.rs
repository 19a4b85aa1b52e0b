//! Selectable majors and courses offered by the registration form

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Major {
    #[serde(rename = "Computer Science")]
    ComputerScience,
    #[serde(rename = "Software Engineering")]
    SoftwareEngineering,
    #[serde(rename = "Computer Engineering")]
    ComputerEngineering,
    #[serde(rename = "Information Systems")]
    InformationSystems,
    #[serde(rename = "Information Technology")]
    InformationTechnology,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Cybersecurity")]
    Cybersecurity,
    #[serde(rename = "Other")]
    Other,
}

impl Major {
    pub const ALL: [Major; 8] = [
        Major::ComputerScience,
        Major::SoftwareEngineering,
        Major::ComputerEngineering,
        Major::InformationSystems,
        Major::InformationTechnology,
        Major::DataScience,
        Major::Cybersecurity,
        Major::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Major::ComputerScience => "Computer Science",
            Major::SoftwareEngineering => "Software Engineering",
            Major::ComputerEngineering => "Computer Engineering",
            Major::InformationSystems => "Information Systems",
            Major::InformationTechnology => "Information Technology",
            Major::DataScience => "Data Science",
            Major::Cybersecurity => "Cybersecurity",
            Major::Other => "Other",
        }
    }

    /// Map a `<select>` option value back to its major
    pub fn from_label(label: &str) -> Option<Major> {
        Major::ALL.into_iter().find(|major| major.label() == label)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Course {
    SE101,
    SE201,
    SE301,
    SE401,
    SE501,
    SE601,
    SE701,
    SE801,
}

impl Course {
    pub const ALL: [Course; 8] = [
        Course::SE101,
        Course::SE201,
        Course::SE301,
        Course::SE401,
        Course::SE501,
        Course::SE601,
        Course::SE701,
        Course::SE801,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Course::SE101 => "SE101",
            Course::SE201 => "SE201",
            Course::SE301 => "SE301",
            Course::SE401 => "SE401",
            Course::SE501 => "SE501",
            Course::SE601 => "SE601",
            Course::SE701 => "SE701",
            Course::SE801 => "SE801",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Course::SE101 => "Introduction to Software Engineering",
            Course::SE201 => "Object-Oriented Programming",
            Course::SE301 => "Software Design Patterns",
            Course::SE401 => "Software Architecture",
            Course::SE501 => "DevOps & CI/CD",
            Course::SE601 => "Cloud Computing",
            Course::SE701 => "Agile Methodologies",
            Course::SE801 => "Capstone Project",
        }
    }

    /// Option label shown in the course dropdown, e.g. `SE101 - Introduction to Software Engineering`
    pub fn label(&self) -> String {
        format!("{} - {}", self.code(), self.title())
    }

    /// Accepts either the exact option label or the bare course code
    pub fn from_label(label: &str) -> Option<Course> {
        Course::ALL
            .into_iter()
            .find(|course| course.code() == label || course.label() == label)
    }
}
