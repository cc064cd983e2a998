//! Plain-text serialization of a plan for sharing.
//!
//! The terminal stands in for a share sheet: the formatted text is written
//! to a file the user can paste or send. Formatting is pure; only the
//! export touches the filesystem.

use crate::nutrition::DietPlan;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const EXPORT_FILE_NAME: &str = "dieta.txt";
const EXPORT_DIRECTORY_PATH: &str = ".config/dieta-tui";

/// Serialize a plan into a single human-readable block: header, each meal
/// with its time and foods, then the supplement list. Empty meal or
/// supplement sequences simply omit their section.
///
pub fn format_for_sharing(plan: &DietPlan) -> String {
    let mut message = format!("Dieta: {} - Objetivo: {}", plan.name, plan.objective);

    if !plan.meals.is_empty() {
        message.push('\n');
        for meal in &plan.meals {
            message.push_str(&format!(
                "\nNome: {}\nHorario: {}\nAlimentos: {}\n",
                meal.name,
                meal.time,
                meal.foods.join(", ")
            ));
        }
    }

    if !plan.supplements.is_empty() {
        message.push_str(&format!(
            "\n- Dicas de suplementos: {}",
            plan.supplements.join(", ")
        ));
    }

    message
}

/// Write the share text into the given directory, creating it if needed.
///
pub fn export_plan_to(dir: &Path, plan: &DietPlan) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILE_NAME);
    fs::write(&path, format_for_sharing(plan))?;
    Ok(path)
}

/// Write the share text into the default export directory.
///
pub fn export_plan(plan: &DietPlan) -> io::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Failed to find home directory")
    })?;
    export_plan_to(&home.join(EXPORT_DIRECTORY_PATH), plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::Meal;

    fn sample_plan() -> DietPlan {
        DietPlan {
            name: "Ana".to_string(),
            gender: "feminino".to_string(),
            age: "30".to_string(),
            height: "1.65".to_string(),
            weight: "60".to_string(),
            objective: "emagrecer".to_string(),
            meals: vec![
                Meal {
                    name: "Café da manhã".to_string(),
                    time: "08:00".to_string(),
                    foods: vec!["Ovos".to_string(), "Pão integral".to_string()],
                },
                Meal {
                    name: "Almoço".to_string(),
                    time: "12:00".to_string(),
                    foods: vec!["Frango".to_string(), "Arroz".to_string()],
                },
            ],
            supplements: vec!["Whey".to_string(), "Creatina".to_string()],
        }
    }

    #[test]
    fn share_text_contains_everything_in_source_order() {
        let text = format_for_sharing(&sample_plan());
        assert!(text.starts_with("Dieta: Ana - Objetivo: emagrecer"));

        let breakfast = text.find("Café da manhã").unwrap();
        let lunch = text.find("Almoço").unwrap();
        assert!(breakfast < lunch);

        assert!(text.contains("08:00"));
        assert!(text.contains("12:00"));
        let whey = text.find("Whey").unwrap();
        let creatine = text.find("Creatina").unwrap();
        assert!(whey < creatine);
    }

    #[test]
    fn empty_sequences_leave_only_the_header() {
        let mut plan = sample_plan();
        plan.meals.clear();
        plan.supplements.clear();
        let text = format_for_sharing(&plan);
        assert_eq!(text, "Dieta: Ana - Objetivo: emagrecer");
    }

    #[test]
    fn foods_are_joined_with_commas() {
        let text = format_for_sharing(&sample_plan());
        assert!(text.contains("Alimentos: Ovos, Pão integral"));
    }

    #[test]
    fn export_writes_the_share_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_plan_to(dir.path(), &sample_plan()).unwrap();
        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written, format_for_sharing(&sample_plan()));
    }
}
