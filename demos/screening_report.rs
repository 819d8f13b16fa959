//! Renders a small screening roster through every classifier.
//!
//! Run with: cargo run --example screening_report

use anyhow::Result;
use colored::Colorize;
use screenmap::{
    classify_acuity, classify_bmi, classify_dental_risk, priority_for_risk, ColorTag, Sex,
};

struct Student {
    name: &'static str,
    weight_kg: f64,
    height_m: f64,
    age_years: f64,
    sex: Sex,
    od: Option<f64>,
    oe: Option<f64>,
    risk_code: &'static str,
}

const ROSTER: &[Student] = &[
    Student {
        name: "Ana",
        weight_kg: 28.5,
        height_m: 1.32,
        age_years: 8.0,
        sex: Sex::Female,
        od: Some(1.0),
        oe: Some(0.9),
        risk_code: "A+",
    },
    Student {
        name: "Bruno",
        weight_kg: 52.0,
        height_m: 1.41,
        age_years: 10.5,
        sex: Sex::Male,
        od: Some(0.5),
        oe: Some(1.0),
        risk_code: "D+",
    },
    Student {
        name: "Carla",
        weight_kg: 61.0,
        height_m: 1.55,
        age_years: 14.0,
        sex: Sex::Female,
        od: None,
        oe: None,
        risk_code: "x#",
    },
];

fn paint(text: &str, color: ColorTag) -> colored::ColoredString {
    match color {
        ColorTag::Neutral => text.blue(),
        ColorTag::Positive => text.green(),
        ColorTag::Caution => text.yellow(),
        ColorTag::Critical => text.red().bold(),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    for student in ROSTER {
        let bmi = classify_bmi(
            student.weight_kg,
            student.height_m,
            student.age_years,
            student.sex,
        );
        let acuity = classify_acuity(student.od, student.oe);
        let dental = classify_dental_risk(student.risk_code);
        let priority = priority_for_risk(student.risk_code);

        println!("{}", student.name.bold());
        println!(
            "  BMI     {} [{}] - {}",
            paint(&bmi.category.to_string(), bmi.color),
            bmi.band,
            bmi.description
        );
        println!(
            "  Vision  {} - {}",
            paint(&acuity.status.to_string(), acuity.color),
            acuity.description
        );
        println!(
            "  Dental  {} - {} ({})",
            paint(&dental.severity.to_string(), dental.color),
            dental.description,
            dental.recommendation
        );
        println!(
            "  Next visit: {} days ({} priority)",
            priority.next_visit_days, priority.urgency
        );
        println!("{}", serde_json::to_string(&dental)?);
        println!();
    }

    Ok(())
}
