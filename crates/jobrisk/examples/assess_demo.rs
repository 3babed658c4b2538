//! End-to-end demo: score a submission against a tiny inline model artifact.
//!
//! Run with: cargo run --example assess_demo -p jobrisk

use jobrisk::{ModelArtifact, RawProfile, assess, validate};
use jobrisk_survey::Field;

const DEMO_ARTIFACT: &str = r#"{
    "format_version": 1,
    "model_id": "demo",
    "trained_at": "2024-11-02",
    "transformer": {
        "blocks": [
            {
                "kind": "one_hot",
                "id": "cat",
                "columns": [
                    {"field": "gndr", "categories": ["1", "2", "9"]},
                    {"field": "hlthhmp", "categories": ["1", "2", "3", "9"]}
                ]
            },
            {"kind": "numeric", "id": "num", "fields": ["agea"]}
        ]
    },
    "forest": {
        "base_margin": -1.6,
        "n_features": 8,
        "trees": [
            {
                "nodes": [
                    {"type": "split", "feature": 1, "threshold": 0.5,
                     "left": 1, "right": 2, "value": 0.0},
                    {"type": "leaf", "value": 0.2},
                    {"type": "leaf", "value": -0.25}
                ]
            },
            {
                "nodes": [
                    {"type": "split", "feature": 7, "threshold": 45.0,
                     "left": 1, "right": 2, "value": 0.02},
                    {"type": "leaf", "value": -0.15},
                    {"type": "leaf", "value": 0.3}
                ]
            }
        ]
    }
}"#;

fn main() {
    let artifact = ModelArtifact::from_json(DEMO_ARTIFACT).expect("demo artifact is well-formed");

    let mut profile = RawProfile::new();
    profile
        .set(Field::Gender, "Female")
        .set(Field::Age, 30.0)
        .set(Field::MaritalStatus, "Never married")
        .set(Field::HouseholdSize, 1.0)
        .set(Field::Country, "Germany")
        .set(Field::Region, "Berlin")
        .set(Field::BornInCountry, "Yes")
        .set(Field::FatherBornInCountry, "Yes")
        .set(Field::MotherBornInCountry, "Yes")
        .set(Field::AreaType, "Big city")
        .set(Field::Education, "Bachelor")
        .set(Field::FatherEducation, "Bachelor")
        .set(Field::MotherEducation, "Bachelor")
        .set(Field::Occupation, "Professionals")
        .set(Field::Industry, "Information and communication")
        .set(Field::OrganizationType, "Private firm")
        .set(Field::UnionMembership, "No")
        .set(Field::HealthLimitation, "No")
        .set(Field::DiscriminatedGroup, "No");

    if let Err(err) = validate(&profile) {
        eprintln!("invalid submission: {err}");
        std::process::exit(1);
    }

    let report = assess(&artifact, &profile).expect("demo artifact matches its own transformer");
    print!("{}", report.to_ascii_table());
}
