//! Built-in seed catalog, used when no snapshot file is configured.

use once_cell::sync::Lazy;
use tracing::error;

use super::SolutionCatalog;

const SEED_TOML: &str = r#"
[[solution]]
name = "Headache Relief"
category = "Pain Management"
severity = "mild"
keywords = ["headache", "head pain", "migraine", "tension headache"]
treatment = "Rest in a quiet, dark room. Apply a cold or warm compress to your head or neck. Stay hydrated by drinking plenty of water. Consider over-the-counter pain relievers if appropriate."

[[solution.medicine]]
name = "Paracetamol"
dose = "500 mg"
duration = "Every 6 hours as needed, up to 3 days"

[[solution.medicine]]
name = "Ibuprofen"
dose = "200-400 mg"
duration = "Every 8 hours with food, up to 3 days"

[[solution]]
name = "Fever Management"
category = "General Care"
severity = "moderate"
keywords = ["fever", "high temperature", "feeling hot", "chills"]
treatment = "Get plenty of rest. Drink lots of fluids to prevent dehydration. Use a cool, damp washcloth on your forehead. Take fever-reducing medication if recommended. Monitor your temperature regularly."

[[solution.medicine]]
name = "Paracetamol"
dose = "500-1000 mg"
duration = "Every 6 hours while feverish, up to 3 days"

[[solution]]
name = "Minor Cut Treatment"
category = "Wound Care"
severity = "mild"
keywords = ["cut", "wound", "bleeding", "laceration", "scrape"]
treatment = "Clean your hands thoroughly before treating the wound. Stop any bleeding by applying direct pressure. Clean the wound gently with water. Apply an antibiotic ointment if available. Cover with a sterile bandage."

[[solution.medicine]]
name = "Antibiotic ointment"
dose = "Thin layer"
duration = "Twice daily until healed"

[[solution]]
name = "Burn Treatment"
category = "Wound Care"
severity = "moderate"
keywords = ["burn", "burned", "scalded", "hot water", "fire"]
treatment = "Cool the burn with cool (not cold) running water for 10-20 minutes. Remove any jewelry or tight items before swelling begins. Do not break blisters. Apply a thin layer of aloe vera or moisturizer. Cover with a sterile, non-adhesive bandage."

[[solution.medicine]]
name = "Aloe vera gel"
dose = "Thin layer"
duration = "Two to three times daily"

[[solution]]
name = "Allergic Reaction"
category = "Emergency Care"
severity = "severe"
keywords = ["allergy", "allergic reaction", "rash", "hives", "swelling"]
treatment = "Remove or avoid the allergen if known. Take an antihistamine if available. Apply cool compresses to affected areas. For severe reactions with difficulty breathing, seek immediate medical attention."

[[solution.medicine]]
name = "Cetirizine"
dose = "10 mg"
duration = "Once daily for up to 5 days"
"#;

static BUILTIN: Lazy<SolutionCatalog> =
    Lazy::new(|| match SolutionCatalog::from_toml_str(SEED_TOML) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Built-in seed catalog is invalid, using an empty catalog: {}", e);
            SolutionCatalog::empty()
        }
    });

impl SolutionCatalog {
    /// The five curated solutions shipped with the engine.
    pub fn builtin() -> SolutionCatalog {
        BUILTIN.clone()
    }
}
