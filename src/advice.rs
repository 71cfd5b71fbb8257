//! CocoScan - Treatment & Control Advisor
//!
//! Static agronomy guidance for coconut pests. A light text heuristic
//! picks the targeted Opisina arenosella plan when the pest is named,
//! otherwise the generic coconut-pest plan applies.

use serde::Serialize;

/// Paired treatment and control recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreatmentPlan {
    pub treatment: &'static [&'static str],
    pub control: &'static [&'static str],
}

const OPISINA_PLAN: TreatmentPlan = TreatmentPlan {
    treatment: &[
        "Prune and safely destroy heavily infested and dried fronds to reduce larval populations.",
        "Release biological control agents such as parasitoid wasps (e.g., Bracon spp., Goniozus spp.) where available.",
        "Apply botanical sprays like 2% neem oil + emulsifier targeting undersides of leaves with webbing.",
        "In severe cases, consult a licensed professional for selective insecticide use; follow local regulations and label directions strictly.",
    ],
    control: &[
        "Encourage natural enemies by minimizing broad-spectrum insecticide use.",
        "Maintain sanitation: remove and dispose of infested leaflets and webs regularly.",
        "Improve tree vigor through proper irrigation and balanced fertilization.",
        "Monitor young palms more frequently; early detection greatly reduces damage.",
    ],
};

const GENERIC_PLAN: TreatmentPlan = TreatmentPlan {
    treatment: &[
        "Remove and dispose of severely infested plant parts to reduce pest load.",
        "Use botanicals (e.g., neem-based) first; spot-treat and avoid overapplication.",
        "If required, consult local extension services for approved selective insecticides and pre-harvest intervals.",
    ],
    control: &[
        "Promote beneficial insects by maintaining habitat and avoiding unnecessary chemicals.",
        "Keep the area clean; remove fallen debris where pests may breed.",
        "Water and fertilize appropriately to keep palms healthy and resilient.",
        "Scout weekly during peak seasons; act early if thresholds are reached.",
    ],
};

/// Footer shown with every plan
pub const ADVISORY_NOTE: &str = "Note: Always follow your local agricultural guidelines and \
product labels. Consider consulting an agricultural extension officer for site-specific advice.";

/// Pick a plan for the given descriptive text
///
/// Case-insensitive scan for the pest name or its common name; anything
/// else (including no text) gets the generic coconut-pest plan.
pub fn plan_for(about_text: Option<&str>) -> TreatmentPlan {
    let lower = about_text.unwrap_or_default().to_lowercase();
    if lower.contains("opisina arenosella") || lower.contains("black-headed caterpillar") {
        OPISINA_PLAN
    } else {
        GENERIC_PLAN
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PEST PROFILE
// ═══════════════════════════════════════════════════════════════════════

/// One heading plus its observations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PestSection {
    pub heading: &'static str,
    pub bullets: &'static [&'static str],
}

/// Reference profile of a coconut pest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PestProfile {
    pub title: &'static str,
    pub overview: &'static str,
    pub sections: &'static [PestSection],
}

/// The Opisina arenosella profile backing the about surface
pub const PEST_PROFILE: PestProfile = PestProfile {
    title: "Opisina arenosella",
    overview: "Opisina arenosella is a species of moth whose larval stage, commonly known as \
the black-headed caterpillar, is a serious pest of coconut and other palm trees, causing \
significant defoliation by feeding on the leaves.",
    sections: &[
        PestSection {
            heading: "Sign & Symptoms",
            bullets: &[
                "Silken webbing on the underside of leaves",
                "A silky, web-like covering made by caterpillars, often filled with frass (insect droppings)",
            ],
        },
        PestSection {
            heading: "Feeding marks or leaf scraping",
            bullets: &["Caterpillars scrape the green leaf surface, leaving white or brown patches"],
        },
        PestSection {
            heading: "Dying and yellowing of leaf tips",
            bullets: &["Starts from the leaf tip and progresses toward the base"],
        },
        PestSection {
            heading: "Presence of black-headed caterpillars",
            bullets: &["Small larvae with dark (black) heads, often hidden inside the webs"],
        },
        PestSection {
            heading: "Frass (insect waste) on leaves",
            bullets: &["Black or brown droppings seen inside or near the silken web"],
        },
        PestSection {
            heading: "Progressive leaf damage",
            bullets: &["Leaves become dry, rolled, and eventually fall off in severe cases"],
        },
        PestSection {
            heading: "Reduced nut production",
            bullets: &["Ongoing infestations weaken the tree, reducing coconut yield"],
        },
        PestSection {
            heading: "More damage on nursery or young palms",
            bullets: &["Younger trees are more vulnerable to severe defoliation"],
        },
    ],
};
