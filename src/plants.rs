//! CocoScan - Plant Reference Dataset
//!
//! Fixed five-entry reference table used by the identification stub.
//! The pick is keyed on the same stable hash the classifiers use, so a
//! given capture payload always identifies as the same plant.

use serde::Serialize;

use crate::classify::uri_hash;

/// One reference plant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantProfile {
    pub id: u32,
    pub name: &'static str,
    pub scientific_name: &'static str,
    pub description: &'static str,
    pub leaf_shape: &'static str,
    pub common_uses: &'static str,
}

/// Reference table, in dataset order
pub const PLANT_DATASET: [PlantProfile; 5] = [
    PlantProfile {
        id: 1,
        name: "Rose",
        scientific_name: "Rosa spp.",
        description: "Common garden flower with thorny stems and fragrant blooms.",
        leaf_shape: "Elliptical with serrated edges",
        common_uses: "Ornamental, perfumes, teas",
    },
    PlantProfile {
        id: 2,
        name: "Mint",
        scientific_name: "Mentha spp.",
        description: "Aromatic herb with cooling properties.",
        leaf_shape: "Oval with serrated edges, opposite arrangement",
        common_uses: "Culinary, medicinal teas, aromatherapy",
    },
    PlantProfile {
        id: 3,
        name: "Basil",
        scientific_name: "Ocimum basilicum",
        description: "Popular culinary herb with a sweet, aromatic flavor.",
        leaf_shape: "Oval to slightly pointed, opposite arrangement",
        common_uses: "Culinary, pesto, medicinal",
    },
    PlantProfile {
        id: 4,
        name: "Aloe Vera",
        scientific_name: "Aloe barbadensis",
        description: "Succulent plant known for its medicinal properties.",
        leaf_shape: "Thick, fleshy, serrated edges",
        common_uses: "Skin care, burns, digestive issues",
    },
    PlantProfile {
        id: 5,
        name: "Maple",
        scientific_name: "Acer spp.",
        description: "Tree known for its distinctive leaves and syrup production.",
        leaf_shape: "Palmate with 3-5 lobes",
        common_uses: "Ornamental, syrup, wood",
    },
];

/// Identify a plant from the capture payload (deterministic stub)
///
/// Keys the pick off a stable hash of the payload rather than a random
/// draw, so repeated captures of the same frame agree.
pub fn identify(payload: &str) -> &'static PlantProfile {
    let index = (uri_hash(payload) % PLANT_DATASET.len() as u32) as usize;
    &PLANT_DATASET[index]
}
