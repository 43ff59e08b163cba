//! Leaf-record extraction: depth-first pre-order walk of the taxonomy tree
//! producing one [`CatalogRecord`] per species leaf, with the enclosing
//! family label threaded down the recursion as an explicit accumulator.

use std::collections::HashMap;

use crate::catalog::record::CatalogRecord;
use crate::taxonomy::node::TaxonNode;

/// Family label attached to leaves with no resolvable ancestor family.
pub const UNCLASSIFIED_FAMILY: &str = "Sin clasificar";

const PROP_HABITAT: &str = "Habitat";
const PROP_DISTRIBUTION: &str = "Distribución";
const PROP_VIDEO: &str = "Video";

/// Identifier → human-readable family label, built from the top-level
/// sibling list before recursion begins. Top-level entries describe
/// families and classes, not species.
#[derive(Debug, Default)]
pub struct FamilyMap {
    labels: HashMap<String, String>,
}

impl FamilyMap {
    pub fn from_top_level(nodes: &[TaxonNode]) -> Self {
        let mut labels = HashMap::new();
        for node in nodes {
            if let (Some(id), Some(label)) = (&node.identifier, &node.common_name) {
                if !label.is_empty() {
                    labels.insert(id.clone(), label.clone());
                }
            }
        }
        Self { labels }
    }

    pub fn label_for(&self, identifier: Option<&str>) -> Option<&str> {
        identifier
            .and_then(|id| self.labels.get(id))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Flatten a taxonomy tree into catalog records, in pre-order traversal
/// order.
///
/// Records fall out of the tree under three rules:
/// - only nodes tagged as taxa are visited; untagged nodes are skipped
///   along with their subtrees;
/// - a node emits iff it is a species leaf (see
///   [`TaxonNode::is_species_leaf`]); the record carries the family label
///   inherited from above, not one resolved at the node itself;
/// - a node that emits and also has children still recurses into them, so
///   a species record and its sub-taxa can both surface. That mirrors the
///   source data's observed behavior and is covered by a test.
///
/// Leaves without an identifier get a sequential `fish_<n>` id from their
/// emission position; such ids are only stable within one parse run.
pub fn extract_catalog(roots: &[TaxonNode]) -> Vec<CatalogRecord> {
    let families = FamilyMap::from_top_level(roots);
    let mut records = Vec::new();
    walk(roots, UNCLASSIFIED_FAMILY, &families, &mut records);
    tracing::debug!(
        records = records.len(),
        families = families.len(),
        "extracted catalog records"
    );
    records
}

fn walk(
    nodes: &[TaxonNode],
    inherited_family: &str,
    families: &FamilyMap,
    out: &mut Vec<CatalogRecord>,
) {
    for node in nodes {
        if !node.is_taxon {
            continue;
        }

        if node.is_species_leaf() {
            let record = record_from_leaf(node, inherited_family, out.len());
            out.push(record);
        }

        if !node.children.is_empty() {
            let next_family = families
                .label_for(node.identifier.as_deref())
                .unwrap_or(inherited_family);
            walk(&node.children, next_family, families, out);
        }
    }
}

fn record_from_leaf(node: &TaxonNode, family: &str, emitted_so_far: usize) -> CatalogRecord {
    let id = node
        .identifier
        .clone()
        .unwrap_or_else(|| format!("fish_{emitted_so_far}"));

    CatalogRecord {
        id,
        scientific_name: node.scientific_term.clone().unwrap_or_default(),
        common_name: node.common_name.clone().unwrap_or_default(),
        description: node.description.clone().unwrap_or_default(),
        habitat: node.property(PROP_HABITAT).unwrap_or_default().to_string(),
        distribution: node
            .property(PROP_DISTRIBUTION)
            .unwrap_or_default()
            .to_string(),
        video_url: node.property(PROP_VIDEO).unwrap_or_default().to_string(),
        reference_url: node.external_link.clone().unwrap_or_default(),
        family: family.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::node::TaxonProperty;

    fn taxon() -> TaxonNode {
        TaxonNode {
            is_taxon: true,
            ..TaxonNode::default()
        }
    }

    fn species(scientific: &str, common: &str) -> TaxonNode {
        TaxonNode {
            scientific_term: Some(scientific.to_string()),
            common_name: Some(common.to_string()),
            ..taxon()
        }
    }

    fn rank(label: &str, identifier: &str, children: Vec<TaxonNode>) -> TaxonNode {
        TaxonNode {
            rank_name: Some(label.to_string()),
            identifier: Some(identifier.to_string()),
            children,
            ..taxon()
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_catalog(&[]).is_empty());
    }

    #[test]
    fn test_family_label_inherited_from_top_level() {
        let mut top = rank(
            "clase",
            "sparidae",
            vec![species("Sparus aurata", "Dorada")],
        );
        top.common_name = Some("Sparidae".to_string());

        let records = extract_catalog(&[top]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].family, "Sparidae");
    }

    #[test]
    fn test_unmapped_subtree_stays_unclassified() {
        let top = rank("clase", "no_label", vec![species("Coris julis", "Julia")]);
        // Top-level node has an identifier but no descriptive label, so the
        // map has no entry for it.
        let records = extract_catalog(&[top]);
        assert_eq!(records[0].family, UNCLASSIFIED_FAMILY);
    }

    #[test]
    fn test_emission_uses_inherited_label_not_own() {
        // The species node itself appears in the family map, but the record
        // must carry the label inherited from its ancestors.
        let mut fish = species("Chromis chromis", "Castañuela");
        fish.identifier = Some("chromis".to_string());

        let mut top = rank("clase", "pomacentridae", vec![fish]);
        top.common_name = Some("Pomacentridae".to_string());

        let mut decoy = taxon();
        decoy.identifier = Some("chromis".to_string());
        decoy.common_name = Some("WRONG".to_string());

        let records = extract_catalog(&[top, decoy]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].family, "Pomacentridae");
    }

    #[test]
    fn test_intermediate_rank_with_names_is_not_emitted() {
        let mut family_node = species("Sparidae", "Sparidae");
        family_node.rank_name = Some("familia".to_string());
        family_node.children = vec![species("Diplodus sargus", "Sargo")];

        let records = extract_catalog(&[family_node]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].common_name, "Sargo");
    }

    #[test]
    fn test_leaf_with_children_emits_and_recurses() {
        let mut parent = species("Scyliorhinus stellaris", "Gatvaire");
        parent.children = vec![species("Scyliorhinus canicula", "Gató")];

        let records = extract_catalog(&[parent]);
        let names: Vec<&str> = records.iter().map(|r| r.common_name.as_str()).collect();
        assert_eq!(names, ["Gatvaire", "Gató"]);
    }

    #[test]
    fn test_non_taxon_subtree_is_skipped() {
        let mut untagged = species("Mullus surmuletus", "Salmonete");
        untagged.is_taxon = false;
        untagged.children = vec![species("Mullus barbatus", "Moll de fang")];

        assert!(extract_catalog(&[untagged]).is_empty());
    }

    #[test]
    fn test_fallback_ids_follow_emission_order() {
        let mut with_id = species("Sparus aurata", "Dorada");
        with_id.identifier = Some("sparus_aurata".to_string());

        let records = extract_catalog(&[
            species("Diplodus sargus", "Sargo"),
            with_id,
            species("Coris julis", "Julia"),
        ]);

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["fish_0", "sparus_aurata", "fish_2"]);
    }

    #[test]
    fn test_field_mapping() {
        let mut fish = species("Epinephelus marginatus", "Mero");
        fish.description = Some("Pez de gran tamaño.".to_string());
        fish.external_link = Some("https://es.wikipedia.org/wiki/Mero".to_string());
        fish.properties = vec![
            TaxonProperty {
                name: "Habitat".to_string(),
                value: "fondos rocosos".to_string(),
            },
            TaxonProperty {
                name: "Distribución".to_string(),
                value: "Mediterráneo occidental".to_string(),
            },
            TaxonProperty {
                name: "Video".to_string(),
                value: "https://youtu.be/mero".to_string(),
            },
            TaxonProperty {
                name: "Profundidad".to_string(),
                value: "hasta 300 m".to_string(),
            },
        ];

        let records = extract_catalog(&[fish]);
        let record = &records[0];
        assert_eq!(record.scientific_name, "Epinephelus marginatus");
        assert_eq!(record.habitat, "fondos rocosos");
        assert_eq!(record.distribution, "Mediterráneo occidental");
        assert_eq!(record.video_url, "https://youtu.be/mero");
        assert_eq!(record.reference_url, "https://es.wikipedia.org/wiki/Mero");
        // Unknown property names are simply not mapped.
        assert_eq!(record.description, "Pez de gran tamaño.");
    }

    #[test]
    fn test_preorder_emission_order() {
        let mut order_node = rank(
            "orden",
            "perciformes",
            vec![
                species("Sparus aurata", "Dorada"),
                species("Diplodus sargus", "Sargo"),
            ],
        );
        order_node.children.push(rank(
            "familia",
            "labridae",
            vec![species("Coris julis", "Julia")],
        ));

        let records = extract_catalog(&[order_node, species("Chromis chromis", "Castañuela")]);
        let names: Vec<&str> = records.iter().map(|r| r.common_name.as_str()).collect();
        assert_eq!(names, ["Dorada", "Sargo", "Julia", "Castañuela"]);
    }
}
