//! Typed taxonomy tree nodes, decoupled from the raw JSON field names.

/// Rank labels that mark a node as an intermediate grouping rather than a
/// cataloged species. Matched exactly, as they appear in the source data.
const INTERMEDIATE_RANKS: [&str; 8] = [
    "clase",
    "subclase",
    "orden",
    "suborden",
    "familia",
    "subfamilia",
    "género",
    "subgénero",
];

pub fn is_intermediate_rank(rank: &str) -> bool {
    INTERMEDIATE_RANKS.contains(&rank)
}

/// A named (name, value) pair attached to a taxon, e.g. habitat or
/// distribution text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonProperty {
    pub name: String,
    pub value: String,
}

/// A node in the taxonomy tree. Produced by the [`schema`](crate::taxonomy::schema)
/// adapter; the extraction pass never touches raw JSON.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaxonNode {
    /// Whether the source node was tagged as a taxon. Untagged nodes never
    /// emit records and are not descended into.
    pub is_taxon: bool,
    /// Rank label on intermediate nodes ("clase", "familia", ...).
    pub rank_name: Option<String>,
    pub scientific_term: Option<String>,
    pub common_name: Option<String>,
    pub description: Option<String>,
    /// Ordered property list; later duplicates of a name win.
    pub properties: Vec<TaxonProperty>,
    pub external_link: Option<String>,
    pub identifier: Option<String>,
    pub children: Vec<TaxonNode>,
}

impl TaxonNode {
    /// A node is a leaf species iff it is a taxon with both a scientific
    /// term and a common name, and its rank label is not one of the
    /// reserved intermediate ranks.
    pub fn is_species_leaf(&self) -> bool {
        self.is_taxon
            && self.scientific_term.as_deref().is_some_and(|s| !s.is_empty())
            && self.common_name.as_deref().is_some_and(|s| !s.is_empty())
            && !self.rank_name.as_deref().is_some_and(is_intermediate_rank)
    }

    /// Look up a property value by name. Later entries shadow earlier ones
    /// with the same name.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .rev()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}
