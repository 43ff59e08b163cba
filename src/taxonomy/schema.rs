//! Serde adapter for the schema.org-style taxonomy documents the
//! encyclopedia ships: an ItemList whose `itemListElement` entries are
//! `Taxon` nodes nested through `childTaxon`.
//!
//! The adapter is the only place that sees raw JSON field names. Every
//! tolerance rule lives here: a malformed node is rejected (never an
//! error), a missing or non-array child list means "no children", and a
//! missing or non-array root list yields zero nodes.

use serde::Deserialize;
use serde_json::Value;

use crate::taxonomy::node::{TaxonNode, TaxonProperty};
use crate::Result;

/// Top-level taxonomy document.
#[derive(Debug, Default, Deserialize)]
pub struct TaxonomyDocument {
    #[serde(default, rename = "itemListElement")]
    item_list_element: MaybeList<RawItem>,
}

impl TaxonomyDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Convert the raw document into typed nodes, dropping anything that
    /// does not parse as a node.
    pub fn into_nodes(self) -> Vec<TaxonNode> {
        self.item_list_element
            .into_vec()
            .into_iter()
            .filter_map(RawItem::into_node)
            .collect()
    }
}

/// A JSON value that should be a list but might be anything. Non-lists
/// degrade to an empty list instead of failing the parse.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MaybeList<T> {
    List(Vec<T>),
    Other(Value),
}

impl<T> Default for MaybeList<T> {
    fn default() -> Self {
        MaybeList::List(Vec::new())
    }
}

impl<T> MaybeList<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            MaybeList::List(items) => items,
            MaybeList::Other(_) => Vec::new(),
        }
    }
}

/// A list entry: either a well-formed node or something we reject.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawItem {
    Node(Box<RawNode>),
    Other(Value),
}

impl RawItem {
    fn into_node(self) -> Option<TaxonNode> {
        match self {
            RawItem::Node(raw) => Some(raw.into_node()),
            RawItem::Other(_) => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawNode {
    #[serde(rename = "@type")]
    node_type: Option<String>,
    /// Rank label on intermediate nodes.
    name: Option<String>,
    #[serde(rename = "hasDefinedTerm")]
    has_defined_term: Option<String>,
    #[serde(rename = "alternateName")]
    alternate_name: Option<String>,
    description: Option<String>,
    #[serde(default, rename = "additionalProperty")]
    additional_property: MaybeList<RawPropertyItem>,
    #[serde(rename = "sameAs")]
    same_as: Option<String>,
    identifier: Option<Identifier>,
    #[serde(default, rename = "childTaxon")]
    child_taxon: MaybeList<RawItem>,
}

impl RawNode {
    fn into_node(self) -> TaxonNode {
        TaxonNode {
            is_taxon: self.node_type.as_deref() == Some("Taxon"),
            rank_name: self.name,
            scientific_term: self.has_defined_term,
            common_name: self.alternate_name,
            description: self.description,
            properties: self
                .additional_property
                .into_vec()
                .into_iter()
                .filter_map(RawPropertyItem::into_property)
                .collect(),
            external_link: self.same_as,
            identifier: self.identifier.map(|id| id.into_string()),
            children: self
                .child_taxon
                .into_vec()
                .into_iter()
                .filter_map(RawItem::into_node)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPropertyItem {
    Pair(RawProperty),
    Other(Value),
}

impl RawPropertyItem {
    fn into_property(self) -> Option<TaxonProperty> {
        match self {
            RawPropertyItem::Pair(pair) => Some(TaxonProperty {
                name: pair.name,
                value: pair.value,
            }),
            RawPropertyItem::Other(_) => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawProperty {
    #[serde(default)]
    name: String,
    #[serde(default)]
    value: String,
}

/// Identifiers appear as strings or numbers in the source data.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Identifier {
    Text(String),
    Number(serde_json::Number),
}

impl Identifier {
    fn into_string(self) -> String {
        match self {
            Identifier::Text(text) => text,
            Identifier::Number(number) => number.to_string(),
        }
    }
}
