//! Schema declarations handed to the declarative engine
//!
//! A schema is plain data: the nested attribute tree of a resource or data
//! source, with each attribute's role (required, optional, computed) and plan
//! modifiers. Plan classification reads the `requires_replace` flags from here
//! so the declared schema and the replace behaviour cannot drift apart.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Bool,
    Int64,
    List { element: Box<AttributeType> },
    SingleNested { attributes: BTreeMap<String, Attribute> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    #[serde(flatten)]
    pub kind: AttributeType,
    pub description: String,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    /// A change to this attribute cannot be applied in place
    pub requires_replace: bool,
    /// Planned value is unknown until apply; reuse the prior state's value
    pub use_state_for_unknown: bool,
}

impl Attribute {
    fn new(kind: AttributeType, description: &str) -> Self {
        Self {
            kind,
            description: description.to_string(),
            required: false,
            optional: false,
            computed: false,
            requires_replace: false,
            use_state_for_unknown: false,
        }
    }

    pub fn computed(kind: AttributeType, description: &str) -> Self {
        Self {
            computed: true,
            ..Self::new(kind, description)
        }
    }

    pub fn computed_string(description: &str) -> Self {
        Self::computed(AttributeType::String, description)
    }

    pub fn computed_bool(description: &str) -> Self {
        Self::computed(AttributeType::Bool, description)
    }

    pub fn computed_int64(description: &str) -> Self {
        Self::computed(AttributeType::Int64, description)
    }

    pub fn computed_list(element: AttributeType, description: &str) -> Self {
        Self::computed(
            AttributeType::List {
                element: Box::new(element),
            },
            description,
        )
    }

    pub fn computed_nested(description: &str, attributes: Vec<(&str, Attribute)>) -> Self {
        let attributes = attributes
            .into_iter()
            .map(|(name, attribute)| (name.to_string(), attribute))
            .collect();
        Self::computed(AttributeType::SingleNested { attributes }, description)
    }

    pub fn required_string(description: &str) -> Self {
        Self {
            required: true,
            ..Self::new(AttributeType::String, description)
        }
    }

    pub fn optional_computed_string(description: &str) -> Self {
        Self {
            optional: true,
            computed: true,
            ..Self::new(AttributeType::String, description)
        }
    }

    pub fn requires_replace(mut self) -> Self {
        self.requires_replace = true;
        self
    }

    pub fn use_state_for_unknown(mut self) -> Self {
        self.use_state_for_unknown = true;
        self
    }

    pub fn nested_attributes(&self) -> Option<&BTreeMap<String, Attribute>> {
        match &self.kind {
            AttributeType::SingleNested { attributes } => Some(attributes),
            _ => None,
        }
    }

    fn leaf_count(&self) -> usize {
        match self.nested_attributes() {
            Some(attributes) => attributes.values().map(Attribute::leaf_count).sum(),
            None => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    pub description: String,
    pub markdown_description: String,
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    pub fn new(
        description: &str,
        markdown_description: &str,
        attributes: Vec<(&str, Attribute)>,
    ) -> Self {
        Self {
            description: description.to_string(),
            markdown_description: markdown_description.to_string(),
            attributes: attributes
                .into_iter()
                .map(|(name, attribute)| (name.to_string(), attribute))
                .collect(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Number of non-nested attributes in the whole tree
    pub fn leaf_count(&self) -> usize {
        self.attributes.values().map(Attribute::leaf_count).sum()
    }

    /// Top-level attributes whose value differs between two serialized
    /// states and that cannot be changed in place
    pub fn replacement_attributes(&self, prior: &Value, plan: &Value) -> Vec<String> {
        self.attributes
            .iter()
            .filter(|(_, attribute)| attribute.requires_replace)
            .filter(|(name, _)| prior.get(name.as_str()) != plan.get(name.as_str()))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Check that a serialized state has exactly the shape this schema
    /// declares, nested groups included. Returns the offending paths.
    pub fn shape_mismatches(&self, state: &Value) -> Vec<String> {
        let mut mismatches = Vec::new();
        collect_mismatches(&self.attributes, state, "", &mut mismatches);
        mismatches
    }
}

fn collect_mismatches(
    attributes: &BTreeMap<String, Attribute>,
    value: &Value,
    prefix: &str,
    mismatches: &mut Vec<String>,
) {
    let Some(object) = value.as_object() else {
        mismatches.push(format!("{}<not an object>", prefix));
        return;
    };

    for (name, attribute) in attributes {
        let path = format!("{}{}", prefix, name);
        match (object.get(name), attribute.nested_attributes()) {
            (None, _) => mismatches.push(path),
            (Some(nested), Some(children)) => {
                collect_mismatches(children, nested, &format!("{}.", path), mismatches)
            }
            (Some(_), None) => {}
        }
    }

    for name in object.keys() {
        if !attributes.contains_key(name) {
            mismatches.push(format!("{}{}", prefix, name));
        }
    }
}
