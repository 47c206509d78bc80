use std::collections::BTreeMap;

/// One parsed configuration file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct File {
    pub body: Body,
}

/// Attributes and blocks, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Body {
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Attribute(Attribute),
    Block(Block),
}

/// `key = value`
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub key: String,
    pub value: Literal,
}

/// `ident "label" ... { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub ident: String,
    pub labels: Vec<String>,
    pub body: Body,
}

/// A literal attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Number(f64),
    Bool(bool),
    List(Vec<Literal>),
    /// Entries in source order; keys may repeat.
    Object(Vec<(String, Literal)>),
}

/// Structure of an external module, as loaded by the host tool.
///
/// Accepted when building a variable table so that callers can pass what they
/// have; variable resolution does not look inside modules.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModuleSchema {
    pub name: String,
    pub source: String,
    pub files: BTreeMap<String, File>,
}

impl File {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            body: Body { items },
        }
    }
}

impl Body {
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.items.iter().filter_map(|item| match item {
            Item::Attribute(attr) => Some(attr),
            Item::Block(_) => None,
        })
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.items.iter().filter_map(|item| match item {
            Item::Block(block) => Some(block),
            Item::Attribute(_) => None,
        })
    }

    pub fn blocks_of_type<'a>(&'a self, ident: &'a str) -> impl Iterator<Item = &'a Block> {
        self.blocks().filter(move |block| block.ident == ident)
    }

    /// The attribute named `key`. When repeated, the last one wins.
    pub fn attribute(&self, key: &str) -> Option<&Attribute> {
        self.attributes().filter(|attr| attr.key == key).last()
    }

    /// Top-level attributes as an object literal (a block written without `=`
    /// is equivalent to an object value).
    pub fn to_object(&self) -> Literal {
        Literal::Object(
            self.attributes()
                .map(|attr| (attr.key.clone(), attr.value.clone()))
                .collect(),
        )
    }
}

impl Literal {
    pub fn kind(&self) -> &'static str {
        match self {
            Literal::Str(_) => "string",
            Literal::Number(_) => "number",
            Literal::Bool(_) => "bool",
            Literal::List(_) => "list",
            Literal::Object(_) => "object",
        }
    }
}
