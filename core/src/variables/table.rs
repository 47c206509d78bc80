use crate::config::{self, Block, File, Literal, ModuleSchema};
use crate::values::{Value, decode};
use crate::variables::{BuildError, MetaSlot, Metadata};
use hashbrown::HashMap;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Resolved variables for one evaluation session.
///
/// Built once from the declarations of every supplied file and never
/// modified afterwards. A declared variable without a default maps to
/// [`Value::Absent`].
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    variables: HashMap<String, Value>,
    metadata: Metadata,
}

impl VariableTable {
    /// Collect the `variable` declarations of `files`.
    ///
    /// Files are visited in ascending identifier order and the last
    /// declaration of a name wins. Each top-level attribute of an override
    /// file then replaces the value of the declared variable it names.
    /// `schemas` are accepted but not consulted.
    pub fn build(
        files: &BTreeMap<String, File>,
        schemas: &[ModuleSchema],
        overrides: &[File],
        metadata: Metadata,
    ) -> Result<Self, BuildError> {
        let mut variables = HashMap::new();

        for (file_id, file) in files {
            for block in file.body.blocks_of_type("variable") {
                let (name, value) = declaration(file_id, block)?;
                debug!(file = %file_id, variable = %name, kind = value.kind(), "Declared variable");
                variables.insert(name, value);
            }
        }

        if !schemas.is_empty() {
            debug!(count = schemas.len(), "Ignoring module schemas");
        }

        for (i, file) in overrides.iter().enumerate() {
            let file_id = format!("override #{}", i);
            for attr in file.body.attributes() {
                let Some(slot) = variables.get_mut(&attr.key) else {
                    warn!(file = %file_id, variable = %attr.key, "Override for undeclared variable ignored");
                    continue;
                };
                *slot = decode_default(&file_id, &attr.key, &attr.value)?;
            }
        }

        debug!(
            files = files.len(),
            variables = variables.len(),
            "Built variable table"
        );

        Ok(Self {
            variables,
            metadata,
        })
    }

    /// Read each `(file id, source text)` pair and build a table from the
    /// declarations found, without schemas or overrides.
    pub fn build_from_sources(
        sources: &[(&str, &str)],
        metadata: Metadata,
    ) -> Result<Self, BuildError> {
        let mut files = BTreeMap::new();
        for (file_id, source) in sources {
            let file = config::read(source).map_err(|err| {
                BuildError::new(*file_id, err.to_string()).with_span(err.span.clone())
            })?;
            files.insert(file_id.to_string(), file);
        }
        Self::build(&files, &[], &[], metadata)
    }

    /// The value of `name`; `Absent` when undeclared or without a default.
    pub fn lookup(&self, name: &str) -> Value {
        self.variables.get(name).cloned().unwrap_or_default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn meta(&self, slot: MetaSlot) -> Value {
        Value::Str(self.metadata.get(slot).to_string())
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Declared names in ascending order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.variables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn declaration(file_id: &str, block: &Block) -> Result<(String, Value), BuildError> {
    let name = match block.labels.as_slice() {
        [name] => name.clone(),
        labels => {
            return Err(BuildError::new(
                file_id,
                format!(
                    "variable block expects exactly one label, found {}",
                    labels.len()
                ),
            ));
        }
    };

    // `default = ...` takes precedence over the older `default { ... }` form.
    let value = match block.body.attribute("default") {
        Some(attr) => decode_default(file_id, &name, &attr.value)?,
        None => match block.body.blocks_of_type("default").last() {
            Some(default) => decode_default(file_id, &name, &default.body.to_object())?,
            None => Value::Absent,
        },
    };
    Ok((name, value))
}

fn decode_default(file_id: &str, name: &str, literal: &Literal) -> Result<Value, BuildError> {
    decode(literal)
        .map_err(|err| BuildError::new(file_id, format!("variable \"{}\": {}", name, err)))
}
