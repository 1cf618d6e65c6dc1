//! Style registry

use super::{catalog, inspect_fragment, StyleDefinition, StyleFamily};
use crate::error::{Error, Result};
use ahash::AHashMap;
use once_cell::sync::Lazy;

/// The shared, read-only catalog registry; cloned into every document
static BUILTIN: Lazy<StyleRegistry> = Lazy::new(|| {
    let mut registry = StyleRegistry::empty();
    for &(name, xml) in catalog::BUILTIN_STYLES {
        registry
            .register_xml(Some(name), xml)
            .expect("built-in style catalog is well-formed");
    }
    registry
});

/// Mapping from style name to definition
///
/// Names are case-sensitive and unique within a registry; re-registering a
/// name overwrites the previous definition. The built-in catalog lives
/// behind a process-wide [`Lazy`] and is never mutated; documents take a
/// copy and layer their own definitions on top.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: AHashMap<String, StyleDefinition>,
}

impl StyleRegistry {
    /// Create a registry with no styles at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the built-in catalog
    pub fn with_builtins() -> Self {
        BUILTIN.clone()
    }

    /// The shared built-in catalog
    pub fn builtin() -> &'static StyleRegistry {
        &BUILTIN
    }

    /// Number of registered styles
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the registry holds no styles
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Look up a definition by name
    pub fn get(&self, name: &str) -> Option<&StyleDefinition> {
        self.styles.get(name)
    }

    /// Insert or overwrite a definition under its own name
    pub fn register(&mut self, definition: StyleDefinition) {
        self.styles.insert(definition.name.clone(), definition);
    }

    /// Register a raw ODF fragment, deriving the family (and the name, when
    /// `name` is `None`, from the fragment's `style:name` attribute)
    ///
    /// Returns the name the definition was registered under.
    pub fn register_xml(&mut self, name: Option<&str>, xml: &str) -> Result<String> {
        let info = inspect_fragment(xml)?;
        let name = match name {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => info.name.ok_or_else(|| {
                Error::shape("style definition has neither a name nor a style:name attribute")
            })?,
        };
        self.register(StyleDefinition {
            name: name.clone(),
            family: info.family,
            xml: xml.to_string(),
        });
        Ok(name)
    }

    /// Resolve an ordered list of names to their definitions
    ///
    /// Fails with [`Error::UnknownStyle`] on the first absent name.
    pub fn resolve<'a, I, S>(&'a self, names: I) -> Result<Vec<&'a StyleDefinition>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                self.styles
                    .get(name)
                    .ok_or_else(|| Error::UnknownStyle(name.to_string()))
            })
            .collect()
    }

    /// Resolve the single family shared by a list of names
    ///
    /// Returns `None` for an empty list. Fails with [`Error::StyleConflict`]
    /// when the names mix families, for contexts that require exactly one.
    pub fn resolve_family<I, S>(&self, names: I) -> Result<Option<StyleFamily>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut family = None;
        for definition in self.resolve(names)? {
            match family {
                None => family = Some(definition.family),
                Some(seen) if seen != definition.family => {
                    return Err(Error::StyleConflict(format!(
                        "'{}' has family {:?}, expected {:?}",
                        definition.name, definition.family, seen
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(family)
    }

    /// First definition of the wanted family among `names`
    ///
    /// All names are resolved (any unknown name is an error) before the
    /// family filter picks the winner.
    pub fn first_of_family<'a, I, S>(
        &'a self,
        names: I,
        family: StyleFamily,
    ) -> Result<Option<&'a StyleDefinition>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(self
            .resolve(names)?
            .into_iter()
            .find(|definition| definition.family == family))
    }
}
