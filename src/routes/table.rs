//! Compiled route table and path resolution.
//!
//! DESIGN
//! ======
//! `compile` flattens the declared tree depth-first, in declaration order,
//! into leaf records. Each leaf carries its joined pattern, the chain of
//! records it matched (outermost first), and an effective `requires_auth`
//! that is set when the leaf or any ancestor declares it. Resolution is a
//! first-match scan over those leaves.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::collections::HashSet;

use super::pattern::{normalize_path, split_segments};
use super::{Params, PathPattern, RedirectTarget, RouteDef, RouteError, RouteTarget, ViewId};

/// One declared record on a matched chain, with its own (not inherited) flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteRecord {
    pub name: Option<&'static str>,
    pub target: RouteTarget,
    pub requires_auth: bool,
}

impl From<&RouteDef> for RouteRecord {
    fn from(def: &RouteDef) -> Self {
        Self { name: def.name, target: def.target, requires_auth: def.requires_auth }
    }
}

/// Flattened leaf route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledRoute {
    pattern: PathPattern,
    matched: Vec<RouteRecord>,
    requires_auth: bool,
}

impl CompiledRoute {
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// Matched chain, outermost ancestor first and the leaf last.
    pub fn matched(&self) -> &[RouteRecord] {
        &self.matched
    }

    pub fn leaf(&self) -> &RouteRecord {
        // `compile` never emits an empty chain.
        &self.matched[self.matched.len() - 1]
    }

    pub fn name(&self) -> Option<&'static str> {
        self.leaf().name
    }

    pub fn target(&self) -> RouteTarget {
        self.leaf().target
    }

    /// Effective flag after inheritance.
    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }
}

/// Result of resolving a concrete path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub path: String,
    pub route: CompiledRoute,
    pub params: Params,
}

impl Resolved {
    pub fn name(&self) -> Option<&'static str> {
        self.route.name()
    }

    pub fn target(&self) -> RouteTarget {
        self.route.target()
    }

    pub fn matched(&self) -> &[RouteRecord] {
        self.route.matched()
    }

    /// Leaf view, if the leaf renders one.
    pub fn view(&self) -> Option<ViewId> {
        match self.target() {
            RouteTarget::View(view) => Some(view),
            RouteTarget::Redirect(_) | RouteTarget::DefaultDestination => None,
        }
    }

    /// Views of enclosing layouts, outermost first.
    pub fn layouts(&self) -> impl DoubleEndedIterator<Item = ViewId> + '_ {
        let ancestors = &self.matched()[..self.matched().len() - 1];
        ancestors.iter().filter_map(|record| match record.target {
            RouteTarget::View(view) => Some(view),
            RouteTarget::Redirect(_) | RouteTarget::DefaultDestination => None,
        })
    }
}

/// Immutable route table built once at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
    names: Vec<&'static str>,
}

impl RouteTable {
    /// Run the inheritance pass over `defs`.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` when two records share a name and
    /// `InvalidPattern` when a joined leaf pattern does not parse.
    pub fn compile(defs: Vec<RouteDef>) -> Result<Self, RouteError> {
        let mut table = Self::default();
        let mut seen = HashSet::new();
        for def in &defs {
            table.flatten(def, "", &[], &mut seen)?;
        }
        Ok(table)
    }

    fn flatten(
        &mut self,
        def: &RouteDef,
        parent_path: &str,
        chain: &[RouteRecord],
        seen: &mut HashSet<&'static str>,
    ) -> Result<(), RouteError> {
        if let Some(name) = def.name {
            if !seen.insert(name) {
                return Err(RouteError::DuplicateName { name: name.to_owned() });
            }
            self.names.push(name);
        }

        let full_path = join_paths(parent_path, def.path);
        let mut matched = chain.to_vec();
        matched.push(RouteRecord::from(def));

        if def.children.is_empty() {
            let pattern = PathPattern::parse(&full_path)?;
            let requires_auth = matched.iter().any(|record| record.requires_auth);
            self.routes.push(CompiledRoute { pattern, matched, requires_auth });
            return Ok(());
        }

        for child in &def.children {
            self.flatten(child, &full_path, &matched, seen)?;
        }
        Ok(())
    }

    /// Resolve `path` to the first matching leaf.
    ///
    /// # Errors
    ///
    /// Returns `RouteError::NotFound` when nothing matches.
    pub fn resolve(&self, path: &str) -> Result<Resolved, RouteError> {
        let path = normalize_path(path);
        let found = {
            let segments: Vec<&str> = split_segments(&path).collect();
            self.routes
                .iter()
                .find_map(|route| route.pattern.matches(&segments).map(|params| (route.clone(), params)))
        };
        match found {
            Some((route, params)) => Ok(Resolved { path, route, params }),
            None => Err(RouteError::NotFound { path }),
        }
    }

    /// Turn a redirect target into a concrete path.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRouteName` for a name with no leaf route and
    /// `MissingParam` when the named pattern needs a parameter.
    pub fn href(&self, target: &RedirectTarget) -> Result<String, RouteError> {
        match *target {
            RedirectTarget::Path(path) => Ok(normalize_path(path)),
            RedirectTarget::Name(name) => {
                let route = self
                    .route_named(name)
                    .ok_or_else(|| RouteError::UnknownRouteName { name: name.to_owned() })?;
                route
                    .pattern
                    .build(&Params::default())
                    .map_err(|param| RouteError::MissingParam { name: name.to_owned(), param })
            }
        }
    }

    pub fn route_named(&self, name: &str) -> Option<&CompiledRoute> {
        self.routes.iter().find(|route| route.name() == Some(name))
    }

    /// Every declared name, layouts included, in declaration order.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn routes(&self) -> &[CompiledRoute] {
        &self.routes
    }
}

/// Join a child path onto its parent. Absolute child paths stand alone and an
/// empty child path addresses the parent itself.
fn join_paths(parent: &str, child: &str) -> String {
    if child.starts_with('/') || parent.is_empty() {
        child.to_owned()
    } else if child.is_empty() {
        parent.to_owned()
    } else {
        format!("{}/{child}", parent.trim_end_matches('/'))
    }
}
