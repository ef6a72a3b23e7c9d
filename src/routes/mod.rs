//! Client route table, navigation guard, and redirect policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation attempt in the app shell flows through this module:
//! the location is resolved against a route tree compiled once at startup,
//! the guard checks the matched chain against the current session flag, and
//! redirect records are followed until a renderable view is reached.
//!
//! DESIGN
//! ======
//! Route declarations (`RouteDef`) form an explicit tree. `RouteTable::compile`
//! runs the inheritance pass once, so per-navigation work is a linear scan of
//! flattened leaf records with no hidden runtime matching rules. The guard and
//! the default-destination policy take the session flag as a parameter and
//! never touch browser storage themselves.

pub mod definitions;
pub mod guard;
pub mod navigator;
pub mod pattern;
pub mod table;

pub use guard::{Decision, decide, guard};
pub use navigator::{MAX_REDIRECTS, NavigationOutcome, RedirectReason, navigate};
pub use pattern::{Params, PathPattern};
pub use table::{CompiledRoute, Resolved, RouteRecord, RouteTable};

/// Renderable units the route table can point at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    Login,
    Register,
    /// Authenticated shell wrapping every `/authenticated/*` page.
    AppLayout,
    Profile,
    Communities,
    CommunityDetail,
    /// Study-partner discovery.
    Matches,
    Chat,
}

/// Where a redirect should land.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectTarget {
    /// A literal path such as `/authenticated`.
    Path(&'static str),
    /// A named route; its pattern must not need parameters.
    Name(&'static str),
}

/// What a route record does once matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    View(ViewId),
    Redirect(RedirectTarget),
    /// Landing choice computed by [`decide`] from the session flag.
    DefaultDestination,
}

/// Declarative route entry. Entries with children act as layouts and are
/// only reachable through one of their children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub target: RouteTarget,
    pub requires_auth: bool,
    pub children: Vec<RouteDef>,
}

impl RouteDef {
    fn new(path: &'static str, target: RouteTarget) -> Self {
        Self { path, name: None, target, requires_auth: false, children: Vec::new() }
    }

    pub fn view(path: &'static str, view: ViewId) -> Self {
        Self::new(path, RouteTarget::View(view))
    }

    pub fn redirect(path: &'static str, target: RedirectTarget) -> Self {
        Self::new(path, RouteTarget::Redirect(target))
    }

    pub fn default_destination(path: &'static str) -> Self {
        Self::new(path, RouteTarget::DefaultDestination)
    }

    #[must_use]
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Mark this entry (and therefore everything beneath it) as auth-only.
    #[must_use]
    pub fn requires_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<RouteDef>) -> Self {
        self.children = children;
        self
    }
}

/// Failures raised while compiling the table or resolving a navigation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("no route matches path: {path}")]
    NotFound { path: String },

    #[error("duplicate route name: {name}")]
    DuplicateName { name: String },

    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("unknown route name: {name}")]
    UnknownRouteName { name: String },

    #[error("route {name} requires parameter :{param}")]
    MissingParam { name: String, param: String },

    #[error("too many redirects while navigating to {path}")]
    RedirectLoop { path: String },
}
