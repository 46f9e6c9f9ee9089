#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
        }
    }
}

/// Moves the front end to another screen.
///
/// Invoked from background tasks, so implementations must be shareable across threads.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
