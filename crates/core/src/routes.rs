//! Route table and navigation guard

/// Who may visit a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    RequiresAuth,
    /// Only reachable while signed out (login, signup)
    RequiresGuest,
}

/// Application routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Rankings,
    Login,
    Signup,
    Profile,
    Classes,
    NotFound,
}

impl Route {
    /// Where signed-in users land
    pub const HOME: Self = Self::Rankings;

    pub const fn access(self) -> Access {
        match self {
            Self::Rankings | Self::Profile | Self::Classes => Access::RequiresAuth,
            Self::Login | Self::Signup => Access::RequiresGuest,
            Self::NotFound => Access::Public,
        }
    }
}

/// Outcome of [`guard`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Route),
}

/// Decide whether navigation to a route with `access` may proceed
pub const fn guard(access: Access, is_authenticated: bool) -> GuardDecision {
    match (access, is_authenticated) {
        (Access::RequiresAuth, false) => GuardDecision::Redirect(Route::Login),
        (Access::RequiresGuest, true) => GuardDecision::Redirect(Route::HOME),
        _ => GuardDecision::Allow,
    }
}
