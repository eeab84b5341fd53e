//! Static route table and the navigation guard that keeps auth-only pages
//! behind a login.

pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
    /// Hint for the view layer to load this page on demand.
    pub lazy: bool,
}

const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "home",
        requires_auth: false,
        lazy: false,
    },
    Route {
        path: "/login",
        name: "login",
        requires_auth: false,
        lazy: false,
    },
    Route {
        path: "/register",
        name: "register",
        requires_auth: false,
        lazy: false,
    },
    Route {
        path: "/favorites",
        name: "favorites",
        requires_auth: true,
        lazy: false,
    },
    Route {
        path: "/profile",
        name: "profile",
        requires_auth: true,
        lazy: true,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Proceed(&'static Route),
    Redirect(&'static str),
    NotFound,
}

pub struct Router;

impl Router {
    pub fn new() -> Self {
        Router
    }

    pub fn routes(&self) -> &'static [Route] {
        ROUTES
    }

    /// Single synchronous guard check per navigation: auth-required routes
    /// redirect to the login page when no session is present.
    pub fn resolve(&self, path: &str, is_authenticated: bool) -> Navigation {
        match ROUTES.iter().find(|route| route.path == path) {
            Some(route) if route.requires_auth && !is_authenticated => {
                Navigation::Redirect(LOGIN_PATH)
            }
            Some(route) => Navigation::Proceed(route),
            None => Navigation::NotFound,
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
