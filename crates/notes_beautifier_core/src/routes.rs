//! crates/notes_beautifier_core/src/routes.rs
//!
//! Views the client can show, the guard in front of the protected ones, and the
//! navigation bar derived from the session.

use crate::domain::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Saved,
    Login,
    Signup,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Saved => "/saved",
            Route::Login => "/login",
            Route::Signup => "/signup",
        }
    }

    pub fn is_protected(self) -> bool {
        matches!(self, Route::Home | Route::Saved)
    }
}

/// What to show in place of a route for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// The session is still being restored; show a neutral waiting indicator.
    Wait,
    Render,
    Redirect(Route),
}

/// Pure function of the session: protected routes render only for a resolved user.
pub fn guard(route: Route, session: &Session) -> GuardDecision {
    if !route.is_protected() {
        return GuardDecision::Render;
    }
    if session.is_loading() {
        GuardDecision::Wait
    } else if session.user().is_some() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(Route::Login)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    Go { label: &'static str, route: Route },
    /// Clears the session, then navigates to the login view.
    Logout,
}

pub fn nav_links(session: &Session) -> Vec<NavLink> {
    let mut links = vec![NavLink::Go {
        label: "Home",
        route: Route::Home,
    }];
    if session.user().is_some() {
        links.push(NavLink::Go {
            label: "Saved Notes",
            route: Route::Saved,
        });
        links.push(NavLink::Logout);
    } else {
        links.push(NavLink::Go {
            label: "Login",
            route: Route::Login,
        });
        links.push(NavLink::Go {
            label: "Sign Up",
            route: Route::Signup,
        });
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ada;

    #[test]
    fn protected_routes_wait_render_or_redirect() {
        let signed_in = Session::signed_in("jwt".into(), ada());
        for route in [Route::Home, Route::Saved] {
            assert_eq!(guard(route, &Session::pending()), GuardDecision::Wait);
            assert_eq!(guard(route, &signed_in), GuardDecision::Render);
            assert_eq!(
                guard(route, &Session::signed_out()),
                GuardDecision::Redirect(Route::Login)
            );
        }
    }

    #[test]
    fn public_routes_always_render() {
        for session in [Session::pending(), Session::signed_out()] {
            assert_eq!(guard(Route::Login, &session), GuardDecision::Render);
            assert_eq!(guard(Route::Signup, &session), GuardDecision::Render);
        }
    }

    #[test]
    fn navbar_depends_on_the_user() {
        let signed_in = nav_links(&Session::signed_in("jwt".into(), ada()));
        assert!(signed_in.contains(&NavLink::Logout));
        assert!(signed_in.contains(&NavLink::Go {
            label: "Saved Notes",
            route: Route::Saved
        }));

        let signed_out = nav_links(&Session::signed_out());
        assert!(!signed_out.contains(&NavLink::Logout));
        assert_eq!(signed_out.len(), 3);
    }

    #[test]
    fn navbar_links_only_to_served_routes() {
        for session in [Session::signed_in("jwt".into(), ada()), Session::signed_out()] {
            for link in nav_links(&session) {
                if let NavLink::Go { label, route } = link {
                    assert_ne!(label, "Dashboard");
                    assert!(["/", "/saved", "/login", "/signup"].contains(&route.path()));
                }
            }
        }
    }
}
