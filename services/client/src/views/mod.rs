//! services/client/src/views/mod.rs
//!
//! Terminal renderings of every view. Each renderer is a pure function of the
//! core state it displays.

pub mod home;
pub mod saved;

pub use home::render_home;
pub use saved::render_saved;

use notes_beautifier_core::domain::Session;
use notes_beautifier_core::routes::{GuardDecision, NavLink, Route};

/// Markdown bold markers are dropped before display.
pub fn plain(text: &str) -> String {
    text.replace("**", "")
}

pub fn render_nav(links: &[NavLink], session: &Session) -> String {
    let mut items = vec!["AI Notes Beautifier".to_string()];
    for link in links {
        match link {
            NavLink::Go { label, route } => items.push(format!("{} ({})", label, route.path())),
            NavLink::Logout => items.push("Logout".to_string()),
        }
    }
    let mut out = items.join(" | ");
    if let Some(user) = session.user() {
        let who = if user.name.is_empty() { &user.email } else { &user.name };
        if !who.is_empty() {
            out.push_str(&format!("\nSigned in as {}", who));
        }
    }
    out
}

/// What to print instead of a protected view the guard did not let through.
pub fn render_guard(decision: GuardDecision) -> Option<String> {
    match decision {
        GuardDecision::Render => None,
        GuardDecision::Wait => Some("Loading...".to_string()),
        GuardDecision::Redirect(route) => Some(format!(
            "You need to log in first. Redirecting to {} (run `notes {}`).",
            route.path(),
            command_for(route)
        )),
    }
}

fn command_for(route: Route) -> &'static str {
    match route {
        Route::Home => "process",
        Route::Saved => "saved",
        Route::Login => "login",
        Route::Signup => "signup",
    }
}
