//! Markup generation.

use std::fmt::Write;

use switcher_protocols::{Action, ProfileEntry, RosterEntry, View};

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render a view as the widget fragment.
pub fn to_markup(view: &View) -> String {
    let mut html = String::new();
    let display = if view.form_visible() { "block" } else { "none" };

    // Writing into a String cannot fail.
    let _ = writeln!(html, r#"<form id="loginForm" style="display: {}">"#, display);
    html.push_str(r#"  <input id="username" name="username" type="text" placeholder="Username">"#);
    html.push('\n');
    html.push_str(r#"  <input id="password" name="password" type="password" placeholder="Password">"#);
    html.push('\n');
    html.push_str("  <button type=\"submit\">Add Account</button>\n");
    html.push_str("</form>\n");

    html.push_str("<ul id=\"userList\">\n");
    match view {
        View::Profile(profile) => push_profile(&mut html, profile),
        View::Roster { entries } => {
            for entry in entries {
                push_user_item(&mut html, entry);
            }
        }
    }
    html.push_str("</ul>\n");

    html
}

fn push_profile(html: &mut String, profile: &ProfileEntry) {
    let _ = write!(
        html,
        r#"  <li class="profile">{}<i class="profileIcon fa-regular fa-user"></i><div class="profileBtnContainer">"#,
        escape(&profile.username)
    );
    for action in &profile.actions {
        push_button(html, action);
    }
    html.push_str("</div></li>\n");
}

fn push_user_item(html: &mut String, entry: &RosterEntry) {
    let _ = write!(
        html,
        r#"  <li class="userItem">{}<i class="userItemIcon fa-regular fa-user"></i>"#,
        escape(&entry.username)
    );
    push_button(html, &entry.action);
    html.push_str("</li>\n");
}

fn push_button(html: &mut String, action: &Action) {
    let class = match action {
        Action::LogIn(_) => "logInBtn",
        Action::LogOut => "logOutBtn",
        Action::Remove => "removeBtn",
    };
    let _ = write!(html, r#"<button class="{}" data-action="{}""#, class, action.slug());
    if let Action::LogIn(id) = action {
        let _ = write!(html, r#" data-account="{}""#, id.as_u64());
    }
    let _ = write!(html, ">{}</button>", action.label());
}
