// src/handlers/ui.rs
//! Server-rendered dashboard. Every tab is plain HTML with form posts, so the
//! page works without any client-side script.

use crate::catalog::{all_schemes, find_scheme, Category};
use crate::chat_session::COMMON_QUESTIONS;
use crate::dashboard::{Dashboard, NoticeKind, Tab};
use crate::models::{ProfileField, RecommendedScheme, SchemeRecord};
use crate::recommendation::EMPTY_HINT;
use crate::AppState;
use axum::{
    extract::{Extension, Query},
    response::Html,
    routing::get,
    Router,
};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use serde::Deserialize;
use std::fmt::Write;
use std::sync::Arc;

pub fn ui_routes() -> Router {
    Router::new().route("/", get(dashboard_page))
}

#[derive(Debug, Deserialize)]
pub struct TabQuery {
    pub tab: Option<String>,
}

pub async fn dashboard_page(
    Query(query): Query<TabQuery>,
    Extension(state): Extension<Arc<AppState>>,
) -> Html<String> {
    let mut dashboard = state.dashboard.write().await;
    if let Some(tab) = query.tab.as_deref().and_then(Tab::from_slug) {
        dashboard.select_tab(tab);
    }
    Html(render_dashboard(&mut dashboard))
}

const STYLE: &str = r###"
        * { box-sizing: border-box; }
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #f3f4f6; color: #111827; }
        header { text-align: center; padding: 2rem 1rem 1rem; }
        header h1 { color: #4338ca; font-size: 2.5rem; margin: 0; }
        header p { color: #6b7280; margin: 0.5rem 0 0; }
        nav { display: flex; justify-content: center; gap: 0.5rem; margin: 1rem 0 2rem; flex-wrap: wrap; }
        nav a { padding: 0.5rem 1.25rem; border-radius: 999px; background: #e0e7ff; color: #3730a3; text-decoration: none; font-weight: 600; }
        nav a.active { background: #4338ca; color: white; }
        main { max-width: 960px; margin: 0 auto; padding: 0 1rem 3rem; }
        .card { background: white; border-radius: 1rem; box-shadow: 0 1px 4px rgba(0,0,0,0.08); padding: 1.25rem; margin-bottom: 1rem; }
        .meta { color: #6b7280; font-size: 0.85rem; }
        .row { display: flex; gap: 0.5rem; align-items: center; flex-wrap: wrap; }
        .notice { padding: 0.75rem 1rem; border-radius: 0.5rem; margin-bottom: 1rem; }
        .notice.success { background: #dcfce7; color: #166534; }
        .notice.error { background: #fee2e2; color: #991b1b; }
        button { cursor: pointer; border: none; border-radius: 0.5rem; padding: 0.5rem 1rem; background: #4338ca; color: white; font-weight: 600; }
        button.secondary { background: #e5e7eb; color: #111827; }
        button.quick { background: #dbeafe; color: #1e40af; border-radius: 999px; }
        button:disabled { opacity: 0.5; cursor: not-allowed; }
        input, select, textarea { width: 100%; padding: 0.5rem; border: 1px solid #d1d5db; border-radius: 0.5rem; font: inherit; }
        label { display: block; font-weight: 600; margin: 0.75rem 0 0.25rem; }
        .bubble { padding: 0.75rem 1rem; border-radius: 1.25rem; max-width: 75%; margin: 0.5rem 0; }
        .bubble.user { background: #2563eb; color: white; margin-left: auto; }
        .bubble.assistant { background: #e5e7eb; }
        .tag { display: inline-block; background: #d1d5db; border-radius: 999px; padding: 0.1rem 0.5rem; font-size: 0.75rem; margin: 0.25rem 0.25rem 0 0; }
        .why { color: #15803d; font-style: italic; }
        .disclaimer { text-align: center; color: #9ca3af; font-size: 0.75rem; }
"###;

/// Renders the whole page for the current tab and consumes any pending notice.
pub fn render_dashboard(dashboard: &mut Dashboard) -> String {
    let notice = dashboard.take_notice();
    let mut html = String::with_capacity(16 * 1024);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>SchemesConnect</title>
    <style>{}</style>
</head>
<body>
<header>
    <h1>SchemesConnect</h1>
    <p>Your one-stop portal for government schemes &amp; citizen services</p>
</header>
<nav>"#,
        STYLE
    );

    for tab in Tab::ALL {
        let class = if tab == dashboard.tab { " class=\"active\"" } else { "" };
        let _ = write!(html, r#"<a href="{}"{}>{}</a>"#, tab.location(), class, tab.title());
    }
    html.push_str("</nav>\n<main>\n");

    if let Some(notice) = notice {
        let class = match notice.kind {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        };
        let _ = write!(html, r#"<div class="notice {}">{}</div>"#, class, text(&notice.text));
    }

    match dashboard.tab {
        Tab::Schemes => render_schemes(&mut html, dashboard),
        Tab::Community => render_community(&mut html),
        Tab::Chatbot => render_chat(&mut html, dashboard),
        Tab::Profile => render_profile(&mut html, dashboard),
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_schemes(html: &mut String, dashboard: &Dashboard) {
    let view = &dashboard.catalog;

    html.push_str(r#"<form class="card row" method="post" action="/schemes/filter">"#);
    html.push_str(r#"<select name="category" style="width:auto">"#);
    for category in Category::ALL {
        let selected = if category == view.category() { " selected" } else { "" };
        let _ = write!(
            html,
            r#"<option value="{}"{}>{}</option>"#,
            attr(category.as_str()),
            selected,
            text(category.as_str())
        );
    }
    let _ = write!(
        html,
        r#"</select><input type="text" name="search" value="{}" placeholder="Search schemes by title" style="flex:1"><button type="submit">Search</button></form>"#,
        attr(view.search())
    );

    if !dashboard.bookmarks.is_empty() {
        let titles: Vec<String> = dashboard
            .bookmarks
            .ids()
            .iter()
            .filter_map(|id| find_scheme(*id))
            .map(|s| text(&s.title).into_owned())
            .collect();
        let _ = write!(
            html,
            r#"<div class="card"><strong>Bookmarked ({})</strong><p class="meta">{}</p></div>"#,
            titles.len(),
            titles.join(" · ")
        );
    }

    let visible = view.visible();
    if visible.is_empty() {
        html.push_str(r#"<div class="card meta">No schemes match your filter.</div>"#);
    }
    for scheme in visible {
        render_scheme_card(html, scheme, view.is_expanded(scheme.id), dashboard.bookmarks.contains(scheme.id));
    }

    let _ = write!(
        html,
        r#"<p class="meta" style="text-align:center">Showing schemes from a catalog of {}.</p>"#,
        all_schemes().len()
    );
}

fn render_scheme_card(html: &mut String, scheme: &SchemeRecord, expanded: bool, bookmarked: bool) {
    let _ = write!(
        html,
        r#"<div class="card" id="scheme-{id}">
<div class="row" style="justify-content:space-between">
<h3 style="margin:0">{title}</h3>
<form method="post" action="/schemes/{id}/bookmark"><button type="submit" class="secondary" title="Bookmark">{mark}</button></form>
</div>
<p class="meta">{category} · Published {date}</p>
<p>{description}</p>
<form method="post" action="/schemes/{id}/details"><button type="submit" class="secondary">{toggle}</button></form>"#,
        id = scheme.id,
        title = text(&scheme.title),
        mark = if bookmarked { "★ Bookmarked" } else { "☆ Bookmark" },
        category = text(&scheme.category),
        date = text(&scheme.publish_date),
        description = text(&scheme.description),
        toggle = if expanded { "Hide Details" } else { "View Details" },
    );

    if expanded {
        let _ = write!(
            html,
            r#"<p><strong>Eligibility:</strong> {}</p><p><strong>Documents Required:</strong></p><ul>"#,
            text(&scheme.eligibility)
        );
        for doc in &scheme.documents {
            let _ = write!(html, "<li>{}</li>", text(doc));
        }
        let _ = write!(
            html,
            r#"</ul><a href="{}" target="_blank" rel="noopener">Apply Now</a>"#,
            attr(&scheme.apply_link)
        );
    }
    html.push_str("</div>\n");
}

fn render_community(html: &mut String) {
    html.push_str(
        r#"<div class="card"><h2>Community</h2><p class="meta">Discussions and shared experiences from other citizens will appear here.</p></div>"#,
    );
}

fn render_chat(html: &mut String, dashboard: &Dashboard) {
    let chat = &dashboard.chat;

    html.push_str(r#"<div class="card row">"#);
    for question in COMMON_QUESTIONS {
        let _ = write!(
            html,
            r#"<form method="post" action="/chat/quick"><input type="hidden" name="question" value="{}"><button type="submit" class="quick"{}>{}</button></form>"#,
            attr(question),
            if chat.is_loading() { " disabled" } else { "" },
            text(question)
        );
    }
    html.push_str("</div>\n<div class=\"card\" style=\"min-height:400px\">");

    for message in chat.transcript() {
        let _ = write!(
            html,
            r#"<div class="bubble {}">{}"#,
            message.role.as_str(),
            text(&message.content)
        );
        if let Some(sources) = &message.sources {
            html.push_str("<div>");
            for source in sources {
                let _ = write!(html, r#"<span class="tag">{}</span>"#, text(source));
            }
            html.push_str("</div>");
        }
        html.push_str("</div>\n");
    }
    if chat.is_loading() {
        html.push_str(r#"<div class="bubble assistant meta">Assistant is typing…</div>"#);
    }
    if chat.transcript().is_empty() && !chat.is_loading() {
        html.push_str(r#"<p class="meta">Ask anything about government schemes, or pick a common question above.</p>"#);
    }

    let _ = write!(
        html,
        r#"</div>
<form class="card row" method="post" action="/chat/send">
<textarea name="message" rows="1" placeholder="Type a message..." style="flex:1">{}</textarea>
<button type="submit"{}>Send</button>
</form>
<p class="disclaimer">*SchemesConnect assistant may make mistakes. Always verify important information.</p>"#,
        text(chat.input()),
        if chat.is_loading() { " disabled" } else { "" }
    );
}

fn render_profile(html: &mut String, dashboard: &Dashboard) {
    let profile = dashboard.profile.profile();

    html.push_str(
        r#"<h2>Citizen Profile</h2><p class="meta">Fill in your details to get personalized scheme recommendations.</p>
<form class="card" method="post" action="/profile">"#,
    );

    for field in ProfileField::ALL {
        let value = profile.get(field);
        let _ = write!(html, r#"<label for="{name}">{label}</label>"#, name = field.name(), label = text(field.label()));
        let options = field.options();
        if options.is_empty() {
            let kind = if field == ProfileField::Age { "number" } else { "text" };
            let _ = write!(
                html,
                r#"<input type="{}" id="{}" name="{}" value="{}" placeholder="{}">"#,
                kind,
                field.name(),
                field.name(),
                attr(value),
                attr(field.placeholder())
            );
        } else {
            let _ = write!(
                html,
                r#"<select id="{}" name="{}"><option value="">{}</option>"#,
                field.name(),
                field.name(),
                text(field.placeholder())
            );
            for (option, label) in options {
                let selected = if *option == value { " selected" } else { "" };
                let _ = write!(
                    html,
                    r#"<option value="{}"{}>{}</option>"#,
                    attr(option),
                    selected,
                    text(label)
                );
            }
            html.push_str("</select>");
        }
    }

    let recommendations = &dashboard.recommendations;
    let _ = write!(
        html,
        r#"<div class="row" style="margin-top:1rem">
<button type="submit" name="action" value="save" style="flex:1">Save Profile</button>
<button type="submit" name="action" value="recommend" style="flex:1;background:#16a34a"{}>Recommend Schemes</button>
</div>
</form>"#,
        if recommendations.is_loading() { " disabled" } else { "" }
    );

    if recommendations.is_loading() {
        html.push_str(r#"<div class="card meta">Finding schemes for you…</div>"#);
    } else if let Some(error) = recommendations.error() {
        let _ = write!(html, r#"<div class="notice error">{}</div>"#, text(error));
    } else if recommendations.schemes().is_empty() {
        let _ = write!(html, r#"<p class="meta" style="text-align:center">{}</p>"#, text(EMPTY_HINT));
    } else {
        html.push_str("<h2>Recommended Schemes for You</h2>");
        for scheme in recommendations.schemes() {
            render_recommendation(html, scheme);
        }
    }
}

fn render_recommendation(html: &mut String, scheme: &RecommendedScheme) {
    let _ = write!(
        html,
        r#"<div class="card">
<h3 style="margin:0;color:#4338ca">{}</h3>
<p class="meta">Category: {}</p>
<p>{}</p>
<p><strong>Eligibility:</strong> {}</p>"#,
        text(&scheme.title),
        text(&scheme.category),
        text(&scheme.description),
        text(&scheme.eligibility)
    );
    if !scheme.documents.is_empty() {
        let docs: Vec<String> = scheme.documents.iter().map(|d| text(d).into_owned()).collect();
        let _ = write!(html, "<p><strong>Documents:</strong> {}</p>", docs.join(", "));
    }
    let _ = write!(
        html,
        r#"<p class="why">💡 {}</p>
<div class="row" style="justify-content:space-between">
<a href="{}" target="_blank" rel="noopener">Apply Here</a>
<span class="meta">Confidence: {} · Source: {}</span>
</div>
</div>
"#,
        text(&scheme.why_recommended),
        attr(&scheme.apply_link),
        scheme.confidence,
        text(&scheme.source)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    async fn dashboard() -> Dashboard {
        Dashboard::load(Arc::new(MemoryStorage::new())).await
    }

    #[tokio::test]
    async fn schemes_tab_lists_catalog() {
        let mut dashboard = dashboard().await;
        let page = render_dashboard(&mut dashboard);
        assert!(page.contains("Atal Pension Yojana"));
        assert!(page.contains("Women &amp; Child Welfare Program"));
        assert!(!page.contains("Documents Required"));
    }

    #[tokio::test]
    async fn expanded_card_shows_documents() {
        let mut dashboard = dashboard().await;
        dashboard.catalog.toggle_details(3);
        let page = render_dashboard(&mut dashboard);
        assert!(page.contains("Land Ownership Papers"));
        assert!(page.contains("https://pmfby.gov.in/"));
    }

    #[tokio::test]
    async fn chat_content_is_escaped() {
        let mut dashboard = dashboard().await;
        dashboard.select_tab(Tab::Chatbot);
        dashboard.chat.set_input("<script>alert(1)</script>");
        dashboard.chat.begin_send(None).unwrap();
        let page = render_dashboard(&mut dashboard);
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>alert"));
        assert!(page.contains("Assistant is typing"));
    }

    #[tokio::test]
    async fn profile_tab_shows_empty_hint() {
        let mut dashboard = dashboard().await;
        dashboard.select_tab(Tab::Profile);
        let page = render_dashboard(&mut dashboard);
        assert!(page.contains("No schemes found yet"));
        assert!(page.contains(r#"name="casteCategory""#));
    }
}
