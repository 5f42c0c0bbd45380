//! Server-rendered case-study pages.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};
use folio_contact::escape_html;
use folio_content::{CaseStudy, CaseStudySummary, ContentError};
use tracing::error;

use crate::AppState;

type Page = (StatusCode, Html<String>);

fn layout(title: &str, main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
{main}
</body>
</html>
"#,
        title = escape_html(title),
    )
}

fn render_article(study: &CaseStudy) -> String {
    let published = study
        .date
        .as_deref()
        .map(|date| format!("<p class=\"published\">Published: {}</p>\n", escape_html(date)))
        .unwrap_or_default();

    let main = format!(
        "<article class=\"prose\">\n<h1>{}</h1>\n{published}{}</article>",
        escape_html(&study.title),
        study.html,
    );
    layout(&study.title, &main)
}

fn render_index(entries: &[CaseStudySummary]) -> String {
    let mut main = String::from("<main>\n<h1>Case Studies</h1>\n");
    if entries.is_empty() {
        main.push_str("<p>No case studies yet.</p>\n");
    } else {
        main.push_str("<ul class=\"case-studies\">\n");
        for entry in entries {
            let date = entry
                .date
                .as_deref()
                .map(|d| format!(" <time>{}</time>", escape_html(d)))
                .unwrap_or_default();
            main.push_str(&format!(
                "<li><a href=\"/case-studies/{slug}\">{title}</a>{date}<p>{summary}</p></li>\n",
                slug = escape_html(&entry.slug),
                title = escape_html(&entry.title),
                summary = escape_html(&entry.summary),
            ));
        }
        main.push_str("</ul>\n");
    }
    main.push_str("</main>");
    layout("Case Studies", &main)
}

fn error_page(err: ContentError) -> Page {
    match err {
        ContentError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            Html(layout("Not found", "<main>\n<h1>Not found</h1>\n</main>")),
        ),
        e => {
            error!("Case study page failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(layout("Error", "<main>\n<h1>Something went wrong</h1>\n</main>")),
            )
        }
    }
}

pub(crate) async fn index_page(State(state): State<AppState>) -> Page {
    match state.content.list().await {
        Ok(entries) => (StatusCode::OK, Html(render_index(&entries))),
        Err(e) => error_page(e),
    }
}

pub(crate) async fn case_study_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Page {
    match state.content.load(&slug).await {
        Ok(study) => (StatusCode::OK, Html(render_article(&study))),
        Err(e) => error_page(e),
    }
}
