//! HTML rendering of the browse page.
//!
//! One page: the filter form on top, matching movies underneath. All text
//! coming from the dataset or the request is escaped before it is written.

use crate::params::BrowseParams;
use data_loader::{Catalog, Movie};
use std::fmt::Write;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn bound_value(bound: Option<f64>) -> String {
    bound.map(|b| b.to_string()).unwrap_or_default()
}

fn score_text(score: Option<f64>) -> String {
    score.map(|s| s.to_string()).unwrap_or_else(|| "n/a".to_string())
}

fn checkbox(out: &mut String, name: &str, value: &str, selected: &[String]) {
    let checked = if selected.iter().any(|s| s == value) { " checked" } else { "" };
    let value = escape_html(value);
    let _ = write!(
        out,
        r#"<label><input type="checkbox" name="{name}" value="{value}"{checked}> {value}</label> "#
    );
}

fn number_input(out: &mut String, label: &str, name: &str, value: Option<f64>, step: &str) {
    let _ = write!(
        out,
        r#"<label>{label} <input type="number" step="{step}" name="{name}" value="{}"></label> "#,
        bound_value(value)
    );
}

fn render_form(out: &mut String, catalog: &Catalog, params: &BrowseParams) {
    out.push_str(r#"<form method="get" action="/">"#);
    let _ = write!(
        out,
        r#"<p><input type="text" name="search" placeholder="Search titles" value="{}"> <button type="submit">Search</button></p>"#,
        escape_html(&params.search)
    );

    out.push_str("<fieldset><legend>MPAA Rating</legend>");
    for rating in catalog.mpaa_ratings() {
        checkbox(out, "mpaa", rating.as_str(), &params.mpaa);
    }
    out.push_str("</fieldset>");

    out.push_str("<fieldset><legend>Genre</legend>");
    for genre in catalog.genres() {
        checkbox(out, "genre", genre, &params.genre);
    }
    out.push_str("</fieldset>");

    out.push_str("<fieldset><legend>IMDB Rating</legend>");
    number_input(out, "Min", "imdb_min", params.imdb_min, "0.1");
    number_input(out, "Max", "imdb_max", params.imdb_max, "0.1");
    out.push_str("</fieldset>");

    out.push_str("<fieldset><legend>Rotten Tomatoes Rating</legend>");
    number_input(out, "Min", "rt_min", params.rt_min, "1");
    number_input(out, "Max", "rt_max", params.rt_max, "1");
    out.push_str("</fieldset>");

    out.push_str("</form>");
}

fn render_movie(out: &mut String, movie: &Movie) {
    let title = movie.title.as_deref().unwrap_or("(untitled)");
    let _ = write!(
        out,
        r#"<li class="movie"><h3>{}</h3><div>MPAA: {}</div><div>Genre: {}</div><div>IMDB: {}</div><div>Rotten Tomatoes: {}</div></li>"#,
        escape_html(title),
        escape_html(movie.mpaa_rating.as_deref().unwrap_or("n/a")),
        escape_html(movie.major_genre.as_deref().unwrap_or("n/a")),
        score_text(movie.imdb_rating),
        score_text(movie.rotten_tomatoes_rating),
    );
}

/// Render the full browse page for one request
pub fn render_page(catalog: &Catalog, params: &BrowseParams, movies: &[&Movie]) -> String {
    let mut out = String::with_capacity(4096 + movies.len() * 256);
    out.push_str(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Movies</title></head><body><h1>Movies</h1>",
    );

    render_form(&mut out, catalog, params);

    let _ = write!(out, r#"<p class="count">{} of {} movies</p>"#, movies.len(), catalog.len());
    out.push_str(r#"<ul class="movies">"#);
    for movie in movies {
        render_movie(&mut out, movie);
    }
    out.push_str("</ul></body></html>");
    out
}
