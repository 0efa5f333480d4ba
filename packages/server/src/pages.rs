//! Server-rendered page routes.
//!
//! Thin HTML views over the same data the JSON API exposes. The route
//! table is static and fixed at startup; unmatched URLs fall through to
//! the not-found page, which renders a static body rather than
//! signaling an error beyond the 404 status.

use actix_web::{HttpResponse, web};

use school_map_analytics::{dashboard_stats, top_at_risk_districts};
use school_map_pages::Route;

use crate::AppState;

fn layout(title: &str, body: &str) -> String {
    let nav: String = Route::all()
        .iter()
        .map(|route| format!(r#"<a href="{}">{route}</a> "#, route.path()))
        .collect();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\">\
         <title>{title} – Green School Map</title></head>\n\
         <body>\n<nav>{nav}</nav>\n<main>\n<h1>{title}</h1>\n{body}\n</main>\n</body>\n</html>\n"
    )
}

fn html(title: &str, body: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(layout(title, body))
}

/// `GET /`
pub async fn login() -> HttpResponse {
    html(
        "Welcome Back",
        "<p>Sign in to access the Green School Map dashboard.</p>\
         <form method=\"post\" action=\"/api/login\">\
         <label>Email or Phone <input name=\"email\" required></label>\
         <label>Password <input name=\"password\" type=\"password\" required></label>\
         <button type=\"submit\">Sign In</button>\
         </form>",
    )
}

/// `GET /dashboard`
pub async fn dashboard(state: web::Data<AppState>) -> HttpResponse {
    let stats = dashboard_stats(&state.dataset);
    let body = format!(
        "<p>Real-time overview of school safety and industrial impact.</p>\
         <ul>\
         <li>Total Schools Monitored: {}</li>\
         <li>High Risk Schools: {}</li>\
         <li>Active Factories: {}</li>\
         <li>Avg PM2.5 Level: {:.0} µg/m³</li>\
         </ul>",
        stats.total_schools, stats.high_risk_schools, stats.active_factories, stats.avg_pm25
    );
    html("Cairo Environmental Dashboard", &body)
}

/// `GET /map`
pub async fn map() -> HttpResponse {
    html(
        "Live Map",
        "<p>Interactive map of monitored schools and factories. \
         Marker data is served from <code>/api/map</code>.</p>",
    )
}

/// `GET /analytics`
pub async fn analytics() -> HttpResponse {
    let ranking: String = top_at_risk_districts(3)
        .iter()
        .map(|stat| format!("<li>{}: {}%</li>", stat.district, stat.risk_score))
        .collect();
    let body = format!(
        "<p>Detailed breakdown of environmental data across Cairo districts.</p>\
         <h2>Top At-Risk Areas</h2><ol>{ranking}</ol>"
    );
    html("Analytics &amp; Reports", &body)
}

/// `GET /settings`
pub async fn settings() -> HttpResponse {
    html(
        "Settings",
        "<p>Manage your application preferences and account settings.</p>",
    )
}

/// `GET /contact`
pub async fn contact() -> HttpResponse {
    html(
        "Contact &amp; Feedback",
        "<form method=\"post\" action=\"/api/contact\">\
         <label>Name <input name=\"name\" required></label>\
         <label>Email <input name=\"email\" type=\"email\" required></label>\
         <label>Message <textarea name=\"message\" required></textarea></label>\
         <button type=\"submit\">Send</button>\
         </form>",
    )
}

/// Catch-all for unmatched URLs.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(layout(
            "Page Not Found",
            "<p>The page you are looking for does not exist.</p>",
        ))
}
