// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Web UI for the Euthymia journal

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use chrono::{Local, Utc};
use serde::Deserialize;
use std::sync::{Arc, RwLock};
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::mood::{classify, Mood, Severity};
use crate::sentiment::{SentimentEngine, SentimentResult};
use crate::theme::Theme;
use crate::EuthymiaError;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub engine: SentimentEngine,
    /// Session theme flag; lives and dies with the process
    pub theme: RwLock<Theme>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let theme = RwLock::new(config.ui.default_theme);
        Self {
            config,
            engine: SentimentEngine::new(),
            theme,
        }
    }

    fn current_theme(&self) -> Theme {
        match self.theme.read() {
            Ok(theme) => *theme,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

/// Create the web application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Pages
        .route("/", get(index_page))
        .route("/analyze", post(analyze_entry))
        .route("/theme", post(toggle_theme))
        // API endpoints
        .route("/api/analyze", post(api_analyze))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// === Page Handlers ===

async fn index_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_journal_page(
        &state.config,
        state.current_theme(),
        "",
        None,
    ))
}

#[derive(Deserialize)]
struct AnalyzeForm {
    entry: String,
}

const EMPTY_ENTRY_MESSAGE: &str = "⚠️ Please enter some text into the journal area \
     before clicking Analyze. The box cannot be empty!";

async fn analyze_entry(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AnalyzeForm>,
) -> Html<String> {
    let theme = state.current_theme();

    let section = match state.engine.analyze(&form.entry) {
        Ok(result) => {
            let mood = classify(result.polarity);
            info!(
                "Entry scored {:.3} ({})",
                result.polarity,
                mood.label()
            );
            render_results_section(&result, mood)
        }
        Err(EuthymiaError::EmptyEntry) => render_message_box(Severity::Error, EMPTY_ENTRY_MESSAGE),
        Err(e) => {
            warn!("Analysis failed: {}", e);
            render_message_box(Severity::Error, &format!("An error occurred: {}", e))
        }
    };

    Html(render_journal_page(
        &state.config,
        theme,
        &form.entry,
        Some(&section),
    ))
}

async fn toggle_theme(State(state): State<Arc<AppState>>) -> Redirect {
    let mut theme = match state.theme.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    theme.toggle();
    info!("Theme switched to {:?}", *theme);
    Redirect::to("/")
}

// === API Handlers ===

#[derive(Deserialize)]
struct AnalyzeRequest {
    text: String,
}

async fn api_analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    match state.engine.analyze(&request.text) {
        Ok(result) => {
            let mood = classify(result.polarity);
            Json(serde_json::json!({
                "polarity": result.polarity,
                "mood": mood.label(),
                "severity": mood.severity().css_class(),
                "scores": {
                    "positive": result.positive,
                    "neutral": result.neutral,
                    "negative": result.negative,
                },
                "analyzed_at": Utc::now(),
            }))
            .into_response()
        }
        Err(e @ EuthymiaError::EmptyEntry) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
        Err(e) => {
            warn!("API analysis failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

// === Template Rendering ===

/// Escape user text before it goes back into markup
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
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

fn base_template(title: &str, theme: Theme, content: &str) -> String {
    let palette = theme.palette();
    let year = Local::now().format("%Y");

    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        :root {{
            --bg: {bg};
            --text: {text};
            --input-bg: {input_bg};
            --footer-bg: {footer_bg};
            --border: {border};
            --accent: {accent};
            --accent-shadow: {accent_shadow};
        }}
        * {{ box-sizing: border-box; margin: 0; padding: 0; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: var(--bg);
            color: var(--text);
            line-height: 1.6;
        }}
        .container {{ max-width: 860px; margin: 0 auto; padding: 20px 20px 80px; }}
        header {{
            display: flex;
            align-items: center;
            gap: 15px;
            padding: 15px 0;
            border-bottom: 1px solid var(--border);
        }}
        header .logo {{ font-size: 2.5em; color: var(--accent); }}
        header h1 {{ font-size: 1.6em; flex: 1; }}
        h2 {{ margin: 25px 0 10px; }}
        label {{
            display: block;
            font-size: 1.2em;
            font-weight: 600;
            color: var(--accent);
            margin-bottom: 10px;
        }}
        textarea {{
            width: 100%;
            min-height: 250px;
            background: var(--input-bg);
            color: var(--text);
            border: 1px solid var(--border);
            border-radius: 12px;
            padding: 20px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.05);
            font: inherit;
            transition: all 0.3s;
        }}
        button.primary {{
            margin-top: 15px;
            background: var(--accent);
            color: white;
            font-weight: bold;
            border: none;
            border-radius: 8px;
            padding: 10px 20px;
            box-shadow: 0 4px 10px var(--accent-shadow);
            cursor: pointer;
            transition: all 0.3s ease-in-out;
        }}
        button.primary:hover {{ filter: brightness(0.9); box-shadow: 0 6px 12px var(--accent-shadow); }}
        button.toggle {{
            background: none;
            color: var(--text);
            border: 1px solid var(--border);
            border-radius: 8px;
            padding: 8px 14px;
            cursor: pointer;
        }}
        .box {{
            border-radius: 8px;
            border-left: 5px solid;
            padding: 15px 20px;
            margin: 20px 0;
        }}
        .box.success {{ background: rgba(40, 167, 69, 0.12); border-color: #28a745; }}
        .box.info {{ background: rgba(23, 162, 184, 0.12); border-color: #17a2b8; }}
        .box.warning {{ background: rgba(255, 193, 7, 0.15); border-color: #ffc107; }}
        .box.error {{ background: rgba(220, 53, 69, 0.12); border-color: #dc3545; }}
        .results-grid {{
            display: grid;
            grid-template-columns: 1fr 2fr;
            gap: 20px;
            margin-top: 20px;
        }}
        .metric {{
            background: var(--input-bg);
            border: 1px solid var(--border);
            border-radius: 12px;
            padding: 20px;
            text-align: center;
        }}
        .metric .value {{ font-size: 2.2em; font-weight: bold; color: var(--accent); }}
        .meter {{ width: 100%; accent-color: var(--accent); }}
        .meter-labels {{ display: flex; justify-content: space-between; font-size: 0.85em; }}
        details {{
            margin-top: 20px;
            border: 1px solid var(--border);
            border-radius: 8px;
            padding: 12px 16px;
        }}
        details pre {{
            background: var(--input-bg);
            border-radius: 6px;
            padding: 10px;
            margin: 10px 0;
            overflow-x: auto;
        }}
        .caption {{ font-size: 0.85em; opacity: 0.7; }}
        hr {{ border: none; border-top: 1px solid var(--border); margin: 25px 0; }}
        .footer {{
            position: fixed;
            left: 0;
            bottom: 0;
            width: 100%;
            background: var(--footer-bg);
            color: #6c757d;
            text-align: center;
            padding: 10px 0;
            font-size: 0.85em;
            border-top: 1px solid var(--border);
        }}
    </style>
</head>
<body>
    <main class="container">
        {content}
    </main>
    <div class="footer">
        <p>© {year} AI Mood-Tracker. Powered by VADER &amp; Axum. | Privacy-Focused Analysis.</p>
    </div>
</body>
</html>"#,
        title = title,
        bg = palette.background,
        text = palette.text,
        input_bg = palette.input_background,
        footer_bg = palette.footer_background,
        border = palette.border,
        accent = palette.accent,
        accent_shadow = palette.accent_shadow,
        year = year,
        content = content,
    )
}

fn render_journal_page(
    config: &AppConfig,
    theme: Theme,
    entry: &str,
    section: Option<&str>,
) -> String {
    let header = format!(r#"
        <header>
            <span class="logo">🧠</span>
            <h1>{}</h1>
            <form method="post" action="/theme">
                <button type="submit" class="toggle">{}</button>
            </form>
        </header>
    "#, config.ui.title, theme.toggle_label());

    let welcome = render_message_box(
        Severity::Info,
        "<strong>Welcome to your Digital Journal!</strong> Write about your day to \
         receive an <strong>Emotional Tone</strong> analysis. The AI calculates a \
         Polarity Score from -1.0 (Very Negative) to +1.0 (Very Positive).",
    );

    let form = format!(r#"
        <h2>🖋️ Journal Input Area</h2>
        <form method="post" action="/analyze">
            <label for="entry">✍️ Express yourself here:</label>
            <textarea id="entry" name="entry"
                placeholder="Example: I had a challenging meeting but felt proud of how I handled the difficult questions. Later, the rain made me feel a bit down. I feel motivated for tomorrow.">{}</textarea>
            <button type="submit" class="primary">✨ Analyze My Mood &amp; Get Insights</button>
        </form>
    "#, escape_html(entry));

    let content = format!(
        "{}\n{}\n{}\n{}",
        header,
        welcome,
        form,
        section.unwrap_or(""),
    );

    base_template(&config.ui.title, theme, &content)
}

fn render_results_section(result: &SentimentResult, mood: Mood) -> String {
    let severity = mood.severity();

    let metric = format!(r#"
        <div class="metric">
            <h3>Overall Sentiment</h3>
            <div class="value">{:.3}</div>
            <div class="delta">{} {}</div>
        </div>
    "#, result.polarity, mood.label(), mood.emoji());

    let meter = format!(r#"
        <div>
            <h3>Visual Meter</h3>
            <input class="meter" type="range" min="-1.0" max="1.0" step="0.001"
                   value="{:.3}" disabled>
            <div class="meter-labels"><span>Negative (-1.0)</span><span>Positive (+1.0)</span></div>
        </div>
    "#, result.polarity);

    let insight = format!(
        "<h3>💡 Summary Insight</h3>\n{}",
        render_message_box(severity, severity.insight()),
    );

    let breakdown = format!(r#"
        <details>
            <summary>🛠️ Technical Breakdown (Polarity &amp; Thresholds)</summary>
            <pre>Polarity (VADER): {:.3}
pos: {:.3}  neu: {:.3}  neg: {:.3}</pre>
            <p class="caption">
                Polarity is the measure of emotional tone ranging from -1.0 (very negative)
                to +1.0 (very positive). Thresholds used:
                Very Positive (&gt; 0.3) | Positive (&gt; 0.05) | Neutral (-0.05 to 0.05) |
                Negative (-0.3 to -0.05) | Very Negative (&lt; -0.3)
            </p>
        </details>
    "#,
        result.polarity, result.positive, result.neutral, result.negative,
    );

    format!(r#"
        <hr>
        <h2>✅ Analysis Results</h2>
        <div class="results-grid">
            {}
            {}
        </div>
        {}
        <hr>
        {}
    "#, metric, meter, insight, breakdown)
}

fn render_message_box(severity: Severity, message: &str) -> String {
    format!(
        r#"<div class="box {}"><p>{}</p></div>"#,
        severity.css_class(),
        message,
    )
}

/// Start the web server with the given config
pub async fn start_server(config: AppConfig) -> crate::Result<()> {
    let state = Arc::new(AppState::new(config.clone()));

    let addr = format!("{}:{}", config.web.host, config.web.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Journal available at http://{}", addr);

    let router = create_router(state);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| crate::EuthymiaError::Server(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
        _ = terminate => info!("Received SIGTERM, shutting down..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    fn test_router() -> Router {
        create_router(Arc::new(AppState::new(AppConfig::default())))
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_request(entry: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("entry={}", entry)))
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_journal_form() {
        let response = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Journal Input Area"));
        assert!(body.contains("<textarea"));
        // Default theme is light
        assert!(body.contains("#ffffff"));
    }

    #[tokio::test]
    async fn test_empty_entry_shows_validation_error() {
        let response = test_router().oneshot(form_request("")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("cannot be empty"));
        assert!(!body.contains("Analysis Results"));
    }

    #[tokio::test]
    async fn test_positive_entry_renders_result() {
        let response = test_router()
            .oneshot(form_request("I+love+this+wonderful+amazing+fantastic+day"))
            .await
            .unwrap();

        let body = body_text(response).await;
        assert!(body.contains("Analysis Results"));
        assert!(body.contains("Very Positive"));
        assert!(body.contains("class=\"box success\""));
    }

    #[tokio::test]
    async fn test_entry_is_escaped_when_rerendered() {
        let response = test_router()
            .oneshot(form_request("%3Cscript%3Ealert(1)%3C%2Fscript%3E"))
            .await
            .unwrap();

        let body = body_text(response).await;
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;"));
    }

    #[tokio::test]
    async fn test_theme_toggle_switches_palette() {
        let state = Arc::new(AppState::new(AppConfig::default()));
        let router = create_router(state.clone());

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/theme")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(state.current_theme(), Theme::Dark);

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_text(response).await;
        assert!(body.contains("#1e1e1e"));
    }

    #[tokio::test]
    async fn test_api_analyze_returns_scores() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"text": "What a great and happy day"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert!(body["polarity"].as_f64().unwrap() > 0.05);
        assert_eq!(body["severity"], "success");
    }

    #[tokio::test]
    async fn test_api_rejects_empty_text() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"text": "   "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }
}
