use log::error;
use yew::prelude::*;

use crate::error::{self, SiteError, SiteResult};
use crate::theme::{BACKGROUND, FOREGROUND, GOLD};

/// Handed down through context so any component can take the page down
/// to the fallback instead of leaving it half rendered.
#[derive(Clone, PartialEq)]
pub struct ErrorReporter(Callback<SiteError>);

impl ErrorReporter {
    pub fn report(&self, err: SiteError) {
        self.0.emit(err);
    }
}

#[hook]
pub fn use_error_reporter() -> ErrorReporter {
    use_context::<ErrorReporter>().unwrap_or_else(|| {
        ErrorReporter(Callback::from(|err: SiteError| {
            error!("error reported outside a boundary: {}", err);
        }))
    })
}

#[derive(Properties, PartialEq)]
pub struct ErrorBoundaryProps {
    pub children: Children,
}

#[function_component(ErrorBoundary)]
pub fn error_boundary(props: &ErrorBoundaryProps) -> Html {
    let failure = use_state(|| None::<SiteError>);

    let report = use_callback(
        |err: SiteError, failure: &UseStateSetter<Option<SiteError>>| {
            error!("rendering failed, showing fallback: {}", err);
            failure.set(Some(err));
        },
        failure.setter(),
    );

    match &*failure {
        Some(err) => fallback_node(&err.to_string()),
        None => html! {
            <ContextProvider<ErrorReporter> context={ErrorReporter(report)}>
                { for props.children.iter() }
            </ContextProvider<ErrorReporter>>
        },
    }
}

fn fallback_node(detail: &str) -> Html {
    let created = error::document().and_then(|document| {
        document
            .create_element("div")
            .map_err(|e| SiteError::js("createElement", e))
    });
    match created {
        Ok(element) => {
            element.set_inner_html(&fallback_markup(detail));
            Html::VRef(element.into())
        }
        Err(_) => html! { <p class="error-detail">{detail}</p> },
    }
}

/// Replaces the whole page with the fallback. Used once the app can no
/// longer render itself, e.g. after a panic.
pub fn show_fallback(detail: &str) -> SiteResult<()> {
    let body = error::document()?
        .body()
        .ok_or_else(|| SiteError::detached("body"))?;
    body.set_inner_html(&fallback_markup(detail));
    Ok(())
}

/// Self-contained fallback page. It carries its own styles and a reload
/// button that works without the app running.
pub fn fallback_markup(detail: &str) -> String {
    format!(
        r#"<div class="error-fallback">
    <p class="error-title">ページを表示できませんでした</p>
    <p class="error-detail">{detail}</p>
    <button class="error-reload" onclick="window.location.reload()">再読み込み</button>
    <style>
        .error-fallback {{
            min-height: 100vh;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            gap: 1.5rem;
            padding: 2rem;
            background: {background};
            color: {foreground};
            text-align: center;
        }}
        .error-title {{
            font-size: 1.25rem;
            letter-spacing: 0.1em;
        }}
        .error-detail {{
            font-size: 0.8rem;
            color: #8a8578;
            font-family: monospace;
        }}
        .error-reload {{
            padding: 0.9rem 2.2rem;
            background: transparent;
            color: {gold};
            border: 1px solid {gold};
            letter-spacing: 0.15em;
            cursor: pointer;
        }}
    </style>
</div>"#,
        detail = escape_html(detail),
        background = BACKGROUND,
        foreground = FOREGROUND,
        gold = GOLD,
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_offers_a_reload() {
        let markup = fallback_markup("stylesheet rejected: eof");
        assert!(markup.starts_with(r#"<div class="error-fallback">"#));
        assert!(markup.contains("ページを表示できませんでした"));
        assert!(markup.contains(r#"onclick="window.location.reload()""#));
        assert!(markup.contains("stylesheet rejected: eof"));
    }

    #[test]
    fn fallback_styles_use_the_palette() {
        let markup = fallback_markup("");
        assert!(markup.contains(&format!("background: {};", BACKGROUND)));
        assert!(markup.contains(&format!("border: 1px solid {};", GOLD)));
    }

    #[test]
    fn detail_is_escaped() {
        let markup = fallback_markup(r#"panicked at <Specialties> "render""#);
        assert!(!markup.contains("<Specialties>"));
        assert!(markup.contains("&lt;Specialties&gt; &quot;render&quot;"));
    }
}
