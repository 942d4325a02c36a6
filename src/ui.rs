//! HUD text and the end-of-game message overlay

use crate::sim::{GamePhase, Session};

/// Score text drawn in the top-left corner
pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

/// End-of-game message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub title: &'static str,
    /// CSS colour for the title
    pub color: &'static str,
    pub subtitle: String,
}

impl Banner {
    /// Banner for a finished session, `None` while still running
    pub fn for_session(session: &Session) -> Option<Self> {
        match session.phase {
            GamePhase::Running => None,
            GamePhase::Won => Some(Self {
                title: "YOU WIN!",
                color: "#0f0",
                subtitle: format!("Final Score: {}", session.score),
            }),
            GamePhase::Lost => Some(Self {
                title: "GAME OVER",
                color: "#f00",
                subtitle: "Press Enter to Restart".to_string(),
            }),
        }
    }
}

/// Show or hide `#message-container` and fill `#message` / `#sub-message`
#[cfg(target_arch = "wasm32")]
pub fn apply_banner(document: &web_sys::Document, banner: Option<&Banner>) {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;

    let Some(container) = document
        .get_element_by_id("message-container")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::warn!("#message-container not found");
        return;
    };

    let Some(banner) = banner else {
        let _ = container.style().set_property("display", "none");
        return;
    };

    if let Some(title) = document
        .get_element_by_id("message")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        title.set_text_content(Some(banner.title));
        let _ = title.style().set_property("color", banner.color);
    }

    if let Some(sub) = document.get_element_by_id("sub-message") {
        sub.set_text_content(Some(&banner.subtitle));
    }

    let _ = container.style().set_property("display", "flex");
}
