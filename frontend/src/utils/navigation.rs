use std::{cell::RefCell, rc::Rc};

pub const LOGIN_PATH: &str = "/login";

/// Full-page navigation. Used where the router is not reachable, e.g. from the
/// HTTP client or before the router has mounted.
pub trait Navigator {
    fn redirect(&self, path: &str);
}

pub type SharedNavigator = Rc<dyn Navigator>;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl BrowserNavigator {
    pub fn shared() -> SharedNavigator {
        Rc::new(Self)
    }
}

impl Navigator for BrowserNavigator {
    #[cfg(target_arch = "wasm32")]
    fn redirect(&self, path: &str) {
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(path);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn redirect(&self, path: &str) {
        log::debug!("redirect to {} ignored outside the browser", path);
    }
}

/// Keeps every requested redirect instead of leaving the page.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visits: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(&self) -> SharedNavigator {
        Rc::new(self.clone())
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_string());
    }
}

/// `document.hidden` inverted; hosts without a document count as visible.
pub fn page_is_visible() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.document())
            .map(|doc| !doc.hidden())
            .unwrap_or(true)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}

/// Value of a query-string parameter on the current page.
pub fn query_param(name: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        parse_query_param(&search, name)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = name;
        None
    }
}

pub fn parse_query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_navigator_keeps_order() {
        let nav = RecordingNavigator::new();
        let shared = nav.shared();
        shared.redirect("/a");
        shared.redirect(LOGIN_PATH);
        assert_eq!(nav.visits(), vec!["/a".to_string(), "/login".to_string()]);
    }

    #[test]
    fn browser_navigator_is_inert_on_host() {
        let nav: SharedNavigator = Rc::new(BrowserNavigator);
        nav.redirect(LOGIN_PATH);
        assert!(page_is_visible());
        assert_eq!(query_param("registered"), None);
    }

    #[test]
    fn parse_query_param_finds_values() {
        assert_eq!(
            parse_query_param("?registered=1&x=2", "registered").as_deref(),
            Some("1")
        );
        assert_eq!(parse_query_param("?flag", "flag").as_deref(), Some(""));
        assert!(parse_query_param("", "registered").is_none());
        assert!(parse_query_param("?a=1", "b").is_none());
    }
}
