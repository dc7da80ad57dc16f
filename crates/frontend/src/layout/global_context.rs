use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Debug, PartialEq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Application-wide tab store.
///
/// Pages open as tabs keyed by a stable string (`"orders"`,
/// `"order_details_edit_<id>"`, ...). The active key is mirrored into the
/// URL query string so a reload lands on the same tab.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
        }
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                });
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        // Closing the active tab falls back to the last remaining one
        if self.active.get_untracked().as_deref() == Some(key) {
            let next = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|tab| tab.key.clone()));
            self.active.set(next);
        }
    }

    /// Restore the active tab from `?active=` and keep the URL in sync
    /// afterwards. Runs once at mount.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_key) = active_key_from_search(&search) {
            self.open_tab(&active_key, &active_key);
        } else {
            // Default landing tab
            self.open_tab("orders", "Orders");
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let new_url = format!("?active={}", urlencoding::encode(&active_key));
                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();
                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }
}

fn active_key_from_search(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("active="))
        .filter(|v| !v.is_empty())
        .map(|v| {
            urlencoding::decode(v)
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| v.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_key_parsing() {
        assert_eq!(
            active_key_from_search("?active=orders"),
            Some("orders".to_string())
        );
        assert_eq!(
            active_key_from_search("?foo=1&active=payments_pending_c1"),
            Some("payments_pending_c1".to_string())
        );
        assert_eq!(active_key_from_search(""), None);
        assert_eq!(active_key_from_search("?active="), None);
    }
}
