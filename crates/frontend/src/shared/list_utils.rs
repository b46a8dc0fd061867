/// Утилиты для поиска по списку блюд: подсветка совпадений и поле поиска с debounce
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const DEBOUNCE_MS: u32 = 200;

/// True when lowercasing keeps every character at its byte width, so offsets
/// found in the lowercased text are valid in the original
fn lowercase_keeps_offsets(text: &str) -> bool {
    text.chars()
        .all(|c| c.to_lowercase().map(char::len_utf8).sum::<usize>() == c.len_utf8())
}

/// Byte ranges of case-insensitive matches of `filter` in `text`.
///
/// Empty when the query is blank or when lowercasing changes the width of
/// any character, in which case offsets could not be mapped back.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let filter_lower = filter.trim().to_lowercase();
    if filter_lower.is_empty() {
        return Vec::new();
    }
    if !lowercase_keeps_offsets(text) {
        return Vec::new();
    }
    let text_lower = text.to_lowercase();

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Search text typed but not yet applied. Each keystroke gets a ticket; only
/// the newest ticket may apply, and a cancel drops whatever is waiting.
#[derive(Debug, Default)]
pub struct PendingSearch {
    latest: u64,
    text: Option<String>,
}

impl PendingSearch {
    pub fn push(&mut self, text: String) -> u64 {
        self.latest += 1;
        self.text = Some(text);
        self.latest
    }

    /// Text to apply when the debounce for `ticket` fires
    pub fn take(&mut self, ticket: u64) -> Option<String> {
        if ticket == self.latest {
            self.text.take()
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.text = None;
    }

    pub fn is_pending(&self) -> bool {
        self.text.is_some()
    }
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        let (Some(before), Some(matched)) = (text.get(last_pos..start), text.get(start..end))
        else {
            return view! { <span>{text.to_string()}</span> }.into_any();
        };
        if !before.is_empty() {
            parts.push(view! { <span>{before.to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-match">{matched.to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if let Some(rest) = text.get(last_pos..).filter(|r| !r.is_empty()) {
        parts.push(view! { <span>{rest.to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search dishes...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    let pending = StoredValue::new(PendingSearch::default());
    // Dropping the Timeout cancels it, so the timer dies with the component
    let timer = StoredValue::new_local(None::<Timeout>);
    let cancel_pending = move || {
        pending.try_update_value(PendingSearch::cancel);
        timer.try_update_value(|t| t.take());
    };
    on_cleanup(cancel_pending);

    // External resets (new restaurant, "Clear", search chip) replace the
    // input and drop any keystrokes still waiting to be applied
    Effect::new(move |_| {
        let current = value.get();
        if current != input_value.get_untracked() {
            cancel_pending();
            set_input_value.set(current);
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let Some(ticket) = pending.try_update_value(|p| p.push(new_value)) else {
            return;
        };
        let timeout = Timeout::new(DEBOUNCE_MS, move || {
            if let Some(text) = pending.try_update_value(|p| p.take(ticket)).flatten() {
                on_change.try_run(text);
            }
        });
        timer.set_value(Some(timeout));
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        cancel_pending();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Pizza Pepperoni", "PIZ"), vec![(0, 3)]);
        assert_eq!(match_ranges("Papaya Pa", "pa"), vec![(0, 2), (2, 4), (7, 9)]);
    }

    #[test]
    fn test_match_ranges_blank_query() {
        assert!(match_ranges("Pasta", "").is_empty());
        assert!(match_ranges("Pasta", "   ").is_empty());
        assert!(match_ranges("Pasta", "xyz").is_empty());
    }

    #[test]
    fn test_match_ranges_skips_width_changing_lowercase() {
        // 'İ' grows and 'ẞ' shrinks when lowercased, total length unchanged
        assert_eq!("İẞ".to_lowercase().len(), "İẞ".len());
        assert!(match_ranges("İẞ", "ß").is_empty());
        assert!(match_ranges("İstanbul Kebab", "kebab").is_empty());
    }

    #[test]
    fn test_match_ranges_offsets_are_char_boundaries() {
        for (text, query) in [("Crème Brûlée", "BRÛ"), ("Ångström Soup", "soup"), ("İẞ", "ß")] {
            for (start, end) in match_ranges(text, query) {
                assert!(text.is_char_boundary(start) && text.is_char_boundary(end));
            }
        }
        assert_eq!(match_ranges("Crème Brûlée", "BRÛ"), vec![(7, 11)]);
    }

    #[test]
    fn test_pending_search_applies_only_latest_keystroke() {
        let mut pending = PendingSearch::default();
        let first = pending.push("p".to_string());
        let second = pending.push("pi".to_string());
        assert_eq!(pending.take(first), None);
        assert_eq!(pending.take(second), Some("pi".to_string()));
        assert_eq!(pending.take(second), None);
    }

    #[test]
    fn test_pending_search_cancel_drops_waiting_text() {
        let mut pending = PendingSearch::default();
        let ticket = pending.push("stale".to_string());
        assert!(pending.is_pending());
        pending.cancel();
        assert!(!pending.is_pending());
        assert_eq!(pending.take(ticket), None);

        let ticket = pending.push("fresh".to_string());
        assert_eq!(pending.take(ticket), Some("fresh".to_string()));
    }

    #[test]
    fn test_match_ranges_trims_query() {
        assert_eq!(match_ranges("Dal Makhani", " dal "), vec![(0, 3)]);
    }
}
