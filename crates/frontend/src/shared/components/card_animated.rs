//! CardAnimated — обёртка над Thaw Card с анимацией появления.
//!
//! Карточки в сетке появляются каскадом: задержка растёт с индексом,
//! но ограничена сверху, чтобы длинные категории не «догружались» секундами.
//! Анимация определена в `style.css` (`@keyframes card-appear`).

use leptos::prelude::*;
use thaw::Card;

const STAGGER_STEP_MS: u32 = 40;
const STAGGER_MAX_MS: u32 = 400;

/// Animation delay for the card at `index` within its grid
pub fn stagger_delay_ms(index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    index.saturating_mul(STAGGER_STEP_MS).min(STAGGER_MAX_MS)
}

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
#[component]
pub fn CardAnimated(
    /// Позиция карточки в сетке (для stagger-эффекта).
    #[prop(optional)]
    index: usize,
    children: Children,
) -> impl IntoView {
    let style = format!(
        "animation: card-appear 0.28s ease-out {}ms both;",
        stagger_delay_ms(index)
    );

    view! {
        <Card attr:style=style>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay_is_capped() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(3), 120);
        assert_eq!(stagger_delay_ms(500), STAGGER_MAX_MS);
    }
}
