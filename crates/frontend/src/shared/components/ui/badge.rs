use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Badge variant for a dish tag
pub fn tag_variant(tag: &str) -> &'static str {
    use contracts::domain::a001_restaurant_menu::filter_state::{
        BESTSELLER, CHEF_SPECIAL, NON_VEG, SPICY, VEG,
    };
    match tag {
        VEG => "success",
        NON_VEG | SPICY => "error",
        CHEF_SPECIAL => "primary",
        BESTSELLER => "warning",
        _ => "neutral",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_variant() {
        assert_eq!(tag_variant("veg"), "success");
        assert_eq!(tag_variant("spicy"), "error");
        assert_eq!(tag_variant("gluten-free"), "neutral");
    }
}
