use dioxus::dioxus_core::AttributeValue;
use dioxus::prelude::*;

/// Classes every button carries regardless of variant.
pub const BASE_CLASSES: &str = "rounded-sm px-2 py-0.5 transition-all duration-200";

const PRIMARY_CLASSES: &str =
    "bg-primary-light dark:bg-primary-dark hover:bg-primary-dark dark:hover:bg-primary-light";

const OUTLINED_CLASSES: &str = "border border-primary-light dark:border-primary-dark \
    text-primary-light dark:text-primary-dark hover:text-white \
    bg-transparent hover:bg-primary-light dark:hover:bg-primary-dark";

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled with the primary color.
    #[default]
    Primary,
    /// Transparent with a primary-colored border and label.
    Outlined,
}

/// All button variants in display order.
pub const ALL_VARIANTS: &[ButtonVariant] = &[ButtonVariant::Primary, ButtonVariant::Outlined];

impl ButtonVariant {
    /// Utility classes contributed by this variant.
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => PRIMARY_CLASSES,
            ButtonVariant::Outlined => OUTLINED_CLASSES,
        }
    }

    /// Value of the rendered `data-variant` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Outlined => "outlined",
        }
    }
}

/// Resolve the final class string for a button.
///
/// Joins the base classes, the variant's classes and the caller's extra
/// classes with single spaces, skipping empty segments. Tokens are not
/// de-duplicated.
pub fn button_class(variant: ButtonVariant, class: &str) -> String {
    [BASE_CLASSES, variant.classes(), class]
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split caller attributes into the joined `class` override and everything else.
fn take_class_override(attributes: Vec<Attribute>) -> (String, Vec<Attribute>) {
    let (classes, rest): (Vec<Attribute>, Vec<Attribute>) = attributes
        .into_iter()
        .partition(|attr| attr.name == "class" && attr.namespace.is_none());

    let class = classes
        .iter()
        .filter_map(|attr| match &attr.value {
            AttributeValue::Text(text) if !text.is_empty() => Some(text.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ");

    (class, rest)
}

/// A utility-class styled button.
///
/// Any `class` passed by the caller is appended to the resolved classes;
/// the final `class` attribute is always produced by [`button_class`].
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes, extends = button)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let (extra, passthrough) = take_class_override(props.attributes);
    let class = button_class(props.variant, &extra);

    rsx! {
        button {
            class: "{class}",
            "data-variant": props.variant.as_str(),
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..passthrough,
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn variant_default_is_primary() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn variant_as_str_keys() {
        assert_eq!(ButtonVariant::Primary.as_str(), "primary");
        assert_eq!(ButtonVariant::Outlined.as_str(), "outlined");
    }

    #[test]
    fn variant_classes_are_non_empty() {
        for variant in ALL_VARIANTS {
            assert!(!variant.classes().trim().is_empty());
        }
    }

    #[test]
    fn class_starts_with_base() {
        for variant in ALL_VARIANTS {
            for extra in ["", "h-8 w-24", " ", "rounded-sm"] {
                let class = button_class(*variant, extra);
                assert!(class.starts_with(&format!("{BASE_CLASSES} ")));
            }
        }
    }

    #[test]
    fn primary_without_override() {
        assert_eq!(
            button_class(ButtonVariant::Primary, ""),
            format!("{BASE_CLASSES} {PRIMARY_CLASSES}")
        );
    }

    #[test]
    fn outlined_with_override() {
        assert_eq!(
            button_class(ButtonVariant::Outlined, "h-8 w-24"),
            format!("{BASE_CLASSES} {OUTLINED_CLASSES} h-8 w-24")
        );
    }

    #[test]
    fn defaults_match_explicit_primary() {
        assert_eq!(
            button_class(ButtonVariant::default(), &String::default()),
            button_class(ButtonVariant::Primary, "")
        );
    }

    #[test]
    fn empty_override_leaves_no_stray_spaces() {
        for variant in ALL_VARIANTS {
            let class = button_class(*variant, "");
            assert!(!class.ends_with(' '));
            assert!(!class.contains("  "));
        }
    }

    #[test]
    fn whitespace_override_is_kept() {
        let class = button_class(ButtonVariant::Primary, " ");
        assert_eq!(class, format!("{BASE_CLASSES} {PRIMARY_CLASSES}  "));
    }

    #[test]
    fn repeated_tokens_are_not_deduplicated() {
        let class = button_class(ButtonVariant::Primary, "rounded-sm");
        assert_eq!(class.matches("rounded-sm").count(), 2);
    }

    #[test]
    fn resolution_is_idempotent() {
        let first = button_class(ButtonVariant::Outlined, "h-8");
        let second = button_class(ButtonVariant::Outlined, "h-8");
        assert_eq!(first, second);
    }

    #[test]
    fn class_override_joins_caller_classes_in_order() {
        let attrs = vec![
            Attribute::new("class", "h-8", None, false),
            Attribute::new("id", "login", None, false),
            Attribute::new("class", "w-24", None, false),
        ];
        let (class, rest) = take_class_override(attrs);
        assert_eq!(class, "h-8 w-24");
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].name, "id");
    }

    #[test]
    fn class_override_empty_without_class_attributes() {
        let attrs = vec![Attribute::new("disabled", true, None, false)];
        let (class, rest) = take_class_override(attrs);
        assert_eq!(class, "");
        assert_eq!(rest.len(), 1);
    }
}
