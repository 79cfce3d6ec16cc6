use dioxus::prelude::*;

/// Visual weight of a [`Button`]. Matches the `.button--*` theme classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button button--primary",
            ButtonVariant::Outline => "button button--outline",
            ButtonVariant::Ghost => "button button--ghost",
        }
    }
}

/// Stateless button wrapper. Purely presentational: styling comes from the
/// shared theme, behaviour from the optional `onpress` handler.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] class: String,
    #[props(default = false)] submit: bool,
    onpress: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = if class.is_empty() {
        variant.class().to_string()
    } else {
        format!("{} {class}", variant.class())
    };

    rsx! {
        button {
            class: "{class}",
            r#type: if submit { "submit" } else { "button" },
            onclick: move |evt| {
                if let Some(handler) = &onpress {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
