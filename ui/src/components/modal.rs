use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Overlay panel that closes when the backdrop itself is clicked.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub children: Html,
    pub on_close: Callback<()>,
    /// Maximum width class
    #[prop_or_else(|| AttrValue::from("max-w-lg"))]
    pub max_width: AttrValue,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();

        // Clicks inside the panel bubble up here too; only the backdrop
        // itself closes.
        Callback::from(move |e: MouseEvent| {
            if let Some(backdrop) = backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>() == Some(&backdrop)
            {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            ref={backdrop_ref}
            onclick={on_backdrop_click}
            role="dialog"
            aria-modal="true"
            class="fixed inset-0 bg-black bg-opacity-50 z-50 flex
                   items-center justify-center p-4"
        >
            <div
                class={classes!(
                    "bg-white", "dark:bg-neutral-800", "rounded-lg",
                    "shadow-xl", "w-full", "p-6",
                    props.max_width.to_string()
                )}
            >
                {props.children.clone()}
            </div>
        </div>
    }
}
