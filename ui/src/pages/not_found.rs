use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    #[prop_or_else(|| AttrValue::from("404"))]
    pub title: AttrValue,
    #[prop_or_else(|| AttrValue::from("Page not found"))]
    pub hint: AttrValue,
}

#[function_component]
pub fn NotFoundPage(props: &NotFoundProps) -> Html {
    html! {
        <div class="text-center py-12">
            <h1 class="text-4xl font-bold text-gray-900 dark:text-white">{&props.title}</h1>
            <p class="text-gray-600 dark:text-gray-300">{&props.hint}</p>
        </div>
    }
}
