use yew::{html, Callback, Component, Context, Html, MouseEvent, Properties};

/// Full-screen overlay hosting one dialog.
///
/// Visibility follows the `open` prop; clicking the dimmed backdrop emits
/// `on_dismiss`, clicks inside the dialog do not.
pub struct TopSheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let class = if props.open { "top-sheet show" } else { "top-sheet" };
        let on_backdrop = {
            let on_dismiss = props.on_dismiss.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(cb) = &on_dismiss {
                    cb.emit(());
                }
            })
        };
        let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div class={class} onclick={on_backdrop}>
                <div class="dialog" onclick={keep_open}>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
