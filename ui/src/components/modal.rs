use yew::prelude::*;

/// A dialog over a dimmed backdrop. Clicking the backdrop calls `on_close`.
///
/// # Example
///
/// ```rust,ignore
/// use crate::components::Modal;
/// use yew::prelude::*;
///
/// #[function_component]
/// fn MyComponent() -> Html {
///     let show_modal = use_state(|| false);
///
///     let close_modal = {
///         let show_modal = show_modal.clone();
///         Callback::from(move |_| show_modal.set(false))
///     };
///
///     html! {
///         if *show_modal {
///             <Modal on_close={close_modal.clone()}>
///                 <p>{"Modal content goes here"}</p>
///             </Modal>
///         }
///     }
/// }
/// ```
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    /// Dialog content (passed as children)
    pub children: Html,
    /// Called when user clicks the backdrop
    pub on_close: Callback<()>,
    /// Maximum width class (default: "max-w-md")
    #[prop_or_else(|| AttrValue::from("max-w-md"))]
    pub max_width: AttrValue,
    /// Whether to allow closing by clicking backdrop (default: true)
    #[prop_or(true)]
    pub close_on_backdrop: bool,
}

/// What a click on the backdrop does.
fn backdrop_close(
    on_close: &Callback<()>,
    close_on_backdrop: bool,
) -> Callback<()> {
    let on_close = on_close.clone();
    Callback::from(move |()| {
        if close_on_backdrop {
            on_close.emit(());
        }
    })
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let on_backdrop_click =
        backdrop_close(&props.on_close, props.close_on_backdrop)
            .reform(|_: MouseEvent| ());

    // The backdrop is a sibling of the dialog rather than its parent, so
    // clicks inside the dialog never reach it.
    html! {
        <div class="fixed inset-0 z-50 overflow-y-auto" role="dialog" aria-modal="true">
            <div
                onclick={on_backdrop_click}
                aria-hidden="true"
                class="fixed inset-0 bg-black/50 backdrop-blur-sm transition-opacity"
            />
            <div class="flex min-h-full items-center justify-center p-4">
                <div
                    class={classes!(
                        "relative",
                        "w-full",
                        "bg-white",
                        "dark:bg-neutral-800",
                        "rounded-2xl",
                        "shadow-2xl",
                        props.max_width.to_string(),
                    )}
                >
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn counter() -> (Rc<Cell<usize>>, Callback<()>) {
        let count = Rc::new(Cell::new(0));
        let callback = {
            let count = count.clone();
            Callback::from(move |()| count.set(count.get() + 1))
        };
        (count, callback)
    }

    #[test]
    fn backdrop_click_closes_by_default() {
        let (count, on_close) = counter();

        backdrop_close(&on_close, true).emit(());

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn backdrop_click_ignored_when_disabled() {
        let (count, on_close) = counter();

        backdrop_close(&on_close, false).emit(());

        assert_eq!(count.get(), 0);
    }
}
