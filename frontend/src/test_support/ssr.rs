use crate::state::page::{provide_page, PageBootstrap};
use leptos::*;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders a view on the host with resource loading suppressed.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Same as [`render_to_string`], with page bootstrap data in context.
pub fn render_page<F, N>(page: PageBootstrap, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        provide_page(page);
        view()
    })
}
