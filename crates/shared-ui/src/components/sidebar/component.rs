use dioxus::prelude::*;

// ─── Context ───────────────────────────────────────────────────────────

/// Whether the sidebar is expanded. Only matters on narrow viewports; on
/// wide screens the sidebar is always visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

/// Provides sidebar state context to children.
#[component]
pub fn SidebarProvider(#[props(default = false)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if (state)().open { "true" } else { "false" },
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

// ─── Layout components ─────────────────────────────────────────────────

/// The sidebar itself. On narrow viewports a backdrop closes it.
#[component]
pub fn Sidebar(children: Element) -> Element {
    let mut state = use_sidebar();
    let is_open = (state)().open;

    rsx! {
        if is_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            class: "sidebar",
            "data-state": if is_open { "open" } else { "closed" },
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

#[component]
pub fn SidebarMenuItem(children: Element) -> Element {
    rsx! {
        li { class: "sidebar-menu-item", {children} }
    }
}

/// Entry inside a SidebarMenuItem. Clicking closes the sidebar on narrow
/// viewports.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    let base = vec![
        Attribute::new("class", "sidebar-menu-button", None, false),
        Attribute::new(
            "data-active",
            if active { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        span {
            onclick: move |_| {
                state.set(SidebarState { open: false });
            },
            ..merged,
            {children}
        }
    }
}

/// Toggle button that opens/closes the sidebar.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Toggle sidebar",
            onclick: move |_| {
                let current = (state)().open;
                state.set(SidebarState { open: !current });
            },
            {children}
        }
    }
}

/// Main content column next to the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-inset", {children} }
    }
}
