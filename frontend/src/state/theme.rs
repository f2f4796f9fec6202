use crate::theme::{
    self, browser_resolver, Appearance, AppearanceController, AppliedAppearance, ResolvedTheme,
};
use leptos::*;
use std::rc::Rc;

/// Process-wide appearance state: initialised once on load, updated on toggle.
#[derive(Clone, Copy)]
pub struct AppearanceContext {
    appearance: RwSignal<Appearance>,
    resolved: RwSignal<ResolvedTheme>,
    controller: StoredValue<Rc<dyn AppearanceController>>,
}

impl AppearanceContext {
    pub fn new(controller: Rc<dyn AppearanceController>) -> Self {
        let applied = controller.initialize();
        Self {
            appearance: create_rw_signal(applied.appearance),
            resolved: create_rw_signal(applied.theme),
            controller: store_value(controller),
        }
    }

    pub fn appearance(&self) -> ReadSignal<Appearance> {
        self.appearance.read_only()
    }

    pub fn resolved(&self) -> ReadSignal<ResolvedTheme> {
        self.resolved.read_only()
    }

    pub fn is_dark(&self) -> Signal<bool> {
        let resolved = self.resolved;
        Signal::derive(move || resolved.get().is_dark())
    }

    pub fn update(&self, appearance: Appearance) {
        let applied = self.controller.with_value(|c| c.update(appearance));
        log::debug!("appearance set to {} ({:?})", applied.appearance, applied.theme);
        self.set(applied);
    }

    /// Switches to the explicit opposite of what is currently on screen.
    pub fn toggle(&self) {
        self.update(self.resolved.get_untracked().toggled());
    }

    pub fn system_changed(&self) {
        let current = self.appearance.get_untracked();
        if let Some(applied) = self.controller.with_value(|c| c.system_changed(current)) {
            self.set(applied);
        }
    }

    fn set(&self, applied: AppliedAppearance) {
        self.appearance.set(applied.appearance);
        self.resolved.set(applied.theme);
    }
}

pub fn provide_appearance() -> AppearanceContext {
    let ctx = provide_appearance_with(Rc::new(browser_resolver()));
    theme::watch_system_preference(move |_| ctx.system_changed());
    ctx
}

pub fn provide_appearance_with(controller: Rc<dyn AppearanceController>) -> AppearanceContext {
    let ctx = AppearanceContext::new(controller);
    provide_context(ctx);
    ctx
}

pub fn use_appearance() -> AppearanceContext {
    use_context::<AppearanceContext>()
        .unwrap_or_else(|| AppearanceContext::new(Rc::new(browser_resolver())))
}
