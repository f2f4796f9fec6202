#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod appearance {
    use crate::theme::{Appearance, AppearanceStore, ResolvedTheme, SystemPreference, ThemeRoot};
    use crate::theme::DARK_CLASS;
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    pub struct MemoryStore(Rc<RefCell<Option<String>>>);

    impl MemoryStore {
        pub fn with(value: Option<&str>) -> Self {
            Self(Rc::new(RefCell::new(value.map(str::to_string))))
        }

        pub fn value(&self) -> Option<String> {
            self.0.borrow().clone()
        }
    }

    impl AppearanceStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.value()
        }

        fn save(&self, appearance: Appearance) {
            *self.0.borrow_mut() = Some(appearance.as_str().to_string());
        }
    }

    #[derive(Clone, Copy)]
    pub struct FixedPreference(pub Option<bool>);

    impl SystemPreference for FixedPreference {
        fn prefers_dark(&self) -> Option<bool> {
            self.0
        }
    }

    /// Mirrors `classList` add/remove semantics on the root element.
    #[derive(Clone, Default)]
    pub struct ClassListRoot(Rc<RefCell<BTreeSet<String>>>);

    impl ClassListRoot {
        pub fn classes(&self) -> BTreeSet<String> {
            self.0.borrow().clone()
        }

        pub fn has_dark(&self) -> bool {
            self.0.borrow().contains(DARK_CLASS)
        }
    }

    impl ThemeRoot for ClassListRoot {
        fn apply(&self, theme: ResolvedTheme) {
            let mut classes = self.0.borrow_mut();
            if theme.is_dark() {
                classes.insert(DARK_CLASS.to_string());
            } else {
                classes.remove(DARK_CLASS);
            }
        }
    }
}

#[cfg(test)]
pub mod helpers {
    use crate::api::{FieldErrors, SharedUser};

    pub fn field_errors(pairs: &[(&str, &str)]) -> FieldErrors {
        pairs
            .iter()
            .map(|(field, message)| (field.to_string(), message.to_string()))
            .collect()
    }

    pub fn school_admin() -> SharedUser {
        SharedUser {
            name: "Siti Rahayu".into(),
            email: "siti@sekolah.sch.id".into(),
        }
    }
}
