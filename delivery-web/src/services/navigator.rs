//! Route changes through `leptos_router`

use leptos_router::hooks::use_navigate;

use crate::session::Navigator;

#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        log::debug!("Navigating to {}", path);
        (self.navigate)(path)
    }
}

/// Wrap the router's navigate function. Must be called under a `<Router>`.
pub fn use_router_navigator() -> RouterNavigator<impl Fn(&str) + Clone + 'static> {
    let navigate = use_navigate();
    RouterNavigator::new(move |path: &str| navigate(path, Default::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_navigate_forwards_path() {
        let visited = Rc::new(RefCell::new(Vec::new()));
        let sink = visited.clone();
        let navigator = RouterNavigator::new(move |path: &str| sink.borrow_mut().push(path.to_string()));

        navigator.navigate("/cart");
        navigator.navigate("/");

        assert_eq!(*visited.borrow(), vec!["/cart".to_string(), "/".to_string()]);
    }
}
