//! Navigation controller — current route, back-stack, transition gating.
//!
//! The [`Navigator`] is the single source of truth for which screen is
//! rendered. Screens never own navigation state; they request transitions
//! and the host applies them. Transitions are strictly sequential: one must
//! fully complete (state updated, new screen rendered) before the next is
//! applied, so a request that arrives mid-transition is queued latest-wins.

use crate::route::Route;

/// Outcome of a back request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    /// The back-stack was popped and the previous route is now current.
    Navigated,
    /// The back-stack was empty; the host shell should exit. Signaled at
    /// most once per navigator.
    Exit,
    /// Nothing happened (exit already signaled, or a transition is in
    /// flight).
    None,
}

/// Holds the current route and the ordered history of prior routes.
#[derive(Debug)]
pub struct Navigator {
    current: Route,
    back_stack: Vec<Route>,
    in_flight: bool,
    pending: Option<Route>,
    exit_signaled: bool,
}

impl Navigator {
    /// Create a navigator positioned at `start` with an empty back-stack.
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            back_stack: Vec::new(),
            in_flight: false,
            pending: None,
            exit_signaled: false,
        }
    }

    /// The route currently rendered.
    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Number of routes that can be popped before exit.
    pub fn depth(&self) -> usize {
        self.back_stack.len()
    }

    /// Whether a transition has started but not yet completed.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Push the current route onto the back-stack and make `route` current.
    ///
    /// Always succeeds; unknown destinations are a caller error, not a
    /// runtime condition. While a transition is in flight the request is
    /// queued instead, and only the latest queued request is applied when
    /// [`Navigator::transition_complete`] runs.
    pub fn navigate(&mut self, route: Route) {
        if self.in_flight {
            self.pending = Some(route);
            return;
        }
        let previous = std::mem::replace(&mut self.current, route);
        self.back_stack.push(previous);
        self.in_flight = true;
    }

    /// Pop the back-stack, restoring the previous route.
    ///
    /// On an empty stack this signals [`BackAction::Exit`] exactly once and
    /// leaves all state untouched. Ignored while a transition is in flight
    /// (the trigger is effectively disabled until the screen has rendered).
    pub fn go_back(&mut self) -> BackAction {
        if self.in_flight {
            return BackAction::None;
        }
        match self.back_stack.pop() {
            Some(previous) => {
                self.current = previous;
                self.in_flight = true;
                BackAction::Navigated
            }
            None if self.exit_signaled => BackAction::None,
            None => {
                self.exit_signaled = true;
                BackAction::Exit
            }
        }
    }

    /// The swipe-dismiss gesture. Semantically identical to [`Navigator::go_back`].
    pub fn dismiss(&mut self) -> BackAction {
        self.go_back()
    }

    /// Mark the in-flight transition as fully rendered.
    ///
    /// Called by the host after drawing the new screen. Applies the latest
    /// queued request, if any, starting the next transition.
    pub fn transition_complete(&mut self) {
        self.in_flight = false;
        if let Some(route) = self.pending.take() {
            self.navigate(route);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled(nav: &mut Navigator) {
        nav.transition_complete();
    }

    #[test]
    fn navigate_then_back_restores_prior_route() {
        let mut nav = Navigator::new(Route::Menu);
        nav.navigate(Route::List);
        settled(&mut nav);
        nav.navigate(Route::detail("App 6", "https://example.com/files/app6.apk"));
        settled(&mut nav);

        assert_eq!(nav.go_back(), BackAction::Navigated);
        settled(&mut nav);
        assert_eq!(nav.current(), &Route::List);

        assert_eq!(nav.go_back(), BackAction::Navigated);
        settled(&mut nav);
        assert_eq!(nav.current(), &Route::Menu);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn back_stack_never_contains_current() {
        let mut nav = Navigator::new(Route::Menu);
        nav.navigate(Route::List);
        settled(&mut nav);
        nav.navigate(Route::detail("App 1", "u"));
        settled(&mut nav);

        assert!(!nav.back_stack.contains(nav.current()));
        nav.go_back();
        settled(&mut nav);
        assert!(!nav.back_stack.contains(nav.current()));
    }

    #[test]
    fn empty_stack_signals_exit_exactly_once() {
        let mut nav = Navigator::new(Route::Menu);
        assert_eq!(nav.go_back(), BackAction::Exit);
        assert_eq!(nav.go_back(), BackAction::None);
        assert_eq!(nav.current(), &Route::Menu);
        assert_eq!(nav.depth(), 0);
    }

    #[test]
    fn dismiss_is_go_back() {
        let mut nav = Navigator::new(Route::Menu);
        nav.navigate(Route::List);
        settled(&mut nav);
        assert_eq!(nav.dismiss(), BackAction::Navigated);
        settled(&mut nav);
        assert_eq!(nav.current(), &Route::Menu);
    }

    #[test]
    fn in_flight_requests_are_queued_latest_wins() {
        let mut nav = Navigator::new(Route::Menu);
        nav.navigate(Route::List);
        // Still in flight: these two race, only the latest survives.
        nav.navigate(Route::detail("App 1", "u1"));
        nav.navigate(Route::detail("App 2", "u2"));
        assert_eq!(nav.current(), &Route::List);

        settled(&mut nav);
        assert_eq!(nav.current(), &Route::detail("App 2", "u2"));
        settled(&mut nav);
        // Only two transitions actually happened.
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn back_is_ignored_while_in_flight() {
        let mut nav = Navigator::new(Route::Menu);
        nav.navigate(Route::List);
        assert_eq!(nav.go_back(), BackAction::None);
        settled(&mut nav);
        assert_eq!(nav.current(), &Route::List);
        assert_eq!(nav.go_back(), BackAction::Navigated);
    }

    #[test]
    fn arbitrary_sequences_unwind_in_order() {
        let mut nav = Navigator::new(Route::Menu);
        let visited = [
            Route::List,
            Route::detail("App 3", "https://example.com/files/app3.apk"),
            Route::List,
            Route::detail("App 9", "https://example.com/files/app9.apk"),
        ];
        for route in &visited {
            nav.navigate(route.clone());
            settled(&mut nav);
        }
        // Unwind: each pop restores the route visited just before.
        let mut expected: Vec<Route> = vec![Route::Menu];
        expected.extend_from_slice(&visited[..visited.len() - 1]);
        while let Some(prev) = expected.pop() {
            assert_eq!(nav.go_back(), BackAction::Navigated);
            settled(&mut nav);
            assert_eq!(nav.current(), &prev);
        }
        assert_eq!(nav.go_back(), BackAction::Exit);
    }
}
