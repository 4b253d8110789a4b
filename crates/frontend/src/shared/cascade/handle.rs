use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::rc::Rc;

use super::controller::{CascadeController, RequestTicket, Resolution};
use super::model::{CascadeConfig, LoadingState, OptionItem, SelectOption};
use super::source::OptionSource;
use crate::shared::api_utils::FetchError;
use crate::shared::notify::Notifier;

/// Request issued by a parent change, with the delays it runs under
#[derive(Clone, Debug)]
pub struct PendingRequest {
    ticket: RequestTicket,
    debounce_ms: u32,
    timeout_ms: u32,
}

fn browser_sleep(ms: u32) -> TimeoutFuture {
    TimeoutFuture::new(ms)
}

/// Reactive driver of one parent/dependent pair.
///
/// Owns the [`CascadeController`] in a signal, issues requests through an
/// [`OptionSource`] on `spawn_local`, and arms a watchdog per request so a
/// hung endpoint never leaves the dependent control disabled.
pub struct CascadeHandle<T: 'static> {
    controller: RwSignal<CascadeController>,
    source: StoredValue<Rc<dyn OptionSource<Item = T>>, LocalStorage>,
    on_error: Callback<String>,
}

impl<T: 'static> Clone for CascadeHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for CascadeHandle<T> {}

impl<T: OptionItem + 'static> CascadeHandle<T> {
    /// Creates the pair. When `initial_parent` is non-empty the option list
    /// is loaded right away, restoring `initial_dependent` if it is present.
    pub fn new(
        source: impl OptionSource<Item = T> + 'static,
        config: CascadeConfig,
        initial_parent: &str,
        initial_dependent: &str,
    ) -> Self {
        let notifier = Notifier::from_context();
        let handle = Self::detached(
            source,
            config,
            initial_dependent,
            Callback::new(move |message: String| notifier.error(message)),
        );
        if let Some(request) = handle.preload(initial_parent) {
            handle.spawn(request);
        }
        handle
    }

    /// Pair that reports failures to `on_error` and issues no request yet
    fn detached(
        source: impl OptionSource<Item = T> + 'static,
        config: CascadeConfig,
        initial_dependent: &str,
        on_error: Callback<String>,
    ) -> Self {
        let source: Rc<dyn OptionSource<Item = T>> = Rc::new(source);
        Self {
            controller: RwSignal::new(CascadeController::new(config, initial_dependent)),
            source: StoredValue::new_local(source),
            on_error,
        }
    }

    fn preload(&self, initial_parent: &str) -> Option<PendingRequest> {
        if initial_parent.trim().is_empty() {
            return None;
        }
        log::debug!("preloading options for parent {}", initial_parent);
        self.begin(initial_parent)
    }

    pub fn parent_changed(&self, parent: String) {
        if let Some(request) = self.begin(&parent) {
            self.spawn(request);
        }
    }

    fn begin(&self, parent: &str) -> Option<PendingRequest> {
        let ticket = self
            .controller
            .try_update(|c| c.parent_changed(parent))
            .flatten()?;
        let (debounce_ms, timeout_ms) = self
            .controller
            .try_with_untracked(|c| (c.config().debounce_ms, c.config().timeout_ms))?;
        Some(PendingRequest {
            ticket,
            debounce_ms,
            timeout_ms,
        })
    }

    fn spawn(&self, request: PendingRequest) {
        let this = *self;
        let watched = request.clone();
        spawn_local(async move { this.fetch(&request, browser_sleep).await });
        spawn_local(async move { this.watch(&watched, browser_sleep).await });
    }

    /// Waits out the debounce, then fetches unless a newer parent change
    /// took over in the meantime
    async fn fetch<S, F>(self, request: &PendingRequest, sleep: S)
    where
        S: Fn(u32) -> F,
        F: Future<Output = ()>,
    {
        let ticket = &request.ticket;
        if request.debounce_ms > 0 {
            sleep(request.debounce_ms).await;
            if !self.is_current(ticket) {
                log::debug!("request #{} superseded during debounce", ticket.seq());
                return;
            }
        }
        let Some(source) = self.source.try_get_value() else {
            return;
        };
        let result = source.fetch(ticket.parent()).await;
        self.apply(ticket, result);
    }

    /// Fails the request if it is still outstanding once the timeout elapses
    async fn watch<S, F>(self, request: &PendingRequest, sleep: S)
    where
        S: Fn(u32) -> F,
        F: Future<Output = ()>,
    {
        let ticket = &request.ticket;
        sleep(request.debounce_ms.saturating_add(request.timeout_ms)).await;
        if !self.is_current(ticket) {
            return;
        }
        if let Some(outcome) = self.controller.try_update(|c| c.expire(ticket)) {
            self.report(ticket, outcome);
        }
    }

    /// Records the user's choice. Returns true when the host form should be
    /// submitted now.
    pub fn dependent_changed(&self, value: String) -> bool {
        self.controller
            .try_update(|c| c.dependent_changed(&value))
            .unwrap_or(false)
    }

    pub fn options(&self) -> Signal<Vec<SelectOption>> {
        let controller = self.controller;
        Signal::derive(move || controller.with(|c| c.control().options.clone()))
    }

    pub fn selected(&self) -> Signal<String> {
        let controller = self.controller;
        Signal::derive(move || controller.with(|c| c.selected().to_string()))
    }

    pub fn disabled(&self) -> Signal<bool> {
        let controller = self.controller;
        Signal::derive(move || controller.with(|c| c.control().disabled))
    }

    pub fn state(&self) -> Signal<LoadingState> {
        let controller = self.controller;
        Signal::derive(move || controller.with(|c| c.state()))
    }

    /// `on_change` for a dependent select that never submits on its own
    pub fn on_change(&self) -> Callback<String> {
        let this = *self;
        Callback::new(move |value: String| {
            this.dependent_changed(value);
        })
    }

    /// `on_change` that runs `submit` when auto-submit applies
    pub fn on_change_then(&self, submit: Callback<()>) -> Callback<String> {
        let this = *self;
        Callback::new(move |value: String| {
            if this.dependent_changed(value) {
                submit.run(());
            }
        })
    }

    /// Value to send with the host form
    pub fn selected_untracked(&self) -> String {
        self.controller
            .try_with_untracked(|c| c.selected().to_string())
            .unwrap_or_default()
    }

    /// Value to remember for the next visit; survives a list that is still
    /// loading or failed to load
    pub fn intended_untracked(&self) -> String {
        self.controller
            .try_with_untracked(|c| c.intended().to_string())
            .unwrap_or_default()
    }

    fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.controller
            .try_with_untracked(|c| c.is_current(ticket))
            .unwrap_or(false)
    }

    fn apply(&self, ticket: &RequestTicket, result: Result<Vec<T>, FetchError>) {
        if !self.is_current(ticket) {
            log::debug!(
                "discarding stale response #{} for parent {}",
                ticket.seq(),
                ticket.parent()
            );
            return;
        }
        if let Some(outcome) = self.controller.try_update(|c| c.resolve(ticket, result)) {
            self.report(ticket, outcome);
        }
    }

    fn report(&self, ticket: &RequestTicket, outcome: Resolution) {
        match outcome {
            Resolution::Populated { matched } => {
                log::debug!(
                    "options for parent {} loaded (previous selection restored: {})",
                    ticket.parent(),
                    matched
                );
            }
            Resolution::Failed(error) => {
                log::error!("failed to load options for parent {}: {}", ticket.parent(), error);
                let message = self
                    .controller
                    .try_with_untracked(|c| c.config().error_message.clone())
                    .unwrap_or_default();
                self.on_error.run(message);
            }
            Resolution::Stale => {
                log::debug!("response #{} arrived after being superseded", ticket.seq());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::cascade::model::CascadeLabels;
    use async_trait::async_trait;
    use contracts::domain::a002_vivienda::aggregate::{ViviendaId, ViviendaOption};
    use leptos::reactive::owner::Owner;
    use std::cell::Cell;
    use std::future::{ready, Ready};

    struct FakeSource {
        calls: Rc<Cell<usize>>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl OptionSource for FakeSource {
        type Item = ViviendaOption;

        async fn fetch(&self, _parent: &str) -> Result<Vec<ViviendaOption>, FetchError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(FetchError::Status(500));
            }
            Ok(vec![vivienda(5, "3B"), vivienda(7, "3A")])
        }
    }

    fn vivienda(id: i64, numero: &str) -> ViviendaOption {
        ViviendaOption {
            id: ViviendaId(id),
            numero: numero.to_string(),
            piso: 2,
            activo: None,
            estado_code: None,
        }
    }

    fn instant(_ms: u32) -> Ready<()> {
        ready(())
    }

    struct Pair {
        handle: CascadeHandle<ViviendaOption>,
        calls: Rc<Cell<usize>>,
        errors: RwSignal<Vec<String>>,
    }

    impl Pair {
        fn new(config: CascadeConfig, initial_dependent: &str, fail: bool) -> Self {
            let calls = Rc::new(Cell::new(0));
            let errors = RwSignal::new(Vec::new());
            let handle = CascadeHandle::detached(
                FakeSource {
                    calls: calls.clone(),
                    fail,
                },
                config,
                initial_dependent,
                Callback::new(move |message: String| errors.update(|e| e.push(message))),
            );
            Self {
                handle,
                calls,
                errors,
            }
        }

        fn state(&self) -> LoadingState {
            self.handle.controller.with_untracked(|c| c.state())
        }

        fn values(&self) -> Vec<String> {
            self.handle
                .controller
                .with_untracked(|c| c.control().values().iter().map(|v| v.to_string()).collect())
        }

        fn error_count(&self) -> usize {
            self.errors.with_untracked(|e| e.len())
        }
    }

    fn config() -> CascadeConfig {
        CascadeConfig::new(CascadeLabels::viviendas())
    }

    #[tokio::test]
    async fn initial_parent_loads_and_restores_the_server_value() {
        let owner = Owner::new();
        owner.set();
        let pair = Pair::new(config(), "7", false);

        assert!(pair.handle.preload("  ").is_none());
        assert_eq!(pair.state(), LoadingState::Idle);

        let request = pair.handle.preload("12").expect("initial parent issues a request");
        assert_eq!(pair.state(), LoadingState::Loading);
        assert!(pair.handle.controller.with_untracked(|c| c.control().disabled));

        pair.handle.fetch(&request, instant).await;
        assert_eq!(pair.state(), LoadingState::Populated);
        assert_eq!(pair.values(), vec!["", "5", "7"]);
        assert_eq!(pair.handle.selected_untracked(), "7");
        assert_eq!(pair.calls.get(), 1);
        assert_eq!(pair.error_count(), 0);
    }

    #[tokio::test]
    async fn debounced_request_replaced_before_firing_is_never_sent() {
        let owner = Owner::new();
        owner.set();
        let pair = Pair::new(config().debounce(300), "", false);

        let first = pair.handle.begin("1").expect("request");
        let second = pair.handle.begin("2").expect("request");

        pair.handle.fetch(&first, instant).await;
        assert_eq!(pair.calls.get(), 0);
        assert_eq!(pair.state(), LoadingState::Loading);

        pair.handle.fetch(&second, instant).await;
        assert_eq!(pair.calls.get(), 1);
        assert_eq!(pair.values(), vec!["", "5", "7"]);
    }

    #[tokio::test]
    async fn watchdog_fails_a_hung_request_and_ignores_the_late_answer() {
        let owner = Owner::new();
        owner.set();
        let pair = Pair::new(config(), "", false);

        let request = pair.handle.begin("3").expect("request");
        pair.handle.watch(&request, instant).await;
        assert_eq!(pair.state(), LoadingState::Error);
        assert!(!pair.handle.controller.with_untracked(|c| c.control().disabled));
        assert_eq!(pair.error_count(), 1);

        pair.handle.fetch(&request, instant).await;
        assert_eq!(pair.state(), LoadingState::Error);
        assert_eq!(pair.error_count(), 1);
    }

    #[tokio::test]
    async fn failed_fetch_notifies_exactly_once() {
        let owner = Owner::new();
        owner.set();
        let pair = Pair::new(config(), "", true);

        let request = pair.handle.begin("3").expect("request");
        pair.handle.fetch(&request, instant).await;
        assert_eq!(pair.state(), LoadingState::Error);
        assert_eq!(pair.error_count(), 1);

        pair.handle.watch(&request, instant).await;
        assert_eq!(pair.error_count(), 1);
    }

    #[tokio::test]
    async fn remembered_choice_outlives_a_failed_load() {
        let owner = Owner::new();
        owner.set();
        let pair = Pair::new(config(), "7", true);

        let request = pair.handle.preload("3").expect("request");
        assert_eq!(pair.handle.selected_untracked(), "");
        assert_eq!(pair.handle.intended_untracked(), "7");

        pair.handle.fetch(&request, instant).await;
        assert_eq!(pair.handle.intended_untracked(), "7");
    }
}
