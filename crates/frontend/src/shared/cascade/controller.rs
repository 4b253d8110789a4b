//! Synchronous state machine behind a cascading select pair.
//!
//! The controller never touches the network. The async driver asks it for a
//! [`RequestTicket`] when the parent changes, performs the request and hands
//! the result back through [`CascadeController::resolve`]. Tickets carry a
//! sequence number; only the ticket issued by the most recent parent change
//! may mutate the control, so responses that arrive out of order are dropped.

use super::model::{
    CascadeConfig, DependentControl, LoadingState, OptionItem, SelectOption,
};
use crate::shared::api_utils::FetchError;

/// Proof that a request was issued for `parent`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
    parent: String,
}

impl RequestTicket {
    pub fn parent(&self) -> &str {
        &self.parent
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// What happened to a result handed to the controller
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Options replaced; `matched` tells whether the remembered value was restored
    Populated { matched: bool },
    /// Control switched to the error sentinel; notify the user once
    Failed(FetchError),
    /// Superseded by a later parent change, nothing was applied
    Stale,
}

#[derive(Clone, Debug)]
pub struct CascadeController {
    config: CascadeConfig,
    parent: String,
    /// Dependent value the user wants; restored when the new list contains it
    remembered: String,
    state: LoadingState,
    control: DependentControl,
    seq: u64,
    in_flight: Option<u64>,
}

impl CascadeController {
    /// `initial_dependent` is the value rendered by the server (or restored
    /// from preferences) before any option list has been fetched.
    pub fn new(config: CascadeConfig, initial_dependent: impl Into<String>) -> Self {
        let control = DependentControl {
            options: vec![SelectOption::new("", config.labels.all.clone())],
            selected: String::new(),
            disabled: false,
        };
        Self {
            config,
            parent: String::new(),
            remembered: initial_dependent.into(),
            state: LoadingState::Idle,
            control,
            seq: 0,
            in_flight: None,
        }
    }

    pub fn config(&self) -> &CascadeConfig {
        &self.config
    }

    pub fn state(&self) -> LoadingState {
        self.state
    }

    pub fn control(&self) -> &DependentControl {
        &self.control
    }

    pub fn parent(&self) -> &str {
        &self.parent
    }

    pub fn selected(&self) -> &str {
        &self.control.selected
    }

    pub fn remembered(&self) -> &str {
        &self.remembered
    }

    /// Dependent value worth persisting. While no list is showing the
    /// control reads empty, so the remembered value stands in for it.
    pub fn intended(&self) -> &str {
        match self.state {
            LoadingState::Loading | LoadingState::Error => &self.remembered,
            LoadingState::Idle | LoadingState::Populated => &self.control.selected,
        }
    }

    /// Parent control changed. Returns a ticket when a request must be issued.
    pub fn parent_changed(&mut self, parent: &str) -> Option<RequestTicket> {
        let parent = parent.trim().to_string();
        // Any outstanding request is superseded from here on
        self.seq += 1;
        self.parent = parent.clone();

        if parent.is_empty() {
            self.control = DependentControl {
                options: vec![self.all_option()],
                selected: String::new(),
                disabled: false,
            };
            self.in_flight = None;
            self.state = LoadingState::Idle;
            return None;
        }

        self.control = DependentControl {
            options: vec![SelectOption::new("", self.config.labels.loading.clone())],
            selected: String::new(),
            disabled: true,
        };
        self.state = LoadingState::Loading;
        self.in_flight = Some(self.seq);
        Some(RequestTicket {
            seq: self.seq,
            parent,
        })
    }

    /// True while `ticket` is the request the control is waiting for
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.in_flight == Some(ticket.seq)
    }

    /// Applies the outcome of the request identified by `ticket`
    pub fn resolve<T: OptionItem>(
        &mut self,
        ticket: &RequestTicket,
        result: Result<Vec<T>, FetchError>,
    ) -> Resolution {
        if !self.is_current(ticket) {
            return Resolution::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(items) => {
                let policy = self.config.inactive;
                let mut options = vec![self.all_option()];
                options.extend(
                    items
                        .iter()
                        .filter(|item| policy.admits(*item))
                        .map(|item| SelectOption::new(item.option_value(), item.option_label())),
                );
                if options.len() == 1 {
                    options.push(SelectOption::placeholder(self.config.labels.empty.clone()));
                }

                let control = DependentControl {
                    options,
                    selected: String::new(),
                    disabled: false,
                };
                let matched = !self.remembered.is_empty() && control.contains(&self.remembered);
                self.control = control;
                if matched {
                    self.control.selected = self.remembered.clone();
                } else {
                    self.remembered.clear();
                }
                self.state = LoadingState::Populated;
                Resolution::Populated { matched }
            }
            Err(error) => {
                self.control = DependentControl {
                    options: vec![SelectOption::placeholder(self.config.labels.error.clone())],
                    selected: String::new(),
                    disabled: false,
                };
                self.state = LoadingState::Error;
                Resolution::Failed(error)
            }
        }
    }

    /// Watchdog fired; fails the request if it is still outstanding
    pub fn expire(&mut self, ticket: &RequestTicket) -> Resolution {
        let timeout = FetchError::Timeout(self.config.timeout_ms);
        self.resolve::<NoItem>(ticket, Err(timeout))
    }

    /// The user picked a dependent option. Returns whether the host form
    /// should be submitted.
    pub fn dependent_changed(&mut self, value: &str) -> bool {
        self.control.selected = value.to_string();
        self.remembered = value.to_string();
        self.config.auto_submit && self.state != LoadingState::Loading
    }

    fn all_option(&self) -> SelectOption {
        SelectOption::new("", self.config.labels.all.clone())
    }
}

/// Item type for results that never carry items
enum NoItem {}

impl OptionItem for NoItem {
    fn option_value(&self) -> String {
        match *self {}
    }

    fn option_label(&self) -> String {
        match *self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::cascade::model::CascadeLabels;
    use contracts::domain::a002_vivienda::aggregate::{ViviendaId, ViviendaOption};
    use contracts::domain::a003_residente::aggregate::{ResidenteId, ResidenteOption};

    fn vivienda(id: i64, numero: &str, piso: i32) -> ViviendaOption {
        ViviendaOption {
            id: ViviendaId(id),
            numero: numero.to_string(),
            piso,
            activo: None,
            estado_code: None,
        }
    }

    fn residente(id: i64, nombre: &str, activo: bool) -> ResidenteOption {
        ResidenteOption {
            id: ResidenteId(id),
            nombre: nombre.to_string(),
            activo,
        }
    }

    fn controller() -> CascadeController {
        CascadeController::new(CascadeConfig::new(CascadeLabels::viviendas()), "")
    }

    #[test]
    fn empty_parent_yields_only_sentinel_without_request() {
        let mut c = controller();
        assert!(c.parent_changed("").is_none());
        assert_eq!(c.control().values(), vec![""]);
        assert_eq!(c.control().labels(), vec!["Todas las viviendas"]);
        assert!(!c.control().disabled);
        assert_eq!(c.state(), LoadingState::Idle);
    }

    #[test]
    fn parent_change_disables_control_while_loading() {
        let mut c = controller();
        let ticket = c.parent_changed("12").expect("request expected");
        assert_eq!(ticket.parent(), "12");
        assert!(c.control().disabled);
        assert_eq!(c.control().labels(), vec!["Cargando viviendas..."]);
        assert_eq!(c.state(), LoadingState::Loading);
    }

    #[test]
    fn populates_sentinel_plus_items() {
        let mut c = controller();
        let ticket = c.parent_changed("12").unwrap();
        let outcome = c.resolve(
            &ticket,
            Ok(vec![vivienda(5, "3B", 2), vivienda(7, "3A", 2)]),
        );

        assert_eq!(outcome, Resolution::Populated { matched: false });
        assert_eq!(c.control().values(), vec!["", "5", "7"]);
        assert_eq!(
            c.control().labels(),
            vec!["Todas las viviendas", "3B (Piso 2)", "3A (Piso 2)"]
        );
        assert_eq!(c.selected(), "");
        assert!(!c.control().disabled);
        assert_eq!(c.state(), LoadingState::Populated);
    }

    #[test]
    fn restores_previous_dependent_value_when_present() {
        let mut c = controller();
        let first = c.parent_changed("1").unwrap();
        c.resolve(&first, Ok(vec![vivienda(7, "3A", 2)]));
        c.dependent_changed("7");

        let second = c.parent_changed("2").unwrap();
        let outcome = c.resolve(&second, Ok(vec![vivienda(4, "1A", 1), vivienda(7, "3A", 2)]));
        assert_eq!(outcome, Resolution::Populated { matched: true });
        assert_eq!(c.selected(), "7");
    }

    #[test]
    fn discards_previous_dependent_value_when_absent() {
        let mut c = CascadeController::new(CascadeConfig::new(CascadeLabels::viviendas()), "9");
        let ticket = c.parent_changed("2").unwrap();
        c.resolve(&ticket, Ok(vec![vivienda(4, "1A", 1)]));
        assert_eq!(c.selected(), "");
        assert_eq!(c.remembered(), "");
    }

    #[test]
    fn initial_dependent_value_is_restored_on_first_load() {
        let mut c = CascadeController::new(CascadeConfig::new(CascadeLabels::viviendas()), "4");
        let ticket = c.parent_changed("2").unwrap();
        c.resolve(&ticket, Ok(vec![vivienda(4, "1A", 1)]));
        assert_eq!(c.selected(), "4");
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut c = controller();
        let slow = c.parent_changed("1").unwrap();
        let fast = c.parent_changed("2").unwrap();

        c.resolve(&fast, Ok(vec![vivienda(20, "2A", 1)]));
        let outcome = c.resolve(&slow, Ok(vec![vivienda(10, "1A", 1)]));

        assert_eq!(outcome, Resolution::Stale);
        assert_eq!(c.parent(), "2");
        assert_eq!(c.control().values(), vec!["", "20"]);
    }

    #[test]
    fn last_parent_wins_for_any_arrival_order() {
        let orders: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        for order in orders {
            let mut c = controller();
            let tickets: Vec<_> = ["1", "2", "3"]
                .iter()
                .map(|p| c.parent_changed(p).unwrap())
                .collect();
            for idx in order {
                let id = (idx as i64 + 1) * 10;
                c.resolve(&tickets[idx], Ok(vec![vivienda(id, "x", 1)]));
            }
            assert_eq!(c.control().values(), vec!["", "30"], "order {:?}", order);
            assert_eq!(c.state(), LoadingState::Populated);
        }
    }

    #[test]
    fn clearing_parent_supersedes_in_flight_request() {
        let mut c = controller();
        let ticket = c.parent_changed("1").unwrap();
        c.parent_changed("");
        assert_eq!(
            c.resolve(&ticket, Ok(vec![vivienda(1, "1A", 1)])),
            Resolution::Stale
        );
        assert_eq!(c.control().values(), vec![""]);
        assert!(!c.control().disabled);
    }

    #[test]
    fn failure_leaves_single_disabled_error_option() {
        let mut c = controller();
        let ticket = c.parent_changed("1").unwrap();
        let outcome = c.resolve::<ViviendaOption>(&ticket, Err(FetchError::Status(500)));

        assert_eq!(outcome, Resolution::Failed(FetchError::Status(500)));
        let control = c.control();
        assert_eq!(control.options.len(), 1);
        assert!(control.options[0].disabled);
        assert_eq!(control.options[0].label, "Error al cargar viviendas");
        assert!(!control.disabled);
        assert_eq!(c.state(), LoadingState::Error);
    }

    #[test]
    fn failure_is_reported_once_even_if_watchdog_fires() {
        let mut c = controller();
        let ticket = c.parent_changed("1").unwrap();
        let first = c.resolve::<ViviendaOption>(&ticket, Err(FetchError::Network("down".into())));
        let second = c.expire(&ticket);
        assert!(matches!(first, Resolution::Failed(_)));
        assert_eq!(second, Resolution::Stale);
    }

    #[test]
    fn watchdog_fails_hung_request_and_late_response_is_dropped() {
        let config = CascadeConfig::new(CascadeLabels::viviendas()).timeout(500);
        let mut c = CascadeController::new(config, "");
        let ticket = c.parent_changed("1").unwrap();
        assert_eq!(c.expire(&ticket), Resolution::Failed(FetchError::Timeout(500)));
        assert!(!c.control().disabled);
        assert_eq!(
            c.resolve(&ticket, Ok(vec![vivienda(1, "1A", 1)])),
            Resolution::Stale
        );
        assert_eq!(c.state(), LoadingState::Error);
    }

    #[test]
    fn empty_result_shows_disabled_no_items_option() {
        let mut c = controller();
        let ticket = c.parent_changed("1").unwrap();
        let outcome = c.resolve::<ViviendaOption>(&ticket, Ok(vec![]));

        assert_eq!(outcome, Resolution::Populated { matched: false });
        let control = c.control();
        assert_eq!(control.options.len(), 2);
        assert_eq!(control.options[0], SelectOption::new("", "Todas las viviendas"));
        assert!(control.options[1].disabled);
        assert_eq!(control.options[1].label, "No hay viviendas en este edificio");
        assert!(!control.disabled);
    }

    #[test]
    fn inactive_items_follow_policy() {
        let labels = CascadeLabels::new("---------", "Cargando...", "Error", "No hay residentes activos");
        let items = || vec![residente(1, "Ana", true), residente(2, "Luis", false)];

        let mut include = CascadeController::new(CascadeConfig::new(labels.clone()), "");
        let t = include.parent_changed("3").unwrap();
        include.resolve(&t, Ok(items()));
        assert_eq!(include.control().values(), vec!["", "1", "2"]);

        let mut exclude =
            CascadeController::new(CascadeConfig::new(labels).exclude_inactive(), "");
        let t = exclude.parent_changed("3").unwrap();
        exclude.resolve(&t, Ok(items()));
        assert_eq!(exclude.control().values(), vec!["", "1"]);
    }

    #[test]
    fn only_inactive_items_counts_as_empty() {
        let labels = CascadeLabels::new("---------", "Cargando...", "Error", "No hay residentes activos");
        let mut c = CascadeController::new(CascadeConfig::new(labels).exclude_inactive(), "");
        let t = c.parent_changed("3").unwrap();
        c.resolve(&t, Ok(vec![residente(2, "Luis", false)]));
        assert_eq!(c.control().labels(), vec!["---------", "No hay residentes activos"]);
    }

    #[test]
    fn intended_value_survives_loading_and_failure() {
        let mut c = CascadeController::new(CascadeConfig::new(CascadeLabels::viviendas()), "7");
        let ticket = c.parent_changed("2").unwrap();
        assert_eq!(c.selected(), "");
        assert_eq!(c.intended(), "7");

        c.resolve::<ViviendaOption>(&ticket, Err(FetchError::Status(502)));
        assert_eq!(c.intended(), "7");

        let ticket = c.parent_changed("2").unwrap();
        c.resolve(&ticket, Ok(vec![vivienda(7, "3A", 2)]));
        assert_eq!(c.intended(), "7");
    }

    #[test]
    fn intended_value_clears_with_the_parent() {
        let mut c = CascadeController::new(CascadeConfig::new(CascadeLabels::viviendas()), "7");
        c.parent_changed("");
        assert_eq!(c.intended(), "");
    }

    #[test]
    fn auto_submit_follows_resolved_flag() {
        let mut off = controller();
        assert!(!off.dependent_changed("5"));

        let mut on = CascadeController::new(
            CascadeConfig::new(CascadeLabels::viviendas()).auto_submit(true),
            "",
        );
        assert!(on.dependent_changed("5"));
        on.parent_changed("1");
        assert!(!on.dependent_changed(""));
    }
}
