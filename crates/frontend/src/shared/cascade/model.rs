//! Data model of a dependent select control

/// One `<option>` of a select control
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Empty-valued option that cannot be chosen
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            label: label.into(),
            disabled: true,
        }
    }
}

/// Lifecycle of one option-list load
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Populated,
    Error,
}

/// Everything the dependent `<select>` renders
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DependentControl {
    pub options: Vec<SelectOption>,
    pub selected: String,
    pub disabled: bool,
}

impl DependentControl {
    pub fn values(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.label.as_str()).collect()
    }

    /// True when `value` names a selectable option
    pub fn contains(&self, value: &str) -> bool {
        self.options
            .iter()
            .any(|o| !o.disabled && o.value == value)
    }
}

/// A record returned by an option-list endpoint
pub trait OptionItem {
    /// Identifier placed in `<option value>`
    fn option_value(&self) -> String;

    /// Text shown to the user
    fn option_label(&self) -> String;

    /// Items without an active flag count as active
    fn is_active(&self) -> bool {
        true
    }
}

/// Which fetched items become options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InactivePolicy {
    #[default]
    Include,
    ExcludeInactive,
}

impl InactivePolicy {
    pub fn admits<T: OptionItem>(&self, item: &T) -> bool {
        match self {
            InactivePolicy::Include => true,
            InactivePolicy::ExcludeInactive => item.is_active(),
        }
    }
}

/// Texts of the sentinel options
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CascadeLabels {
    /// "no specific selection", value is the empty string
    pub all: String,
    pub loading: String,
    pub error: String,
    pub empty: String,
}

impl CascadeLabels {
    pub fn new(
        all: impl Into<String>,
        loading: impl Into<String>,
        error: impl Into<String>,
        empty: impl Into<String>,
    ) -> Self {
        Self {
            all: all.into(),
            loading: loading.into(),
            error: error.into(),
            empty: empty.into(),
        }
    }

    pub fn viviendas() -> Self {
        Self::new(
            "Todas las viviendas",
            "Cargando viviendas...",
            "Error al cargar viviendas",
            "No hay viviendas en este edificio",
        )
    }

    pub fn pisos() -> Self {
        Self::new(
            "Todos los pisos",
            "Cargando pisos...",
            "Error al cargar pisos",
            "No hay pisos en este edificio",
        )
    }
}

/// Per-instance settings of a cascading pair
#[derive(Clone, Debug, PartialEq)]
pub struct CascadeConfig {
    pub labels: CascadeLabels,
    pub inactive: InactivePolicy,
    /// Delay before the request is issued; 0 disables debouncing
    pub debounce_ms: u32,
    /// Watchdog that forces the error state if the endpoint hangs
    pub timeout_ms: u32,
    /// Submit the host form when the dependent control changes.
    /// Already resolved against the viewport.
    pub auto_submit: bool,
    /// Message of the error notification
    pub error_message: String,
}

pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

impl CascadeConfig {
    pub fn new(labels: CascadeLabels) -> Self {
        let error_message = format!("{}. Por favor, inténtelo de nuevo.", labels.error);
        Self {
            labels,
            inactive: InactivePolicy::Include,
            debounce_ms: 0,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            auto_submit: false,
            error_message,
        }
    }

    pub fn exclude_inactive(mut self) -> Self {
        self.inactive = InactivePolicy::ExcludeInactive;
        self
    }

    pub fn debounce(mut self, ms: u32) -> Self {
        self.debounce_ms = ms;
        self
    }

    pub fn timeout(mut self, ms: u32) -> Self {
        self.timeout_ms = ms;
        self
    }

    pub fn auto_submit(mut self, enabled: bool) -> Self {
        self.auto_submit = enabled;
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }
}
