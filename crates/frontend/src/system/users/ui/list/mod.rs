mod state;

use contracts::system::users::UsuarioRow;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::InactiveToggle;
use crate::shared::csrf::CsrfField;
use crate::shared::host_form::navigate;
use crate::shared::icons::icon;
use crate::shared::notify::Notifier;
use crate::shared::protection::{confirm_gate, gate, ActionGate, RowAction, RowActions};
use crate::system::users::api;
use state::create_state;

pub use state::UsuariosListState;

fn action_path(row: &UsuarioRow, action: RowAction) -> String {
    match action {
        RowAction::Edit => api::edit_path(row.id),
        RowAction::Activate | RowAction::Deactivate => api::toggle_path(row.id),
    }
}

fn action_class(action: RowAction) -> &'static str {
    if action.is_destructive() {
        "button button--small button--danger"
    } else {
        "button button--small"
    }
}

#[component]
pub fn UsuariosList() -> impl IntoView {
    let notifier = Notifier::from_context();
    let state = create_state();
    let show_inactive = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_usuarios().await {
                Ok(rows) => {
                    state.update(|s| s.replace_rows(rows));
                }
                Err(e) => {
                    log::error!("failed to load users: {}", e);
                    set_error.set(Some(format!("No se pudieron cargar los usuarios: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    Effect::new(move |_| {
        let show = show_inactive.get();
        state.update(|s| s.show_inactive = show);
    });

    let apply_search = move || {
        let query = search.get_untracked();
        state.update(|s| s.search_query = query);
    };

    // false when the action must not run
    let allow_action = move |row: &UsuarioRow, action: RowAction| -> bool {
        let decision = gate(row, action);
        if let ActionGate::Blocked(message) = decision {
            notifier.warning(message);
            return false;
        }
        let allowed = confirm_gate(&decision);
        if allowed {
            log::info!("{} on user {}", action.label(), row.username);
        }
        allowed
    };

    // The state toggle only exists as a POST on the server
    let action_control = move |row: UsuarioRow, action: RowAction, enabled: bool, title: Option<String>| {
        if action.is_state_toggle() {
            let path = action_path(&row, action);
            let on_submit = move |ev: SubmitEvent| {
                if !allow_action(&row, action) {
                    ev.prevent_default();
                }
            };
            view! {
                <form method="post" action=path class="row__action-form" on:submit=on_submit>
                    <CsrfField />
                    <button type="submit" class=action_class(action) disabled=!enabled title=title>
                        {action.label()}
                    </button>
                </form>
            }
            .into_any()
        } else {
            view! {
                <button
                    type="button"
                    class=action_class(action)
                    disabled=!enabled
                    title=title
                    on:click=move |_| {
                        if allow_action(&row, action) {
                            navigate(&action_path(&row, action));
                        }
                    }
                >
                    {action.label()}
                </button>
            }
            .into_any()
        }
    };

    let visible = Signal::derive(move || state.with(|s| s.visible()));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Usuarios"</h1>
                    <Badge>{move || visible.with(|v| v.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| navigate("/usuarios/nuevo/")
                    >
                        {icon("plus")}
                        " Nuevo"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Cargando..." } else { " Actualizar" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="flex: 1; max-width: 320px;">
                        <Input value=search placeholder="Usuario, nombre o email..." />
                    </div>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_search()>
                        "Buscar"
                    </Button>
                    <InactiveToggle id="mostrarInactivos" show_inactive=show_inactive />
                </Flex>

                <div class="table-wrapper">
                    <Table attr:id="usuarios-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Usuario"</TableHeaderCell>
                                <TableHeaderCell>"Nombre"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Rol"</TableHeaderCell>
                                <TableHeaderCell>"Estado"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|u| (u.id, u.activo, u.rol.clone())
                                children=move |user| {
                                    let actions = state
                                        .with_untracked(|s| s.actions_for(user.id).cloned());
                                    let protected = actions.as_ref().map(|a| a.protected).unwrap_or(false);
                                    let locked_reason = actions.as_ref().and_then(|a| a.locked_reason.clone());
                                    let row_class = if user.activo { "" } else { "row--inactive" };
                                    let lock_title = locked_reason.clone();
                                    let username = user.username.clone();
                                    let nombre_completo = user.nombre_completo.clone();
                                    let email_text = user.email.clone().unwrap_or_default();
                                    let rol_text = user.rol.clone().unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <TableRow class=row_class>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{username}</span>
                                                    {protected.then(|| view! {
                                                        <span class="row__lock" title=lock_title.clone()>{icon("lock")}</span>
                                                    })}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {nombre_completo}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {email_text}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {rol_text}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if user.activo {
                                                        view! { <span class="badge badge--success">"Activo"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--error">"Inactivo"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="row__actions">
                                                    {actions
                                                        .map(|a: RowActions| a.actions)
                                                        .unwrap_or_default()
                                                        .into_iter()
                                                        .map(|(action, enabled)| {
                                                            let title = if enabled { None } else { locked_reason.clone() };
                                                            action_control(user.clone(), action, enabled, title)
                                                        })
                                                        .collect_view()}
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::users::UsuarioId;

    #[test]
    fn actions_map_to_server_routes() {
        let row = UsuarioRow {
            id: UsuarioId(8),
            username: "ana".into(),
            nombre_completo: "Ana Pérez".into(),
            email: None,
            rol: Some("Residente".into()),
            activo: true,
        };
        assert_eq!(action_path(&row, RowAction::Edit), "/usuarios/8/editar/");
        assert_eq!(action_path(&row, RowAction::Deactivate), "/usuarios/8/estado/");
        assert_eq!(action_path(&row, RowAction::Activate), "/usuarios/8/estado/");
        assert!(RowAction::Deactivate.is_state_toggle());
        assert!(!RowAction::Edit.is_state_toggle());
        assert!(action_class(RowAction::Deactivate).contains("danger"));
        assert!(!action_class(RowAction::Activate).contains("danger"));
    }
}
