use contracts::domain::a002_vivienda::aggregate::ViviendaNombreOption;
use contracts::system::users::{UsuarioFormDto, UsuarioId, UsuarioRow};

use crate::shared::api_utils::{api_url, get_json, FetchError};
use crate::shared::cascade::{Endpoint, HttpOptionSource};

const USUARIOS_PATH: &str = "/usuarios/api/usuarios/";

pub const VIVIENDAS_POR_EDIFICIO: Endpoint =
    Endpoint::new("/usuarios/ajax/cargar-viviendas/?edificio_id={id}");

/// Fetch all users
pub async fn fetch_usuarios() -> Result<Vec<UsuarioRow>, FetchError> {
    get_json(&api_url(USUARIOS_PATH)).await
}

/// Current values of a user being edited
pub async fn fetch_usuario(id: UsuarioId) -> Result<UsuarioFormDto, FetchError> {
    get_json(&api_url(&format!("{}{}/", USUARIOS_PATH, id.0))).await
}

pub fn viviendas_source() -> HttpOptionSource<ViviendaNombreOption> {
    HttpOptionSource::new(VIVIENDAS_POR_EDIFICIO)
}

pub fn edit_path(id: UsuarioId) -> String {
    format!("/usuarios/{}/editar/", id.0)
}

pub fn toggle_path(id: UsuarioId) -> String {
    format!("/usuarios/{}/estado/", id.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_paths() {
        let id = UsuarioId(12);
        assert_eq!(edit_path(id), "/usuarios/12/editar/");
        assert_eq!(toggle_path(id), "/usuarios/12/estado/");
    }

    #[test]
    fn dwelling_endpoint_takes_query_parameter() {
        assert_eq!(
            VIVIENDAS_POR_EDIFICIO.path_for("3"),
            "/usuarios/ajax/cargar-viviendas/?edificio_id=3"
        );
    }
}
