use crate::config::Context;
use crate::error::PetFriendsError;
use crate::models::{AuthKey, PetFields, PetFilter};
use crate::response::{ApiResponse, ResponseBody};
use crate::ua::user_agent;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

const TIMEOUT_SECS: u64 = 30;

/// One method per PetFriends endpoint.
///
/// Every method performs exactly one request and hands back the status and
/// body untouched. Only transport failures and unreadable photo files are
/// reported as errors; a 403 or 500 is an ordinary [`ApiResponse`].
#[derive(Debug, Clone)]
pub struct PetFriendsClient {
    client: Client,
    base_url: String,
}

impl PetFriendsClient {
    pub fn new(ctx: &Context) -> Result<Self, PetFriendsError> {
        Self::with_base_url(&ctx.base_url())
    }

    /// Create a client for an explicit base URL (used by tests)
    pub fn with_base_url(base_url: &str) -> Result<Self, PetFriendsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .user_agent(user_agent())
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/key` with the credentials passed as headers.
    pub async fn get_api_key(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ApiResponse, PetFriendsError> {
        let request = self
            .client
            .get(self.url("/api/key"))
            .header("email", email)
            .header("password", password);

        Self::execute("GET", "/api/key", request).await
    }

    /// `GET /api/pets`, optionally restricted to the caller's own pets.
    pub async fn get_list_of_pets(
        &self,
        auth_key: &AuthKey,
        filter: PetFilter,
    ) -> Result<ApiResponse, PetFriendsError> {
        let request = self
            .client
            .get(self.url("/api/pets"))
            .header("auth_key", auth_key.as_str())
            .query(&[("filter", filter.as_str())]);

        Self::execute("GET", "/api/pets", request).await
    }

    /// `POST /api/pets` as multipart, with the photo attached as `pet_photo`.
    pub async fn add_new_pet(
        &self,
        auth_key: &AuthKey,
        fields: &PetFields,
        photo: &Path,
    ) -> Result<ApiResponse, PetFriendsError> {
        let form = Form::new()
            .text("name", fields.name.clone())
            .text("animal_type", fields.animal_type.clone())
            .text("age", fields.age.clone())
            .part("pet_photo", photo_part(photo).await?);

        let request = self
            .client
            .post(self.url("/api/pets"))
            .header("auth_key", auth_key.as_str())
            .multipart(form);

        Self::execute("POST", "/api/pets", request).await
    }

    /// `POST /api/create_pet_simple` with a urlencoded form and no photo.
    pub async fn create_pet_simple(
        &self,
        auth_key: &AuthKey,
        fields: &PetFields,
    ) -> Result<ApiResponse, PetFriendsError> {
        let request = self
            .client
            .post(self.url("/api/create_pet_simple"))
            .header("auth_key", auth_key.as_str())
            .form(&fields.as_form());

        Self::execute("POST", "/api/create_pet_simple", request).await
    }

    /// `PUT /api/pets/{pet_id}` with a urlencoded form.
    pub async fn update_pet_info(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        fields: &PetFields,
    ) -> Result<ApiResponse, PetFriendsError> {
        let path = format!("/api/pets/{}", pet_id);
        let request = self
            .client
            .put(self.url(&path))
            .header("auth_key", auth_key.as_str())
            .form(&fields.as_form());

        Self::execute("PUT", &path, request).await
    }

    /// `DELETE /api/pets/{pet_id}`.
    pub async fn delete_pet(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
    ) -> Result<ApiResponse, PetFriendsError> {
        let path = format!("/api/pets/{}", pet_id);
        let request = self
            .client
            .delete(self.url(&path))
            .header("auth_key", auth_key.as_str());

        Self::execute("DELETE", &path, request).await
    }

    /// `POST /api/pets/set_photo/{pet_id}` with the photo as `pet_photo`.
    pub async fn set_photo_by_pet_id(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        photo: &Path,
    ) -> Result<ApiResponse, PetFriendsError> {
        let path = format!("/api/pets/set_photo/{}", pet_id);
        let form = Form::new().part("pet_photo", photo_part(photo).await?);

        let request = self
            .client
            .post(self.url(&path))
            .header("auth_key", auth_key.as_str())
            .multipart(form);

        Self::execute("POST", &path, request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(
        method: &str,
        path: &str,
        request: RequestBuilder,
    ) -> Result<ApiResponse, PetFriendsError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!(method, path, status = status.as_u16(), "PetFriends request");

        Ok(ApiResponse::new(status, ResponseBody::parse(&text)))
    }
}

async fn photo_part(path: &Path) -> Result<Part, PetFriendsError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| PetFriendsError::PhotoRead {
            path: path.to_path_buf(),
            source,
        })?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "photo".to_string());

    Ok(Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(photo_mime(path))?)
}

/// Content type for a photo, guessed from its extension.
pub fn photo_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}
