//! Resources needed to delete a folder of the drive.

use crate::client::HttpClient;
use crate::error::{ApiError, Error};
use crate::prelude::HttpCommand;

/// Command to delete a folder of the drive.
///
/// The api acknowledges a deletion with a `200` or a `204`, sometimes without
/// a body at all. A body without a success flag still counts as an
/// acknowledgment, only an explicit refusal fails the command.
///
/// ```rust,no_run
/// use document360::client::HttpClientBuilder;
/// use document360::folder::delete::FolderDeleteCommand;
/// use document360::prelude::HttpCommand;
///
/// # tokio_test::block_on(async {
/// let client = HttpClientBuilder::from_env()
///     .build()
///     .expect("couldn't create client");
/// FolderDeleteCommand::new("8e764116-4a37-4c3c-ba64-9bb4b2b713e4")
///     .execute(&client)
///     .await
///     .expect("couldn't delete the folder");
/// # })
/// ```
#[derive(Debug)]
pub struct FolderDeleteCommand {
    folder_id: String,
}

impl FolderDeleteCommand {
    pub fn new<I: Into<String>>(folder_id: I) -> Self {
        Self {
            folder_id: folder_id.into(),
        }
    }
}

#[derive(serde::Serialize)]
struct FolderDeleteParams<'a> {
    user_id: Option<&'a str>,
}

#[derive(serde::Deserialize)]
struct DeleteAck {
    success: Option<bool>,
}

#[derive(Default, serde::Deserialize)]
struct DeleteErrors {
    #[serde(default)]
    errors: Vec<ApiError>,
}

#[async_trait::async_trait]
impl HttpCommand for FolderDeleteCommand {
    type Output = bool;

    async fn execute(self, client: &HttpClient) -> Result<Self::Output, Error> {
        let params = FolderDeleteParams {
            user_id: client.user_id(),
        };
        let response = client
            .delete(&self.folder_id, &params)
            .await?
            .accept(&[200, 204])?;
        // an empty body on an accepted status is a valid acknowledgment
        if response.is_empty() {
            return Ok(true);
        }
        let ack: DeleteAck = response.decode()?;
        if let Some(false) = ack.success {
            // the error list is read best effort, a decode failure leaves it empty
            let errors = response.decode::<DeleteErrors>().unwrap_or_default().errors;
            return Err(Error::Api(errors));
        }
        Ok(true)
    }
}
