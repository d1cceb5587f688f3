//! Resources needed to create a folder on the drive.

use crate::client::HttpClient;
use crate::error::Error;
use crate::folder::Folder;
use crate::prelude::HttpCommand;
use crate::response::Envelope;

/// Command to create a folder on the drive.
///
/// The creation only counts as successful when the api answers with a `200`
/// or a `201` and the envelope carries an explicit success flag.
///
/// ```rust,no_run
/// use document360::client::HttpClientBuilder;
/// use document360::folder::create::FolderCreateCommand;
/// use document360::prelude::HttpCommand;
///
/// # tokio_test::block_on(async {
/// let client = HttpClientBuilder::from_env()
///     .build()
///     .expect("couldn't create client");
/// let folder = FolderCreateCommand::new("Monthly reports")
///     .execute(&client)
///     .await
///     .expect("couldn't create the folder");
/// println!("created folder {}", folder.id);
/// # })
/// ```
#[derive(Debug)]
pub struct FolderCreateCommand {
    title: String,
    parent_folder_id: Option<String>,
}

impl FolderCreateCommand {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            parent_folder_id: None,
        }
    }

    /// Creates the folder inside another one instead of the drive root.
    pub fn set_parent_folder_id<I: Into<String>>(&mut self, value: I) {
        self.parent_folder_id = Some(value.into());
    }

    /// Creates the folder inside another one instead of the drive root.
    pub fn with_parent_folder_id<I: Into<String>>(mut self, value: I) -> Self {
        self.parent_folder_id = Some(value.into());
        self
    }
}

#[derive(serde::Serialize)]
struct FolderCreateParams<'a> {
    title: &'a str,
    // the api expects the user id in the body even though it also travels in the headers
    user_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_folder_id: Option<&'a str>,
}

#[async_trait::async_trait]
impl HttpCommand for FolderCreateCommand {
    type Output = Folder;

    async fn execute(self, client: &HttpClient) -> Result<Self::Output, Error> {
        if self.title.is_empty() {
            return Err(Error::EmptyTitle);
        }
        let params = FolderCreateParams {
            title: &self.title,
            user_id: client.user_id(),
            parent_folder_id: self.parent_folder_id.as_deref(),
        };
        let envelope: Envelope<Folder> =
            client.post(&params).await?.accept(&[200, 201])?.decode()?;
        envelope.payload()
    }
}
